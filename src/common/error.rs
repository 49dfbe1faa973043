//! Error types for the export harness
//!
//! Per-job failures (parse, export, write) are isolated at the job
//! boundary and recorded as failed outcomes; only pool initialization
//! errors are fatal to a run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the export harness
#[derive(Error, Debug)]
pub enum Error {
    // === Pool Errors ===
    #[error("Failed to initialize export pool: {0}")]
    PoolInit(String),

    #[error("Export queue is full ({capacity} slots). Size the queue to at least the scenario count")]
    QueueFull { capacity: usize },

    #[error("Export pool is shut down")]
    PoolShutDown,

    // === Scenario Errors ===
    #[error("Failed to read scenario '{path}': {error}")]
    ScenarioRead { path: PathBuf, error: String },

    #[error("Failed to parse scenario '{path}': {error}")]
    ScenarioParse { path: PathBuf, error: String },

    // === Export Errors ===
    #[error("Export failed: {0}")]
    Export(String),

    #[error("Artifact data is not valid base64: {0}")]
    ArtifactDecode(String),

    #[error("Failed to write artifact '{path}': {error}")]
    ArtifactWrite { path: PathBuf, error: String },

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Internal Errors ===
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a scenario read error
    pub fn scenario_read(path: impl Into<PathBuf>, error: impl ToString) -> Self {
        Self::ScenarioRead {
            path: path.into(),
            error: error.to_string(),
        }
    }

    /// Create a scenario parse error
    pub fn scenario_parse(path: impl Into<PathBuf>, error: impl ToString) -> Self {
        Self::ScenarioParse {
            path: path.into(),
            error: error.to_string(),
        }
    }

    /// Create an artifact write error
    pub fn artifact_write(path: impl Into<PathBuf>, error: impl ToString) -> Self {
        Self::ArtifactWrite {
            path: path.into(),
            error: error.to_string(),
        }
    }
}
