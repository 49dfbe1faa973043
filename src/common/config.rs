//! Harness configuration file handling
//!
//! An optional `harness.toml` overrides the built-in baseline and the
//! scenario/results directories. Absent file means defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::options::{ExportOptions, JobOptions, LoggingOptions, PoolOptions};

use super::{Error, Result};

/// Default name of the configuration file, resolved in the working directory
const CONFIG_FILE: &str = "harness.toml";

/// Main configuration structure
#[derive(Debug, Deserialize)]
pub struct HarnessConfig {
    /// Directory scanned for scenario files
    #[serde(default = "default_scenarios_dir")]
    pub scenarios_dir: PathBuf,

    /// Directory artifacts are written to, created if absent
    #[serde(default = "default_results_dir")]
    pub results_dir: PathBuf,

    /// Baseline export settings
    #[serde(default)]
    pub export: ExportOptions,

    /// Worker pool sizing
    #[serde(default)]
    pub pool: PoolOptions,

    /// Engine logging verbosity
    #[serde(default)]
    pub logging: LoggingOptions,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            scenarios_dir: default_scenarios_dir(),
            results_dir: default_results_dir(),
            export: ExportOptions::default(),
            pool: PoolOptions::default(),
            logging: LoggingOptions::default(),
        }
    }
}

fn default_scenarios_dir() -> PathBuf {
    PathBuf::from("scenarios")
}

fn default_results_dir() -> PathBuf {
    PathBuf::from("results")
}

impl HarnessConfig {
    /// Load configuration from a file
    ///
    /// An explicitly given path must exist; without one, `harness.toml`
    /// in the working directory is used if present, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => {
                if !p.exists() {
                    return Err(Error::Config(format!(
                        "Configuration file '{}' not found",
                        p.display()
                    )));
                }
                p.to_path_buf()
            }
            None => {
                let p = PathBuf::from(CONFIG_FILE);
                if !p.exists() {
                    return Ok(Self::default());
                }
                p
            }
        };

        let content = std::fs::read_to_string(&path).map_err(|e| {
            Error::Config(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        toml::from_str(&content).map_err(|e| Error::ConfigParse(e.to_string()))
    }

    /// Build the baseline job configuration from this config
    pub fn baseline(&self) -> JobOptions {
        JobOptions {
            export: self.export.clone(),
            pool: self.pool.clone(),
            logging: self.logging.clone(),
            ..JobOptions::default()
        }
    }
}
