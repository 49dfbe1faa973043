//! Export job configuration model
//!
//! `JobOptions` is the full configuration an export job runs with. One
//! immutable baseline instance is built per run; every scenario is merged
//! against it into a distinct copy, so the baseline itself never changes.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;

/// Output format of an exported artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportType {
    #[default]
    Png,
    Jpeg,
    Pdf,
    Svg,
}

impl ExportType {
    /// File extension for artifacts of this type
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Pdf => "pdf",
            Self::Svg => "svg",
        }
    }

    /// Binary formats are transported base64-encoded; SVG stays text
    pub fn is_binary(&self) -> bool {
        !matches!(self, Self::Svg)
    }
}

impl fmt::Display for ExportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Export settings for a single job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Output format
    #[serde(default, rename = "type")]
    pub export_type: ExportType,

    /// Render scale factor
    #[serde(default = "default_scale")]
    pub scale: f64,

    /// Render width in pixels
    pub width: Option<u32>,

    /// Render height in pixels
    pub height: Option<u32>,

    /// Explicit output path; derived from the scenario filename when absent
    pub outfile: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            export_type: ExportType::default(),
            scale: default_scale(),
            width: None,
            height: None,
            outfile: None,
        }
    }
}

fn default_scale() -> f64 {
    1.0
}

/// Worker pool sizing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolOptions {
    /// Number of concurrently executing export workers
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Admission queue capacity; must be at least the scenario count
    #[serde(default = "default_queue_size")]
    pub queue_size: usize,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            queue_size: default_queue_size(),
        }
    }
}

fn default_workers() -> usize {
    4
}

fn default_queue_size() -> usize {
    5
}

/// Engine-side logging verbosity (0 = silent)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingOptions {
    #[serde(default = "default_log_level")]
    pub level: u8,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> u8 {
    2
}

/// Raw inline input submitted in place of chart options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPayload {
    pub svg: String,
}

/// Fully populated configuration for one export job
///
/// The named JSON sections (`options`, `resources`, `global_options`,
/// `theme_options`) hold arbitrary chart configuration and deep-merge
/// against scenario overrides; everything else replaces wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct JobOptions {
    #[serde(default)]
    pub export: ExportOptions,

    #[serde(default)]
    pub pool: PoolOptions,

    #[serde(default)]
    pub logging: LoggingOptions,

    /// Chart configuration
    pub options: Option<Value>,

    /// Additional resources (scripts, css) made available to the render
    pub resources: Option<Value>,

    /// Global chart options applied before rendering
    pub global_options: Option<Value>,

    /// Theme options applied before rendering
    pub theme_options: Option<Value>,

    /// Raw inline input; set only for raw-content scenarios
    pub payload: Option<RawPayload>,
}

impl JobOptions {
    /// Build the immutable baseline configuration for a run
    pub fn baseline() -> Self {
        Self::default()
    }
}

/// Fully resolved configuration dispatched to the export engine
///
/// Built by the dispatcher from a merged scenario; `options.export.outfile`
/// is always set by the time a request is submitted.
#[derive(Debug, Clone)]
pub struct JobRequest {
    /// Originating scenario filename
    pub scenario: String,
    pub options: JobOptions,
}
