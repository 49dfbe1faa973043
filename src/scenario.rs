//! Scenario discovery and loading
//!
//! A scenario is one declarative test case: a JSON file holding a partial
//! configuration plus optional raw inline input. Files without the `.json`
//! extension are skipped silently; a malformed file fails only its own
//! scenario.

use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::common::{Error, Result};
use crate::options::ExportType;

/// Recognized scenario file extension
const SCENARIO_EXT: &str = "json";

/// A test case parsed from a scenario file
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioDefinition {
    /// Raw inline input; its presence switches the merge to the
    /// raw-content shape
    pub svg: Option<String>,

    /// Output format override
    #[serde(rename = "type")]
    pub export_type: Option<ExportType>,

    /// Render scale override
    pub scale: Option<f64>,

    /// Explicit output filename, resolved under the results directory
    pub outfile: Option<PathBuf>,

    /// Render width override
    pub width: Option<u32>,

    /// Render height override
    pub height: Option<u32>,

    /// Chart configuration overrides (deep-merged)
    pub options: Option<Value>,

    /// Resource overrides (deep-merged)
    pub resources: Option<Value>,

    /// Global chart option overrides (deep-merged)
    pub global_options: Option<Value>,

    /// Theme option overrides (deep-merged)
    pub theme_options: Option<Value>,
}

impl ScenarioDefinition {
    /// Whether this scenario supplies raw inline input instead of
    /// file/options-based configuration
    pub fn is_raw(&self) -> bool {
        self.svg.is_some()
    }
}

/// Discover scenario files in a directory
///
/// Returns the recognized files sorted by name so runs are deterministic.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        Error::Config(format!(
            "Failed to read scenarios directory '{}': {}",
            dir.display(),
            e
        ))
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file() && path.extension().is_some_and(|ext| ext == SCENARIO_EXT)
        })
        .collect();
    files.sort();

    tracing::debug!(count = files.len(), dir = %dir.display(), "discovered scenarios");
    Ok(files)
}

/// Load and parse a single scenario file
pub fn load(path: &Path) -> Result<ScenarioDefinition> {
    let content =
        std::fs::read_to_string(path).map_err(|e| Error::scenario_read(path, e))?;
    serde_json::from_str(&content).map_err(|e| Error::scenario_parse(path, e))
}
