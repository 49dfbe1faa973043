//! Result recording and the run summary
//!
//! The recorder is the single consumer of job outcomes: it persists
//! successful artifacts, prints the per-job status line, and keeps the
//! aggregate counters. Because outcomes arrive through one fan-in loop,
//! the counters never race.

use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use colored::Colorize;

use crate::common::{Error, Result};
use crate::options::ExportType;

use super::dispatch::JobOutcome;

/// Aggregate counters for one run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Scenarios processed, regardless of outcome
    pub processed: usize,
    /// Scenarios that failed to load, export, or persist
    pub failed: usize,
}

impl RunSummary {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Consumes job outcomes and accumulates the run summary
#[derive(Debug, Default)]
pub struct Recorder {
    summary: RunSummary,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed job
    ///
    /// Successful exports are written to their resolved output path; a
    /// write failure downgrades the job to a failure. The processed
    /// counter increments exactly once per outcome.
    pub fn record(&mut self, outcome: JobOutcome) {
        let persisted = match outcome.result {
            Ok(reply) => match reply.options.export.outfile.as_deref() {
                Some(outfile) => {
                    write_artifact(outfile, reply.options.export.export_type, &reply.data)
                }
                None => Err(Error::Internal(
                    "job request carried no output path".to_string(),
                )),
            },
            Err(e) => Err(e),
        };

        let message = format!(
            "Done with {}, time: {}ms",
            outcome.scenario,
            outcome.elapsed.as_millis()
        );
        match &persisted {
            Ok(()) => println!("{}", format!("[Success] {message}.").green()),
            Err(e) => {
                println!("{}", format!("[Fail] {message}, error: {e}").red());
                self.summary.failed += 1;
            }
        }
        self.summary.processed += 1;
    }

    /// Print the aggregate report and return the final summary
    pub fn finish(self) -> RunSummary {
        let RunSummary { processed, failed } = self.summary;
        let banner = if failed > 0 {
            format!("{processed} tests done, {failed} error(s) found!").red()
        } else {
            format!("{processed} tests done, errors not found!").green()
        };
        println!("\n--------------------------------");
        println!("{banner}");
        println!("--------------------------------");

        self.summary
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }
}

/// Persist one artifact, decoding the transport encoding for binary types
fn write_artifact(path: &Path, export_type: ExportType, data: &str) -> Result<()> {
    let bytes = if export_type.is_binary() {
        STANDARD
            .decode(data)
            .map_err(|e| Error::ArtifactDecode(e.to_string()))?
    } else {
        data.as_bytes().to_vec()
    };

    std::fs::write(path, bytes).map_err(|e| Error::artifact_write(path, e))
}
