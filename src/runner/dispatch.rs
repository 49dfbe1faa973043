//! Job dispatch
//!
//! Turns discovered scenario files into job requests and fans them out
//! against the pool. Every scenario contributes exactly one outcome to the
//! fan-in, including scenarios that fail to load: those become
//! immediately-failed jobs so the processed count always matches the
//! number of recognized files. A failure in one job never cancels or
//! blocks the others.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use colored::Colorize;
use tokio::task::JoinSet;
use tracing::debug;

use crate::common::Result;
use crate::engine::{ExportPool, ExportReply};
use crate::merge::merge_options;
use crate::options::{JobOptions, JobRequest};
use crate::scenario::{self, ScenarioDefinition};

/// Outcome of one dispatched scenario
#[derive(Debug)]
pub struct JobOutcome {
    /// Scenario filename this outcome belongs to
    pub scenario: String,
    /// Wall-clock time from submission to completion
    pub elapsed: Duration,
    pub result: Result<ExportReply>,
}

/// Build the job request for one scenario
///
/// Merges the scenario against the baseline and resolves the output path:
/// an explicit `outfile` lands under the results directory as given,
/// otherwise the path derives from the scenario filename stem and the
/// resolved export type.
pub fn build_request(
    baseline: &JobOptions,
    scenario_path: &Path,
    scenario: &ScenarioDefinition,
    results_dir: &Path,
) -> JobRequest {
    let mut options = merge_options(baseline, scenario);

    let filename = scenario_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let outfile = match options.export.outfile.take() {
        Some(explicit) => results_dir.join(explicit),
        None => {
            let stem = scenario_path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| filename.clone());
            results_dir.join(format!("{stem}.{}", options.export.export_type))
        }
    };
    options.export.outfile = Some(outfile);

    JobRequest {
        scenario: filename,
        options,
    }
}

/// Submit every scenario to the pool
///
/// All submissions are fired concurrently; the pool's own queue and
/// worker bounds decide actual execution. The returned set yields one
/// [`JobOutcome`] per scenario file, in completion order.
pub fn dispatch_all(
    files: &[PathBuf],
    baseline: &JobOptions,
    results_dir: &Path,
    pool: &ExportPool,
) -> JoinSet<JobOutcome> {
    let mut jobs = JoinSet::new();

    for path in files {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        println!("{} Processing test {}.", "[Harness]".blue(), filename);

        match scenario::load(path) {
            Ok(scenario) => {
                let request = build_request(baseline, path, &scenario, results_dir);
                let pool = pool.clone();
                jobs.spawn(async move {
                    let start = Instant::now();
                    let result = pool.submit(&request).await;
                    JobOutcome {
                        scenario: request.scenario,
                        elapsed: start.elapsed(),
                        result,
                    }
                });
            }
            Err(e) => {
                // A scenario that cannot be loaded still counts as a
                // processed job, just one that failed before export.
                debug!(scenario = %filename, "load failed: {e}");
                jobs.spawn(async move {
                    JobOutcome {
                        scenario: filename,
                        elapsed: Duration::ZERO,
                        result: Err(e),
                    }
                });
            }
        }
    }

    jobs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ExportType;
    use serde_json::json;

    fn scenario_from(json: serde_json::Value) -> ScenarioDefinition {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_outfile_derives_from_scenario_stem_and_type() {
        let baseline = JobOptions::baseline();
        let scenario = scenario_from(json!({"type": "svg"}));
        let request = build_request(
            &baseline,
            Path::new("scenarios/line-chart.json"),
            &scenario,
            Path::new("results"),
        );

        assert_eq!(request.scenario, "line-chart.json");
        assert_eq!(
            request.options.export.outfile,
            Some(PathBuf::from("results/line-chart.svg"))
        );
    }

    #[test]
    fn test_explicit_outfile_wins() {
        let baseline = JobOptions::baseline();
        let scenario = scenario_from(json!({"outfile": "custom-name.png"}));
        let request = build_request(
            &baseline,
            Path::new("scenarios/chart.json"),
            &scenario,
            Path::new("results"),
        );

        assert_eq!(
            request.options.export.outfile,
            Some(PathBuf::from("results/custom-name.png"))
        );
    }

    #[test]
    fn test_derived_outfile_uses_overridden_type() {
        let mut baseline = JobOptions::baseline();
        baseline.export.export_type = ExportType::Svg;

        let scenario = scenario_from(json!({"type": "pdf"}));
        let request = build_request(
            &baseline,
            Path::new("scenarios/report.json"),
            &scenario,
            Path::new("out"),
        );

        assert_eq!(
            request.options.export.outfile,
            Some(PathBuf::from("out/report.pdf"))
        );
    }

    #[test]
    fn test_each_request_is_a_distinct_copy() {
        let mut baseline = JobOptions::baseline();
        baseline.options = Some(json!({"a": 1}));

        let first = build_request(
            &baseline,
            Path::new("one.json"),
            &scenario_from(json!({"options": {"b": 2}})),
            Path::new("results"),
        );
        let second = build_request(
            &baseline,
            Path::new("two.json"),
            &scenario_from(json!({})),
            Path::new("results"),
        );

        assert_eq!(first.options.options, Some(json!({"a": 1, "b": 2})));
        assert_eq!(second.options.options, Some(json!({"a": 1})));
        assert_eq!(baseline.options, Some(json!({"a": 1})));
    }
}
