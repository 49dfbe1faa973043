//! Run coordination
//!
//! Top-level sequence for one run: discover scenarios, build the baseline,
//! bring up the pool, fan out every job, drain the fan-in into the
//! recorder, report, and tear the pool down. Per-job failures never reach
//! this level; only pool initialization can fail the run.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::common::config::HarnessConfig;
use crate::common::{Error, Result};
use crate::engine::{ExportEngine, ExportPool};
use crate::runner::{dispatch, JobOutcome, Recorder, RunSummary};
use crate::scenario;

/// One configured harness run
pub struct Harness {
    config: HarnessConfig,
    engine: Arc<dyn ExportEngine>,
}

impl Harness {
    pub fn new(config: HarnessConfig, engine: Arc<dyn ExportEngine>) -> Self {
        Self { config, engine }
    }

    /// Execute the full run and return the aggregate summary
    pub async fn run(&self) -> Result<RunSummary> {
        let files = scenario::discover(&self.config.scenarios_dir)?;
        if files.is_empty() {
            info!(
                dir = %self.config.scenarios_dir.display(),
                "no scenario files found"
            );
            return Ok(RunSummary::default());
        }

        // The engine stays quiet during a run and the queue must admit
        // every scenario up front.
        let mut baseline = self.config.baseline();
        baseline.logging.level = 0;
        baseline.pool.queue_size = files.len();

        std::fs::create_dir_all(&self.config.results_dir)?;

        let pool = ExportPool::initialize(&baseline.pool, self.engine.clone()).await?;

        debug!(scenarios = files.len(), "dispatching");
        let mut jobs =
            dispatch::dispatch_all(&files, &baseline, &self.config.results_dir, &pool);

        let mut recorder = Recorder::new();
        while let Some(joined) = jobs.join_next().await {
            match joined {
                Ok(outcome) => recorder.record(outcome),
                Err(e) => recorder.record(JobOutcome {
                    scenario: "<aborted job>".to_string(),
                    elapsed: Duration::ZERO,
                    result: Err(Error::Internal(e.to_string())),
                }),
            }
        }

        let summary = recorder.finish();
        pool.shutdown().await;

        Ok(summary)
    }
}
