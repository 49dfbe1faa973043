//! Export Harness - scenario-driven test harness for export pipelines
//!
//! Loads all JSON scenario files from the scenarios directory, runs each
//! one through the export pool, writes the resulting artifacts to the
//! results directory, and prints a pass/fail summary.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use export_harness::common::config::HarnessConfig;
use export_harness::common::logging;
use export_harness::engine::StubEngine;
use export_harness::Harness;

#[derive(Parser)]
#[command(name = "export-harness", about = "Scenario-driven export test harness")]
#[command(version, long_about = None)]
struct Cli {
    /// Directory holding scenario JSON files
    #[arg(long)]
    scenarios_dir: Option<PathBuf>,

    /// Directory artifacts are written to (created if absent)
    #[arg(long)]
    results_dir: Option<PathBuf>,

    /// Path to a harness.toml configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of concurrent export workers
    #[arg(long)]
    workers: Option<usize>,

    /// Verbose diagnostic output
    #[arg(long, short)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let result = async {
        let mut config = HarnessConfig::load(cli.config.as_deref())?;
        if let Some(dir) = cli.scenarios_dir {
            config.scenarios_dir = dir;
        }
        if let Some(dir) = cli.results_dir {
            config.results_dir = dir;
        }
        if let Some(workers) = cli.workers {
            config.pool.workers = workers;
        }

        Harness::new(config, Arc::new(StubEngine)).run().await
    }
    .await;

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
