//! Export Harness - a scenario-driven test harness for export pipelines
//!
//! Reads declarative scenario files from a directory, merges each one
//! against a baseline configuration, submits the resulting jobs to an
//! export engine through a bounded worker pool, and reports aggregate
//! pass/fail outcomes with per-job timings.

pub mod common;
pub mod engine;
pub mod merge;
pub mod options;
pub mod runner;
pub mod scenario;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use options::{ExportType, JobOptions};
pub use runner::{Harness, RunSummary};
