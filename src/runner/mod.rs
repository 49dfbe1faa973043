//! Run orchestration: dispatch, result recording, and the run coordinator

mod coordinator;
mod dispatch;
mod recorder;

pub use coordinator::Harness;
pub use dispatch::{build_request, dispatch_all, JobOutcome};
pub use recorder::{Recorder, RunSummary};
