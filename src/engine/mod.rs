//! Export engine collaborator interface and worker pool
//!
//! The engine itself is a black box behind the [`ExportEngine`] trait:
//! it consumes a fully resolved job request and returns either an encoded
//! artifact with the echoed options, or an error. The built-in
//! [`StubEngine`] is a deterministic loopback implementation used to
//! validate the harness itself.

mod pool;
mod stub;

pub use pool::ExportPool;
pub use stub::StubEngine;

use async_trait::async_trait;

use crate::common::Result;
use crate::options::{JobOptions, JobRequest};

/// Successful engine response
///
/// `data` is the artifact in transport encoding: base64 for binary
/// formats, plain text for SVG. `options` echoes the job request's
/// configuration.
#[derive(Debug, Clone)]
pub struct ExportReply {
    pub data: String,
    pub options: JobOptions,
}

/// The export engine collaborator
#[async_trait]
pub trait ExportEngine: Send + Sync {
    async fn export(&self, job: &JobRequest) -> Result<ExportReply>;
}
