//! Bounded export worker pool
//!
//! Submissions are admitted against a fixed-capacity queue and executed
//! under a worker bound; both are semaphores. A full queue rejects the
//! submission instead of waiting, so callers must size the queue to at
//! least the number of jobs they intend to submit. Shutdown drains
//! in-flight work before returning.

use std::sync::Arc;

use tokio::sync::{Semaphore, TryAcquireError};
use tracing::{debug, info};

use crate::common::{Error, Result};
use crate::options::{JobRequest, PoolOptions};

use super::{ExportEngine, ExportReply};

/// Worker pool wrapping an export engine
#[derive(Clone)]
pub struct ExportPool {
    engine: Arc<dyn ExportEngine>,
    workers: Arc<Semaphore>,
    queue: Arc<Semaphore>,
    worker_count: usize,
    queue_size: usize,
}

impl std::fmt::Debug for ExportPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportPool")
            .field("worker_count", &self.worker_count)
            .field("queue_size", &self.queue_size)
            .finish_non_exhaustive()
    }
}

impl ExportPool {
    /// Initialize the pool and wait until it is ready to accept work
    pub async fn initialize(
        options: &PoolOptions,
        engine: Arc<dyn ExportEngine>,
    ) -> Result<Self> {
        if options.workers == 0 {
            return Err(Error::PoolInit("worker count must be non-zero".to_string()));
        }
        if options.queue_size == 0 {
            return Err(Error::PoolInit("queue size must be non-zero".to_string()));
        }

        info!(
            workers = options.workers,
            queue_size = options.queue_size,
            "export pool ready"
        );

        Ok(Self {
            engine,
            workers: Arc::new(Semaphore::new(options.workers)),
            queue: Arc::new(Semaphore::new(options.queue_size)),
            worker_count: options.workers,
            queue_size: options.queue_size,
        })
    }

    /// Submit one job and wait for its outcome
    ///
    /// The queue slot is held for the whole lifetime of the job; a full
    /// queue rejects immediately with [`Error::QueueFull`].
    pub async fn submit(&self, job: &JobRequest) -> Result<ExportReply> {
        let _queue_slot = self.queue.clone().try_acquire_owned().map_err(|e| match e {
            TryAcquireError::Closed => Error::PoolShutDown,
            TryAcquireError::NoPermits => Error::QueueFull {
                capacity: self.queue_size,
            },
        })?;

        let _worker = self
            .workers
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| Error::PoolShutDown)?;

        debug!(scenario = %job.scenario, "export started");
        self.engine.export(job).await
    }

    /// Stop accepting work and wait for in-flight jobs to finish
    pub async fn shutdown(&self) {
        self.queue.close();
        // Holding every worker permit means nothing is still executing
        let _ = self.workers.acquire_many(self.worker_count as u32).await;
        self.workers.close();
        debug!("export pool shut down");
    }
}
