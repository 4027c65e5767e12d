// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced queue wrapper for consistent observability

use crate::queue::{JobCanceller, JobQueue, JobSubmitter, QueueError};
use async_trait::async_trait;
use atrec_core::{JobId, Task};
use std::path::Path;
use tracing::Instrument;

/// Wrapper that adds tracing to any of the queue traits
///
/// Implements each trait the inner value implements, so one wrapper type
/// covers the lister, submitter and canceller.
#[derive(Clone)]
pub struct TracedQueue<Q> {
    inner: Q,
}

impl<Q> TracedQueue<Q> {
    pub fn new(inner: Q) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &Q {
        &self.inner
    }
}

#[async_trait]
impl<Q: JobQueue> JobQueue for TracedQueue<Q> {
    async fn list_job_ids(&self) -> Result<Vec<JobId>, QueueError> {
        let span = tracing::info_span!("queue.list");
        async {
            let result = self.inner.list_job_ids().await;
            match &result {
                Ok(ids) => tracing::debug!(count = ids.len(), "listed jobs"),
                Err(e) => tracing::error!(error = %e, "list failed"),
            }
            result
        }
        .instrument(span)
        .await
    }
}

#[async_trait]
impl<Q: JobSubmitter> JobSubmitter for TracedQueue<Q> {
    async fn submit(&self, task: &Task, script: &Path) -> Result<JobId, QueueError> {
        let span = tracing::info_span!(
            "queue.submit",
            task_id = %task.id,
            script = %script.display(),
        );
        async {
            tracing::info!(start_time = %task.start_time, "submitting");

            let start = std::time::Instant::now();
            let result = self.inner.submit(task, script).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(job_id) => tracing::info!(
                    job_id = job_id.0,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "job queued"
                ),
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "submit failed"
                ),
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn inspect(&self, job_id: JobId) -> Result<Task, QueueError> {
        let result = self.inner.inspect(job_id).await;
        match &result {
            Ok(task) => tracing::trace!(job_id = job_id.0, task_id = %task.id, "inspected"),
            Err(e) => tracing::debug!(job_id = job_id.0, error = %e, "inspect failed"),
        }
        result
    }
}

#[async_trait]
impl<Q: JobCanceller> JobCanceller for TracedQueue<Q> {
    async fn cancel(&self, job_id: JobId) -> Result<(), QueueError> {
        let span = tracing::info_span!("queue.cancel", job_id = job_id.0);
        async {
            let result = self.inner.cancel(job_id).await;
            match &result {
                Ok(()) => tracing::info!("job removed"),
                Err(e) => tracing::error!(error = %e, "remove failed"),
            }
            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
