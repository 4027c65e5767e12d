// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job queue adapters
//!
//! The OS queue stores no structured data. Submitting hands it a launcher
//! that carries the embedded task definition; everything the scheduler knows
//! about a pending job is re-read from queue output.

mod at;
mod atq;
mod atrm;

pub use at::{render_launcher, AtSubmitter, SUBMIT_PIPELINE};
pub use atq::{parse_job_list, AtqQueue};
pub use atrm::AtrmCanceller;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeAtQueue, QueueCall};

use crate::process::ProcessError;
use async_trait::async_trait;
use atrec_core::{JobId, Task};
use std::path::Path;
use thiserror::Error;

/// Errors from queue operations
#[derive(Debug, Error)]
pub enum QueueError {
    #[error("missing dependency: `{0}` was not found on PATH")]
    MissingDependency(String),
    #[error(transparent)]
    Process(#[from] ProcessError),
    #[error("Failed to list tasks: {0}")]
    ListFailed(String),
    #[error("Failed to schedule task: {0}")]
    SubmitFailed(String),
    #[error("Failed to parse job ID from output: {0}")]
    JobIdParse(String),
    #[error("Failed to get job details for job {job_id}: {stderr}")]
    InspectFailed { job_id: JobId, stderr: String },
    #[error("Failed to parse task definition for job {0}")]
    DefinitionMissing(JobId),
    #[error("Failed to deserialize task for job {job_id}")]
    DefinitionInvalid {
        job_id: JobId,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to remove job {job_id}: {stderr}")]
    RemoveFailed { job_id: JobId, stderr: String },
}

/// Broad classes of queue failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required tool is not installed
    MissingDependency,
    /// A tool ran and exited non-zero
    ExternalTool,
    /// A tool exited cleanly but its output had an unexpected shape
    Parse,
    /// A tool could not be started, waited on, or timed out
    Process,
}

impl QueueError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingDependency(_) => ErrorKind::MissingDependency,
            Self::Process(_) => ErrorKind::Process,
            Self::ListFailed(_)
            | Self::SubmitFailed(_)
            | Self::InspectFailed { .. }
            | Self::RemoveFailed { .. } => ErrorKind::ExternalTool,
            Self::JobIdParse(_) | Self::DefinitionMissing(_) | Self::DefinitionInvalid { .. } => {
                ErrorKind::Parse
            }
        }
    }
}

/// Enumerates pending jobs (`atq`)
#[async_trait]
pub trait JobQueue: Clone + Send + Sync + 'static {
    /// List the ids of all pending jobs
    async fn list_job_ids(&self) -> Result<Vec<JobId>, QueueError>;
}

/// Submits and inspects jobs (`at`)
#[async_trait]
pub trait JobSubmitter: Clone + Send + Sync + 'static {
    /// Queue `script` to run at the task's start time; returns the job id
    async fn submit(&self, task: &Task, script: &Path) -> Result<JobId, QueueError>;

    /// Recover the task embedded in a pending job
    async fn inspect(&self, job_id: JobId) -> Result<Task, QueueError>;
}

/// Removes pending jobs (`atrm`)
#[async_trait]
pub trait JobCanceller: Clone + Send + Sync + 'static {
    async fn cancel(&self, job_id: JobId) -> Result<(), QueueError>;
}
