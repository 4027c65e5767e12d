// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory `at` queue for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{render_launcher, JobCanceller, JobQueue, JobSubmitter, QueueError};
use async_trait::async_trait;
use atrec_core::token::{self, TokenError};
use atrec_core::{JobId, Task, TaskId};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Recorded queue call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueCall {
    List,
    Submit { task_id: TaskId, script: PathBuf },
    Inspect { job_id: JobId },
    Cancel { job_id: JobId },
}

#[derive(Default)]
struct FakeState {
    jobs: BTreeMap<JobId, String>,
    next_id: u32,
    calls: Vec<QueueCall>,
    list_failure: Option<String>,
    submit_failure: Option<String>,
    submit_output: Option<String>,
    inspect_failures: BTreeMap<JobId, String>,
    cancel_failure: Option<String>,
}

/// Fake queue implementing all three queue traits over shared state
///
/// Jobs hold the same launcher text the real submitter hands to `at`, so
/// inspection goes through the real token decoding.
#[derive(Clone, Default)]
pub struct FakeAtQueue {
    state: Arc<Mutex<FakeState>>,
}

impl FakeAtQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<QueueCall> {
        self.lock().calls.clone()
    }

    /// Pending job ids
    pub fn job_ids(&self) -> Vec<JobId> {
        self.lock().jobs.keys().copied().collect()
    }

    /// Text stored for a pending job
    pub fn job_text(&self, job_id: JobId) -> Option<String> {
        self.lock().jobs.get(&job_id).cloned()
    }

    /// Add a job that was not submitted through this queue
    pub fn insert_raw_job(&self, text: impl Into<String>) -> JobId {
        let mut state = self.lock();
        state.next_id += 1;
        let job_id = JobId(state.next_id);
        state.jobs.insert(job_id, text.into());
        job_id
    }

    /// Drop a job as if it had fired
    pub fn fire(&self, job_id: JobId) {
        self.lock().jobs.remove(&job_id);
    }

    /// Make listing exit non-zero with this stderr
    pub fn fail_list(&self, stderr: &str) {
        self.lock().list_failure = Some(stderr.to_string());
    }

    /// Make the next submission exit non-zero with this stderr
    pub fn fail_next_submit(&self, stderr: &str) {
        self.lock().submit_failure = Some(stderr.to_string());
    }

    /// Make the next submission print this instead of a job id
    pub fn garble_next_submit(&self, stdout: &str) {
        self.lock().submit_output = Some(stdout.to_string());
    }

    /// Make inspecting this job exit non-zero with this stderr
    pub fn fail_inspect(&self, job_id: JobId, stderr: &str) {
        self.lock()
            .inspect_failures
            .insert(job_id, stderr.to_string());
    }

    /// Make every cancellation exit non-zero with this stderr
    pub fn fail_cancel(&self, stderr: &str) {
        self.lock().cancel_failure = Some(stderr.to_string());
    }
}

#[async_trait]
impl JobQueue for FakeAtQueue {
    async fn list_job_ids(&self) -> Result<Vec<JobId>, QueueError> {
        let mut state = self.lock();
        state.calls.push(QueueCall::List);
        if let Some(stderr) = &state.list_failure {
            return Err(QueueError::ListFailed(stderr.clone()));
        }
        Ok(state.jobs.keys().copied().collect())
    }
}

#[async_trait]
impl JobSubmitter for FakeAtQueue {
    async fn submit(&self, task: &Task, script: &Path) -> Result<JobId, QueueError> {
        let mut state = self.lock();
        state.calls.push(QueueCall::Submit {
            task_id: task.id,
            script: script.to_path_buf(),
        });
        if let Some(stderr) = state.submit_failure.take() {
            return Err(QueueError::SubmitFailed(stderr));
        }
        if let Some(stdout) = state.submit_output.take() {
            return Err(QueueError::JobIdParse(stdout));
        }

        let launcher = render_launcher(task, script)
            .map_err(|e| QueueError::SubmitFailed(e.to_string()))?;
        state.next_id += 1;
        let job_id = JobId(state.next_id);
        state.jobs.insert(job_id, launcher);
        Ok(job_id)
    }

    async fn inspect(&self, job_id: JobId) -> Result<Task, QueueError> {
        let mut state = self.lock();
        state.calls.push(QueueCall::Inspect { job_id });
        if let Some(stderr) = state.inspect_failures.get(&job_id) {
            return Err(QueueError::InspectFailed {
                job_id,
                stderr: stderr.clone(),
            });
        }
        let Some(text) = state.jobs.get(&job_id) else {
            return Err(QueueError::InspectFailed {
                job_id,
                stderr: format!("Cannot find jobid {}", job_id),
            });
        };

        match token::decode_task(text) {
            Ok(task) => Ok(task.with_job_id(job_id)),
            Err(TokenError::Missing) => Err(QueueError::DefinitionMissing(job_id)),
            Err(TokenError::Invalid(source)) => {
                Err(QueueError::DefinitionInvalid { job_id, source })
            }
        }
    }
}

#[async_trait]
impl JobCanceller for FakeAtQueue {
    async fn cancel(&self, job_id: JobId) -> Result<(), QueueError> {
        let mut state = self.lock();
        state.calls.push(QueueCall::Cancel { job_id });
        if let Some(stderr) = &state.cancel_failure {
            return Err(QueueError::RemoveFailed {
                job_id,
                stderr: stderr.clone(),
            });
        }
        if state.jobs.remove(&job_id).is_none() {
            return Err(QueueError::RemoveFailed {
                job_id,
                stderr: format!("Cannot find jobid {}", job_id),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
