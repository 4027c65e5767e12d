// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `atrm` adapter

use super::{JobCanceller, QueueError};
use crate::guard::ensure_available;
use crate::process::ProcessRunner;
use async_trait::async_trait;
use atrec_core::JobId;
use std::time::Duration;

/// Removes pending jobs through `atrm`
///
/// `atrm` fails for jobs that are already gone; callers decide whether that
/// matters.
#[derive(Clone)]
pub struct AtrmCanceller<R> {
    runner: R,
    timeout: Option<Duration>,
}

impl<R: ProcessRunner> AtrmCanceller<R> {
    /// Fails with `MissingDependency` if `atrm` is not installed
    pub async fn new(runner: R, timeout: Option<Duration>) -> Result<Self, QueueError> {
        ensure_available(&runner, "atrm", timeout).await?;
        Ok(Self { runner, timeout })
    }
}

#[async_trait]
impl<R: ProcessRunner> JobCanceller for AtrmCanceller<R> {
    async fn cancel(&self, job_id: JobId) -> Result<(), QueueError> {
        let id = job_id.to_string();
        let output = self.runner.run("atrm", &[&id], self.timeout).await?;

        if !output.success() {
            return Err(QueueError::RemoveFailed {
                job_id,
                stderr: output.stderr_text(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::{FakeProcessRunner, ProcessOutput};

    #[tokio::test]
    async fn cancel_invokes_atrm_with_job_id() {
        let runner = FakeProcessRunner::always(ProcessOutput::ok(""));
        let canceller = AtrmCanceller::new(runner.clone(), None).await.unwrap();
        canceller.cancel(JobId(31)).await.unwrap();

        let calls = runner.tool_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].program, "atrm");
        assert_eq!(calls[0].args, vec!["31"]);
    }

    #[tokio::test]
    async fn cancel_failure_names_job_and_stderr() {
        let runner = FakeProcessRunner::always(ProcessOutput::failed(1, "Cannot find jobid 31\n"));
        let canceller = AtrmCanceller::new(runner, None).await.unwrap();
        let err = canceller.cancel(JobId(31)).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to remove job 31: Cannot find jobid 31");
    }

    #[tokio::test]
    async fn constructor_requires_atrm() {
        let runner = FakeProcessRunner::always(ProcessOutput::ok("")).with_missing("atrm");
        assert!(matches!(
            AtrmCanceller::new(runner, None).await,
            Err(QueueError::MissingDependency(_))
        ));
    }
}
