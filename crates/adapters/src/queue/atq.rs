// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `atq` adapter

use super::{JobQueue, QueueError};
use crate::guard::ensure_available;
use crate::process::ProcessRunner;
use async_trait::async_trait;
use atrec_core::JobId;
use std::time::Duration;

/// Lists pending jobs through `atq`
#[derive(Clone)]
pub struct AtqQueue<R> {
    runner: R,
    timeout: Option<Duration>,
}

impl<R: ProcessRunner> AtqQueue<R> {
    /// Fails with `MissingDependency` if `atq` is not installed
    pub async fn new(runner: R, timeout: Option<Duration>) -> Result<Self, QueueError> {
        ensure_available(&runner, "atq", timeout).await?;
        Ok(Self { runner, timeout })
    }
}

#[async_trait]
impl<R: ProcessRunner> JobQueue for AtqQueue<R> {
    async fn list_job_ids(&self) -> Result<Vec<JobId>, QueueError> {
        let output = self.runner.run("atq", &[], self.timeout).await?;

        if !output.success() {
            return Err(QueueError::ListFailed(output.stderr_text()));
        }

        Ok(parse_job_list(&output.stdout))
    }
}

/// Parse `atq` output, one job per line
///
/// A line counts only if it starts with decimal digits followed directly by
/// a tab, e.g. `12\tThu Oct 22 20:00:00 2026 a user`. Anything else is skipped.
pub fn parse_job_list(stdout: &str) -> Vec<JobId> {
    stdout
        .lines()
        .filter_map(|line| {
            let (head, _) = line.split_once('\t')?;
            if head.is_empty() || !head.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            head.parse().ok().map(JobId)
        })
        .collect()
}

#[cfg(test)]
#[path = "atq_tests.rs"]
mod tests;
