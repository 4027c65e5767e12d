// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `at` adapter: job submission and inspection

use super::{JobSubmitter, QueueError};
use crate::guard::ensure_all_available;
use crate::process::ProcessRunner;
use async_trait::async_trait;
use atrec_core::token::{self, TokenError};
use atrec_core::{shell_quote, JobId, Task, DEFINITION_VAR, TASK_ID_VAR};
use chrono::Local;
use std::path::Path;
use std::time::Duration;

/// Shell pipeline run as `sh -c SUBMIT_PIPELINE sh <launcher> <HH:MM> <MM/DD/YYYY>`
///
/// `at` reports the new job on stderr (`job 12 at ...`); the pipeline
/// reduces that to the bare id on stdout and keeps `at`'s exit status.
/// Without a `job` line, `at`'s output is passed through as is.
pub const SUBMIT_PIPELINE: &str = r#"out=$(printf '%s\n' "$1" | at -M "$2" "$3" 2>&1) || { printf '%s\n' "$out" >&2; exit 1; }
id=$(printf '%s\n' "$out" | sed -n 's/^job \([0-9][0-9]*\) at .*/\1/p')
printf '%s\n' "${id:-$out}""#;

/// Tools the submit pipeline and inspection shell out to
const REQUIRED: &[&str] = &["sh", "at", "sed"];

/// Submits and inspects jobs through `at`
#[derive(Clone)]
pub struct AtSubmitter<R> {
    runner: R,
    timeout: Option<Duration>,
}

impl<R: ProcessRunner> AtSubmitter<R> {
    /// Fails with `MissingDependency` if `sh`, `at` or `sed` is not installed
    pub async fn new(runner: R, timeout: Option<Duration>) -> Result<Self, QueueError> {
        ensure_all_available(&runner, REQUIRED, timeout).await?;
        Ok(Self { runner, timeout })
    }
}

/// The job body handed to `at`
///
/// It exports the task id and definition, then execs the task script. With
/// the script gone the exec fails and nothing else runs.
pub fn render_launcher(task: &Task, script: &Path) -> Result<String, serde_json::Error> {
    Ok(format!(
        "# atrec task {id}\n\
         {id_assignment}\n\
         {definition}\n\
         export {TASK_ID_VAR} {DEFINITION_VAR}\n\
         exec {script}\n",
        id = task.id,
        id_assignment = token::render_assignment(TASK_ID_VAR, &task.id.to_string()),
        definition = token::render_definition(task)?,
        script = shell_quote(&script.to_string_lossy()),
    ))
}

/// `at` timespec for a start time, in local time
pub fn at_timespec(task: &Task) -> (String, String) {
    let local = task.start_time.with_timezone(&Local);
    (
        local.format("%H:%M").to_string(),
        local.format("%m/%d/%Y").to_string(),
    )
}

#[async_trait]
impl<R: ProcessRunner> JobSubmitter for AtSubmitter<R> {
    async fn submit(&self, task: &Task, script: &Path) -> Result<JobId, QueueError> {
        let launcher = render_launcher(task, script)
            .map_err(|e| QueueError::SubmitFailed(format!("cannot encode task: {}", e)))?;
        let (time, date) = at_timespec(task);

        let output = self
            .runner
            .run(
                "sh",
                &["-c", SUBMIT_PIPELINE, "sh", &launcher, &time, &date],
                self.timeout,
            )
            .await?;

        if !output.success() {
            return Err(QueueError::SubmitFailed(output.stderr_text()));
        }

        output
            .stdout
            .trim()
            .parse::<JobId>()
            .map_err(|_| QueueError::JobIdParse(output.stdout.clone()))
    }

    async fn inspect(&self, job_id: JobId) -> Result<Task, QueueError> {
        let id = job_id.to_string();
        let output = self.runner.run("at", &["-c", &id], self.timeout).await?;

        if !output.success() {
            return Err(QueueError::InspectFailed {
                job_id,
                stderr: output.stderr_text(),
            });
        }

        match token::decode_task(&output.stdout) {
            Ok(task) => Ok(task.with_job_id(job_id)),
            Err(TokenError::Missing) => Err(QueueError::DefinitionMissing(job_id)),
            Err(TokenError::Invalid(source)) => {
                Err(QueueError::DefinitionInvalid { job_id, source })
            }
        }
    }
}

#[cfg(test)]
#[path = "at_tests.rs"]
mod tests;
