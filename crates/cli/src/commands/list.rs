// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `atrec list`

use anyhow::Result;
use atrec_adapters::{JobCanceller, JobQueue, JobSubmitter};
use atrec_core::{Clock, JobId, Recording, Task, TaskId};
use atrec_engine::Scheduler;
use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use std::fmt;

/// One pending task as shown to the user
#[derive(Debug, Serialize)]
pub struct RecordingRow {
    pub task_id: TaskId,
    pub job_id: Option<JobId>,
    pub name: String,
    pub channel: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub filename: Option<String>,
    /// The full recording, when the payload holds one
    pub recording: Option<Recording>,
}

impl RecordingRow {
    pub fn from_task(task: &Task) -> Self {
        let recording = match Recording::from_task(task) {
            Ok(recording) => Some(recording),
            Err(e) => {
                tracing::debug!(task_id = %task.id, error = %e, "payload is not a recording");
                None
            }
        };

        Self {
            task_id: task.id,
            job_id: task.job_id,
            name: task.name.clone(),
            channel: recording.as_ref().map(|r| r.channel_name.clone()),
            start_time: task.start_time,
            end_time: recording.as_ref().map(|r| r.end_time),
            filename: recording.as_ref().map(|r| r.filename.clone()),
            recording,
        }
    }
}

fn local(time: DateTime<Utc>) -> String {
    time.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

impl fmt::Display for RecordingRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let job = self
            .job_id
            .map_or_else(|| "-".to_string(), |id| id.to_string());
        let end = self.end_time.map_or_else(|| "-".to_string(), local);
        write!(
            f,
            "{} {:>5} {} {} {:<24} {}",
            self.task_id,
            job,
            local(self.start_time),
            end,
            self.name,
            self.channel.as_deref().unwrap_or("-"),
        )
    }
}

pub async fn run<Q, S, X, C>(scheduler: &Scheduler<Q, S, X, C>) -> Result<Vec<RecordingRow>>
where
    Q: JobQueue,
    S: JobSubmitter,
    X: JobCanceller,
    C: Clock,
{
    let mut tasks = scheduler.list().await?;
    tasks.sort_by_key(|task| (task.start_time, task.id));
    Ok(tasks.iter().map(RecordingRow::from_task).collect())
}
