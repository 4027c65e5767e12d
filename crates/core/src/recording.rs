// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recording requests and their conversion to scheduler tasks
//!
//! A [`Recording`] becomes a [`Task`] whose command is a capture-tool
//! invocation lasting `end_time - start_time`, and whose payload is the
//! recording itself as JSON. The payload is the only way back.

use crate::shell::shell_quote;
use crate::task::{Task, TaskId};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors converting between recordings and tasks
#[derive(Debug, Error)]
pub enum RecordingError {
    #[error("recording must end after it starts (start {start}, end {end})")]
    InvalidWindow {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    #[error("invalid output filename: {0:?}")]
    InvalidFilename(String),
    #[error("stream url is empty")]
    EmptyUrl,
    #[error("failed to serialize recording: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to deserialize recording payload: {0}")]
    Deserialize(#[source] serde_json::Error),
}

/// A request to capture one channel over a time window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recording {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub channel_id: String,
    pub channel_name: String,
    pub filename: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// How capture commands are built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureProfile {
    /// Capture executable, e.g. `ffmpeg`
    pub program: String,
    /// Directory recordings are written to
    pub output_dir: PathBuf,
    /// Arguments placed between the input and the output file
    pub extra_args: Vec<String>,
}

impl CaptureProfile {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: "ffmpeg".to_string(),
            output_dir: output_dir.into(),
            extra_args: vec!["-c".to_string(), "copy".to_string()],
        }
    }
}

impl Recording {
    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }

    /// Check the window and filename without building anything
    pub fn validate(&self) -> Result<(), RecordingError> {
        if self.end_time <= self.start_time {
            return Err(RecordingError::InvalidWindow {
                start: self.start_time,
                end: self.end_time,
            });
        }
        let bare = Path::new(&self.filename)
            .file_name()
            .is_some_and(|f| f == self.filename.as_str());
        if self.filename.trim().is_empty() || !bare {
            return Err(RecordingError::InvalidFilename(self.filename.clone()));
        }
        Ok(())
    }

    /// Build the capture command line for this recording
    pub fn capture_command(
        &self,
        stream_url: &str,
        profile: &CaptureProfile,
    ) -> Result<String, RecordingError> {
        self.validate()?;
        if stream_url.trim().is_empty() {
            return Err(RecordingError::EmptyUrl);
        }

        let output = profile.output_dir.join(&self.filename);
        let mut words = vec![
            shell_quote(&profile.program),
            "-hide_banner".to_string(),
            "-nostdin".to_string(),
            "-y".to_string(),
            "-i".to_string(),
            shell_quote(stream_url),
            "-t".to_string(),
            format_duration(self.duration()),
        ];
        words.extend(profile.extra_args.iter().map(|a| shell_quote(a)));
        words.push(shell_quote(&output.to_string_lossy()));
        Ok(words.join(" "))
    }

    /// Convert to a task carrying this recording as its payload
    pub fn to_task(
        &self,
        id: TaskId,
        stream_url: &str,
        profile: &CaptureProfile,
    ) -> Result<Task, RecordingError> {
        let command = self.capture_command(stream_url, profile)?;
        let payload = serde_json::to_string(self).map_err(RecordingError::Serialize)?;
        Ok(Task::new(id, &self.name, command, self.start_time, payload))
    }

    /// Reconstruct from a task's payload
    pub fn from_task(task: &Task) -> Result<Self, RecordingError> {
        serde_json::from_str(&task.payload).map_err(RecordingError::Deserialize)
    }
}

/// Format as `HH:MM:SS`, rounding partial seconds up; hours may exceed 24
fn format_duration(duration: Duration) -> String {
    let mut secs = duration.num_seconds().max(0);
    if duration > Duration::seconds(secs) {
        secs += 1;
    }
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

#[cfg(test)]
#[path = "recording_tests.rs"]
mod tests;
