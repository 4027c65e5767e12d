// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The unit of work the scheduler understands
//!
//! A [`Task`] is one future, single-shot execution of a shell command. Its
//! [`TaskId`] is the only durable key: it names the script file and is embedded
//! in the job handed to the queue. The [`JobId`] is whatever the queue assigned
//! and is re-derived from queue output on every query.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Error parsing a task or job identifier from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseIdError {
    #[error("invalid task id: {0}")]
    Task(String),
    #[error("invalid job id: {0}")]
    Job(String),
}

/// Stable task identifier, assigned at creation and never reassigned
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl From<Uuid> for TaskId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for TaskId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| ParseIdError::Task(s.to_string()))
    }
}

/// Queue-assigned job handle, valid only while the job is pending
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub u32);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for JobId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseIdError::Job(s.to_string()));
        }
        digits
            .parse()
            .map(Self)
            .map_err(|_| ParseIdError::Job(s.to_string()))
    }
}

/// A single deferred command execution
///
/// `payload` is opaque to the scheduler and must come back byte-for-byte.
/// `job_id` is never serialized; it is filled in from queue output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    #[serde(skip)]
    pub job_id: Option<JobId>,
    pub name: String,
    pub command: String,
    pub start_time: DateTime<Utc>,
    pub payload: String,
}

impl Task {
    pub fn new(
        id: TaskId,
        name: impl Into<String>,
        command: impl Into<String>,
        start_time: DateTime<Utc>,
        payload: impl Into<String>,
    ) -> Self {
        Self {
            id,
            job_id: None,
            name: name.into(),
            command: command.into(),
            start_time,
            payload: payload.into(),
        }
    }

    /// Attach the queue's job handle
    pub fn with_job_id(mut self, job_id: JobId) -> Self {
        self.job_id = Some(job_id);
        self
    }

    /// Serialize the definition that gets embedded in job scripts
    pub fn to_definition(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse an embedded definition; `job_id` is left unset
    pub fn from_definition(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;
