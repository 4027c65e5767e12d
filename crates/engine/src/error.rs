// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the scheduler

use atrec_adapters::{ErrorKind as QueueErrorKind, QueueError};
use atrec_core::TaskId;
use atrec_storage::StoreError;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur in scheduler operations
#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("Cannot schedule task in the past: {start_time} is not after {now}")]
    InPast {
        start_time: DateTime<Utc>,
        now: DateTime<Utc>,
    },
    #[error("task not found: {0}")]
    NotFound(TaskId),
    #[error("Failed to update task definition for {id}: {source}")]
    UpdateFailed {
        id: TaskId,
        #[source]
        source: StoreError,
    },
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Queue(#[from] QueueError),
}

/// Broad classes of scheduler failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingDependency,
    InvalidRequest,
    ExternalTool,
    Parse,
    NotFound,
    Process,
    Storage,
}

impl SchedulerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InPast { .. } => ErrorKind::InvalidRequest,
            Self::NotFound(_) | Self::Store(StoreError::NotFound(_)) => ErrorKind::NotFound,
            Self::UpdateFailed { .. } | Self::Store(_) => ErrorKind::Storage,
            Self::Queue(e) => match e.kind() {
                QueueErrorKind::MissingDependency => ErrorKind::MissingDependency,
                QueueErrorKind::ExternalTool => ErrorKind::ExternalTool,
                QueueErrorKind::Parse => ErrorKind::Parse,
                QueueErrorKind::Process => ErrorKind::Process,
            },
        }
    }
}
