// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process invocation
//!
//! A non-zero exit is a normal result here; callers read the exit code
//! themselves. Only failing to start, failing to wait, or running past the
//! timeout are errors.

mod system;

pub use system::SystemRunner;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeProcessRunner, ProcessCall};

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors from running an external program
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{program}` timed out after {timeout:?} and was killed")]
    Timeout { program: String, timeout: Duration },
    #[error("failed waiting for `{program}`: {source}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl ProcessError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

/// Captured result of a finished process
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was ended by a signal
    pub exit_code: Option<i32>,
}

impl ProcessOutput {
    /// Successful exit with the given stdout
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            exit_code: Some(0),
        }
    }

    /// Failed exit with the given code and stderr
    pub fn failed(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self {
            stdout: String::new(),
            stderr: stderr.into(),
            exit_code: Some(exit_code),
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Stderr without the trailing newline most tools print
    pub fn stderr_text(&self) -> String {
        self.stderr.trim_end().to_string()
    }
}

/// Runs external programs
#[async_trait]
pub trait ProcessRunner: Clone + Send + Sync + 'static {
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        timeout: Option<Duration>,
    ) -> Result<ProcessOutput, ProcessError>;
}
