// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command availability guard
//!
//! Wrappers that shell out to a named tool call [`ensure_available`] from
//! their constructor, so a wrapper never exists without its tool.

use crate::process::ProcessRunner;
use crate::queue::QueueError;
use std::time::Duration;

/// Path-resolution probe, run as `sh -c PROBE_SCRIPT sh <name>`
pub const PROBE_SCRIPT: &str = "command -v -- \"$1\"";

/// Fail with [`QueueError::MissingDependency`] unless `name` resolves on PATH
pub async fn ensure_available<R: ProcessRunner>(
    runner: &R,
    name: &str,
    timeout: Option<Duration>,
) -> Result<(), QueueError> {
    let output = runner
        .run("sh", &["-c", PROBE_SCRIPT, "sh", name], timeout)
        .await?;

    if output.stdout.trim().is_empty() {
        tracing::error!(command = name, "required command not found");
        return Err(QueueError::MissingDependency(name.to_string()));
    }

    tracing::debug!(command = name, path = output.stdout.trim(), "command available");
    Ok(())
}

/// Check every name in order, stopping at the first missing one
pub async fn ensure_all_available<R: ProcessRunner>(
    runner: &R,
    names: &[&str],
    timeout: Option<Duration>,
) -> Result<(), QueueError> {
    for name in names {
        ensure_available(runner, name, timeout).await?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "guard_tests.rs"]
mod tests;
