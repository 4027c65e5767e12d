// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Embedded task definition token
//!
//! The queue stores plain text only, so every job carries its task definition
//! as a single-quoted shell assignment:
//!
//! ```text
//! ATREC_TASK='{"id":"...","name":"...","command":"...",...}'
//! ```
//!
//! Rendering and extraction live here and nowhere else.

use crate::shell::{single_quote, unescape_single_quoted};
use crate::task::Task;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Variable holding the serialized task definition
pub const DEFINITION_VAR: &str = "ATREC_TASK";

/// Variable holding the bare task id
pub const TASK_ID_VAR: &str = "ATREC_TASK_ID";

// The body is any run of non-quote characters or `'\''` escapes, which keeps
// the scan from stopping at a quote inside the payload.
#[allow(clippy::expect_used)]
static DEFINITION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\bATREC_TASK='((?:[^']|'\\'')*)'").expect("constant regex pattern is valid")
});

/// Errors recovering a task from job text
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("no ATREC_TASK assignment found")]
    Missing,
    #[error("ATREC_TASK is not a valid task definition: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Render `key='value'` with the value single-quoted
pub fn render_assignment(key: &str, value: &str) -> String {
    format!("{}={}", key, single_quote(value))
}

/// Render the definition assignment for a task
pub fn render_definition(task: &Task) -> Result<String, serde_json::Error> {
    Ok(render_assignment(DEFINITION_VAR, &task.to_definition()?))
}

/// Find the first definition token in `text` and return its unquoted body
pub fn extract_definition(text: &str) -> Option<String> {
    DEFINITION_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|body| unescape_single_quoted(body.as_str()))
}

/// Recover a task from job or script text
pub fn decode_task(text: &str) -> Result<Task, TokenError> {
    let json = extract_definition(text).ok_or(TokenError::Missing)?;
    Ok(Task::from_definition(&json)?)
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
