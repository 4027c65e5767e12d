// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake process runner for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ProcessError, ProcessOutput, ProcessRunner};
use crate::guard::PROBE_SCRIPT;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Recorded process invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessCall {
    pub program: String,
    pub args: Vec<String>,
    pub timeout: Option<Duration>,
}

impl ProcessCall {
    /// The command name if this call is an availability probe
    pub fn probed_command(&self) -> Option<&str> {
        match self.args.as_slice() {
            [c, script, _, name] if c == "-c" && script == PROBE_SCRIPT => Some(name.as_str()),
            _ => None,
        }
    }
}

type Handler = dyn Fn(&ProcessCall) -> Result<ProcessOutput, ProcessError> + Send + Sync;

/// Fake runner answering every call through a handler closure
///
/// Availability probes are answered as found unless the command was marked
/// missing, so handlers only need to script the tool calls under test.
#[derive(Clone)]
pub struct FakeProcessRunner {
    handler: Arc<Handler>,
    missing: Arc<Mutex<Vec<String>>>,
    calls: Arc<Mutex<Vec<ProcessCall>>>,
}

impl FakeProcessRunner {
    pub fn new(
        handler: impl Fn(&ProcessCall) -> Result<ProcessOutput, ProcessError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            handler: Arc::new(handler),
            missing: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Runner that answers every tool call with the same output
    pub fn always(output: ProcessOutput) -> Self {
        Self::new(move |_| Ok(output.clone()))
    }

    /// Make availability probes for `command` come back empty
    pub fn with_missing(self, command: &str) -> Self {
        self.missing
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(command.to_string());
        self
    }

    /// Get all recorded calls, probes included
    pub fn calls(&self) -> Vec<ProcessCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Get recorded calls that were not availability probes
    pub fn tool_calls(&self) -> Vec<ProcessCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.probed_command().is_none())
            .collect()
    }
}

#[async_trait]
impl ProcessRunner for FakeProcessRunner {
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        timeout: Option<Duration>,
    ) -> Result<ProcessOutput, ProcessError> {
        let call = ProcessCall {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            timeout,
        };
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(call.clone());

        if let Some(name) = call.probed_command() {
            let missing = self.missing.lock().unwrap_or_else(|e| e.into_inner());
            if missing.iter().any(|m| m == name) {
                return Ok(ProcessOutput::failed(1, ""));
            }
            return Ok(ProcessOutput::ok(format!("/usr/bin/{}\n", name)));
        }

        (self.handler)(&call)
    }
}
