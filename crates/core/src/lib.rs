// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! atrec-core: domain types for the at-backed recording scheduler
//!
//! This crate provides:
//! - The `Task` the scheduler understands and its identifiers
//! - The `Recording` payload and its conversion to and from a `Task`
//! - Shell quoting and the embedded definition token carried in job scripts
//! - Clock and id generation abstractions

pub mod clock;
pub mod id;
pub mod recording;
pub mod retention;
pub mod shell;
pub mod task;
pub mod token;

pub use clock::{Clock, FakeClock, SystemClock};
pub use id::{IdGen, SequentialIdGen, UuidIdGen};
pub use recording::{CaptureProfile, Recording, RecordingError};
pub use retention::ScriptRetention;
pub use shell::shell_quote;
pub use task::{JobId, ParseIdError, Task, TaskId};
pub use token::{TokenError, DEFINITION_VAR, TASK_ID_VAR};
