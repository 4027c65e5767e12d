// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! atrec scheduling engine

mod error;
mod scheduler;

pub use error::{ErrorKind, SchedulerError};
pub use scheduler::{connect, AtScheduler, Scheduler, SchedulerDeps};
