// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for the external job queue tools (`at`, `atq`, `atrm`)

pub mod guard;
pub mod process;
pub mod queue;
pub mod traced;

pub use guard::ensure_available;
pub use process::{ProcessError, ProcessOutput, ProcessRunner, SystemRunner};
pub use queue::{
    AtSubmitter, AtqQueue, AtrmCanceller, ErrorKind, JobCanceller, JobQueue, JobSubmitter,
    QueueError,
};
pub use traced::TracedQueue;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use process::{FakeProcessRunner, ProcessCall};
#[cfg(any(test, feature = "test-support"))]
pub use queue::{FakeAtQueue, QueueCall};
