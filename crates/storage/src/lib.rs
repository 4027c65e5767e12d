// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! atrec-storage: filesystem-backed task scripts
//!
//! Each live task owns one executable script under `<data_root>/tasks`. The
//! script is both what the queue runs and the durable record of the task.

mod script;

pub use script::{
    render_script, StoreError, TaskScriptStore, COMPLETED_DIR, FAILED_DIR, TASKS_DIR,
};
