// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subcommand handlers
//!
//! Handlers return what they produced; `main` does the printing.

pub mod cancel;
pub mod definition;
pub mod list;
pub mod schedule;

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
