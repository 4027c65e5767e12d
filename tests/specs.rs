//! Behavioral specifications for the atrec CLI.
//!
//! These tests are black-box: they invoke the CLI binary against fake queue
//! tools and verify stdout, stderr, exit codes, and the files left behind.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

// cli/
#[path = "specs/cli/errors.rs"]
mod cli_errors;
#[path = "specs/cli/help.rs"]
mod cli_help;

// queue/
#[path = "specs/queue/cancel.rs"]
mod queue_cancel;
#[path = "specs/queue/definition.rs"]
mod queue_definition;
#[path = "specs/queue/list.rs"]
mod queue_list;
#[path = "specs/queue/schedule.rs"]
mod queue_schedule;
