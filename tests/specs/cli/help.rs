//! Help and completion specs

use crate::prelude::*;

#[test]
fn help_lists_subcommands() {
    let temp = Project::empty();
    let run = temp.atrec().args(&["--help"]).passes();
    for command in ["schedule", "list", "show", "edit", "cancel", "completions"] {
        assert!(run.stdout().contains(command), "missing {}", command);
    }
}

#[test]
fn completions_do_not_need_queue_tools() {
    let temp = Project::empty();
    temp.atrec()
        .args(&["--config", "/nonexistent/config.toml", "completions", "bash"])
        .passes()
        .stdout_has("atrec");
}
