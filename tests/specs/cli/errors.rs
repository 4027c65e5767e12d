//! Error reporting specs

use crate::prelude::*;

#[test]
fn missing_explicit_config_is_an_error() {
    let temp = Project::empty();
    temp.atrec()
        .args(&["--config", "/nonexistent/config.toml", "list"])
        .fails()
        .stderr_has("error: cannot read config /nonexistent/config.toml");
}

#[test]
fn invalid_config_is_an_error() {
    let temp = Project::with_config("archive_scripts = \"sometimes\"");
    temp.atrec().args(&["list"]).fails().stderr_has("invalid config");
}

#[test]
fn malformed_task_id_is_a_usage_error() {
    let temp = Project::empty();
    temp.atrec()
        .args(&["show", "not-a-uuid"])
        .fails()
        .stderr_has("invalid task id");
}

#[test]
fn unparseable_start_time_is_a_usage_error() {
    let temp = Project::empty();
    temp.atrec()
        .args(&schedule_args("News", "next tuesday", FUTURE_END))
        .fails()
        .stderr_has("expected RFC 3339");
    assert!(temp.task_scripts().is_empty());
}
