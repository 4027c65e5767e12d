//! List specs

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
fn list_shows_scheduled_recording() {
    let temp = Project::empty();
    let id = temp.schedule("Evening news");

    temp.atrec()
        .args(&["list"])
        .passes()
        .stdout_has(&id)
        .stdout_has("Evening news")
        .stdout_has("Channel 7");
}

#[test]
fn list_json_carries_task_and_recording() {
    let temp = Project::empty();
    let id = temp.schedule("Evening news");

    let run = temp.atrec().args(&["list", "--format", "json"]).passes();
    let rows: serde_json::Value = serde_json::from_str(&run.stdout()).unwrap();

    assert_eq!(rows.as_array().unwrap().len(), 1);
    assert_eq!(rows[0]["task_id"], id.as_str());
    assert_eq!(rows[0]["job_id"], 1);
    assert_eq!(rows[0]["recording"]["channel_id"], "ch-7");
    assert_eq!(rows[0]["recording"]["filename"], "news.ts");
}

#[test]
fn list_skips_jobs_it_did_not_create() {
    let temp = Project::empty();
    temp.schedule("Evening news");
    temp.file("spool/jobs/40", "#!/bin/sh\ncd /home/tester\nmake backup\n");

    let run = temp.atrec().args(&["list", "--format", "json"]).passes();
    let rows: serde_json::Value = serde_json::from_str(&run.stdout()).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 1);
}

#[test]
fn list_fails_when_atq_fails() {
    let temp = Project::empty();
    temp.break_atq("atq: cannot open lockfile");

    temp.atrec()
        .args(&["list"])
        .fails()
        .stderr_has("error: Failed to list tasks: atq: cannot open lockfile");
}

#[test]
fn empty_queue_lists_nothing() {
    let temp = Project::empty();
    temp.atrec().args(&["list"]).passes().stdout_eq("");
    temp.atrec()
        .args(&["list", "--format", "json"])
        .passes()
        .stdout_eq("[]\n");
}
