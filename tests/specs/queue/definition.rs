//! Show/edit specs

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
fn show_prints_script() {
    let temp = Project::empty();
    let id = temp.schedule("Evening news");

    temp.atrec()
        .args(&["show", id.as_str()])
        .passes()
        .stdout_has("#!/bin/sh\n")
        .stdout_has("fake-ffmpeg")
        .stdout_has(&format!("export ATREC_TASK_ID='{}'", id));
}

#[test]
fn edit_from_stdin_replaces_script_but_not_job() {
    let temp = Project::empty();
    let id = temp.schedule("Evening news");
    let launcher_before = std::fs::read_to_string(temp.spool().join("jobs/1")).unwrap();

    temp.atrec()
        .args(&["edit", id.as_str()])
        .stdin("#!/bin/sh\necho edited\n")
        .passes();

    temp.atrec()
        .args(&["show", id.as_str()])
        .passes()
        .stdout_eq("#!/bin/sh\necho edited\n");
    let launcher_after = std::fs::read_to_string(temp.spool().join("jobs/1")).unwrap();
    assert_eq!(launcher_before, launcher_after);
}

#[test]
fn edit_from_file() {
    let temp = Project::empty();
    let id = temp.schedule("Evening news");
    temp.file("replacement.sh", "#!/bin/sh\necho from file\n");
    let replacement = temp.path().join("replacement.sh");

    temp.atrec()
        .args(&["edit", id.as_str(), "--file", replacement.to_str().unwrap()])
        .passes();

    temp.atrec()
        .args(&["show", id.as_str()])
        .passes()
        .stdout_has("echo from file");
}

#[test]
fn edit_after_job_fired_is_a_no_op() {
    let temp = Project::empty();
    let id = temp.schedule("Evening news");
    temp.fire("1");

    temp.atrec()
        .args(&["edit", id.as_str()])
        .stdin("echo too late\n")
        .passes();
    assert!(temp.task_scripts().is_empty());
}

#[test]
fn show_unknown_task_fails() {
    let temp = Project::empty();
    temp.atrec()
        .args(&["show", "00000000-0000-0000-0000-00000000abcd"])
        .fails()
        .stderr_has("task not found");
}
