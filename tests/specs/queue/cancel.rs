//! Cancel specs

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
fn schedule_list_cancel_round_trip() {
    let temp = Project::empty();
    let id = temp.schedule("t1");

    temp.atrec().args(&["list"]).passes().stdout_has(&id);
    temp.atrec()
        .args(&["cancel", id.as_str()])
        .passes()
        .stdout_has(&format!("Cancelled {}", id));
    temp.atrec().args(&["list"]).passes().stdout_eq("");

    assert!(temp.task_scripts().is_empty());
    assert!(temp.queued_jobs().is_empty());
}

#[test]
fn cancel_unknown_task_does_not_touch_queue() {
    let temp = Project::empty();
    temp.schedule("t1");
    let unknown = "00000000-0000-0000-0000-00000000abcd";

    temp.atrec()
        .args(&["cancel", unknown])
        .fails()
        .stderr_has(&format!("task not found: {}", unknown));

    assert!(!temp.atrm_called());
    assert_eq!(temp.queued_jobs().len(), 1);
}

#[test]
fn cancel_with_archiving_moves_script_to_failed() {
    let temp = Project::with_config("archive_scripts = true");
    let id = temp.schedule("t1");

    temp.atrec().args(&["cancel", id.as_str()]).passes();

    assert!(temp
        .tasks_dir()
        .join("failed")
        .join(format!("{}.sh", id))
        .is_file());
    assert!(temp.queued_jobs().is_empty());
}
