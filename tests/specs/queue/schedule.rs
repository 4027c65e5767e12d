//! Schedule specs

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
fn schedule_prints_task_id_and_queues_launcher() {
    let temp = Project::empty();
    let id = temp.schedule("Evening news");

    assert_eq!(id.len(), 36);
    assert_eq!(temp.task_scripts(), vec![format!("{}.sh", id)]);
    assert_eq!(temp.queued_jobs(), vec!["1".to_string()]);

    let launcher = std::fs::read_to_string(temp.spool().join("jobs/1")).unwrap();
    assert!(launcher.contains(&format!("ATREC_TASK_ID='{}'", id)));
    let script = temp.tasks_dir().join(format!("{}.sh", id));
    assert!(launcher.contains(&format!("exec {}", script.display())));
}

#[test]
fn schedule_in_the_past_leaves_nothing_behind() {
    let temp = Project::empty();
    temp.atrec()
        .args(&schedule_args(
            "Old news",
            "2001-01-01T10:00:00Z",
            "2001-01-01T11:00:00Z",
        ))
        .fails()
        .stderr_has("error: Cannot schedule task in the past");

    assert!(temp.task_scripts().is_empty());
    assert!(temp.queued_jobs().is_empty());
}

#[test]
fn failed_submission_removes_script() {
    let temp = Project::empty();
    temp.break_at("at: garbled time");

    temp.atrec()
        .args(&schedule_args("News", FUTURE_START, FUTURE_END))
        .fails()
        .stderr_has("error: Failed to schedule task: at: garbled time");

    assert!(temp.task_scripts().is_empty());
    assert!(temp.queued_jobs().is_empty());
}

#[test]
fn inverted_window_is_rejected() {
    let temp = Project::empty();
    temp.atrec()
        .args(&schedule_args("News", FUTURE_END, FUTURE_START))
        .fails()
        .stderr_has("must end after it starts");
    assert!(temp.task_scripts().is_empty());
}

#[test]
fn fired_job_runs_capture_and_deletes_script() {
    let temp = Project::empty();
    let id = temp.schedule("Evening news");

    temp.fire("1");

    let args = std::fs::read_to_string(temp.spool().join("capture.args")).unwrap();
    let expected_output = temp.path().join("media/news.ts").display().to_string();
    assert_eq!(
        args.lines().collect::<Vec<_>>(),
        vec![
            "-hide_banner",
            "-nostdin",
            "-y",
            "-i",
            "http://tuner.local/stream/7",
            "-t",
            "00:30:00",
            "-c",
            "copy",
            expected_output.as_str(),
        ]
    );
    assert!(!temp.task_scripts().contains(&format!("{}.sh", id)));
    temp.atrec().args(&["list"]).passes().stdout_eq("");
}

#[test]
fn fired_job_archives_script_when_configured() {
    let temp = Project::with_config("archive_scripts = true");
    let id = temp.schedule("Evening news");

    temp.fire("1");

    assert!(temp
        .tasks_dir()
        .join("completed")
        .join(format!("{}.sh", id))
        .is_file());
}
