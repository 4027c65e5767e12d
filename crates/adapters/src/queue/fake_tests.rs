// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use chrono::{TimeZone, Utc};

fn make_task(n: u128) -> Task {
    Task::new(
        TaskId::from(uuid::Uuid::from_u128(n)),
        format!("task-{}", n),
        "echo hi",
        Utc.with_ymd_and_hms(2033, 1, 1, 0, 0, 0).unwrap(),
        "{}",
    )
}

#[tokio::test]
async fn fake_queue_job_lifecycle() {
    let queue = FakeAtQueue::new();
    let task = make_task(1);

    let job_id = queue.submit(&task, Path::new("/tmp/1.sh")).await.unwrap();
    assert_eq!(queue.list_job_ids().await.unwrap(), vec![job_id]);
    assert_eq!(
        queue.inspect(job_id).await.unwrap(),
        task.clone().with_job_id(job_id)
    );

    queue.cancel(job_id).await.unwrap();
    assert!(queue.list_job_ids().await.unwrap().is_empty());
    assert!(matches!(
        queue.cancel(job_id).await,
        Err(QueueError::RemoveFailed { .. })
    ));
}

#[tokio::test]
async fn fake_queue_failure_injection_is_one_shot_for_submit() {
    let queue = FakeAtQueue::new();
    queue.fail_next_submit("boom");
    assert!(queue.submit(&make_task(1), Path::new("/a")).await.is_err());
    assert!(queue.submit(&make_task(1), Path::new("/a")).await.is_ok());
}

#[tokio::test]
async fn fake_queue_raw_jobs_lack_definitions() {
    let queue = FakeAtQueue::new();
    let job_id = queue.insert_raw_job("echo unrelated");
    assert!(matches!(
        queue.inspect(job_id).await,
        Err(QueueError::DefinitionMissing(id)) if id == job_id
    ));
}
