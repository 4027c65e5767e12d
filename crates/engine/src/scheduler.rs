// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scheduler: composes the queue wrappers and the script store
//!
//! The queue's job ids are never stored. Every lookup re-reads the pending
//! jobs and matches on the task id embedded in each one.

use crate::error::SchedulerError;
use atrec_adapters::{
    AtSubmitter, AtqQueue, AtrmCanceller, ErrorKind as QueueErrorKind, JobCanceller, JobQueue,
    JobSubmitter, ProcessRunner, TracedQueue,
};
use atrec_core::{token, Clock, JobId, ScriptRetention, Task, TaskId};
use atrec_storage::{StoreError, TaskScriptStore};
use std::time::Duration;

/// Queue adapter dependencies
pub struct SchedulerDeps<Q, S, X> {
    pub queue: Q,
    pub submitter: S,
    pub canceller: X,
}

/// Scheduler wired to the real `at` tools
pub type AtScheduler<R, C> = Scheduler<
    TracedQueue<AtqQueue<R>>,
    TracedQueue<AtSubmitter<R>>,
    TracedQueue<AtrmCanceller<R>>,
    C,
>;

/// Build a scheduler over `at`, `atq` and `atrm`
///
/// Fails with a missing-dependency error if any tool is absent.
pub async fn connect<R: ProcessRunner, C: Clock>(
    runner: R,
    timeout: Option<Duration>,
    store: TaskScriptStore,
    clock: C,
) -> Result<AtScheduler<R, C>, SchedulerError> {
    let deps = SchedulerDeps {
        queue: TracedQueue::new(AtqQueue::new(runner.clone(), timeout).await?),
        submitter: TracedQueue::new(AtSubmitter::new(runner.clone(), timeout).await?),
        canceller: TracedQueue::new(AtrmCanceller::new(runner, timeout).await?),
    };
    Ok(Scheduler::new(deps, store, clock))
}

/// Schedules, lists, edits and cancels deferred tasks
///
/// Provides no locking: callers sharing one scheduler must serialize
/// operations on the same task id.
pub struct Scheduler<Q, S, X, C> {
    queue: Q,
    submitter: S,
    canceller: X,
    store: TaskScriptStore,
    clock: C,
}

impl<Q, S, X, C> Scheduler<Q, S, X, C>
where
    Q: JobQueue,
    S: JobSubmitter,
    X: JobCanceller,
    C: Clock,
{
    pub fn new(deps: SchedulerDeps<Q, S, X>, store: TaskScriptStore, clock: C) -> Self {
        Self {
            queue: deps.queue,
            submitter: deps.submitter,
            canceller: deps.canceller,
            store,
            clock,
        }
    }

    pub fn store(&self) -> &TaskScriptStore {
        &self.store
    }

    /// Write the task's script and queue it; returns the task with its job id
    ///
    /// A task starting at or before now is rejected before anything touches
    /// disk. If making the script executable or submitting it fails, the
    /// script is deleted before the error is returned.
    pub async fn schedule(
        &self,
        task: Task,
        retention: ScriptRetention,
    ) -> Result<Task, SchedulerError> {
        let now = self.clock.now();
        if task.start_time <= now {
            return Err(SchedulerError::InPast {
                start_time: task.start_time,
                now,
            });
        }

        self.store.ensure_dir()?;
        let script = self.store.write(&task, retention).map_err(|e| {
            self.roll_back(task.id);
            e
        })?;

        if let Err(e) = self.store.make_executable(task.id) {
            self.roll_back(task.id);
            return Err(e.into());
        }

        match self.submitter.submit(&task, &script).await {
            Ok(job_id) => {
                tracing::info!(task_id = %task.id, job_id = job_id.0, "task scheduled");
                Ok(task.with_job_id(job_id))
            }
            Err(e) => {
                self.roll_back(task.id);
                Err(e.into())
            }
        }
    }

    fn roll_back(&self, id: TaskId) {
        tracing::warn!(task_id = %id, "rolling back task script");
        if let Err(e) = self.store.remove(id) {
            tracing::error!(task_id = %id, error = %e, "failed to remove task script");
        }
    }

    /// Every pending task, as described by its script
    ///
    /// The queue entry only maps a job id to a task id. The definition is
    /// then read from the task's script, so edits made through
    /// [`Self::update_definition`] show up here. Jobs whose text carries no
    /// readable definition, or whose script is gone, are skipped. A failing
    /// queue tool fails the whole call.
    pub async fn list(&self) -> Result<Vec<Task>, SchedulerError> {
        let job_ids = self.queue.list_job_ids().await?;
        let mut tasks = Vec::with_capacity(job_ids.len());

        for job_id in job_ids {
            let launched = match self.submitter.inspect(job_id).await {
                Ok(task) => task,
                Err(e) if e.kind() == QueueErrorKind::Parse => {
                    tracing::warn!(job_id = job_id.0, error = %e, "skipping unreadable job");
                    continue;
                }
                Err(e) => return Err(e.into()),
            };
            if let Some(task) = self.read_scripted(job_id, launched)? {
                tasks.push(task);
            }
        }

        Ok(tasks)
    }

    /// Resolve a queued task against its script
    ///
    /// `None` when the script is missing. A script whose definition no
    /// longer decodes to the same task id keeps the definition the job
    /// was queued with.
    fn read_scripted(&self, job_id: JobId, launched: Task) -> Result<Option<Task>, SchedulerError> {
        let text = match self.store.read(launched.id) {
            Ok(text) => text,
            Err(StoreError::NotFound(_)) => {
                tracing::warn!(
                    job_id = job_id.0,
                    task_id = %launched.id,
                    "skipping job without script"
                );
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        match token::decode_task(&text) {
            Ok(task) if task.id == launched.id => Ok(Some(task.with_job_id(job_id))),
            Ok(task) => {
                tracing::warn!(
                    task_id = %launched.id,
                    script_task_id = %task.id,
                    "script names another task, using queued definition"
                );
                Ok(Some(launched))
            }
            Err(e) => {
                tracing::debug!(
                    task_id = %launched.id,
                    error = %e,
                    "script has no readable definition, using queued definition"
                );
                Ok(Some(launched))
            }
        }
    }

    /// Pending task with this id, if any
    pub async fn find(&self, id: TaskId) -> Result<Option<Task>, SchedulerError> {
        Ok(self.list().await?.into_iter().find(|task| task.id == id))
    }

    /// Raw script text for a task
    pub fn get_definition(&self, id: TaskId) -> Result<String, SchedulerError> {
        self.store.read(id).map_err(|e| match e {
            StoreError::NotFound(_) => SchedulerError::NotFound(id),
            other => other.into(),
        })
    }

    /// Replace a task's script text; the queue entry is untouched
    ///
    /// A script that is already gone (the job fired) is left alone.
    pub fn update_definition(&self, id: TaskId, text: &str) -> Result<(), SchedulerError> {
        if !self.store.exists(id) {
            tracing::warn!(task_id = %id, "task script is gone, not updating");
            return Ok(());
        }

        self.store
            .overwrite(id, text)
            .map_err(|source| SchedulerError::UpdateFailed { id, source })?;
        tracing::info!(task_id = %id, "task definition updated");
        Ok(())
    }

    /// Cancel a pending task
    ///
    /// The script is removed (or moved to `failed/`) before the queue entry,
    /// so a job firing mid-cancel finds nothing to run.
    pub async fn cancel(&self, id: TaskId, retention: ScriptRetention) -> Result<(), SchedulerError> {
        let Some(task) = self.find(id).await? else {
            return Err(SchedulerError::NotFound(id));
        };
        let Some(job_id) = task.job_id else {
            return Err(SchedulerError::NotFound(id));
        };

        self.store.retire(id, retention)?;

        if let Err(e) = self.canceller.cancel(job_id).await {
            tracing::error!(
                task_id = %id,
                job_id = job_id.0,
                error = %e,
                "script retired but job not removed"
            );
            return Err(e.into());
        }

        tracing::info!(task_id = %id, job_id = job_id.0, "task cancelled");
        Ok(())
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
