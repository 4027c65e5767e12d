// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `atrec cancel`

use anyhow::Result;
use atrec_adapters::{JobCanceller, JobQueue, JobSubmitter};
use atrec_core::{Clock, ScriptRetention, TaskId};
use atrec_engine::Scheduler;

pub async fn run<Q, S, X, C>(
    scheduler: &Scheduler<Q, S, X, C>,
    id: TaskId,
    retention: ScriptRetention,
) -> Result<()>
where
    Q: JobQueue,
    S: JobSubmitter,
    X: JobCanceller,
    C: Clock,
{
    scheduler.cancel(id, retention).await?;
    Ok(())
}
