// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `atrec show` and `atrec edit`

use anyhow::{anyhow, Result};
use atrec_adapters::{JobCanceller, JobQueue, JobSubmitter};
use atrec_core::{Clock, TaskId};
use atrec_engine::Scheduler;
use std::io::Read;
use std::path::Path;

pub fn show<Q, S, X, C>(scheduler: &Scheduler<Q, S, X, C>, id: TaskId) -> Result<String>
where
    Q: JobQueue,
    S: JobSubmitter,
    X: JobCanceller,
    C: Clock,
{
    Ok(scheduler.get_definition(id)?)
}

/// Replace the script text from `file`, or stdin when `file` is `None` or `-`
pub fn edit<Q, S, X, C>(
    scheduler: &Scheduler<Q, S, X, C>,
    id: TaskId,
    file: Option<&Path>,
) -> Result<()>
where
    Q: JobQueue,
    S: JobSubmitter,
    X: JobCanceller,
    C: Clock,
{
    let text = match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .map_err(|e| anyhow!("cannot read {}: {}", path.display(), e))?,
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        }
    };
    scheduler.update_definition(id, &text)?;
    Ok(())
}
