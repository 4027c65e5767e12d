// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `atrec schedule`

use crate::time::parse_time;
use anyhow::Result;
use atrec_adapters::{JobCanceller, JobQueue, JobSubmitter};
use atrec_core::{CaptureProfile, Clock, IdGen, Recording, ScriptRetention, Task};
use atrec_engine::Scheduler;
use chrono::{DateTime, Utc};
use clap::Args;

#[derive(Args, Debug)]
pub struct ScheduleArgs {
    /// Display name
    #[arg(long)]
    pub name: String,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long)]
    pub channel_id: String,
    #[arg(long)]
    pub channel_name: String,
    /// Stream URL to capture
    #[arg(long)]
    pub url: String,
    /// Output file name, without directories
    #[arg(long)]
    pub filename: String,
    /// Start time (RFC 3339, or YYYY-MM-DD HH:MM local)
    #[arg(long, value_parser = parse_time)]
    pub start: DateTime<Utc>,
    /// End time (RFC 3339, or YYYY-MM-DD HH:MM local)
    #[arg(long, value_parser = parse_time)]
    pub end: DateTime<Utc>,
}

impl ScheduleArgs {
    fn recording(&self) -> Recording {
        Recording {
            name: self.name.clone(),
            description: self.description.clone(),
            channel_id: self.channel_id.clone(),
            channel_name: self.channel_name.clone(),
            filename: self.filename.clone(),
            start_time: self.start,
            end_time: self.end,
        }
    }
}

/// Convert the recording to a task and schedule it
pub async fn run<Q, S, X, C, I>(
    scheduler: &Scheduler<Q, S, X, C>,
    id_gen: &I,
    profile: &CaptureProfile,
    retention: ScriptRetention,
    args: &ScheduleArgs,
) -> Result<Task>
where
    Q: JobQueue,
    S: JobSubmitter,
    X: JobCanceller,
    C: Clock,
    I: IdGen,
{
    let task = args.recording().to_task(id_gen.next(), &args.url, profile)?;
    Ok(scheduler.schedule(task, retention).await?)
}
