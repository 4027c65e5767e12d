// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! atrec - schedule stream recordings through the `at` job queue

mod commands;
mod completions;
mod config;
mod logging;
mod output;
mod time;

use anyhow::Result;
use atrec_adapters::SystemRunner;
use atrec_core::{SystemClock, TaskId, UuidIdGen};
use atrec_storage::TaskScriptStore;
use clap::{Parser, Subcommand};
use commands::{cancel, definition, list, schedule};
use completions::CompletionsArgs;
use config::Config;
use output::OutputFormat;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "atrec",
    version,
    about = "atrec - schedule stream recordings with at(1)"
)]
struct Cli {
    /// Config file (default: $ATREC_CONFIG, then <config dir>/atrec/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Schedule a recording
    Schedule(schedule::ScheduleArgs),
    /// List pending recordings
    List {
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Print a task's script
    Show { id: TaskId },
    /// Replace a task's script
    Edit {
        id: TaskId,
        /// Read the new script from this file (default: stdin)
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Cancel a pending recording
    Cancel { id: TaskId },
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    if let Commands::Completions(args) = &cli.command {
        completions::generate_completions::<Cli>(args.shell);
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref())?;
    let _log_guard = logging::setup_logging(&config)?;

    let data_root = config.data_root()?;
    let retention = config.retention();
    let store = TaskScriptStore::new(&data_root);
    let scheduler = atrec_engine::connect(
        SystemRunner,
        Some(config.tool_timeout()),
        store,
        SystemClock,
    )
    .await?;

    match cli.command {
        Commands::Schedule(args) => {
            let profile = config.capture_profile(&data_root);
            let task =
                schedule::run(&scheduler, &UuidIdGen, &profile, retention, &args).await?;
            println!("{}", task.id);
        }
        Commands::List { format } => {
            let rows = list::run(&scheduler).await?;
            output::print_list(&rows, format)?;
        }
        Commands::Show { id } => {
            print!("{}", definition::show(&scheduler, id)?);
        }
        Commands::Edit { id, file } => {
            definition::edit(&scheduler, id, file.as_deref())?;
        }
        Commands::Cancel { id } => {
            cancel::run(&scheduler, id, retention).await?;
            println!("Cancelled {}", id);
        }
        Commands::Completions(_) => {}
    }

    Ok(())
}
