// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Logging setup

use crate::config::Config;
use anyhow::{anyhow, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;

pub const LOG_ENV: &str = "ATREC_LOG";

/// Install the global subscriber
///
/// Stderr gets `$ATREC_LOG` (default `warn`). A configured log file gets a
/// second layer at `info`. Keep the returned guard alive until exit so the
/// file writer flushes.
pub fn setup_logging(config: &Config) -> Result<Option<WorkerGuard>> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter);

    let Some(log_path) = &config.log_file else {
        tracing_subscriber::registry().with(stderr_layer).try_init()?;
        return Ok(None);
    };

    let (dir, file_name) = split_log_path(log_path)?;
    std::fs::create_dir_all(dir)
        .map_err(|e| anyhow!("cannot create log directory {}: {}", dir.display(), e))?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(Some(guard))
}

fn split_log_path(path: &Path) -> Result<(&Path, &std::ffi::OsStr)> {
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("log_file has no file name: {}", path.display()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Ok((dir, file_name))
}
