// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render a list of items; text output has one line per item
pub fn render_list<T: Serialize + std::fmt::Display>(
    items: &[T],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(items.iter().map(|item| format!("{}\n", item)).collect()),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(items)?)),
    }
}

/// Print a list of items
pub fn print_list<T: Serialize + std::fmt::Display>(
    items: &[T],
    format: OutputFormat,
) -> Result<(), serde_json::Error> {
    print!("{}", render_list(items, format)?);
    Ok(())
}
