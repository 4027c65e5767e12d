// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration file loading
//!
//! Resolved as `--config <path>`, else `$ATREC_CONFIG`, else
//! `<config dir>/atrec/config.toml`. A missing default file means defaults;
//! a missing file that was asked for by name is an error.

use anyhow::{anyhow, Result};
use atrec_core::{CaptureProfile, ScriptRetention};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_ENV: &str = "ATREC_CONFIG";

const DEFAULT_TOOL_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Root of the data directory; scripts live under `<data_root>/tasks`
    pub data_root: Option<PathBuf>,
    /// Archive scripts after they run (and to `failed/` on cancel)
    pub archive_scripts: bool,
    /// Timeout for each `at`/`atq`/`atrm` invocation
    #[serde(with = "humantime_serde")]
    pub tool_timeout: Option<Duration>,
    /// Optional log file, written at `info`
    pub log_file: Option<PathBuf>,
    pub capture: CaptureConfig,
}

/// `[capture]` table
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CaptureConfig {
    pub program: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub extra_args: Option<Vec<String>>,
}

impl Config {
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load from the resolved path
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let (path, required) = match resolve_path(explicit, env, dirs::config_dir()) {
            Some(found) => found,
            None => return Ok(Self::default()),
        };

        match std::fs::read_to_string(&path) {
            Ok(text) => Self::parse(&text)
                .map_err(|e| anyhow!("invalid config {}: {}", path.display(), e)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => {
                Ok(Self::default())
            }
            Err(e) => Err(anyhow!("cannot read config {}: {}", path.display(), e)),
        }
    }

    pub fn data_root(&self) -> Result<PathBuf> {
        match &self.data_root {
            Some(root) => Ok(root.clone()),
            None => dirs::data_dir()
                .map(|dir| dir.join("atrec"))
                .ok_or_else(|| anyhow!("cannot determine a data directory; set data_root")),
        }
    }

    pub fn tool_timeout(&self) -> Duration {
        self.tool_timeout.unwrap_or(DEFAULT_TOOL_TIMEOUT)
    }

    pub fn retention(&self) -> ScriptRetention {
        ScriptRetention::from_archive_flag(self.archive_scripts)
    }

    pub fn capture_profile(&self, data_root: &Path) -> CaptureProfile {
        let output_dir = self
            .capture
            .output_dir
            .clone()
            .unwrap_or_else(|| data_root.join("recordings"));
        let mut profile = CaptureProfile::new(output_dir);
        if let Some(program) = &self.capture.program {
            profile.program = program.clone();
        }
        if let Some(args) = &self.capture.extra_args {
            profile.extra_args = args.clone();
        }
        profile
    }
}

/// Pick the config path; the flag says whether the file must exist
fn resolve_path(
    explicit: Option<&Path>,
    env: Option<PathBuf>,
    config_dir: Option<PathBuf>,
) -> Option<(PathBuf, bool)> {
    if let Some(path) = explicit {
        return Some((path.to_path_buf(), true));
    }
    if let Some(path) = env.filter(|p| !p.as_os_str().is_empty()) {
        return Some((path, true));
    }
    config_dir.map(|dir| (dir.join("atrec").join("config.toml"), false))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
