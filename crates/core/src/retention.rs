// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! What happens to a task script once it is no longer pending

use serde::{Deserialize, Serialize};

/// Script retention policy, baked into each script at submission time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptRetention {
    /// Script deletes itself after running; cancellation deletes it
    #[default]
    Delete,
    /// Script moves itself to `completed/` after running; cancellation moves it to `failed/`
    Archive,
}

impl ScriptRetention {
    pub fn from_archive_flag(archive: bool) -> Self {
        if archive {
            Self::Archive
        } else {
            Self::Delete
        }
    }
}
