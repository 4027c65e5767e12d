// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line time parsing

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

const LOCAL_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parse RFC 3339, or `YYYY-MM-DD HH:MM` in local time
pub fn parse_time(text: &str) -> Result<DateTime<Utc>, String> {
    let text = text.trim();
    if let Ok(time) = DateTime::parse_from_rfc3339(text) {
        return Ok(time.with_timezone(&Utc));
    }

    let naive = NaiveDateTime::parse_from_str(text, LOCAL_FORMAT).map_err(|_| {
        format!(
            "invalid time {:?}: expected RFC 3339 or YYYY-MM-DD HH:MM",
            text
        )
    })?;
    Local
        .from_local_datetime(&naive)
        .single()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| format!("local time {:?} is ambiguous or skipped", text))
}
