// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! POSIX shell quoting

/// Characters that never need quoting in a POSIX shell word
fn is_safe(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"-_./:=@%+,".contains(&b)
}

/// Quote `s` so a POSIX shell reads it back as exactly one word
///
/// Safe words pass through untouched; everything else is wrapped in single
/// quotes with embedded quotes written as `'\''`.
pub fn shell_quote(s: &str) -> String {
    if !s.is_empty() && s.bytes().all(is_safe) {
        return s.to_string();
    }
    single_quote(s)
}

/// Always wrap in single quotes, escaping embedded quotes as `'\''`
pub fn single_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

/// Undo the `'\''` escaping applied by [`single_quote`] to a quoted body
pub fn unescape_single_quoted(body: &str) -> String {
    body.replace(r"'\''", "'")
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;
