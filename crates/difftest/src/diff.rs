// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering expected/actual mismatches.

use similar::TextDiff;

/// Unified diff from `expected` to `actual`, or an empty string when equal.
pub fn unified_diff(expected: &str, actual: &str) -> String {
    if expected == actual {
        return String::new();
    }

    let mut rendered = TextDiff::from_lines(expected, actual)
        .unified_diff()
        .context_radius(3)
        .missing_newline_hint(true)
        .header("expected", "actual")
        .to_string();

    if let Some(hint) = whitespace_hint(expected, actual) {
        rendered.push_str(hint);
        rendered.push('\n');
    }
    rendered
}

/// Differences that are invisible in a line diff get called out explicitly.
fn whitespace_hint(expected: &str, actual: &str) -> Option<&'static str> {
    if expected.trim_end_matches('\n') == actual.trim_end_matches('\n') {
        Some("note: outputs differ only in trailing newlines")
    } else if expected.replace("\r\n", "\n") == actual.replace("\r\n", "\n") {
        Some("note: outputs differ only in line endings")
    } else if strip_line_ends(expected) == strip_line_ends(actual) {
        Some("note: outputs differ only in trailing whitespace")
    } else {
        None
    }
}

fn strip_line_ends(text: &str) -> Vec<&str> {
    text.lines().map(str::trim_end).collect()
}

/// Full failure message: the diff followed by both contents.
pub fn describe_mismatch(label: &str, expected: &str, actual: &str) -> String {
    format!(
        "output does not match {label}\n\n{diff}\n--- expected ---\n{expected}\n--- actual ---\n{actual}",
        diff = unified_diff(expected, actual),
    )
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
