// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Errors raised while producing or reading golden-file output.

use std::path::PathBuf;
use std::string::FromUtf8Error;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("failed to spawn runner `{}`: {source}", .path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("runner I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("`{command}` timed out after {}ms", .timeout.as_millis())]
    Timeout { command: String, timeout: Duration },

    #[error("`{command}` exited with {}{}", status_label(.code), stderr_suffix(.stderr))]
    NonZeroExit {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("runner output for `{}` is not valid UTF-8: {source}", .input.display())]
    InvalidUtf8 {
        input: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    #[error("failed to {action} expectation `{}`: {source}", .path.display())]
    Expectation {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("`{}` is outside the input directory", .path.display())]
    OutsideInputDir { path: PathBuf },

    #[error("invalid input pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("failed to list inputs: {0}")]
    Discover(#[from] glob::GlobError),
}

fn status_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (killed by signal)".to_string(),
    }
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim_end();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("\nstderr:\n{trimmed}")
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
