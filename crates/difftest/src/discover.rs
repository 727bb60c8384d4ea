// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Input fixture discovery.

use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};

use crate::error::HarnessError;

/// Regular files under `input_dir` matching `pattern`, sorted by path.
///
/// Anything with a hidden component below `input_dir` (`.gitkeep`, editor
/// swap files, `.cache/`) is skipped. A missing directory has no inputs.
pub fn discover_inputs(input_dir: &Path, pattern: &str) -> Result<Vec<PathBuf>, HarnessError> {
    if !input_dir.is_dir() {
        tracing::debug!(dir = %input_dir.display(), "input directory missing");
        return Ok(Vec::new());
    }

    let escaped = Pattern::escape(&input_dir.to_string_lossy());
    let full = format!("{}/{}", escaped.trim_end_matches('/'), pattern);
    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    };

    let mut inputs = Vec::new();
    for entry in glob::glob_with(&full, options)? {
        let path = entry?;
        if path.is_file() && !is_hidden(input_dir, &path) {
            inputs.push(path);
        }
    }
    inputs.sort();
    tracing::debug!(dir = %input_dir.display(), count = inputs.len(), "discovered inputs");
    Ok(inputs)
}

fn is_hidden(input_dir: &Path, path: &Path) -> bool {
    path.strip_prefix(input_dir)
        .unwrap_or(path)
        .components()
        .any(|c| c.as_os_str().to_string_lossy().starts_with('.'))
}

#[cfg(test)]
#[path = "discover_tests.rs"]
mod tests;
