// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reading and rebasing expectation files.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::config::MissingExpectation;
use crate::error::HarnessError;

/// Read an expectation, applying `policy` when the file does not exist.
///
/// Missing expectations read as empty so a brand new test fails with the
/// full output as its diff.
pub fn read(path: &Path, policy: MissingExpectation) -> Result<String, HarnessError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            if policy == MissingExpectation::CreateEmpty {
                tracing::debug!(path = %path.display(), "creating empty expectation");
                write(path, "")?;
            }
            Ok(String::new())
        }
        Err(source) => Err(HarnessError::Expectation {
            action: "read",
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Overwrite an expectation with `content`, creating parent directories.
pub fn write(path: &Path, content: &str) -> Result<(), HarnessError> {
    let err = |source| HarnessError::Expectation {
        action: "write",
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(err)?;
    }
    fs::write(path, content).map_err(err)
}

#[cfg(test)]
#[path = "expectation_tests.rs"]
mod tests;
