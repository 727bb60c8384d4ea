// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixture paths inside a test directory.
//!
//! ```text
//! <test-dir>/run
//! <test-dir>/input/basic/all.n
//! <test-dir>/expectations/basic/all.txt
//! ```

use std::path::{Path, PathBuf};

use crate::config::LayoutConfig;

#[derive(Clone, Debug)]
pub struct FixtureLayout {
    base_dir: PathBuf,
    names: LayoutConfig,
}

impl FixtureLayout {
    pub fn new(base_dir: impl Into<PathBuf>, names: LayoutConfig) -> Self {
        Self {
            base_dir: base_dir.into(),
            names,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn names(&self) -> &LayoutConfig {
        &self.names
    }

    /// The external executable invoked once per input
    pub fn runner_path(&self) -> PathBuf {
        self.base_dir.join(&self.names.runner)
    }

    pub fn input_dir(&self) -> PathBuf {
        self.base_dir.join(&self.names.input_dir)
    }

    pub fn expectations_dir(&self) -> PathBuf {
        self.base_dir.join(&self.names.expectations_dir)
    }

    pub fn input_path(&self, name: impl AsRef<Path>) -> PathBuf {
        self.input_dir().join(name)
    }

    pub fn expectation_path(&self, name: impl AsRef<Path>) -> PathBuf {
        self.expectations_dir().join(name)
    }

    /// Input path relative to the input directory, if it lives there.
    pub fn relative_input<'a>(&self, input: &'a Path) -> Option<&'a Path> {
        input.strip_prefix(self.input_dir()).ok()
    }

    /// Expectation mirroring a discovered input: same relative path under
    /// the expectations directory, extension swapped for the expectation
    /// extension (`input/basic/all.n` -> `expectations/basic/all.txt`).
    pub fn expectation_for_input(&self, input: &Path) -> Option<PathBuf> {
        let relative = self.relative_input(input)?;
        if relative.as_os_str().is_empty() {
            return None;
        }
        let mirrored = self.expectations_dir().join(relative);
        Some(if self.names.expectation_extension.is_empty() {
            mirrored.with_extension("")
        } else {
            mirrored.with_extension(&self.names.expectation_extension)
        })
    }
}

#[cfg(test)]
#[path = "fixture_tests.rs"]
mod tests;
