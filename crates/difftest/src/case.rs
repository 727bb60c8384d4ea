// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Golden-file test case bound to one test directory.
//!
//! ```no_run
//! # async fn demo() -> Result<(), difftest::HarnessError> {
//! use difftest::{DiffTestCase, HarnessConfig};
//!
//! let case = DiffTestCase::new(
//!     concat!(env!("CARGO_MANIFEST_DIR"), "/tests/lex"),
//!     HarnessConfig::from_env(),
//! );
//! let output = case.run_test("basic/all.n").await?;
//! case.assert_no_diff(&output, "basic/all.txt");
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::HarnessConfig;
use crate::diff;
use crate::error::HarnessError;
use crate::expectation;
use crate::fixture::FixtureLayout;
use crate::process::RunnerCommand;

/// Result of comparing output with an expectation
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Matched,
    /// Expectation was overwritten and read back equal
    Rebased,
    Mismatch(Mismatch),
}

impl Verdict {
    pub fn is_match(&self) -> bool {
        !matches!(self, Verdict::Mismatch(_))
    }
}

/// Output that differs from its expectation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mismatch {
    pub expectation: PathBuf,
    pub expected: String,
    pub actual: String,
}

impl Mismatch {
    /// Unified diff from expected to actual
    pub fn diff(&self) -> String {
        diff::unified_diff(&self.expected, &self.actual)
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = format!("`{}`", self.expectation.display());
        f.write_str(&diff::describe_mismatch(
            &label,
            &self.expected,
            &self.actual,
        ))
    }
}

#[derive(Clone, Debug)]
pub struct DiffTestCase {
    layout: FixtureLayout,
    config: HarnessConfig,
}

impl DiffTestCase {
    pub fn new(base_dir: impl Into<PathBuf>, config: HarnessConfig) -> Self {
        let layout = FixtureLayout::new(base_dir, config.layout.clone());
        Self { layout, config }
    }

    pub fn layout(&self) -> &FixtureLayout {
        &self.layout
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    fn runner(&self) -> RunnerCommand {
        RunnerCommand::new(self.layout.runner_path(), self.config.timeout)
    }

    /// Run the runner on `filename` (relative to the input directory) and
    /// return its stdout.
    pub async fn run_test(&self, filename: impl AsRef<Path>) -> Result<String, HarnessError> {
        self.run_input(&self.layout.input_path(filename)).await
    }

    /// Run the runner on an already-resolved input path.
    pub async fn run_input(&self, input: &Path) -> Result<String, HarnessError> {
        Ok(self.runner().run(input).await?.stdout)
    }

    /// Compare `output` with `expectation_file` (relative to the
    /// expectations directory), rebasing first when configured.
    pub fn check_no_diff(
        &self,
        output: &str,
        expectation_file: impl AsRef<Path>,
    ) -> Result<Verdict, HarnessError> {
        self.check_against(output, &self.layout.expectation_path(expectation_file))
    }

    /// Same as [`check_no_diff`](Self::check_no_diff) for a resolved path.
    pub fn check_against(&self, output: &str, path: &Path) -> Result<Verdict, HarnessError> {
        if self.config.rebase {
            tracing::debug!(path = %path.display(), "rebasing expectation");
            expectation::write(path, output)?;
        }

        let expected = expectation::read(path, self.config.missing_expectation)?;
        if expected == output {
            return Ok(if self.config.rebase {
                Verdict::Rebased
            } else {
                Verdict::Matched
            });
        }

        Ok(Verdict::Mismatch(Mismatch {
            expectation: path.to_path_buf(),
            expected,
            actual: output.to_string(),
        }))
    }

    /// Panic with a diff unless `output` equals the expectation exactly.
    ///
    /// Meant for `#[test]` functions; use [`check_no_diff`](Self::check_no_diff)
    /// to handle mismatches without panicking.
    #[track_caller]
    #[allow(clippy::panic)]
    pub fn assert_no_diff(&self, output: &str, expectation_file: impl AsRef<Path>) {
        match self.check_no_diff(output, expectation_file) {
            Ok(Verdict::Matched | Verdict::Rebased) => {}
            Ok(Verdict::Mismatch(mismatch)) => panic!("{mismatch}"),
            Err(e) => panic!("{e}"),
        }
    }
}

#[cfg(test)]
#[path = "case_tests.rs"]
mod tests;
