// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Whole-suite runs across subsystem test directories.
//!
//! Each subsystem is a [`DiffTestCase`] directory under the suite root.
//! Subsystems run in configured order and cases run one at a time.

use difftest_capture::{CaseId, CaseOutcome, OutcomeLog};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use thiserror::Error;

use crate::case::{DiffTestCase, Verdict};
use crate::config::{ConfigError, HarnessConfig, SuiteConfig};
use crate::discover::discover_inputs;
use crate::error::HarnessError;
use crate::report::{Reporter, Tally};

/// Exit status when every case passed
pub const EXIT_SUCCESS: i32 = 0;
/// Exit status when at least one case failed or errored
pub const EXIT_FAILURES: i32 = 1;
/// Exit status when the suite itself could not run
pub const EXIT_HARNESS_ERROR: i32 = 2;

#[derive(Debug, Error)]
pub enum SuiteError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Harness(#[from] HarnessError),

    #[error("failed to write report: {0}")]
    Report(#[from] std::io::Error),

    #[error("suite root `{}` is not a directory", .0.display())]
    MissingRoot(PathBuf),

    #[error("unknown subsystem '{name}' (configured: {})", .known.join(", "))]
    UnknownSubsystem { name: String, known: Vec<String> },

    #[error("failed to open outcome log `{}`: {source}", .path.display())]
    Log {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubsystemSummary {
    pub name: String,
    pub tally: Tally,
    /// Not run because an earlier subsystem failed under fail-fast
    pub skipped: bool,
}

#[derive(Clone, Debug)]
pub struct RunSummary {
    pub subsystems: Vec<SubsystemSummary>,
    pub total: Tally,
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn all_passed(&self) -> bool {
        self.total.fails == 0
    }

    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            EXIT_SUCCESS
        } else {
            EXIT_FAILURES
        }
    }
}

pub struct Suite {
    root: PathBuf,
    config: SuiteConfig,
    harness: HarnessConfig,
    only: Vec<String>,
    log: OutcomeLog,
}

impl Suite {
    /// `harness` applies to every subsystem; its layout should match
    /// `config.layout` (see [`SuiteConfig::harness`]).
    pub fn new(root: impl Into<PathBuf>, config: SuiteConfig, harness: HarnessConfig) -> Self {
        Self {
            root: root.into(),
            config,
            harness,
            only: Vec::new(),
            log: OutcomeLog::new(),
        }
    }

    /// Restrict the run to these subsystems. Configured order still applies.
    pub fn with_only(mut self, names: Vec<String>) -> Self {
        self.only = names;
        self
    }

    pub fn with_log(mut self, log: OutcomeLog) -> Self {
        self.log = log;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn log(&self) -> &OutcomeLog {
        &self.log
    }

    /// Subsystems this run will visit, in order.
    pub fn selected_subsystems(&self) -> Result<Vec<&str>, SuiteError> {
        if let Some(name) = self.only.iter().find(|n| !self.config.subsystems.contains(*n)) {
            return Err(SuiteError::UnknownSubsystem {
                name: name.clone(),
                known: self.config.subsystems.clone(),
            });
        }

        Ok(self
            .config
            .subsystems
            .iter()
            .filter(|name| self.only.is_empty() || self.only.contains(*name))
            .map(String::as_str)
            .collect())
    }

    pub async fn run<W: Write>(&self, reporter: &mut Reporter<W>) -> Result<RunSummary, SuiteError> {
        if !self.root.is_dir() {
            return Err(SuiteError::MissingRoot(self.root.clone()));
        }

        let start = Instant::now();
        let mut summaries = Vec::new();
        let mut total = Tally::default();
        let mut aborted = false;

        for name in self.selected_subsystems()? {
            if aborted {
                reporter.subsystem_skipped(name, "an earlier subsystem failed")?;
                summaries.push(SubsystemSummary {
                    name: name.to_string(),
                    tally: Tally::default(),
                    skipped: true,
                });
                continue;
            }

            let tally = self.run_subsystem(name, reporter).await?;
            total.merge(tally);
            summaries.push(SubsystemSummary {
                name: name.to_string(),
                tally,
                skipped: false,
            });

            if self.config.fail_fast && tally.fails > 0 {
                tracing::info!(subsystem = name, "fail-fast: skipping remaining subsystems");
                aborted = true;
            }
        }

        let elapsed = start.elapsed();
        reporter.run_summary(&total, elapsed)?;

        Ok(RunSummary {
            subsystems: summaries,
            total,
            elapsed,
        })
    }

    async fn run_subsystem<W: Write>(
        &self,
        name: &str,
        reporter: &mut Reporter<W>,
    ) -> Result<Tally, SuiteError> {
        let case = DiffTestCase::new(self.root.join(name), self.harness.clone());
        let input_dir = case.layout().input_dir();
        if !input_dir.is_dir() {
            tracing::warn!(subsystem = name, dir = %input_dir.display(), "no input directory");
        }

        let inputs = discover_inputs(&input_dir, &self.harness.layout.input_pattern)?;
        reporter.subsystem_header(name, inputs.len())?;

        let mut tally = Tally::default();
        for input in inputs {
            let shown = self.display_path(&input);
            reporter.case_started(shown)?;

            let (expectation, outcome) = self.run_case(&case, &input).await;
            reporter.case_finished(&outcome)?;
            tally.add(&outcome);

            let expectation = expectation
                .as_deref()
                .map(|p| self.display_path(p).display().to_string())
                .unwrap_or_default();
            self.log.record(
                CaseId::new(name, shown.display().to_string(), expectation),
                outcome,
            );
        }

        reporter.subsystem_summary(&tally)?;
        Ok(tally)
    }

    /// Run one discovered input. Runner and expectation errors become an
    /// `Error` outcome so the rest of the subsystem still runs.
    async fn run_case(&self, case: &DiffTestCase, input: &Path) -> (Option<PathBuf>, CaseOutcome) {
        let Some(expectation) = case.layout().expectation_for_input(input) else {
            let err = HarnessError::OutsideInputDir {
                path: input.to_path_buf(),
            };
            return (None, CaseOutcome::Error { message: err.to_string() });
        };

        let verdict = match case.run_input(input).await {
            Ok(output) => case.check_against(&output, &expectation),
            Err(e) => Err(e),
        };

        let outcome = match verdict {
            Ok(Verdict::Matched) => CaseOutcome::Passed,
            Ok(Verdict::Rebased) => CaseOutcome::Rebased,
            Ok(Verdict::Mismatch(mismatch)) => CaseOutcome::Failed {
                diff: mismatch.diff(),
            },
            Err(e) => {
                tracing::debug!(input = %input.display(), error = %e, "case errored");
                CaseOutcome::Error {
                    message: e.to_string(),
                }
            }
        };
        (Some(expectation), outcome)
    }

    fn display_path<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}

#[cfg(test)]
#[path = "suite_tests.rs"]
mod tests;
