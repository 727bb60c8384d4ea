// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line interface for whole-suite runs.

use clap::Parser;
use difftest_capture::OutcomeLog;
use std::path::PathBuf;

use crate::config::{HarnessConfig, SuiteConfig};
use crate::env;
use crate::output_diagnostic::print_warning;
use crate::report::Reporter;
use crate::suite::{RunSummary, Suite, SuiteError};

/// Golden-file test runner
#[derive(Parser, Debug, Clone)]
#[command(
    name = "difftest",
    version,
    about = "Run golden-file tests against per-subsystem runners"
)]
pub struct Cli {
    /// Rebaseline every test: overwrite expectations with current output.
    /// Also enabled by `rebase=YES` in the environment.
    #[arg(long)]
    pub rebase: bool,

    /// Suite root containing one directory per subsystem
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Suite config file [default: <root>/difftest.toml when present]
    #[arg(long, env = "DIFFTEST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Only run this subsystem (repeatable)
    #[arg(long = "subsystem", short = 's', value_name = "NAME")]
    pub subsystems: Vec<String>,

    /// Per-test runner timeout in milliseconds
    #[arg(long, env = "DIFFTEST_TIMEOUT_MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_ms: Option<u64>,

    /// Append every outcome to this JSONL file
    #[arg(long, value_name = "FILE")]
    pub log: Option<PathBuf>,

    /// Stop after the first subsystem with failures
    #[arg(long)]
    pub fail_fast: bool,
}

impl Cli {
    /// `--rebase` or `rebase=YES`.
    pub fn rebase_enabled(&self) -> bool {
        self.rebase || env::rebase()
    }

    /// Config file (explicit or discovered) with CLI overrides applied.
    pub fn suite_config(&self) -> Result<SuiteConfig, SuiteError> {
        let mut config = match &self.config {
            Some(path) => SuiteConfig::load(path)?,
            None => SuiteConfig::load_from_root(&self.root)?,
        };
        if let Some(ms) = self.timeout_ms {
            config.timeout_ms = Some(ms);
        }
        if self.fail_fast {
            config.fail_fast = true;
        }
        Ok(config)
    }

    pub fn harness_config(&self, config: &SuiteConfig) -> HarnessConfig {
        let harness = config.harness(self.rebase_enabled());
        tracing::debug!(
            rebase = harness.rebase,
            timeout_ms = harness.timeout.as_millis() as u64,
            "harness configured"
        );
        harness
    }

    /// Build the suite this invocation describes.
    pub fn suite(&self) -> Result<Suite, SuiteError> {
        let config = self.suite_config()?;
        let harness = self.harness_config(&config);

        let log = match &self.log {
            Some(path) => OutcomeLog::with_file(path).map_err(|source| SuiteError::Log {
                path: path.clone(),
                source,
            })?,
            None => OutcomeLog::new(),
        };

        Ok(Suite::new(&self.root, config, harness)
            .with_only(self.subsystems.clone())
            .with_log(log))
    }

    /// Run the suite, reporting to stdout.
    pub async fn execute(&self) -> Result<RunSummary, SuiteError> {
        let suite = self.suite()?;
        suite.selected_subsystems()?;

        if self.rebase_enabled() {
            print_warning("rebase enabled: expectations will be overwritten with actual output");
        }

        let mut reporter = Reporter::stdout();
        suite.run(&mut reporter).await
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
