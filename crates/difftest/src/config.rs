// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Harness and suite configuration.
//!
//! [`HarnessConfig`] is what a single [`DiffTestCase`](crate::case::DiffTestCase)
//! runs with; rebase is an explicit field so tests never depend on process
//! state. [`SuiteConfig`] is the optional `difftest.toml` at a suite root.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::env;

/// Runner timeout when nothing overrides it
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
/// File looked up at the suite root when no config path is given
pub const CONFIG_FILE_NAME: &str = "difftest.toml";
/// Subsystems in bottom-up order. A failure low in the stack usually
/// cascades, so later stages run last.
pub const DEFAULT_SUBSYSTEMS: [&str; 5] = ["lex", "parse", "compile", "vm", "interpret"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid input pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("validation error: {0}")]
    Validation(String),
}

/// What to do when an expectation file does not exist yet
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingExpectation {
    /// Create an empty file, then compare against it
    #[default]
    CreateEmpty,
    /// Compare against empty content without touching disk
    TreatAsEmpty,
}

/// Names of the fixture directories and files inside a test directory
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct LayoutConfig {
    pub input_dir: String,
    pub expectations_dir: String,
    pub runner: String,
    /// Extension given to expectation files mirrored from discovered inputs
    pub expectation_extension: String,
    /// Glob, relative to the input directory, selecting discovered inputs
    pub input_pattern: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            input_dir: "input".to_string(),
            expectations_dir: "expectations".to_string(),
            runner: "run".to_string(),
            expectation_extension: "txt".to_string(),
            input_pattern: "**/*".to_string(),
        }
    }
}

impl LayoutConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("input_dir", &self.input_dir),
            ("expectations_dir", &self.expectations_dir),
            ("runner", &self.runner),
            ("input_pattern", &self.input_pattern),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "layout.{field} must not be empty"
                )));
            }
        }
        if self.input_dir == self.expectations_dir {
            return Err(ConfigError::Validation(format!(
                "layout.input_dir and layout.expectations_dir are both '{}'",
                self.input_dir
            )));
        }
        if self.expectation_extension.starts_with('.') {
            return Err(ConfigError::Validation(format!(
                "layout.expectation_extension '{}' must not start with '.'",
                self.expectation_extension
            )));
        }
        glob::Pattern::new(&self.input_pattern)?;
        Ok(())
    }
}

/// Configuration for one golden-file test directory
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Overwrite expectations with actual output before comparing
    pub rebase: bool,
    /// How long a runner may take before it is killed
    pub timeout: Duration,
    pub missing_expectation: MissingExpectation,
    pub layout: LayoutConfig,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            rebase: false,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            missing_expectation: MissingExpectation::default(),
            layout: LayoutConfig::default(),
        }
    }
}

impl HarnessConfig {
    /// Defaults overridden by `rebase=YES` and `DIFFTEST_TIMEOUT_MS`.
    pub fn from_env() -> Self {
        let mut config = Self::default().with_rebase(env::rebase());
        if let Some(ms) = env::timeout_ms().filter(|ms| *ms > 0) {
            config.timeout = Duration::from_millis(ms);
        }
        config
    }

    pub fn with_rebase(mut self, rebase: bool) -> Self {
        self.rebase = rebase;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_missing_expectation(mut self, policy: MissingExpectation) -> Self {
        self.missing_expectation = policy;
        self
    }

    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }
}

fn default_subsystems() -> Vec<String> {
    DEFAULT_SUBSYSTEMS.iter().map(|s| s.to_string()).collect()
}

/// Suite-wide configuration, usually read from `difftest.toml`
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SuiteConfig {
    /// Subsystem directories to run, in order
    #[serde(default = "default_subsystems")]
    pub subsystems: Vec<String>,

    /// Per-test runner timeout in milliseconds
    #[serde(default)]
    pub timeout_ms: Option<u64>,

    #[serde(default)]
    pub missing_expectation: MissingExpectation,

    /// Skip remaining subsystems once one has failures
    #[serde(default)]
    pub fail_fast: bool,

    #[serde(default)]
    pub layout: LayoutConfig,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            subsystems: default_subsystems(),
            timeout_ms: None,
            missing_expectation: MissingExpectation::default(),
            fail_fast: false,
            layout: LayoutConfig::default(),
        }
    }
}

impl SuiteConfig {
    /// Load and validate a suite config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load `difftest.toml` from `root` when present, defaults otherwise.
    pub fn load_from_root(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE_NAME);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "loading suite config");
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SuiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.subsystems.is_empty() {
            return Err(ConfigError::Validation(
                "subsystems must list at least one directory".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for name in &self.subsystems {
            if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
                return Err(ConfigError::Validation(format!(
                    "invalid subsystem name '{name}': must be a plain directory name"
                )));
            }
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "subsystem '{name}' is listed more than once"
                )));
            }
        }

        if self.timeout_ms == Some(0) {
            return Err(ConfigError::Validation(
                "timeout_ms must be greater than zero".to_string(),
            ));
        }

        self.layout.validate()
    }

    /// Harness settings every subsystem of this suite runs with.
    pub fn harness(&self, rebase: bool) -> HarnessConfig {
        HarnessConfig {
            rebase,
            timeout: Duration::from_millis(self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS)),
            missing_expectation: self.missing_expectation,
            layout: self.layout.clone(),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
