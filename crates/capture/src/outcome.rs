// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recorded outcome data types.

use super::duration_serde;
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime};

/// One executed golden-file case
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecordedOutcome {
    /// Sequence number within the run
    pub seq: u64,

    /// Wall-clock timestamp
    pub timestamp: SystemTime,

    /// Time since the log was created
    #[serde(rename = "elapsed_ms", with = "duration_serde")]
    pub elapsed: Duration,

    /// Which case ran
    pub case: CaseId,

    /// What happened
    pub outcome: CaseOutcome,
}

/// Identifies a case: the subsystem it belongs to plus its fixture paths
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseId {
    pub subsystem: String,
    pub input: String,
    pub expectation: String,
}

impl CaseId {
    pub fn new(
        subsystem: impl Into<String>,
        input: impl Into<String>,
        expectation: impl Into<String>,
    ) -> Self {
        Self {
            subsystem: subsystem.into(),
            input: input.into(),
            expectation: expectation.into(),
        }
    }
}

/// Result of a single case
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CaseOutcome {
    /// Output matched the expectation
    Passed,
    /// Expectation was overwritten with the output
    Rebased,
    /// Output differed; `diff` is the rendered unified diff
    Failed { diff: String },
    /// The runner could not produce output at all
    Error { message: String },
}

impl CaseOutcome {
    /// Passed and rebased cases both count toward the pass rate.
    pub fn is_pass(&self) -> bool {
        matches!(self, CaseOutcome::Passed | CaseOutcome::Rebased)
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
