// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Outcome capture for golden-file test runs.
//!
//! Every case the suite runner executes ends up here as a
//! [`RecordedOutcome`], kept in memory and optionally streamed to a JSONL
//! file so CI jobs can post-process a run.

mod duration_serde;
mod log;
mod outcome;

pub use log::OutcomeLog;
pub use outcome::{CaseId, CaseOutcome, RecordedOutcome};
