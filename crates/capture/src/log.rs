// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Outcome log implementation.

use crate::outcome::{CaseId, CaseOutcome, RecordedOutcome};
use parking_lot::Mutex;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::{Instant, SystemTime};

/// Log of case outcomes, shared between clones
pub struct OutcomeLog {
    start: Instant,
    outcomes: Arc<Mutex<Vec<RecordedOutcome>>>,
    file_writer: Option<Arc<Mutex<BufWriter<File>>>>,
}

impl OutcomeLog {
    /// Create a new in-memory log
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            outcomes: Arc::new(Mutex::new(Vec::new())),
            file_writer: None,
        }
    }

    /// Create a log that also appends every record to `path` (JSONL).
    ///
    /// The file is truncated on open so a run never mixes with a previous one.
    pub fn with_file(path: &Path) -> std::io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            start: Instant::now(),
            outcomes: Arc::new(Mutex::new(Vec::new())),
            file_writer: Some(Arc::new(Mutex::new(BufWriter::new(file)))),
        })
    }

    /// Record the outcome of one case
    pub fn record(&self, case: CaseId, outcome: CaseOutcome) {
        let mut outcomes = self.outcomes.lock();
        let record = RecordedOutcome {
            seq: outcomes.len() as u64,
            timestamp: SystemTime::now(),
            elapsed: self.start.elapsed(),
            case,
            outcome,
        };

        if let Some(ref writer) = self.file_writer {
            let mut w = writer.lock();
            if let Ok(json) = serde_json::to_string(&record) {
                let _ = writeln!(w, "{}", json);
                let _ = w.flush();
            }
        }

        outcomes.push(record);
    }

    /// All recorded outcomes in execution order
    pub fn outcomes(&self) -> Vec<RecordedOutcome> {
        self.outcomes.lock().clone()
    }

    /// The last `n` outcomes
    pub fn last(&self, n: usize) -> Vec<RecordedOutcome> {
        let all = self.outcomes.lock();
        all.iter().rev().take(n).rev().cloned().collect()
    }

    pub fn count<F: Fn(&RecordedOutcome) -> bool>(&self, pred: F) -> usize {
        self.outcomes.lock().iter().filter(|r| pred(r)).count()
    }

    /// Outcomes that did not pass (failed diffs and runner errors)
    pub fn failures(&self) -> Vec<RecordedOutcome> {
        self.outcomes
            .lock()
            .iter()
            .filter(|r| !r.outcome.is_pass())
            .cloned()
            .collect()
    }

    /// Outcomes belonging to one subsystem
    pub fn for_subsystem(&self, subsystem: &str) -> Vec<RecordedOutcome> {
        self.outcomes
            .lock()
            .iter()
            .filter(|r| r.case.subsystem == subsystem)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.outcomes.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.lock().is_empty()
    }

    /// Forget everything recorded so far. The JSONL file is left untouched.
    pub fn clear(&self) {
        self.outcomes.lock().clear();
    }
}

impl Default for OutcomeLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for OutcomeLog {
    fn clone(&self) -> Self {
        Self {
            start: self.start,
            outcomes: Arc::clone(&self.outcomes),
            file_writer: self.file_writer.as_ref().map(Arc::clone),
        }
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
