// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Plain-text progress and summary output for suite runs.
//!
//! ```text
//! ================================================================================
//! Testing lex subsystem
//! ================================================================================
//! Found 2 tests.
//! lex/input/basic/all.n... PASSED
//! lex/input/basic/variable_assignment.n... FAILED:
//! --- expected
//! +++ actual
//! ...
//!
//! Summary: 50% pass rate (1/2)
//! ```

use difftest_capture::CaseOutcome;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

const HRULE: &str =
    "================================================================================";

/// Pass/fail counts for a subsystem or a whole run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub passes: usize,
    pub fails: usize,
}

impl Tally {
    pub fn total(&self) -> usize {
        self.passes + self.fails
    }

    pub fn add(&mut self, outcome: &CaseOutcome) {
        if outcome.is_pass() {
            self.passes += 1;
        } else {
            self.fails += 1;
        }
    }

    pub fn merge(&mut self, other: Tally) {
        self.passes += other.passes;
        self.fails += other.fails;
    }

    /// Whole-number pass percentage, rounded down. An empty tally has
    /// nothing failing and reports 100.
    pub fn pass_rate(&self) -> usize {
        match self.total() {
            0 => 100,
            total => self.passes * 100 / total,
        }
    }
}

pub struct Reporter<W: Write> {
    out: W,
}

impl Reporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn subsystem_header(&mut self, name: &str, found: usize) -> io::Result<()> {
        writeln!(self.out, "{HRULE}\nTesting {name} subsystem\n{HRULE}")?;
        writeln!(self.out, "Found {found} tests.")
    }

    pub fn subsystem_skipped(&mut self, name: &str, reason: &str) -> io::Result<()> {
        writeln!(self.out, "{HRULE}\nSkipping {name} subsystem: {reason}\n{HRULE}\n")
    }

    /// Written before the runner starts so a hang shows which case it is.
    pub fn case_started(&mut self, input: &Path) -> io::Result<()> {
        write!(self.out, "{}...", input.display())?;
        self.out.flush()
    }

    pub fn case_finished(&mut self, outcome: &CaseOutcome) -> io::Result<()> {
        match outcome {
            CaseOutcome::Passed => writeln!(self.out, " PASSED"),
            CaseOutcome::Rebased => writeln!(self.out, " REBASED"),
            CaseOutcome::Failed { diff } => writeln!(self.out, " FAILED:\n{diff}"),
            CaseOutcome::Error { message } => writeln!(self.out, " ERROR: {message}"),
        }
    }

    pub fn subsystem_summary(&mut self, tally: &Tally) -> io::Result<()> {
        writeln!(
            self.out,
            "\nSummary: {}% pass rate ({}/{})\n",
            tally.pass_rate(),
            tally.passes,
            tally.total()
        )
    }

    pub fn run_summary(&mut self, tally: &Tally, elapsed: Duration) -> io::Result<()> {
        writeln!(self.out, "{HRULE}")?;
        writeln!(
            self.out,
            "Ran {} tests in {} seconds, with a pass rate of {}%",
            tally.total(),
            elapsed.as_secs(),
            tally.pass_rate()
        )?;
        self.out.flush()
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
