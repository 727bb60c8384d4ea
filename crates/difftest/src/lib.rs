// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Golden-file test harness.
//!
//! A test directory holds an executable `run`, an `input/` tree of source
//! fixtures and an `expectations/` tree of recorded outputs. Each test runs
//! `run <input>` and compares its stdout byte-for-byte with the matching
//! expectation, or overwrites the expectation when rebasing.
//!
//! [`DiffTestCase`] drives one directory from Rust tests; [`Suite`] walks
//! every subsystem directory of a suite root and backs the `difftest`
//! binary.

pub mod case;
pub mod cli;
pub mod config;
pub mod diff;
pub mod discover;
pub mod env;
pub mod error;
pub mod expectation;
pub mod fixture;
pub mod logging;
pub mod output_diagnostic;
pub mod process;
pub mod report;
pub mod suite;

#[cfg(test)]
mod test_support;

pub use case::{DiffTestCase, Mismatch, Verdict};
pub use config::{HarnessConfig, LayoutConfig, MissingExpectation, SuiteConfig};
pub use error::HarnessError;
pub use suite::{RunSummary, Suite, SuiteError};
