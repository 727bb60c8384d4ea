// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! The harness itself never reads the environment; only the CLI and
//! [`HarnessConfig::from_env`](crate::config::HarnessConfig::from_env) go
//! through these accessors.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

pub use names::*;

/// Value of [`REBASE`] that turns rebasing on. Anything else leaves it off.
pub const REBASE_ENABLED: &str = "YES";

/// `rebase`: set to `YES` to overwrite expectations with actual output.
pub fn rebase() -> bool {
    std::env::var(names::REBASE).is_ok_and(|v| v == REBASE_ENABLED)
}

/// `DIFFTEST_TIMEOUT_MS`: per-test runner timeout.
pub fn timeout_ms() -> Option<u64> {
    var_u64(names::DIFFTEST_TIMEOUT_MS)
}

/// `DIFFTEST_LOG`: tracing filter directives.
pub fn log_filter() -> Option<String> {
    std::env::var(names::DIFFTEST_LOG).ok()
}

fn var_u64(name: &str) -> Option<u64> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
