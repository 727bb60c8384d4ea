// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing setup for the `difftest` binary.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

use crate::env;

/// Used when `DIFFTEST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "difftest=warn";

/// Install a stderr subscriber. Stdout carries the test report, so logs
/// never go there. Calling twice is harmless.
pub fn init() {
    let filter = env::log_filter()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
