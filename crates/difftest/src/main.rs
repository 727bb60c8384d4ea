// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! difftest binary entry point.

use clap::Parser;

use difftest::cli::Cli;
use difftest::output_diagnostic::print_error;
use difftest::suite::EXIT_HARNESS_ERROR;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    difftest::logging::init();

    let code = match cli.execute().await {
        Ok(summary) => summary.exit_code(),
        Err(e) => {
            print_error(e);
            EXIT_HARNESS_ERROR
        }
    };
    std::process::exit(code);
}
