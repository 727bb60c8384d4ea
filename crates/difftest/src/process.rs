// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runner invocation: spawn, wait with timeout, capture output.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

use crate::error::HarnessError;

/// Everything a successful runner printed
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    pub stdout: String,
    /// Lossily decoded; only ever shown to humans
    pub stderr: String,
}

/// An external runner executable with a per-invocation timeout
#[derive(Clone, Debug)]
pub struct RunnerCommand {
    program: PathBuf,
    timeout: Duration,
}

impl RunnerCommand {
    pub fn new(program: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run `<program> <input>` to completion.
    ///
    /// Stdin is closed. Non-zero exit, timeout, spawn failure and non-UTF-8
    /// stdout are all errors; the child is killed if it outlives the timeout.
    pub async fn run(&self, input: &Path) -> Result<CapturedOutput, HarnessError> {
        let command = format!("{} {}", self.program.display(), input.display());
        tracing::debug!(%command, timeout_ms = self.timeout.as_millis() as u64, "spawning runner");

        let child = Command::new(&self.program)
            .arg(input)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| HarnessError::Spawn {
                path: self.program.clone(),
                source,
            })?;

        // Dropping the wait future on timeout drops the child, which kills it.
        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result?,
            Err(_) => {
                tracing::warn!(%command, "runner timed out");
                return Err(HarnessError::Timeout {
                    command,
                    timeout: self.timeout,
                });
            }
        };

        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        if !output.status.success() {
            return Err(HarnessError::NonZeroExit {
                command,
                code: output.status.code(),
                stderr,
            });
        }

        let stdout = String::from_utf8(output.stdout).map_err(|source| HarnessError::InvalidUtf8 {
            input: input.to_path_buf(),
            source,
        })?;
        tracing::trace!(%command, bytes = stdout.len(), "runner finished");

        Ok(CapturedOutput { stdout, stderr })
    }
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
