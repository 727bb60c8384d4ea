// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Scratch runners and fixture trees for unit tests.
//!
//! Tests that write an executable and then spawn it are `#[serial]`: a fork
//! from a parallel test can hold the script's write handle open and make
//! exec fail with ETXTBSY.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Write an executable `/bin/sh` script at `path`.
pub fn write_script(path: &Path, body: &str) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    path.to_path_buf()
}

/// Runner that echoes each input line prefixed with `TOKEN `.
pub const TOKEN_RUNNER: &str = r#"while IFS= read -r line || [ -n "$line" ]; do
  printf 'TOKEN %s\n' "$line"
done < "$1""#;

/// Write `contents` at `dir/rel`, creating parents.
pub fn write_file(dir: &Path, rel: &str, contents: &str) -> PathBuf {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}
