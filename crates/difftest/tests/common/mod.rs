// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for golden-file integration tests.
//!
//! Fixture trees live in `tests/fixtures/` without their runners; each test
//! copies the tree into a scratch directory and writes fresh executable
//! runners there, so rebasing never touches the checked-in files.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Splits input on whitespace, one `TOKEN <word>` line per word.
pub const LEX_RUNNER: &str = r#"tr -s '[:space:]' '\n' < "$1" | sed '/^$/d; s/^/TOKEN /'"#;

/// Wraps each input line in `(expr ...)`.
pub const PARSE_RUNNER: &str = r#"awk '{ printf "(expr %s)\n", $0 }' "$1""#;

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Write an executable `/bin/sh` script.
pub fn write_script(path: &Path, body: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

pub fn write_file(dir: &Path, rel: &str, contents: &str) {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

pub fn read_file(dir: &Path, rel: &str) -> String {
    fs::read_to_string(dir.join(rel)).unwrap()
}

fn copy_tree(from: &Path, to: &Path) {
    fs::create_dir_all(to).unwrap();
    for entry in fs::read_dir(from).unwrap() {
        let entry = entry.unwrap();
        let target = to.join(entry.file_name());
        if entry.file_type().unwrap().is_dir() {
            copy_tree(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
}

/// Scratch copy of `tests/fixtures` with `lex/run` and `parse/run` in place.
pub fn suite_root() -> TempDir {
    let root = TempDir::new().unwrap();
    copy_tree(&fixtures_dir(), root.path());
    write_script(&root.path().join("lex/run"), LEX_RUNNER);
    write_script(&root.path().join("parse/run"), PARSE_RUNNER);
    root
}
