// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use tempfile::TempDir;

#[test]
fn reads_existing_file_verbatim() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("all.txt");
    fs::write(&path, "IDENT x\r\nEQUALS\n\n").unwrap();

    let content = read(&path, MissingExpectation::CreateEmpty).unwrap();
    assert_eq!(content, "IDENT x\r\nEQUALS\n\n");
}

#[test]
fn missing_file_is_created_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("basic/new.txt");

    let content = read(&path, MissingExpectation::CreateEmpty).unwrap();

    assert_eq!(content, "");
    assert!(path.is_file());
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn missing_file_can_be_left_alone() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("new.txt");

    let content = read(&path, MissingExpectation::TreatAsEmpty).unwrap();

    assert_eq!(content, "");
    assert!(!path.exists());
}

#[test]
fn write_creates_parents_and_truncates() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("expressions/deep/addition.txt");

    write(&path, "a long first version\n").unwrap();
    write(&path, "short\n").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "short\n");
}

#[test]
fn unreadable_expectation_is_an_error() {
    let dir = TempDir::new().unwrap();
    // A directory where a file is expected cannot be read as text.
    let path = dir.path().join("is_a_dir.txt");
    fs::create_dir(&path).unwrap();

    let err = read(&path, MissingExpectation::CreateEmpty).unwrap_err();
    assert!(matches!(
        err,
        HarnessError::Expectation { action: "read", .. }
    ));
}
