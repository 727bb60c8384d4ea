// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::config::MissingExpectation;
use crate::test_support::{write_file, write_script, TOKEN_RUNNER};
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

/// A `lex`-style test directory with a token runner and one input.
fn lex_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_script(&dir.path().join("run"), TOKEN_RUNNER);
    write_file(dir.path(), "input/basic/all.n", "let\nx\n");
    dir
}

fn case(dir: &TempDir, config: HarnessConfig) -> DiffTestCase {
    DiffTestCase::new(dir.path(), config)
}

#[tokio::test]
#[serial]
async fn run_test_resolves_against_input_dir() {
    let dir = lex_dir();
    let case = case(&dir, HarnessConfig::default());

    let output = case.run_test("basic/all.n").await.unwrap();
    assert_eq!(output, "TOKEN let\nTOKEN x\n");
}

#[tokio::test]
#[serial]
async fn run_test_propagates_runner_failure() {
    let dir = TempDir::new().unwrap();
    write_script(&dir.path().join("run"), "echo 'no such file' >&2; exit 1");
    let case = case(&dir, HarnessConfig::default());

    let err = case.run_test("missing.n").await.unwrap_err();
    assert!(matches!(err, HarnessError::NonZeroExit { code: Some(1), .. }));
}

#[tokio::test]
async fn run_test_without_runner_fails() {
    let dir = TempDir::new().unwrap();
    let case = case(&dir, HarnessConfig::default());

    let err = case.run_test("a.n").await.unwrap_err();
    assert!(matches!(err, HarnessError::Spawn { .. }));
}

#[test]
fn matching_expectation_passes() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "expectations/basic/all.txt", "TOKEN let\n");
    let case = case(&dir, HarnessConfig::default());

    let verdict = case.check_no_diff("TOKEN let\n", "basic/all.txt").unwrap();
    assert_eq!(verdict, Verdict::Matched);
    case.assert_no_diff("TOKEN let\n", "basic/all.txt");
}

#[test]
fn trailing_newline_difference_fails() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "expectations/basic/all.txt", "TOKEN let\n");
    let case = case(&dir, HarnessConfig::default());

    let verdict = case.check_no_diff("TOKEN let", "basic/all.txt").unwrap();
    let Verdict::Mismatch(mismatch) = verdict else {
        panic!("expected mismatch");
    };
    assert_eq!(mismatch.expected, "TOKEN let\n");
    assert_eq!(mismatch.actual, "TOKEN let");
    assert!(mismatch.diff().contains("trailing newlines"));
}

#[test]
fn whitespace_difference_fails() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "expectations/a.txt", "A B\n");
    let case = case(&dir, HarnessConfig::default());

    assert!(!case.check_no_diff("A  B\n", "a.txt").unwrap().is_match());
}

#[test]
fn missing_expectation_is_created_and_fails_on_output() {
    let dir = TempDir::new().unwrap();
    let case = case(&dir, HarnessConfig::default());

    let verdict = case.check_no_diff("TOKEN x\n", "new/test.txt").unwrap();

    assert!(!verdict.is_match());
    let path = dir.path().join("expectations/new/test.txt");
    assert_eq!(fs::read_to_string(path).unwrap(), "");
}

#[test]
fn missing_expectation_passes_for_empty_output() {
    let dir = TempDir::new().unwrap();
    let case = case(&dir, HarnessConfig::default());

    assert_eq!(
        case.check_no_diff("", "empty.txt").unwrap(),
        Verdict::Matched
    );
}

#[test]
fn treat_as_empty_policy_leaves_disk_alone() {
    let dir = TempDir::new().unwrap();
    let config =
        HarnessConfig::default().with_missing_expectation(MissingExpectation::TreatAsEmpty);
    let case = case(&dir, config);

    assert!(!case.check_no_diff("x\n", "x.txt").unwrap().is_match());
    assert!(!dir.path().join("expectations/x.txt").exists());
}

#[test]
fn rebase_overwrites_and_passes() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "expectations/basic/all.txt", "stale\n");
    let rebasing = case(&dir, HarnessConfig::default().with_rebase(true));

    let verdict = rebasing.check_no_diff("fresh\n", "basic/all.txt").unwrap();
    assert_eq!(verdict, Verdict::Rebased);
    assert_eq!(
        fs::read_to_string(dir.path().join("expectations/basic/all.txt")).unwrap(),
        "fresh\n"
    );

    // A normal run afterwards sees the rebased output.
    let normal = case(&dir, HarnessConfig::default());
    assert_eq!(
        normal.check_no_diff("fresh\n", "basic/all.txt").unwrap(),
        Verdict::Matched
    );
}

#[test]
fn rebase_creates_missing_expectation() {
    let dir = TempDir::new().unwrap();
    let case = case(&dir, HarnessConfig::default().with_rebase(true));

    case.assert_no_diff("TOKEN a\n", "deep/new/case.txt");
    assert_eq!(
        fs::read_to_string(dir.path().join("expectations/deep/new/case.txt")).unwrap(),
        "TOKEN a\n"
    );
}

#[test]
fn check_is_deterministic() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "expectations/a.txt", "one\n");
    let case = case(&dir, HarnessConfig::default());

    let first = case.check_no_diff("two\n", "a.txt").unwrap();
    let second = case.check_no_diff("two\n", "a.txt").unwrap();
    assert_eq!(first, second);
}

#[test]
#[should_panic(expected = "output does not match")]
fn assert_no_diff_panics_with_diff() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "expectations/a.txt", "expected\n");
    let case = case(&dir, HarnessConfig::default());

    case.assert_no_diff("actual\n", "a.txt");
}

#[test]
fn mismatch_display_surfaces_both_contents() {
    let mismatch = Mismatch {
        expectation: PathBuf::from("expectations/a.txt"),
        expected: "PLUS\n".into(),
        actual: "MINUS\n".into(),
    };

    let message = mismatch.to_string();
    assert!(message.contains("`expectations/a.txt`"));
    assert!(message.contains("-PLUS\n+MINUS\n"));
    assert!(message.contains("--- expected ---\nPLUS\n"));
    assert!(message.contains("--- actual ---\nMINUS\n"));
}

#[tokio::test]
#[serial]
async fn end_to_end_rebase_then_pass() {
    let dir = lex_dir();

    let rebasing = case(&dir, HarnessConfig::default().with_rebase(true));
    let output = rebasing.run_test("basic/all.n").await.unwrap();
    rebasing.assert_no_diff(&output, "basic/all.txt");

    let normal = case(&dir, HarnessConfig::default());
    let output = normal.run_test("basic/all.n").await.unwrap();
    normal.assert_no_diff(&output, "basic/all.txt");
    assert_eq!(
        fs::read_to_string(dir.path().join("expectations/basic/all.txt")).unwrap(),
        "TOKEN let\nTOKEN x\n"
    );
}
