// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::runner::{RunnerConfig, SuiteReport, TestRunner};
use crate::test_utils::temp_spec;

fn run(content: &str) -> SuiteReport {
    let tests = parse(content, Path::new("specs/math.toml")).unwrap();
    let mut suite = Suite::new();
    suite.extend(tests);
    TestRunner::new(RunnerConfig { parallel: true, filter: None }).run(&suite).unwrap()
}

fn parse_err(content: &str) -> String {
    match parse(content, Path::new("bad.toml")) {
        Err(Error::Spec { message, .. }) => message,
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected a spec error"),
    }
}

#[test]
fn passing_file_passes() {
    let report = run(r#"
[[test]]
name = "math"

[[test.expect]]
kind = "equal"
actual = 3
expected = 3

[[test.expect]]
kind = "contains"
actual = "hello, world"
expected = "world"

[[test.expect]]
kind = "not_contains"
actual = [1, 2, 3]
expected = 4
"#);
    assert!(report.passed());
    assert_eq!(report.tests[0].id.to_string(), "math");
}

#[test]
fn continuing_failures_keep_order() {
    let report = run(r#"
[[test]]
name = "math"
expect = [
  { kind = "equal", actual = 5, expected = 4 },
  { kind = "equal", actual = 2, expected = 2 },
  { kind = "true", actual = false, message = "flag {} unset", args = ["x"] },
]
"#);
    let test = &report.tests[0];
    assert_eq!(test.failure_messages(), vec!["expected 4, got 5", "flag x unset"]);
    assert_eq!(test.failures[0].location().unwrap().to_string(), "specs/math.toml:5");
    assert_eq!(test.failures[1].location().unwrap().to_string(), "specs/math.toml:7");
}

#[test]
fn require_halts_the_test() {
    let report = run(r#"
[[test]]
name = "halting"
expect = [
  { kind = "nil", actual = 1, mode = "require" },
  { kind = "equal", actual = 1, expected = 2 },
]
"#);
    let test = &report.tests[0];
    assert!(test.halted);
    assert_eq!(test.failure_messages(), vec!["expected nil, got 1"]);
}

#[test]
fn header_entries_locate_near_their_table() {
    let report = run("[[test]]\nname = \"t\"\n\n[[test.expect]]\nkind = \"false\"\nactual = true\n");
    let line = report.tests[0].failures[0].location().unwrap().line;
    assert!((4..=5).contains(&line), "line {line}");
}

#[test]
fn error_entries_build_error_values() {
    let report = run(r#"
[[test]]
name = "errors"
expect = [
  { kind = "error", error = "denied" },
  { kind = "no_error", error = "denied" },
  { kind = "no_error", actual = 1 },
]
"#);
    assert_eq!(report.tests[0].failure_messages(), vec![r#"expected no error, got Err("denied")"#]);
}

#[test]
fn missing_actual_is_nil() {
    let report = run("[[test]]\nname = \"n\"\nexpect = [{ kind = \"nil\" }]\n");
    assert!(report.passed());
}

#[test]
fn parallel_flag_is_read() {
    let tests = parse(
        "[[test]]\nname = \"a\"\nparallel = true\n\n[[test]]\nname = \"b\"\n",
        Path::new("p.toml"),
    )
    .unwrap();
    assert!(tests[0].is_parallel());
    assert!(!tests[1].is_parallel());
}

#[test]
fn binary_kind_without_expected_is_rejected() {
    let message = parse_err("[[test]]\nname = \"t\"\nexpect = [{ kind = \"equal\", actual = 1 }]\n");
    assert!(message.contains("test 't'"), "{message}");
    assert!(message.contains("requires `expected`"), "{message}");
}

#[test]
fn unary_kind_with_expected_is_rejected() {
    let message = parse_err("[[test]]\nname = \"t\"\nexpect = [{ kind = \"nil\", expected = 1 }]\n");
    assert!(message.contains("does not take `expected`"), "{message}");
}

#[test]
fn actual_and_error_together_are_rejected() {
    let message =
        parse_err("[[test]]\nname = \"t\"\nexpect = [{ kind = \"error\", actual = 1, error = \"e\" }]\n");
    assert!(message.contains("mutually exclusive"), "{message}");
}

#[test]
fn unknown_kind_is_rejected_with_line() {
    let message = parse_err("[[test]]\nname = \"t\"\nexpect = [{ kind = \"approx\" }]\n");
    assert!(message.starts_with("line 3"), "{message}");
}

#[test]
fn duplicate_names_are_rejected() {
    let message = parse_err("[[test]]\nname = \"t\"\n\n[[test]]\nname = \"t\"\n");
    assert!(message.contains("duplicate test name 't'"), "{message}");
}

#[test]
fn load_file_reports_missing_file() {
    let err = load_file(Path::new("/nonexistent/vouch.toml")).err().unwrap();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn load_suite_keeps_file_order() {
    let first = temp_spec("[[test]]\nname = \"one\"\n");
    let second = temp_spec("[[test]]\nname = \"two\"\n");
    let suite = load_suite(&[first.path(), second.path()]).unwrap();
    assert_eq!(suite.names().collect::<Vec<_>>(), vec!["one", "two"]);
}

#[test]
fn line_of_counts_from_one() {
    assert_eq!(line_of("a\nb\nc", 0), 1);
    assert_eq!(line_of("a\nb\nc", 2), 2);
    assert_eq!(line_of("a\nb\nc", 99), 3);
}
