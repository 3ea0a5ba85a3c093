// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `vouch run`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn passing_file_exits_zero() {
    vouch_cmd()
        .arg("run")
        .arg(fixture("passing.toml"))
        .assert()
        .success()
        .stdout(predicates::str::contains("PASS math/add"))
        .stdout(predicates::str::contains("PASS strings/contains"))
        .stdout(predicates::str::contains("2 passed, 0 failed"));
}

#[test]
fn failing_file_exits_one_with_diagnostic() {
    vouch_cmd()
        .arg("run")
        .arg(fixture("failing.toml"))
        .assert()
        .code(1)
        .stdout(predicates::str::contains("FAIL math/sub"))
        .stdout(predicates::str::contains("failing.toml:4: expected 4, got 5"))
        .stdout(predicates::str::contains("1 passed, 1 failed"));
}

#[test]
fn halting_entry_stops_its_test() {
    vouch_cmd()
        .arg("run")
        .arg(fixture("halting.toml"))
        .assert()
        .code(1)
        .stdout(predicates::str::contains("user ada missing"))
        .stdout(predicates::str::contains("were not executed"))
        .stdout(predicates::str::contains("expected 2, got 1").not());
}

#[test]
fn invalid_file_exits_two() {
    vouch_cmd()
        .arg("run")
        .arg(fixture("invalid.toml"))
        .assert()
        .code(2)
        .stdout(predicates::str::is_empty())
        .stderr(predicates::str::contains("requires `expected`"));
}

#[test]
fn missing_file_exits_two() {
    vouch_cmd()
        .arg("run")
        .arg(fixture("does-not-exist.toml"))
        .assert()
        .code(2)
        .stderr(predicates::str::contains("failed to read"));
}

#[test]
fn filter_selects_tests() {
    vouch_cmd()
        .args(["run", "--filter", "strings/*"])
        .arg(fixture("passing.toml"))
        .assert()
        .success()
        .stdout(predicates::str::contains("math/add").not())
        .stdout(predicates::str::contains("1 passed, 0 failed, 1 filtered out"));
}

#[test]
fn multiple_files_run_in_order() {
    let output = vouch_cmd()
        .args(["run", "--serial"])
        .arg(fixture("passing.toml"))
        .arg(fixture("failing.toml"))
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let add = stdout.find("math/add").unwrap();
    let sub = stdout.find("math/sub").unwrap();
    assert!(add < sub, "{stdout}");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn json_output_is_machine_readable() {
    let output = vouch_cmd()
        .args(["run", "-o", "json"])
        .arg(fixture("failing.toml"))
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["passed"], false);
    assert_eq!(json["summary"]["failed"], 1);
    assert_eq!(json["tests"][0]["failures"][0]["message"], "expected 4, got 5");
    assert_eq!(json["tests"][0]["failures"][0]["line"], 4);
}
