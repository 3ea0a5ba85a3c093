// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for configuration.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn discovered_config_sets_format_and_filter() {
    let output = vouch_cmd()
        .args(["run", "suite.toml"])
        .current_dir(fixture("configured"))
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["summary"]["passed"], 1);
    assert_eq!(json["summary"]["filtered"], 1);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn cli_flags_override_config() {
    vouch_cmd()
        .args(["run", "suite.toml", "-o", "text", "--filter", "*"])
        .current_dir(fixture("configured"))
        .assert()
        .code(1)
        .stdout(predicates::str::contains("FAIL io/read"))
        .stdout(predicates::str::contains(r#"expected no error, got Err("permission denied")"#));
}

#[test]
fn explicit_config_flag_is_used() {
    vouch_cmd()
        .arg("--config")
        .arg(fixture("configured/vouch.toml"))
        .arg("run")
        .arg(fixture("passing.toml"))
        .assert()
        .success()
        .stdout(predicates::str::starts_with("{"));
}

#[test]
fn config_env_var_is_used() {
    vouch_cmd()
        .env("VOUCH_CONFIG", fixture("configured/vouch.toml"))
        .arg("run")
        .arg(fixture("passing.toml"))
        .assert()
        .success()
        .stdout(predicates::str::contains("\"filtered\": 1"));
}

#[test]
fn invalid_config_exits_two() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("vouch.toml"), "[run]\nthreads = 2\n").unwrap();
    vouch_cmd()
        .arg("run")
        .arg(fixture("passing.toml"))
        .current_dir(dir.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("invalid config"));
}
