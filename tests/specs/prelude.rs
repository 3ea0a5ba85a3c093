// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::PathBuf;
use std::process::Command;

/// Returns a Command running the vouch binary with a clean environment.
pub fn vouch_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("vouch"));
    cmd.env_remove("VOUCH_CONFIG").env_remove("VOUCH_LOG").env("NO_COLOR", "1");
    cmd
}

/// Path to a file or directory under tests/fixtures.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}
