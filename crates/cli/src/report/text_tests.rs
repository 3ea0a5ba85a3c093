// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::time::Duration;

use similar_asserts::assert_eq;
use termcolor::Buffer;

use super::*;
use crate::context::run_test;
use crate::expectation::{Expectation, Location};

fn at(line: u32) -> Location {
    Location::new("math.toml", line)
}

fn sample() -> SuiteReport {
    let passing = run_test("add", |ctx| {
        ctx.check(Expectation::equal(2, 2).at(at(3)));
        Ok(())
    })
    .unwrap();
    let failing = run_test("sub", |ctx| {
        ctx.check(Expectation::equal(5, 4).at(at(8)));
        ctx.require(Expectation::nil(1).at(at(9)))?;
        ctx.check(Expectation::truthy(false).at(at(10)));
        Ok(())
    })
    .unwrap();
    SuiteReport { tests: vec![passing, failing], filtered: 1, duration: Duration::ZERO }
}

#[test]
fn text_report_lists_tests_failures_and_summary() {
    let output = TextFormatter.format(&sample()).unwrap();
    assert_eq!(
        output,
        "PASS add\n\
FAIL sub\n\
\x20 math.toml:8: expected 4, got 5\n\
\x20 math.toml:9: expected nil, got 1\n\
\x20 note: statements after the halting failure were not executed\n\
\n\
1 passed, 1 failed, 1 filtered out\n"
    );
}

#[test]
fn sub_tests_are_indented_under_their_parent() {
    let parent = run_test("parent", |ctx| {
        ctx.subtest("child", |ctx| {
            ctx.check(Expectation::truthy(false).at(at(2)));
            Ok(())
        });
        Ok(())
    })
    .unwrap();
    let report = SuiteReport { tests: vec![parent], filtered: 0, duration: Duration::ZERO };
    let output = TextFormatter.format(&report).unwrap();
    assert_eq!(
        output,
        "FAIL parent\n\
\x20 FAIL child\n\
\x20   math.toml:2: condition is false\n\
\n\
0 passed, 1 failed\n"
    );
}

#[test]
fn panic_failures_have_no_location() {
    let report = run_test("boom", |_ctx| panic!("kaput")).unwrap();
    let report = SuiteReport { tests: vec![report], filtered: 0, duration: Duration::ZERO };
    let output = TextFormatter.format(&report).unwrap();
    assert!(output.contains("\n  test panicked: kaput\n"), "{output}");
}

#[test]
fn empty_suite_prints_only_summary() {
    let report = SuiteReport { tests: vec![], filtered: 0, duration: Duration::ZERO };
    assert_eq!(TextFormatter.format(&report).unwrap(), "0 passed, 0 failed\n");
}

#[test]
fn colored_output_contains_escape_codes() {
    let mut buffer = Buffer::ansi();
    TextFormatter.write(&mut buffer, &sample()).unwrap();
    let output = String::from_utf8(buffer.into_inner()).unwrap();
    assert!(output.contains("\x1b["), "{output}");
    assert!(output.contains("PASS"));
}
