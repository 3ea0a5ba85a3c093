// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::context::run_test;

#[test]
fn assert_records_every_failure() {
    let report = run_test("assert", |ctx| {
        let mut a = ctx.assert();
        assert!(a.eq(3, 1 + 2));
        assert!(!a.ne(1, 1));
        assert!(!a.is_true(false));
        assert!(a.is_false(false));
        assert!(a.nil(None::<&str>));
        assert!(!a.not_nil(None::<&str>));
        assert!(a.contains(vec!["a", "b"], "b"));
        assert!(a.not_contains("abc", "z"));
        assert!(a.err(Err::<(), _>("nope")));
        assert!(!a.ok(Err::<(), _>("nope")));
        Ok(())
    })
    .unwrap();
    assert_eq!(report.failures.len(), 4);
}

#[test]
fn must_halts_on_first_failure() {
    let report = run_test("must", |ctx| {
        let mut r = ctx.must();
        r.eq("x", "x")?;
        r.contains(vec![1, 2, 3], 4)?;
        r.eq(1, 2)?;
        Ok(())
    })
    .unwrap();
    assert!(report.halted);
    assert_eq!(
        report.failure_messages(),
        vec!["expected a value containing 4, got [1, 2, 3]"]
    );
}

#[test]
fn evaluator_location_is_the_call_site() {
    let mut ctx = crate::context::RunContext::new("loc");
    let line = line!() + 1;
    ctx.assert().eq(1, 2);
    assert_eq!(ctx.failures()[0].location().unwrap().line, line);
}

#[test]
fn context_is_reachable_through_evaluator() {
    let report = run_test("nested", |ctx| {
        let mut a = ctx.assert();
        a.context().subtest("inner", |sub| {
            sub.assert().eq(1, 2);
            Ok(())
        });
        a.eq(1, 1);
        Ok(())
    })
    .unwrap();
    assert!(!report.passed);
    assert_eq!(report.children.len(), 1);
}

#[test]
fn that_accepts_prepared_expectations() {
    let mut ctx = crate::context::RunContext::new("that");
    let exp = Expectation::equal(4, 5).with_message("row {}", vec![3.to_value()]);
    let passed = ctx.assert().that(exp);
    assert!(!passed);
    assert_eq!(ctx.failures()[0].diagnostic(), Some("row 3: expected 5, got 4"));
}
