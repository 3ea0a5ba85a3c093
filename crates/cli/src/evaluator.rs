// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scoped evaluators bound to a run context.
//!
//! `ctx.assert()` and `ctx.must()` borrow the context once so call sites
//! read `a.eq(x, 3)` instead of threading the context through every call.

use std::marker::PhantomData;

use crate::context::{RunContext, TestResult};
use crate::expectation::Expectation;
use crate::value::Inspect;

/// Evaluation mode: what a failed evaluation does to the test.
pub trait Mode {
    type Output;

    fn evaluate(ctx: &mut RunContext, expectation: Expectation<'_>) -> Self::Output;
}

/// Record the failure and keep going.
#[derive(Debug)]
pub struct Continuing;

/// Record the failure and halt the test.
#[derive(Debug)]
pub struct Halting;

impl Mode for Continuing {
    type Output = bool;

    fn evaluate(ctx: &mut RunContext, expectation: Expectation<'_>) -> bool {
        ctx.check(expectation)
    }
}

impl Mode for Halting {
    type Output = TestResult;

    fn evaluate(ctx: &mut RunContext, expectation: Expectation<'_>) -> TestResult {
        ctx.require(expectation)
    }
}

/// Evaluator closing over a run context.
#[derive(Debug)]
pub struct Evaluator<'c, M> {
    ctx: &'c mut RunContext,
    _mode: PhantomData<M>,
}

/// Continuing evaluator. Methods return whether the expectation held.
pub type Assert<'c> = Evaluator<'c, Continuing>;

/// Halting evaluator. Methods return a [`TestResult`] for `?`.
pub type Require<'c> = Evaluator<'c, Halting>;

impl<'c, M: Mode> Evaluator<'c, M> {
    pub fn new(ctx: &'c mut RunContext) -> Self {
        Self { ctx, _mode: PhantomData }
    }

    /// The underlying context, e.g. to start a sub-test.
    pub fn context(&mut self) -> &mut RunContext {
        self.ctx
    }

    pub fn that(&mut self, expectation: Expectation<'_>) -> M::Output {
        M::evaluate(self.ctx, expectation)
    }

    #[track_caller]
    pub fn eq(&mut self, actual: impl Inspect, expected: impl Inspect) -> M::Output {
        self.that(Expectation::equal(actual, expected))
    }

    #[track_caller]
    pub fn ne(&mut self, actual: impl Inspect, expected: impl Inspect) -> M::Output {
        self.that(Expectation::not_equal(actual, expected))
    }

    #[track_caller]
    pub fn is_true(&mut self, condition: impl Inspect) -> M::Output {
        self.that(Expectation::truthy(condition))
    }

    #[track_caller]
    pub fn is_false(&mut self, condition: impl Inspect) -> M::Output {
        self.that(Expectation::falsy(condition))
    }

    #[track_caller]
    pub fn nil(&mut self, actual: impl Inspect) -> M::Output {
        self.that(Expectation::nil(actual))
    }

    #[track_caller]
    pub fn not_nil(&mut self, actual: impl Inspect) -> M::Output {
        self.that(Expectation::not_nil(actual))
    }

    #[track_caller]
    pub fn contains(&mut self, haystack: impl Inspect, needle: impl Inspect) -> M::Output {
        self.that(Expectation::contains(haystack, needle))
    }

    #[track_caller]
    pub fn not_contains(&mut self, haystack: impl Inspect, needle: impl Inspect) -> M::Output {
        self.that(Expectation::not_contains(haystack, needle))
    }

    #[track_caller]
    pub fn err(&mut self, actual: impl Inspect) -> M::Output {
        self.that(Expectation::error(actual))
    }

    #[track_caller]
    pub fn ok(&mut self, actual: impl Inspect) -> M::Output {
        self.that(Expectation::no_error(actual))
    }
}

impl RunContext {
    /// Continuing evaluator bound to this context.
    pub fn assert(&mut self) -> Assert<'_> {
        Evaluator::new(self)
    }

    /// Halting evaluator bound to this context.
    pub fn must(&mut self) -> Require<'_> {
        Evaluator::new(self)
    }
}

#[cfg(test)]
#[path = "evaluator_tests.rs"]
mod tests;
