// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Assertion macros.
//!
//! Both take a run context, an expectation, and optional `format!`
//! arguments. The message is only built when the expectation fails.
//!
//! The expectation is built before the message closure, so an operand the
//! message also names must be passed by reference: `eq(&name, "ada")`,
//! not `eq(name, "ada")`.

/// Evaluate in continuing mode. Expands to a `bool`.
///
/// ```
/// use vouch::prelude::*;
///
/// let report = run_test("doc", |ctx| {
///     check!(ctx, eq(1 + 1, 2));
///     check!(ctx, contains("hello, world", "world"), "greeting for {}", "world");
///     Ok(())
/// })
/// .unwrap_or_else(|e| unreachable!("{e}"));
/// assert!(report.passed);
/// ```
#[macro_export]
macro_rules! check {
    ($ctx:expr, $expectation:expr $(,)?) => {
        $ctx.check($expectation)
    };
    ($ctx:expr, $expectation:expr, $($arg:tt)+) => {
        $ctx.check($expectation.with_lazy_message(|| ::std::format!($($arg)+)))
    };
}

/// Evaluate in halting mode. Expands to a [`TestResult`](crate::TestResult)
/// meant to be followed by `?`.
///
/// ```
/// use vouch::prelude::*;
///
/// let report = run_test("doc", |ctx| {
///     require!(ctx, not_nil(None::<u8>), "config loaded")?;
///     check!(ctx, eq(1, 2));
///     Ok(())
/// })
/// .unwrap_or_else(|e| unreachable!("{e}"));
/// assert_eq!(report.failure_messages(), vec!["config loaded: expected a non-nil value, got nil"]);
/// ```
#[macro_export]
macro_rules! require {
    ($ctx:expr, $expectation:expr $(,)?) => {
        $ctx.require($expectation)
    };
    ($ctx:expr, $expectation:expr, $($arg:tt)+) => {
        $ctx.require($expectation.with_lazy_message(|| ::std::format!($($arg)+)))
    };
}

#[cfg(test)]
#[path = "macros_tests.rs"]
mod tests;
