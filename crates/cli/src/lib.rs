// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structured assertions with continuing and halting modes.
//!
//! A test body receives a [`RunContext`]. Continuing evaluations
//! ([`RunContext::check`], [`check!`]) record failures and keep going;
//! halting evaluations ([`RunContext::require`], [`require!`]) record the
//! failure and return a [`Halt`] that the body propagates with `?`.
//! Finalizing the context yields a [`Report`] for the runner.

pub mod cli;
pub mod color;
pub mod compare;
pub mod config;
pub mod context;
pub mod declarative;
pub mod error;
pub mod evaluator;
pub mod expect;
pub mod expectation;
pub mod format;
mod macros;
pub mod report;
pub mod runner;
pub mod value;

#[cfg(test)]
pub mod test_utils;

pub use context::{Halt, Outcome, Report, RunContext, TestId, TestResult, run_test};
pub use error::{Error, Result};
pub use evaluator::{Assert, Require};
pub use expectation::{Expectation, Kind, Location};
pub use runner::{Suite, SuiteReport, Test, TestRunner};
pub use value::{Inspect, Record, Value};

/// Everything a test body needs.
pub mod prelude {
    pub use crate::context::{RunContext, TestResult, run_test};
    pub use crate::expect::*;
    pub use crate::expectation::Expectation;
    pub use crate::value::{Inspect, Record, Value};
    pub use crate::{check, require};
}
