// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-test run context.
//!
//! A [`RunContext`] accumulates failed outcomes for one test or sub-test
//! and owns its halt state. Continuing evaluation ([`RunContext::check`])
//! records and returns; halting evaluation ([`RunContext::require`])
//! records and hands back a [`Halt`] token that the test body propagates
//! with `?` to the boundary that created the context.
//!
//! Each context has a scope id. A boundary only accepts halts minted by its
//! own context; anything else is a halt escape and poisons the run.

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use rayon::prelude::*;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::expectation::{Expectation, Location};
use crate::format;

static NEXT_SCOPE: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ScopeId(u64);

impl ScopeId {
    fn fresh() -> Self {
        ScopeId(NEXT_SCOPE.fetch_add(1, Ordering::Relaxed))
    }
}

/// Identity of a test: its name and the names of its enclosing tests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TestId {
    path: Vec<String>,
}

impl TestId {
    pub fn new(name: impl Into<String>) -> Self {
        Self { path: vec![name.into()] }
    }

    /// Identity of a sub-test nested under this one.
    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut path = self.path.clone();
        path.push(name.into());
        Self { path }
    }

    pub fn name(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or_default()
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn parent(&self) -> Option<TestId> {
        (self.path.len() > 1).then(|| Self { path: self.path[..self.path.len() - 1].to_vec() })
    }

    /// Zero for top-level tests.
    pub fn depth(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

impl fmt::Display for TestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path.join("/"))
    }
}

/// Recorded result of one failed evaluation. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    passed: bool,
    diagnostic: Option<String>,
    location: Option<Location>,
    halting: bool,
}

impl Outcome {
    fn failure(diagnostic: String, location: Option<Location>, halting: bool) -> Self {
        Self { passed: false, diagnostic: Some(diagnostic), location, halting }
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn diagnostic(&self) -> Option<&str> {
        self.diagnostic.as_deref()
    }

    /// Absent for failures not tied to an evaluation call, such as panics.
    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    /// Whether this failure halted its test.
    pub fn halting(&self) -> bool {
        self.halting
    }

    /// `location: diagnostic`, or the bare diagnostic without a location.
    pub fn rendered(&self) -> String {
        let diagnostic = self.diagnostic().unwrap_or_default();
        match &self.location {
            Some(location) => format!("{location}: {diagnostic}"),
            None => diagnostic.to_string(),
        }
    }
}

/// Token returned by a failed halting evaluation.
///
/// Test bodies propagate it with `?`; the boundary that created the
/// originating context consumes it.
#[must_use = "a halt must be propagated to the test boundary with `?`"]
#[derive(Debug, PartialEq, Eq)]
pub struct Halt {
    scope: ScopeId,
    test: TestId,
}

impl Halt {
    /// The test whose evaluation halted.
    pub fn test(&self) -> &TestId {
        &self.test
    }
}

impl fmt::Display for Halt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "test '{}' halted", self.test)
    }
}

/// Return type of every test and sub-test body.
pub type TestResult = std::result::Result<(), Halt>;

/// Finalized result of a test, handed to the runner.
#[derive(Debug, Clone)]
pub struct Report {
    pub id: TestId,
    pub passed: bool,
    pub halted: bool,
    /// Failed outcomes in the order they were recorded.
    pub failures: Vec<Outcome>,
    /// Sub-test reports in the order the sub-tests were started.
    pub children: Vec<Report>,
    pub duration: Duration,
}

impl Report {
    /// Rendered diagnostics in call order.
    pub fn failure_messages(&self) -> Vec<&str> {
        self.failures.iter().filter_map(Outcome::diagnostic).collect()
    }

    /// Diagnostics prefixed with their source location.
    pub fn rendered(&self) -> Vec<String> {
        self.failures.iter().map(Outcome::rendered).collect()
    }

    /// The `(passed, failures)` pair exposed to the runner.
    pub fn summary(&self) -> (bool, Vec<String>) {
        (self.passed, self.failure_messages().into_iter().map(str::to_string).collect())
    }

    /// Failures recorded by this test and all of its sub-tests.
    pub fn total_failures(&self) -> usize {
        self.failures.len() + self.children.iter().map(Report::total_failures).sum::<usize>()
    }
}

/// Mutable state of one running test or sub-test.
#[derive(Debug)]
pub struct RunContext {
    id: TestId,
    scope: ScopeId,
    failures: Vec<Outcome>,
    failed: bool,
    halted: bool,
    formatted: usize,
    children: Vec<Report>,
    fatal: Option<Error>,
    started: Instant,
}

impl RunContext {
    /// Context for a top-level test.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(TestId::new(name))
    }

    pub fn with_id(id: TestId) -> Self {
        Self {
            id,
            scope: ScopeId::fresh(),
            failures: Vec::new(),
            failed: false,
            halted: false,
            formatted: 0,
            children: Vec::new(),
            fatal: None,
            started: Instant::now(),
        }
    }

    pub fn id(&self) -> &TestId {
        &self.id
    }

    /// Whether any failure was recorded here or in a sub-test.
    pub fn failed(&self) -> bool {
        self.failed
    }

    /// Set by the first halting failure and never cleared.
    pub fn halted(&self) -> bool {
        self.halted
    }

    pub fn failures(&self) -> &[Outcome] {
        &self.failures
    }

    /// Number of diagnostics rendered so far. Equals the number of
    /// recorded evaluation failures: passing evaluations render nothing.
    pub fn format_count(&self) -> usize {
        self.formatted
    }

    /// Evaluate in continuing mode. Returns whether the expectation held.
    ///
    /// On a halted context nothing is evaluated and `false` is returned.
    pub fn check(&mut self, expectation: Expectation<'_>) -> bool {
        if self.halted {
            self.ignored("check", &expectation.location);
            return false;
        }
        self.evaluate(expectation, false)
    }

    /// Evaluate in halting mode.
    ///
    /// On failure the outcome is recorded, the context halts, and the
    /// returned [`Halt`] must be propagated out of the test body.
    pub fn require(&mut self, expectation: Expectation<'_>) -> TestResult {
        if self.halted {
            self.ignored("require", &expectation.location);
            return Err(self.halt());
        }
        if self.evaluate(expectation, true) {
            return Ok(());
        }
        self.halted = true;
        Err(self.halt())
    }

    /// Record a failure not produced by an expectation.
    pub fn fail(&mut self, diagnostic: impl Into<String>) {
        if self.halted {
            return;
        }
        let diagnostic = diagnostic.into();
        tracing::debug!(test = %self.id, "{diagnostic}");
        self.failures.push(Outcome::failure(diagnostic, None, false));
        self.failed = true;
    }

    /// Run a named sub-test in a fresh context. Returns whether it passed.
    ///
    /// A halt inside the sub-test ends only the sub-test. A failing
    /// sub-test marks this context as failed.
    pub fn subtest<F>(&mut self, name: impl Into<String>, body: F) -> bool
    where
        F: FnOnce(&mut RunContext) -> TestResult,
    {
        if self.halted {
            tracing::warn!(test = %self.id, "sub-test started after halt was ignored");
            return false;
        }
        let child = RunContext::with_id(self.id.child(name));
        self.adopt(child.run(body))
    }

    /// Run one sub-test per case on the rayon pool.
    ///
    /// Every branch gets its own context; child reports are kept in input
    /// order. Returns whether every sub-test passed.
    pub fn subtests_parallel<T, F>(&mut self, cases: Vec<(String, T)>, body: F) -> bool
    where
        T: Send,
        F: Fn(&mut RunContext, T) -> TestResult + Sync,
    {
        if self.halted {
            tracing::warn!(test = %self.id, "sub-tests started after halt were ignored");
            return false;
        }
        let parent = &self.id;
        let body = &body;
        let results: Vec<Result<Report>> = cases
            .into_par_iter()
            .map(|(name, case)| RunContext::with_id(parent.child(name)).run(|ctx| body(ctx, case)))
            .collect();

        let mut all_passed = true;
        for result in results {
            all_passed &= self.adopt(result);
        }
        all_passed
    }

    /// Run `body` against this context and finalize it.
    ///
    /// This is the test boundary: it consumes halts minted by this context,
    /// records panics as failures, and reports foreign halts as
    /// [`Error::HaltEscape`].
    pub fn run<F>(mut self, body: F) -> Result<Report>
    where
        F: FnOnce(&mut RunContext) -> TestResult,
    {
        match catch_unwind(AssertUnwindSafe(|| body(&mut self))) {
            Ok(Ok(())) => {}
            Ok(Err(halt)) if halt.scope == self.scope => {}
            Ok(Err(halt)) => {
                tracing::error!(test = %self.id, origin = %halt.test, "halt escaped its test");
                self.poison(Error::HaltEscape {
                    test: self.id.to_string(),
                    origin: halt.test.to_string(),
                });
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                self.failures.push(Outcome::failure(
                    format!("test panicked: {message}"),
                    None,
                    false,
                ));
                self.failed = true;
            }
        }
        match self.fatal.take() {
            Some(error) => Err(error),
            None => Ok(self.finalize()),
        }
    }

    /// Close the context and hand its results to the runner.
    pub fn finalize(self) -> Report {
        Report {
            id: self.id,
            passed: !self.failed,
            halted: self.halted,
            failures: self.failures,
            children: self.children,
            duration: self.started.elapsed(),
        }
    }

    fn evaluate(&mut self, expectation: Expectation<'_>, halting: bool) -> bool {
        let verdict = expectation.evaluate();
        if verdict.passed {
            return true;
        }
        let diagnostic = format::format(&expectation, &verdict);
        self.formatted += 1;
        tracing::debug!(test = %self.id, location = %expectation.location, "{diagnostic}");
        self.failures.push(Outcome::failure(diagnostic, Some(expectation.location), halting));
        self.failed = true;
        false
    }

    fn halt(&self) -> Halt {
        Halt { scope: self.scope, test: self.id.clone() }
    }

    fn ignored(&self, mode: &str, location: &Location) {
        tracing::warn!(test = %self.id, %location, "{mode} after halt was not evaluated");
    }

    fn adopt(&mut self, result: Result<Report>) -> bool {
        match result {
            Ok(report) => {
                let passed = report.passed;
                self.failed |= !passed;
                self.children.push(report);
                passed
            }
            Err(error) => {
                self.poison(error);
                false
            }
        }
    }

    fn poison(&mut self, error: Error) {
        self.failed = true;
        if self.fatal.is_none() {
            self.fatal = Some(error);
        }
    }
}

/// Run a top-level test body in a fresh context.
pub fn run_test<F>(name: impl Into<String>, body: F) -> Result<Report>
where
    F: FnOnce(&mut RunContext) -> TestResult,
{
    RunContext::new(name).run(body)
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
