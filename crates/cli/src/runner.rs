// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suite runner with per-test isolation.
//!
//! Serial tests run first in declaration order; tests that opted into
//! parallel execution then run on the rayon pool. Every test gets a fresh
//! run context, and a panic in one test never affects another. Reports are
//! returned in declaration order regardless of scheduling.

use std::time::{Duration, Instant};

use globset::{Glob, GlobMatcher};
use rayon::prelude::*;

use crate::context::{Report, RunContext, TestResult, TestId};
use crate::error::{Error, Result};

/// Body of a registered test.
pub type TestFn = Box<dyn Fn(&mut RunContext) -> TestResult + Send + Sync>;

/// A named test registered with a [`Suite`].
pub struct Test {
    name: String,
    parallel: bool,
    body: TestFn,
}

impl Test {
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&mut RunContext) -> TestResult + Send + Sync + 'static,
    {
        Self { name: name.into(), parallel: false, body: Box::new(body) }
    }

    /// Opt into parallel execution.
    pub fn parallel(mut self) -> Self {
        self.parallel = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    fn run(&self) -> Result<Report> {
        RunContext::with_id(TestId::new(self.name.as_str())).run(|ctx| (self.body)(ctx))
    }
}

/// Ordered collection of tests.
#[derive(Default)]
pub struct Suite {
    tests: Vec<Test>,
}

impl Suite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, test: Test) -> &mut Self {
        self.tests.push(test);
        self
    }

    pub fn extend(&mut self, tests: impl IntoIterator<Item = Test>) -> &mut Self {
        self.tests.extend(tests);
        self
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tests.iter().map(Test::name)
    }
}

/// Configuration for the suite runner.
#[derive(Debug, Clone, Default)]
pub struct RunnerConfig {
    /// Honor per-test parallel opt-in. When false everything runs serially.
    pub parallel: bool,
    /// Glob over test names; `None` selects every test.
    pub filter: Option<String>,
}

/// Outcome of running a suite.
#[derive(Debug, Clone)]
pub struct SuiteReport {
    /// Reports of selected tests, in declaration order.
    pub tests: Vec<Report>,
    /// Tests excluded by the filter.
    pub filtered: usize,
    pub duration: Duration,
}

impl SuiteReport {
    pub fn passed(&self) -> bool {
        self.tests.iter().all(|t| t.passed)
    }

    pub fn passed_count(&self) -> usize {
        self.tests.iter().filter(|t| t.passed).count()
    }

    pub fn failed_count(&self) -> usize {
        self.tests.len() - self.passed_count()
    }

    /// Process exit status: 0 when every test passed, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.passed() { 0 } else { 1 }
    }
}

/// Runs a suite and collects reports.
pub struct TestRunner {
    config: RunnerConfig,
}

impl TestRunner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Run every selected test.
    ///
    /// Fails only when the run cannot be trusted: an invalid filter or a
    /// halt that escaped its test.
    pub fn run(&self, suite: &Suite) -> Result<SuiteReport> {
        let started = Instant::now();
        let matcher = self.matcher()?;
        let selected: Vec<(usize, &Test)> = suite
            .tests
            .iter()
            .enumerate()
            .filter(|(_, t)| matcher.as_ref().is_none_or(|m| m.is_match(&t.name)))
            .collect();
        let filtered = suite.len() - selected.len();

        let (parallel, serial): (Vec<_>, Vec<_>) =
            selected.into_iter().partition(|(_, t)| self.config.parallel && t.parallel);
        tracing::debug!(serial = serial.len(), parallel = parallel.len(), filtered, "running suite");

        let mut results: Vec<(usize, Result<Report>)> =
            serial.into_iter().map(|(i, test)| (i, test.run())).collect();
        results.extend(
            parallel
                .into_par_iter()
                .map(|(i, test)| (i, test.run()))
                .collect::<Vec<_>>(),
        );

        // Restore declaration order for consistent output
        results.sort_by_key(|(i, _)| *i);

        let tests = results.into_iter().map(|(_, r)| r).collect::<Result<Vec<_>>>()?;
        Ok(SuiteReport { tests, filtered, duration: started.elapsed() })
    }

    fn matcher(&self) -> Result<Option<GlobMatcher>> {
        let Some(pattern) = &self.config.filter else {
            return Ok(None);
        };
        Glob::new(pattern)
            .map(|g| Some(g.compile_matcher()))
            .map_err(|e| Error::Filter { pattern: pattern.clone(), message: e.to_string() })
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
