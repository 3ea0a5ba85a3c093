// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative expectation files.
//!
//! A TOML file declares tests as `[[test]]` tables, each holding
//! `[[test.expect]]` entries:
//!
//! ```toml
//! [[test]]
//! name = "math"
//! parallel = true
//!
//! [[test.expect]]
//! kind = "equal"
//! actual = 3
//! expected = 3
//! mode = "require"
//! message = "sum of {} and {}"
//! args = [1, 2]
//! ```
//!
//! Entries without `actual` inspect `nil`; `error = "msg"` makes the actual
//! an error value. Each entry reports failures at its own line.

use std::collections::HashSet;
use std::ops::Range;
use std::path::Path;

use serde::Deserialize;
use toml::Spanned;

use crate::context::{RunContext, TestResult};
use crate::error::{Error, Result};
use crate::expectation::{Expectation, Kind, Location};
use crate::runner::{Suite, Test};
use crate::value::{Inspect, Value};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SpecFile {
    #[serde(default, rename = "test")]
    tests: Vec<TestSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TestSpec {
    name: String,
    #[serde(default)]
    parallel: bool,
    #[serde(default)]
    expect: Vec<Spanned<ExpectSpec>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ExpectSpec {
    kind: Kind,
    #[serde(default)]
    mode: Mode,
    actual: Option<toml::Value>,
    expected: Option<toml::Value>,
    error: Option<String>,
    message: Option<String>,
    #[serde(default)]
    args: Vec<toml::Value>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Mode {
    #[default]
    Check,
    Require,
}

/// A validated entry, ready to be evaluated any number of times.
#[derive(Debug, Clone)]
struct Entry {
    kind: Kind,
    mode: Mode,
    actual: Value,
    expected: Option<Value>,
    message: Option<(String, Vec<Value>)>,
    location: Location,
}

impl Entry {
    fn expectation(&self) -> Expectation<'static> {
        let expectation = Expectation::new(
            self.kind,
            self.actual.clone(),
            self.expected.clone(),
            self.location.clone(),
        );
        match &self.message {
            Some((template, args)) => expectation.with_message(template.clone(), args.clone()),
            None => expectation,
        }
    }

    fn run(&self, ctx: &mut RunContext) -> TestResult {
        match self.mode {
            Mode::Check => {
                ctx.check(self.expectation());
                Ok(())
            }
            Mode::Require => ctx.require(self.expectation()),
        }
    }
}

/// Read and parse an expectation file.
pub fn load_file(path: &Path) -> Result<Vec<Test>> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
    parse(&content, path)
}

/// Load several files into one suite, keeping file and declaration order.
pub fn load_suite(paths: &[impl AsRef<Path>]) -> Result<Suite> {
    let mut suite = Suite::new();
    for path in paths {
        let tests = load_file(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), tests = tests.len(), "loaded expectation file");
        suite.extend(tests);
    }
    Ok(suite)
}

/// Parse expectation file content. `path` names the file in locations
/// and errors.
pub fn parse(content: &str, path: &Path) -> Result<Vec<Test>> {
    let spec_error = |message: String| Error::Spec { path: path.to_path_buf(), message };
    let file: SpecFile = toml::from_str(content).map_err(|e| {
        spec_error(match e.span() {
            Some(span) => format!("line {}: {}", line_of(content, span.start), e.message()),
            None => e.message().to_string(),
        })
    })?;

    let file_name = path.display().to_string();
    let mut seen = HashSet::new();
    let mut tests = Vec::with_capacity(file.tests.len());
    for spec in file.tests {
        if !seen.insert(spec.name.clone()) {
            return Err(spec_error(format!("duplicate test name '{}'", spec.name)));
        }
        let entries = spec
            .expect
            .into_iter()
            .map(|entry| {
                let span = entry.span();
                validate(entry.into_inner(), &file_name, content, span)
                    .map_err(|message| spec_error(format!("test '{}': {message}", spec.name)))
            })
            .collect::<Result<Vec<_>>>()?;

        let test = Test::new(spec.name, move |ctx| {
            for entry in &entries {
                entry.run(ctx)?;
            }
            Ok(())
        });
        tests.push(if spec.parallel { test.parallel() } else { test });
    }
    Ok(tests)
}

fn validate(
    spec: ExpectSpec,
    file: &str,
    content: &str,
    span: Range<usize>,
) -> std::result::Result<Entry, String> {
    let line = line_of(content, span.start);
    let kind = spec.kind;
    if kind.takes_expected() && spec.expected.is_none() {
        return Err(format!("line {line}: kind '{kind}' requires `expected`"));
    }
    if !kind.takes_expected() && spec.expected.is_some() {
        return Err(format!("line {line}: kind '{kind}' does not take `expected`"));
    }
    let actual = match (spec.actual, spec.error) {
        (Some(_), Some(_)) => {
            return Err(format!("line {line}: `actual` and `error` are mutually exclusive"));
        }
        (Some(actual), None) => actual.to_value(),
        (None, Some(error)) => Value::Error(error),
        (None, None) => Value::Nil,
    };
    if spec.message.is_none() && !spec.args.is_empty() {
        return Err(format!("line {line}: `args` given without `message`"));
    }
    let message = spec
        .message
        .map(|template| (template, spec.args.iter().map(Inspect::to_value).collect()));

    Ok(Entry {
        kind,
        mode: spec.mode,
        actual,
        expected: spec.expected.as_ref().map(Inspect::to_value),
        message,
        location: Location::new(file.to_string(), line),
    })
}

/// One-based line containing byte `offset`.
fn line_of(content: &str, offset: usize) -> u32 {
    let end = offset.min(content.len());
    let newlines = content.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count();
    u32::try_from(newlines + 1).unwrap_or(u32::MAX)
}

#[cfg(test)]
#[path = "declarative_tests.rs"]
mod tests;
