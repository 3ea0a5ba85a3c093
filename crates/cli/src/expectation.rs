// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Expectations: one evaluation request each.
//!
//! An expectation bundles the operation kind, the lowered operands, an
//! optional caller message and the call site. Evaluating it yields a
//! [`Verdict`]; nothing is rendered until a verdict fails.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::compare::{Comparison, Containment, Path, compare, compare_contains};
use crate::value::{Inspect, Shape, Value};

static NIL: Value = Value::Nil;

/// The operation an expectation performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Equal,
    NotEqual,
    True,
    False,
    Nil,
    NotNil,
    Contains,
    NotContains,
    Error,
    NoError,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Equal => "equal",
            Kind::NotEqual => "not_equal",
            Kind::True => "true",
            Kind::False => "false",
            Kind::Nil => "nil",
            Kind::NotNil => "not_nil",
            Kind::Contains => "contains",
            Kind::NotContains => "not_contains",
            Kind::Error => "error",
            Kind::NoError => "no_error",
        }
    }

    /// Pure predicates report no expected/actual clause.
    pub fn is_predicate(self) -> bool {
        matches!(self, Kind::True | Kind::False)
    }

    /// Whether the kind reads a second operand.
    pub fn takes_expected(self) -> bool {
        matches!(self, Kind::Equal | Kind::NotEqual | Kind::Contains | Kind::NotContains)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source location of an evaluation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub file: Cow<'static, str>,
    pub line: u32,
    /// Zero when unknown.
    pub column: u32,
}

impl Location {
    /// Location of the nearest caller not marked `#[track_caller]`.
    #[track_caller]
    pub fn caller() -> Self {
        let here = std::panic::Location::caller();
        Self { file: Cow::Borrowed(here.file()), line: here.line(), column: here.column() }
    }

    pub fn new(file: impl Into<Cow<'static, str>>, line: u32) -> Self {
        Self { file: file.into(), line, column: 0 }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.column == 0 {
            write!(f, "{}:{}", self.file, self.line)
        } else {
            write!(f, "{}:{}:{}", self.file, self.line, self.column)
        }
    }
}

/// Caller-supplied failure message.
pub enum Message<'a> {
    /// Template with positional arguments: `{}` takes the next argument,
    /// `{N}` takes argument N, `{{` and `}}` are literal braces.
    Template { template: String, args: Vec<Value> },
    /// Built on demand, typically by `format!` inside the assertion macros.
    Lazy(Box<dyn Fn() -> String + 'a>),
}

impl fmt::Debug for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Template { template, args } => f
                .debug_struct("Template")
                .field("template", template)
                .field("args", args)
                .finish(),
            Message::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

/// A single evaluation request.
#[derive(Debug)]
pub struct Expectation<'a> {
    pub kind: Kind,
    pub actual: Value,
    /// Second operand; absent for single-operand kinds.
    pub expected: Option<Value>,
    pub message: Option<Message<'a>>,
    pub location: Location,
}

impl<'a> Expectation<'a> {
    pub fn new(kind: Kind, actual: Value, expected: Option<Value>, location: Location) -> Self {
        Self { kind, actual, expected, message: None, location }
    }

    #[track_caller]
    fn unary(kind: Kind, actual: Value) -> Self {
        Self::new(kind, actual, None, Location::caller())
    }

    #[track_caller]
    fn binary(kind: Kind, actual: Value, expected: Value) -> Self {
        Self::new(kind, actual, Some(expected), Location::caller())
    }

    #[track_caller]
    pub fn equal(actual: impl Inspect, expected: impl Inspect) -> Self {
        Self::binary(Kind::Equal, actual.to_value(), expected.to_value())
    }

    #[track_caller]
    pub fn not_equal(actual: impl Inspect, expected: impl Inspect) -> Self {
        Self::binary(Kind::NotEqual, actual.to_value(), expected.to_value())
    }

    #[track_caller]
    pub fn truthy(condition: impl Inspect) -> Self {
        Self::unary(Kind::True, condition.to_value())
    }

    #[track_caller]
    pub fn falsy(condition: impl Inspect) -> Self {
        Self::unary(Kind::False, condition.to_value())
    }

    #[track_caller]
    pub fn nil(actual: impl Inspect) -> Self {
        Self::unary(Kind::Nil, actual.to_value())
    }

    #[track_caller]
    pub fn not_nil(actual: impl Inspect) -> Self {
        Self::unary(Kind::NotNil, actual.to_value())
    }

    #[track_caller]
    pub fn contains(haystack: impl Inspect, needle: impl Inspect) -> Self {
        Self::binary(Kind::Contains, haystack.to_value(), needle.to_value())
    }

    #[track_caller]
    pub fn not_contains(haystack: impl Inspect, needle: impl Inspect) -> Self {
        Self::binary(Kind::NotContains, haystack.to_value(), needle.to_value())
    }

    #[track_caller]
    pub fn error(actual: impl Inspect) -> Self {
        Self::unary(Kind::Error, actual.to_value())
    }

    #[track_caller]
    pub fn no_error(actual: impl Inspect) -> Self {
        Self::unary(Kind::NoError, actual.to_value())
    }

    /// Attach a positional message template.
    pub fn with_message(mut self, template: impl Into<String>, args: Vec<Value>) -> Self {
        self.message = Some(Message::Template { template: template.into(), args });
        self
    }

    /// Attach a message built only if the expectation fails.
    pub fn with_lazy_message<'b>(self, build: impl Fn() -> String + 'b) -> Expectation<'b>
    where
        'a: 'b,
    {
        Expectation {
            kind: self.kind,
            actual: self.actual,
            expected: self.expected,
            message: Some(Message::Lazy(Box::new(build))),
            location: self.location,
        }
    }

    pub fn at(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    fn expected_or_nil(&self) -> &Value {
        self.expected.as_ref().unwrap_or(&NIL)
    }

    /// Evaluate without rendering anything.
    pub fn evaluate(&self) -> Verdict {
        let actual = &self.actual;
        match self.kind {
            Kind::Equal => match compare(actual, self.expected_or_nil()) {
                Comparison::Equal => Verdict::pass(),
                Comparison::Differs { path } => Verdict::fail(Detail::Differs(path)),
                Comparison::Incomparable { path, actual, expected } => {
                    Verdict::fail(Detail::TypeMismatch { path, actual, expected })
                }
            },
            Kind::NotEqual => match compare(actual, self.expected_or_nil()) {
                Comparison::Equal => Verdict::fail(Detail::None),
                _ => Verdict::pass(),
            },
            Kind::True | Kind::False => match actual {
                Value::Bool(b) => Verdict::from_bool(*b == (self.kind == Kind::True)),
                other => Verdict::fail(Detail::NotBool(other.shape())),
            },
            Kind::Nil => Verdict::from_bool(actual.is_nil()),
            Kind::NotNil => Verdict::from_bool(!actual.is_nil()),
            Kind::Contains | Kind::NotContains => {
                match compare_contains(actual, self.expected_or_nil()) {
                    malformed @ Containment::Malformed { .. } => {
                        Verdict::fail(Detail::Malformed(malformed))
                    }
                    found => Verdict::from_bool(found.is_found() == (self.kind == Kind::Contains)),
                }
            }
            Kind::Error => Verdict::from_bool(actual.shape() == Shape::Error),
            Kind::NoError => Verdict::from_bool(actual.shape() != Shape::Error),
        }
    }
}

/// Why an evaluation failed, beyond the kind itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Detail {
    None,
    /// Composite values differ first at `path`.
    Differs(Path),
    TypeMismatch { path: Path, actual: Shape, expected: Shape },
    /// Truthiness applied to a non-bool operand.
    NotBool(Shape),
    /// Containment applied to unsupported operands.
    Malformed(Containment),
}

/// Result of evaluating an expectation, before any rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub passed: bool,
    pub detail: Detail,
}

impl Verdict {
    pub fn pass() -> Self {
        Self { passed: true, detail: Detail::None }
    }

    pub fn fail(detail: Detail) -> Self {
        Self { passed: false, detail }
    }

    fn from_bool(passed: bool) -> Self {
        Self { passed, detail: Detail::None }
    }
}

#[cfg(test)]
#[path = "expectation_tests.rs"]
mod tests;
