// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic rendering for failed expectations.
//!
//! Output has the form `<message>: expected <expected>, got <actual>`. The
//! message prefix is dropped when the caller supplied none; the
//! expected/actual clause is dropped for pure predicates that carry a
//! caller message.

use std::fmt::Write;

use crate::compare::Containment;
use crate::expectation::{Detail, Expectation, Kind, Message, Verdict};
use crate::value::Value;

/// Render the diagnostic for a failed verdict.
pub fn format(expectation: &Expectation<'_>, verdict: &Verdict) -> String {
    let custom = expectation.message.as_ref().map(render_message);
    let clause = clause(expectation, verdict);

    let mut out = match (custom, expectation.kind.is_predicate()) {
        (Some(custom), true) => custom,
        (Some(custom), false) => format!("{custom}: {clause}"),
        (None, _) => clause,
    };
    append_detail(&mut out, &verdict.detail);
    out
}

fn clause(expectation: &Expectation<'_>, verdict: &Verdict) -> String {
    let actual = &expectation.actual;
    let nil = Value::Nil;
    let expected = expectation.expected.as_ref().unwrap_or(&nil);
    match expectation.kind {
        Kind::Equal => format!("expected {expected}, got {actual}"),
        Kind::NotEqual => format!("expected a value other than {expected}, got {actual}"),
        Kind::True | Kind::False => match verdict.detail {
            Detail::NotBool(_) => "condition has no truth value".to_string(),
            _ if expectation.kind == Kind::True => "condition is false".to_string(),
            _ => "condition is true".to_string(),
        },
        Kind::Nil => format!("expected nil, got {actual}"),
        Kind::NotNil => "expected a non-nil value, got nil".to_string(),
        Kind::Contains => format!("expected a value containing {expected}, got {actual}"),
        Kind::NotContains => {
            format!("expected a value not containing {expected}, got {actual}")
        }
        Kind::Error => format!("expected an error, got {actual}"),
        Kind::NoError => format!("expected no error, got {actual}"),
    }
}

fn append_detail(out: &mut String, detail: &Detail) {
    // Writing to a String cannot fail.
    let _ = match detail {
        Detail::None => Ok(()),
        Detail::Differs(path) if path.is_root() => Ok(()),
        Detail::Differs(path) => write!(out, " (first difference at {path})"),
        Detail::TypeMismatch { path, actual, expected } if path.is_root() => {
            write!(out, " (type mismatch: {actual} vs {expected})")
        }
        Detail::TypeMismatch { path, actual, expected } => {
            write!(out, " (type mismatch at {path}: {actual} vs {expected})")
        }
        Detail::NotBool(shape) => write!(out, " (truthiness requires a bool, got {shape})"),
        Detail::Malformed(containment @ Containment::Malformed { .. }) => {
            write!(out, " ({})", containment.mismatch().unwrap_or_default())
        }
        Detail::Malformed(_) => Ok(()),
    };
}

/// Render a caller message.
pub fn render_message(message: &Message<'_>) -> String {
    match message {
        Message::Template { template, args } => interpolate(template, args),
        Message::Lazy(build) => build(),
    }
}

/// Interpolate positional arguments into a template.
///
/// `{}` consumes the next argument, `{N}` selects argument N, and `{{`/`}}`
/// produce literal braces. Placeholders without a matching argument are
/// left as written. String arguments render without quotes.
pub fn interpolate(template: &str, args: &[Value]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut next = 0;
    let mut chars = template.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        match c {
            '{' if chars.peek().is_some_and(|&(_, n)| n == '{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek().is_some_and(|&(_, n)| n == '}') => {
                chars.next();
                out.push('}');
            }
            '{' => {
                let rest = &template[start + 1..];
                let Some(close) = rest.find('}') else {
                    out.push_str(&template[start..]);
                    break;
                };
                let inner = &rest[..close];
                let index = if inner.is_empty() {
                    let i = next;
                    next += 1;
                    Some(i)
                } else {
                    inner.parse::<usize>().ok()
                };
                match index.and_then(|i| args.get(i)) {
                    Some(Value::Str(s)) => out.push_str(s),
                    Some(arg) => {
                        let _ = write!(out, "{arg}");
                    }
                    None => out.push_str(&template[start..start + close + 2]),
                }
                // Skip the placeholder body and closing brace.
                for _ in 0..inner.chars().count() + 1 {
                    chars.next();
                }
            }
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
