// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structural equality and containment over [`Value`] shapes.
//!
//! Both operations are pure and never fail: shapes that cannot be compared
//! produce a descriptive outcome instead of an error.
//!
//! `Float(NaN)` is the one value that does not compare equal to itself.

use std::fmt;

use crate::value::{Shape, Value};

/// One step into a composite value.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Index(usize),
    Key(Value),
    Field(String),
}

/// Location of a difference inside a composite value. Empty means the root.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path(Vec<Segment>);

impl Path {
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.0 {
            match segment {
                Segment::Index(i) => write!(f, "[{i}]")?,
                Segment::Key(k) => write!(f, "[{k}]")?,
                Segment::Field(name) => write!(f, ".{name}")?,
            }
        }
        Ok(())
    }
}

/// Result of a structural comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Comparison {
    Equal,
    /// Same comparable shape, different content. `path` is the first
    /// difference found.
    Differs { path: Path },
    /// The shapes at `path` have no common notion of equality.
    Incomparable { path: Path, actual: Shape, expected: Shape },
}

impl Comparison {
    pub fn is_equal(&self) -> bool {
        matches!(self, Comparison::Equal)
    }
}

/// Structural equality of `actual` and `expected`.
pub fn compare_equal(actual: &Value, expected: &Value) -> bool {
    compare(actual, expected).is_equal()
}

/// Structural comparison reporting where and why two values differ.
pub fn compare(actual: &Value, expected: &Value) -> Comparison {
    let mut path = Vec::new();
    compare_at(actual, expected, &mut path)
}

fn compare_at(actual: &Value, expected: &Value, path: &mut Vec<Segment>) -> Comparison {
    match (actual, expected) {
        (Value::Nil, Value::Nil) => Comparison::Equal,
        (Value::Nil, _) | (_, Value::Nil) => same_unless(false, path),
        (Value::Bool(a), Value::Bool(e)) => same_unless(a == e, path),
        (Value::Int(a), Value::Int(e)) => same_unless(a == e, path),
        (Value::Float(a), Value::Float(e)) => same_unless(a == e, path),
        (Value::Int(i), Value::Float(x)) | (Value::Float(x), Value::Int(i)) => {
            same_unless(int_equals_float(*i, *x), path)
        }
        (Value::Str(a), Value::Str(e)) => same_unless(a == e, path),
        (Value::Error(a), Value::Error(e)) => same_unless(a == e, path),
        (Value::Seq(a), Value::Seq(e)) => compare_seq(a, e, path),
        (Value::Map(a), Value::Map(e)) => compare_map(a, e, path),
        (Value::Record(a), Value::Record(e)) => {
            if a.name != e.name || a.fields.len() != e.fields.len() {
                return same_unless(false, path);
            }
            for (name, value) in &a.fields {
                path.push(Segment::Field(name.clone()));
                let result = match e.get(name) {
                    Some(other) => compare_at(value, other, path),
                    None => same_unless(false, path),
                };
                path.pop();
                if !result.is_equal() {
                    return result;
                }
            }
            Comparison::Equal
        }
        _ => Comparison::Incomparable {
            path: Path(path.clone()),
            actual: actual.shape(),
            expected: expected.shape(),
        },
    }
}

fn same_unless(equal: bool, path: &[Segment]) -> Comparison {
    if equal { Comparison::Equal } else { Comparison::Differs { path: Path(path.to_vec()) } }
}

fn compare_seq(actual: &[Value], expected: &[Value], path: &mut Vec<Segment>) -> Comparison {
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        path.push(Segment::Index(i));
        let result = compare_at(a, e, path);
        path.pop();
        if !result.is_equal() {
            return result;
        }
    }
    if actual.len() != expected.len() {
        let mut at = path.clone();
        at.push(Segment::Index(actual.len().min(expected.len())));
        return Comparison::Differs { path: Path(at) };
    }
    Comparison::Equal
}

fn compare_map(
    actual: &[(Value, Value)],
    expected: &[(Value, Value)],
    path: &mut Vec<Segment>,
) -> Comparison {
    if actual.len() != expected.len() {
        return Comparison::Differs { path: Path(path.clone()) };
    }
    // Each expected entry may be matched once, so duplicate keys pair up.
    let mut used = vec![false; expected.len()];
    for (key, value) in actual {
        let candidates: Vec<usize> = (0..expected.len())
            .filter(|&i| !used[i] && compare_equal(&expected[i].0, key))
            .collect();
        if let Some(&hit) = candidates.iter().find(|&&i| compare_equal(value, &expected[i].1)) {
            used[hit] = true;
            continue;
        }
        path.push(Segment::Key(key.clone()));
        let result = match candidates.first() {
            Some(&i) => compare_at(value, &expected[i].1, path),
            None => Comparison::Differs { path: Path(path.clone()) },
        };
        path.pop();
        return result;
    }
    Comparison::Equal
}

/// An integer equals a float only when the float is exactly that integer.
/// 2^127, the first float past `i128::MAX`.
const I128_BOUND: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

fn int_equals_float(i: i128, x: f64) -> bool {
    // Casts saturate, so floats outside the i128 range are never exact.
    (-I128_BOUND..I128_BOUND).contains(&x) && x.fract() == 0.0 && x as i128 == i
}

/// Result of a containment check.
#[derive(Debug, Clone, PartialEq)]
pub enum Containment {
    Found,
    Missing,
    /// The operands do not support containment.
    Malformed { haystack: Shape, needle: Shape },
}

impl Containment {
    pub fn is_found(&self) -> bool {
        matches!(self, Containment::Found)
    }

    /// Explanation for a malformed containment check.
    pub fn mismatch(&self) -> Option<String> {
        match self {
            Containment::Malformed { haystack: Shape::Str, needle } => {
                Some(format!("substring needle must be a string, got {needle}"))
            }
            Containment::Malformed { haystack, .. } => Some(format!(
                "containment requires a string, sequence or map, got {haystack}"
            )),
            _ => None,
        }
    }
}

/// Whether `needle` occurs in `haystack`.
///
/// Strings match substrings, sequences match elements by
/// [`compare_equal`], and maps match keys.
pub fn compare_contains(haystack: &Value, needle: &Value) -> Containment {
    let found = |hit: bool| if hit { Containment::Found } else { Containment::Missing };
    match (haystack, needle) {
        (Value::Str(h), Value::Str(n)) => found(h.contains(n.as_str())),
        (Value::Seq(items), _) => found(items.iter().any(|item| compare_equal(item, needle))),
        (Value::Map(entries), _) => found(entries.iter().any(|(k, _)| compare_equal(k, needle))),
        _ => Containment::Malformed { haystack: haystack.shape(), needle: needle.shape() },
    }
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
