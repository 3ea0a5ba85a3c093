// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Short constructors for use with [`check!`](crate::check) and
//! [`require!`](crate::require).

use crate::expectation::Expectation;
use crate::value::Inspect;

#[track_caller]
pub fn eq<'a>(actual: impl Inspect, expected: impl Inspect) -> Expectation<'a> {
    Expectation::equal(actual, expected)
}

#[track_caller]
pub fn ne<'a>(actual: impl Inspect, expected: impl Inspect) -> Expectation<'a> {
    Expectation::not_equal(actual, expected)
}

#[track_caller]
pub fn is_true<'a>(condition: impl Inspect) -> Expectation<'a> {
    Expectation::truthy(condition)
}

#[track_caller]
pub fn is_false<'a>(condition: impl Inspect) -> Expectation<'a> {
    Expectation::falsy(condition)
}

#[track_caller]
pub fn nil<'a>(actual: impl Inspect) -> Expectation<'a> {
    Expectation::nil(actual)
}

#[track_caller]
pub fn not_nil<'a>(actual: impl Inspect) -> Expectation<'a> {
    Expectation::not_nil(actual)
}

#[track_caller]
pub fn contains<'a>(haystack: impl Inspect, needle: impl Inspect) -> Expectation<'a> {
    Expectation::contains(haystack, needle)
}

#[track_caller]
pub fn not_contains<'a>(haystack: impl Inspect, needle: impl Inspect) -> Expectation<'a> {
    Expectation::not_contains(haystack, needle)
}

#[track_caller]
pub fn is_err<'a>(actual: impl Inspect) -> Expectation<'a> {
    Expectation::error(actual)
}

#[track_caller]
pub fn is_ok<'a>(actual: impl Inspect) -> Expectation<'a> {
    Expectation::no_error(actual)
}
