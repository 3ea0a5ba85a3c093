// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Comparable value shapes.
//!
//! Every operand of an expectation is lowered into a [`Value`] before it is
//! compared. The set of shapes is closed, so comparison dispatches on the
//! shape tag instead of inspecting runtime types.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use serde::Serialize;

/// A value lowered into one of the comparable shapes.
///
/// The derived `PartialEq` is representational (map entry order matters).
/// Use [`crate::compare::compare_equal`] for structural equality.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Nil,
    Bool(bool),
    /// Integers of every width, widened.
    Int(i128),
    Float(f64),
    Str(String),
    Seq(Vec<Value>),
    /// Key/value pairs. Compared without regard to order.
    Map(Vec<(Value, Value)>),
    Record(Record),
    /// The error side of a fallible value, holding its rendered message.
    Error(String),
}

/// A named record with named fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub name: String,
    pub fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), fields: Vec::new() }
    }

    /// Append a field.
    pub fn field(mut self, name: impl Into<String>, value: impl Inspect) -> Self {
        self.fields.push((name.into(), value.to_value()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }
}

/// Shape tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Nil,
    Bool,
    Int,
    Float,
    Str,
    Seq,
    Map,
    Record,
    Error,
}

impl Shape {
    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Nil => "nil",
            Shape::Bool => "bool",
            Shape::Int => "int",
            Shape::Float => "float",
            Shape::Str => "string",
            Shape::Seq => "sequence",
            Shape::Map => "map",
            Shape::Record => "record",
            Shape::Error => "error",
        }
    }

    /// Int and float share a numeric domain.
    pub fn is_numeric(self) -> bool {
        matches!(self, Shape::Int | Shape::Float)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    pub fn shape(&self) -> Shape {
        match self {
            Value::Nil => Shape::Nil,
            Value::Bool(_) => Shape::Bool,
            Value::Int(_) => Shape::Int,
            Value::Float(_) => Shape::Float,
            Value::Str(_) => Shape::Str,
            Value::Seq(_) => Shape::Seq,
            Value::Map(_) => Shape::Map,
            Value::Record(_) => Shape::Record,
            Value::Error(_) => Shape::Error,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Lower any serializable value through its JSON form.
    ///
    /// Structs become maps keyed by field name. A value that fails to
    /// serialize becomes [`Value::Error`] carrying the serializer message.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Value {
        match serde_json::to_value(value) {
            Ok(json) => json.to_value(),
            Err(e) => Value::Error(e.to_string()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => {
                if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e16 {
                    write!(f, "{x:.1}")
                } else {
                    write!(f, "{x}")
                }
            }
            Value::Str(s) => write!(f, "{s:?}"),
            Value::Seq(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Map(entries) => {
                f.write_str("{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                f.write_str("}")
            }
            Value::Record(record) => {
                if record.fields.is_empty() {
                    return write!(f, "{} {{}}", record.name);
                }
                write!(f, "{} {{ ", record.name)?;
                for (i, (name, value)) in record.fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{name}: {value}")?;
                }
                f.write_str(" }")
            }
            Value::Error(message) => write!(f, "Err({message:?})"),
        }
    }
}

/// Read-only lowering of a Rust value into a [`Value`].
pub trait Inspect {
    fn to_value(&self) -> Value;
}

impl Inspect for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl Inspect for Record {
    fn to_value(&self) -> Value {
        Value::Record(self.clone())
    }
}

macro_rules! inspect_int {
    ($($t:ty),*) => {
        $(impl Inspect for $t {
            fn to_value(&self) -> Value {
                Value::Int(i128::from(*self))
            }
        })*
    };
}

inspect_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl Inspect for isize {
    fn to_value(&self) -> Value {
        // isize is at most 64 bits on every supported target
        Value::Int(*self as i128)
    }
}

impl Inspect for usize {
    fn to_value(&self) -> Value {
        Value::Int(*self as i128)
    }
}

impl Inspect for u128 {
    fn to_value(&self) -> Value {
        match i128::try_from(*self) {
            Ok(n) => Value::Int(n),
            Err(_) => Value::Float(*self as f64),
        }
    }
}

impl Inspect for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl Inspect for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl Inspect for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Inspect for char {
    fn to_value(&self) -> Value {
        Value::Str(self.to_string())
    }
}

impl Inspect for str {
    fn to_value(&self) -> Value {
        Value::Str(self.to_string())
    }
}

impl Inspect for String {
    fn to_value(&self) -> Value {
        Value::Str(self.clone())
    }
}

impl Inspect for Cow<'_, str> {
    fn to_value(&self) -> Value {
        Value::Str(self.to_string())
    }
}

impl Inspect for () {
    fn to_value(&self) -> Value {
        Value::Nil
    }
}

impl<T: Inspect + ?Sized> Inspect for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: Inspect + ?Sized> Inspect for &mut T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: Inspect + ?Sized> Inspect for Box<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: Inspect + ?Sized> Inspect for Rc<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: Inspect + ?Sized> Inspect for Arc<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: Inspect> Inspect for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Nil,
        }
    }
}

impl<T: Inspect, E: fmt::Display> Inspect for Result<T, E> {
    fn to_value(&self) -> Value {
        match self {
            Ok(v) => v.to_value(),
            Err(e) => Value::Error(e.to_string()),
        }
    }
}

impl<T: Inspect> Inspect for [T] {
    fn to_value(&self) -> Value {
        Value::Seq(self.iter().map(Inspect::to_value).collect())
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: Inspect> Inspect for Vec<T> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: Inspect> Inspect for VecDeque<T> {
    fn to_value(&self) -> Value {
        Value::Seq(self.iter().map(Inspect::to_value).collect())
    }
}

impl<T: Inspect> Inspect for BTreeSet<T> {
    fn to_value(&self) -> Value {
        Value::Seq(self.iter().map(Inspect::to_value).collect())
    }
}

impl<K: Inspect, V: Inspect, S> Inspect for HashMap<K, V, S> {
    fn to_value(&self) -> Value {
        Value::Map(self.iter().map(|(k, v)| (k.to_value(), v.to_value())).collect())
    }
}

impl<K: Inspect, V: Inspect> Inspect for BTreeMap<K, V> {
    fn to_value(&self) -> Value {
        Value::Map(self.iter().map(|(k, v)| (k.to_value(), v.to_value())).collect())
    }
}

macro_rules! inspect_tuple {
    ($($name:ident),+) => {
        impl<$($name: Inspect),+> Inspect for ($($name,)+) {
            #[allow(non_snake_case)]
            fn to_value(&self) -> Value {
                let ($($name,)+) = self;
                Value::Seq(vec![$($name.to_value()),+])
            }
        }
    };
}

inspect_tuple!(A);
inspect_tuple!(A, B);
inspect_tuple!(A, B, C);
inspect_tuple!(A, B, C, D);

impl Inspect for serde_json::Value {
    fn to_value(&self) -> Value {
        match self {
            serde_json::Value::Null => Value::Nil,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i128::from(i))
                } else if let Some(u) = n.as_u64() {
                    Value::Int(i128::from(u))
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Str(s.clone()),
            serde_json::Value::Array(items) => {
                Value::Seq(items.iter().map(Inspect::to_value).collect())
            }
            serde_json::Value::Object(map) => Value::Map(
                map.iter().map(|(k, v)| (Value::Str(k.clone()), v.to_value())).collect(),
            ),
        }
    }
}

impl Inspect for toml::Value {
    fn to_value(&self) -> Value {
        match self {
            toml::Value::String(s) => Value::Str(s.clone()),
            toml::Value::Integer(i) => Value::Int(i128::from(*i)),
            toml::Value::Float(f) => Value::Float(*f),
            toml::Value::Boolean(b) => Value::Bool(*b),
            toml::Value::Datetime(d) => Value::Str(d.to_string()),
            toml::Value::Array(items) => Value::Seq(items.iter().map(Inspect::to_value).collect()),
            toml::Value::Table(table) => Value::Map(
                table.iter().map(|(k, v)| (Value::Str(k.clone()), v.to_value())).collect(),
            ),
        }
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
