// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use yare::parameterized;

#[test]
fn integers_of_every_width_widen_to_int() {
    assert_eq!(5u8.to_value(), Value::Int(5));
    assert_eq!((-5i16).to_value(), Value::Int(-5));
    assert_eq!(5u64.to_value(), Value::Int(5));
    assert_eq!(5usize.to_value(), Value::Int(5));
    assert_eq!(u64::MAX.to_value(), Value::Int(i128::from(u64::MAX)));
}

#[test]
fn oversized_u128_falls_back_to_float() {
    assert_eq!(u128::MAX.to_value().shape(), Shape::Float);
    assert_eq!(7u128.to_value(), Value::Int(7));
}

#[test]
fn option_none_is_nil() {
    let none: Option<i32> = None;
    assert_eq!(none.to_value(), Value::Nil);
    assert_eq!(Some(3).to_value(), Value::Int(3));
}

#[test]
fn result_err_becomes_error_with_message() {
    let r: std::result::Result<i32, String> = Err("boom".to_string());
    assert_eq!(r.to_value(), Value::Error("boom".to_string()));
    let ok: std::result::Result<i32, String> = Ok(1);
    assert_eq!(ok.to_value(), Value::Int(1));
}

#[test]
fn tuples_and_arrays_become_sequences() {
    assert_eq!(
        (1, "a").to_value(),
        Value::Seq(vec![Value::Int(1), Value::Str("a".to_string())])
    );
    assert_eq!([1, 2].to_value(), Value::Seq(vec![Value::Int(1), Value::Int(2)]));
}

#[test]
fn btree_map_becomes_map() {
    let mut map = BTreeMap::new();
    map.insert("k", 1);
    assert_eq!(
        map.to_value(),
        Value::Map(vec![(Value::Str("k".to_string()), Value::Int(1))])
    );
}

#[test]
fn json_values_lower_by_shape() {
    let json = serde_json::json!({"a": [1, 2.5, null, true]});
    let Value::Map(entries) = json.to_value() else {
        panic!("expected map");
    };
    assert_eq!(entries[0].0, Value::Str("a".to_string()));
    assert_eq!(
        entries[0].1,
        Value::Seq(vec![Value::Int(1), Value::Float(2.5), Value::Nil, Value::Bool(true)])
    );
}

#[test]
fn from_serialize_turns_structs_into_maps() {
    #[derive(serde::Serialize)]
    struct Point {
        x: i32,
    }
    assert_eq!(
        Value::from_serialize(&Point { x: 1 }),
        Value::Map(vec![(Value::Str("x".to_string()), Value::Int(1))])
    );
}

#[test]
fn record_builder_keeps_field_order() {
    let record = Record::new("User").field("id", 7).field("name", "ada");
    assert_eq!(record.get("id"), Some(&Value::Int(7)));
    assert_eq!(record.get("missing"), None);
    assert_eq!(record.to_value().to_string(), r#"User { id: 7, name: "ada" }"#);
}

#[parameterized(
    nil = { Value::Nil, "nil" },
    boolean = { Value::Bool(true), "true" },
    int = { Value::Int(-4), "-4" },
    whole_float = { Value::Float(2.0), "2.0" },
    fractional_float = { Value::Float(0.5), "0.5" },
    string = { Value::Str("a\"b".to_string()), r#""a\"b""# },
    seq = { Value::Seq(vec![Value::Int(1), Value::Nil]), "[1, nil]" },
    map = { Value::Map(vec![(Value::Str("k".to_string()), Value::Int(1))]), r#"{"k": 1}"# },
    empty_record = { Value::Record(Record::new("Unit")), "Unit {}" },
    error = { Value::Error("denied".to_string()), r#"Err("denied")"# },
)]
fn display(value: Value, expected: &str) {
    assert_eq!(value.to_string(), expected);
}

#[test]
fn shape_names() {
    assert_eq!(Shape::Str.to_string(), "string");
    assert_eq!(Shape::Seq.to_string(), "sequence");
    assert!(Shape::Int.is_numeric());
    assert!(!Shape::Str.is_numeric());
}

#[test]
fn toml_values_lower_by_shape() {
    let table: toml::Value = toml::from_str("n = 3\nf = 1.5\ns = \"x\"\nlist = [true]").unwrap();
    let value = table.to_value();
    let Value::Map(entries) = value else { panic!("expected a map") };
    assert!(entries.contains(&(Value::Str("n".to_string()), Value::Int(3))));
    assert!(entries.contains(&(Value::Str("f".to_string()), Value::Float(1.5))));
    assert!(entries.contains(&(Value::Str("s".to_string()), Value::Str("x".to_string()))));
    assert!(entries.contains(&(Value::Str("list".to_string()), Value::Seq(vec![Value::Bool(true)]))));
}
