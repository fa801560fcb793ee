//! Tests for raw query-string values.

use std::collections::BTreeMap;

use crate::QueryValue;

#[test]
fn text_accessors() {
    let value = QueryValue::from("10");
    assert!(value.is_text());
    assert!(!value.is_map());
    assert_eq!(value.as_text(), Some("10"));
    assert!(value.as_map().is_none());
}

#[test]
fn map_accessors() {
    let mut nested = BTreeMap::new();
    nested.insert(String::from("size"), QueryValue::from("10"));
    let value = QueryValue::from(nested);
    assert!(value.is_map());
    assert!(value.as_text().is_none());
    let map = value.as_map().expect("nested map");
    assert_eq!(map.get("size"), Some(&QueryValue::from("10")));
}

#[test]
fn serde_round_trip_text() {
    let value = QueryValue::from("title,body");
    let json = serde_json::to_string(&value).expect("serialize");
    assert_eq!(json, "\"title,body\"");
    let deserialized: QueryValue = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(deserialized, value);
}

#[test]
fn serde_round_trip_nested_map() {
    let mut inner = BTreeMap::new();
    inner.insert(String::from("number"), QueryValue::from("2"));
    inner.insert(String::from("size"), QueryValue::from("25"));
    let value = QueryValue::from(inner);

    let json = serde_json::to_value(&value).expect("serialize");
    assert_eq!(json, serde_json::json!({ "number": "2", "size": "25" }));

    let deserialized: QueryValue = serde_json::from_value(json).expect("deserialize");
    assert_eq!(deserialized, value);
}
