//! Tests for the JSON:API error object.

use serde_json::json;

use crate::{ErrorObject, ErrorSource};

#[test]
fn error_object_construction_and_accessors() {
    let error = ErrorObject::with_pointer(
        "400",
        "Required Member Missing",
        "the member 'data' is required",
        "/data",
    );
    assert_eq!(error.status(), "400");
    assert_eq!(error.title(), "Required Member Missing");
    assert_eq!(error.detail(), "the member 'data' is required");
    assert_eq!(error.pointer(), Some("/data"));
}

#[test]
fn error_object_without_source_has_no_pointer() {
    let error = ErrorObject::without_source("400", "Invalid Query Parameter", "include is empty");
    assert!(error.source().is_none());
    assert!(error.pointer().is_none());
}

#[test]
fn error_object_serializes_to_wire_shape() {
    let error = ErrorObject::with_pointer(
        "409",
        "Resource Type Mismatch",
        "expected 'articles', got 'people'",
        "/data/type",
    );
    let json = serde_json::to_value(&error).expect("serialize");
    assert_eq!(
        json,
        json!({
            "status": "409",
            "title": "Resource Type Mismatch",
            "detail": "expected 'articles', got 'people'",
            "source": { "pointer": "/data/type" },
        })
    );
}

#[test]
fn error_object_omits_absent_source() {
    let error = ErrorObject::without_source("400", "Invalid Query Parameter", "sort is empty");
    let json = serde_json::to_value(&error).expect("serialize");
    assert_eq!(
        json,
        json!({
            "status": "400",
            "title": "Invalid Query Parameter",
            "detail": "sort is empty",
        })
    );
}

#[test]
fn error_object_serde_round_trip() {
    let error = ErrorObject::with_pointer("400", "Invalid Shape", "expected an object", "/data");
    let json = serde_json::to_string(&error).expect("serialize");
    let deserialized: ErrorObject = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(deserialized, error);
}

#[test]
fn error_object_display_joins_title_and_detail() {
    let error = ErrorObject::without_source("400", "Invalid Shape", "expected an object");
    assert_eq!(format!("{error}"), "Invalid Shape: expected an object");
}

#[test]
fn error_source_display_is_the_pointer() {
    let source = ErrorSource::pointer("/data/relationships/author");
    assert_eq!(format!("{source}"), "/data/relationships/author");
}
