//! Tests for the violation taxonomy.

use rstest::rstest;

use crate::Violation;

fn type_mismatch() -> Violation {
    Violation::TypeMismatch {
        pointer: String::from("/data/type"),
        expected: String::from("articles"),
        actual: String::from("people"),
    }
}

#[rstest]
#[case::type_mismatch(type_mismatch(), "409")]
#[case::id_mismatch(
    Violation::IdMismatch {
        pointer: String::from("/data/id"),
        expected: String::from("1"),
        actual: String::from("2"),
    },
    "409"
)]
#[case::missing_member(
    Violation::MissingMember {
        pointer: String::from("/data"),
        member: String::from("data"),
    },
    "400"
)]
#[case::invalid_document(Violation::InvalidDocument, "400")]
fn status_mapping(#[case] violation: Violation, #[case] expected: &str) {
    assert_eq!(violation.status(), expected);
}

#[test]
fn display_names_both_types_on_mismatch() {
    let display = format!("{}", type_mismatch());
    assert_eq!(display, "the resource type must be 'articles', got 'people'");
}

#[test]
fn whole_document_violations_use_the_root_pointer() {
    assert_eq!(Violation::InvalidDocument.pointer(), "");
    let json = Violation::InvalidJson {
        message: String::from("expected value at line 1"),
    };
    assert_eq!(json.pointer(), "");
}

#[test]
fn into_error_object_carries_status_title_detail_and_pointer() {
    let error = type_mismatch().into_error_object();
    assert_eq!(error.status(), "409");
    assert_eq!(error.title(), "Resource Type Mismatch");
    assert_eq!(error.detail(), "the resource type must be 'articles', got 'people'");
    assert_eq!(error.pointer(), Some("/data/type"));
}

#[test]
fn field_collision_names_the_field() {
    let violation = Violation::FieldCollision {
        pointer: String::from("/data/relationships/author"),
        field: String::from("author"),
    };
    let error = violation.into_error_object();
    assert_eq!(error.title(), "Field Declared Twice");
    assert!(error.detail().contains("'author'"));
}
