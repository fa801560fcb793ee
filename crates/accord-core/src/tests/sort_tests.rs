//! Tests for sort fields and directions.

use rstest::rstest;

use crate::{SortDirection, SortError, SortField};

#[rstest]
#[case::ascending("created", "created", SortDirection::Ascending)]
#[case::descending("-created", "created", SortDirection::Descending)]
#[case::hyphenated_name("-created-at", "created-at", SortDirection::Descending)]
fn parse_sort_members(#[case] input: &str, #[case] name: &str, #[case] direction: SortDirection) {
    let field: SortField = input.parse().expect("valid sort member");
    assert_eq!(field.name(), name);
    assert_eq!(field.direction(), direction);
}

#[rstest]
#[case::ascending("title")]
#[case::descending("-title")]
fn display_round_trips(#[case] input: &str) {
    let field: SortField = input.parse().expect("valid sort member");
    assert_eq!(field.to_string(), input);
}

#[rstest]
#[case::empty("")]
#[case::bare_dash("-")]
fn empty_members_are_rejected(#[case] input: &str) {
    let result: Result<SortField, SortError> = input.parse();
    assert_eq!(result, Err(SortError::Empty));
}

#[test]
fn direction_defaults_to_ascending() {
    assert_eq!(SortDirection::default(), SortDirection::Ascending);
}

#[rstest]
#[case::ascending(SortDirection::Ascending, "ascending")]
#[case::descending(SortDirection::Descending, "descending")]
fn direction_display(#[case] direction: SortDirection, #[case] expected: &str) {
    assert_eq!(format!("{direction}"), expected);
}

#[test]
fn direction_parses_case_insensitively() {
    let direction: SortDirection = "Descending".parse().expect("parse direction");
    assert_eq!(direction, SortDirection::Descending);
}

#[test]
fn sort_field_serde_round_trip() {
    let field = SortField::new("created", SortDirection::Descending);
    let json = serde_json::to_string(&field).expect("serialize");
    assert_eq!(json, "\"-created\"");

    let deserialized: SortField = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(deserialized, field);
}

#[test]
fn is_descending_matches_direction() {
    assert!(SortField::new("created", SortDirection::Descending).is_descending());
    assert!(!SortField::new("created", SortDirection::Ascending).is_descending());
}
