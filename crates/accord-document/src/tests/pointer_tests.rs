//! Tests for JSON pointer construction.

use rstest::rstest;

use crate::JsonPointer;

#[test]
fn root_is_the_empty_string() {
    assert_eq!(JsonPointer::root().as_str(), "");
}

#[test]
fn children_nest_with_slashes() {
    let pointer = JsonPointer::root()
        .child("data")
        .child("relationships")
        .child("author");
    assert_eq!(pointer.as_str(), "/data/relationships/author");
}

#[test]
fn array_indices_are_plain_segments() {
    let pointer = JsonPointer::root().child("data").child_index(3).child("id");
    assert_eq!(pointer.as_str(), "/data/3/id");
}

#[rstest]
#[case::tilde("a~b", "/a~0b")]
#[case::slash("a/b", "/a~1b")]
#[case::both("~/", "/~0~1")]
fn segments_are_escaped(#[case] segment: &str, #[case] expected: &str) {
    assert_eq!(JsonPointer::root().child(segment).as_str(), expected);
}

#[test]
fn child_leaves_the_parent_usable() {
    let data = JsonPointer::root().child("data");
    let type_pointer = data.child("type");
    let id_pointer = data.child("id");
    assert_eq!(type_pointer.as_str(), "/data/type");
    assert_eq!(id_pointer.as_str(), "/data/id");
}

#[test]
fn display_matches_as_str() {
    let pointer = JsonPointer::root().child("data").child("attributes");
    assert_eq!(format!("{pointer}"), pointer.as_str());
}

#[test]
fn into_string_returns_the_text() {
    let pointer = JsonPointer::root().child("data");
    assert_eq!(pointer.into_string(), "/data");
}
