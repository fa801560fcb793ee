//! Relationship linkage validation shared by both checkers.
//!
//! A relationship object is an object whose `data` member is `null` (empty
//! to-one), a resource identifier object (to-one), or an array of resource
//! identifier objects (to-many). The same rules apply whether the object
//! arrives as a standalone relationship document or nested under a resource
//! document's `relationships` member.

use serde_json::{Map, Value};

use crate::pointer::JsonPointer;
use crate::violation::Violation;

/// Validates a relationship object at `pointer`, appending violations.
///
/// `member` names the object in error details: the relationship field name
/// when nested in a resource document, or `data`'s parent description for a
/// standalone document.
pub(crate) fn check_relationship_object(
    value: &Value,
    pointer: &JsonPointer,
    member: &str,
    violations: &mut Vec<Violation>,
) {
    let Some(object) = value.as_object() else {
        violations.push(Violation::InvalidShape {
            pointer: pointer.as_str().to_owned(),
            member: member.to_owned(),
            expected: String::from("an object"),
        });
        return;
    };

    let data_pointer = pointer.child("data");
    let Some(data) = object.get("data") else {
        violations.push(Violation::MissingMember {
            pointer: data_pointer.into_string(),
            member: String::from("data"),
        });
        return;
    };

    match data {
        Value::Null => {}
        Value::Object(identifier) => check_identifier(identifier, &data_pointer, violations),
        Value::Array(identifiers) => {
            for (index, entry) in identifiers.iter().enumerate() {
                let entry_pointer = data_pointer.child_index(index);
                match entry.as_object() {
                    Some(identifier) => check_identifier(identifier, &entry_pointer, violations),
                    None => violations.push(Violation::InvalidShape {
                        pointer: entry_pointer.into_string(),
                        member: String::from("data"),
                        expected: String::from("a resource identifier object"),
                    }),
                }
            }
        }
        Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            violations.push(Violation::InvalidShape {
                pointer: data_pointer.into_string(),
                member: String::from("data"),
                expected: String::from(
                    "null, a resource identifier object, or an array of resource identifier objects",
                ),
            });
        }
    }
}

/// Validates one resource identifier object: non-empty string `type` and
/// `id` members. Both members are checked; a malformed identifier yields
/// one violation per malformed member.
pub(crate) fn check_identifier(
    identifier: &Map<String, Value>,
    pointer: &JsonPointer,
    violations: &mut Vec<Violation>,
) {
    string_member(identifier, pointer, "type", violations);
    string_member(identifier, pointer, "id", violations);
}

/// Requires `member` to be a non-empty string, appending a violation when
/// it is missing or malformed. Returns the value only when valid.
pub(crate) fn string_member<'a>(
    object: &'a Map<String, Value>,
    pointer: &JsonPointer,
    member: &str,
    violations: &mut Vec<Violation>,
) -> Option<&'a str> {
    let Some(value) = object.get(member) else {
        violations.push(Violation::MissingMember {
            pointer: pointer.child(member).into_string(),
            member: member.to_owned(),
        });
        return None;
    };
    match value.as_str() {
        Some(text) if !text.is_empty() => Some(text),
        _ => {
            violations.push(Violation::InvalidShape {
                pointer: pointer.child(member).into_string(),
                member: member.to_owned(),
                expected: String::from("a non-empty string"),
            });
            None
        }
    }
}
