//! Resource document compliance checking.

use serde_json::{Map, Value};
use tracing::debug;

use accord_core::CheckReport;

use crate::expectation::ResourceExpectation;
use crate::linkage::{check_relationship_object, string_member};
use crate::pointer::JsonPointer;
use crate::violation::Violation;

/// Checks raw JSON text against a resource expectation.
///
/// Unparseable input yields a single-error report; otherwise every
/// applicable structural rule is evaluated and every violation reported.
/// The check is deterministic: the same expectation and input always
/// produce an equal report.
///
/// # Example
///
/// ```
/// use accord_document::{ResourceExpectation, check_resource};
///
/// let expectation = ResourceExpectation::expect_with_id("articles", "1");
/// let report = check_resource(&expectation, r#"{"data":{"type":"articles","id":"1"}}"#);
/// assert!(report.is_compliant());
/// ```
#[must_use]
pub fn check_resource(expectation: &ResourceExpectation, raw: &str) -> CheckReport {
    debug!(
        resource_type = expectation.resource_type(),
        "checking resource document"
    );
    match serde_json::from_str::<Value>(raw) {
        Ok(document) => check_resource_value(expectation, &document),
        Err(error) => CheckReport::new(vec![
            Violation::InvalidJson {
                message: error.to_string(),
            }
            .into_error_object(),
        ]),
    }
}

/// Checks an already-parsed document against a resource expectation.
#[must_use]
pub fn check_resource_value(expectation: &ResourceExpectation, document: &Value) -> CheckReport {
    let mut violations = Vec::new();
    let data_pointer = JsonPointer::root().child("data");

    if let Some(object) = document.as_object() {
        match object.get("data") {
            Some(data) => check_data(expectation, data, &data_pointer, &mut violations),
            None => violations.push(Violation::MissingMember {
                pointer: data_pointer.into_string(),
                member: String::from("data"),
            }),
        }
    } else {
        violations.push(Violation::InvalidDocument);
    }

    violations
        .into_iter()
        .map(Violation::into_error_object)
        .collect()
}

/// Checks the primary `data` member of a resource document.
fn check_data(
    expectation: &ResourceExpectation,
    data: &Value,
    data_pointer: &JsonPointer,
    violations: &mut Vec<Violation>,
) {
    let Some(resource) = data.as_object() else {
        violations.push(Violation::InvalidShape {
            pointer: data_pointer.as_str().to_owned(),
            member: String::from("data"),
            expected: String::from("an object"),
        });
        return;
    };

    check_identity(expectation, resource, data_pointer, violations);

    let attribute_map = object_member(resource, data_pointer, "attributes", violations);
    let relationship_map = object_member(resource, data_pointer, "relationships", violations);

    if let (Some(attributes), Some(relationships)) = (attribute_map, relationship_map) {
        for field in attributes.keys() {
            if relationships.contains_key(field) {
                violations.push(Violation::FieldCollision {
                    pointer: data_pointer.child("relationships").child(field).into_string(),
                    field: field.clone(),
                });
            }
        }
    }

    if let Some(relationships) = relationship_map {
        let relationships_pointer = data_pointer.child("relationships");
        for (name, value) in relationships {
            let relationship_pointer = relationships_pointer.child(name);
            check_relationship_object(value, &relationship_pointer, name, violations);
        }
    }
}

/// Checks the `type` and (when expected) `id` members of the resource.
fn check_identity(
    expectation: &ResourceExpectation,
    resource: &Map<String, Value>,
    data_pointer: &JsonPointer,
    violations: &mut Vec<Violation>,
) {
    if let Some(actual) = string_member(resource, data_pointer, "type", violations)
        && actual != expectation.resource_type()
    {
        violations.push(Violation::TypeMismatch {
            pointer: data_pointer.child("type").into_string(),
            expected: expectation.resource_type().to_owned(),
            actual: actual.to_owned(),
        });
    }

    if let Some(expected_id) = expectation.id()
        && let Some(actual) = string_member(resource, data_pointer, "id", violations)
        && actual != expected_id
    {
        violations.push(Violation::IdMismatch {
            pointer: data_pointer.child("id").into_string(),
            expected: expected_id.to_owned(),
            actual: actual.to_owned(),
        });
    }
}

/// Returns `member` as an object when present, recording a violation when
/// it is present with any other shape.
fn object_member<'a>(
    resource: &'a Map<String, Value>,
    parent: &JsonPointer,
    member: &str,
    violations: &mut Vec<Violation>,
) -> Option<&'a Map<String, Value>> {
    let value = resource.get(member)?;
    match value.as_object() {
        Some(map) => Some(map),
        None => {
            violations.push(Violation::InvalidShape {
                pointer: parent.child(member).into_string(),
                member: member.to_owned(),
                expected: String::from("an object"),
            });
            None
        }
    }
}
