//! Relationship document compliance checking.

use serde_json::Value;
use tracing::debug;

use accord_core::{CheckReport, ErrorObject};

use crate::expectation::RelationshipExpectation;
use crate::linkage::check_relationship_object;
use crate::pointer::JsonPointer;
use crate::violation::Violation;

/// Checks raw JSON text against a relationship expectation.
///
/// The expectation's resource type and field name appear in error details
/// only; validation is purely structural. Array-form `data` reports every
/// malformed member individually.
///
/// # Example
///
/// ```
/// use accord_document::{RelationshipExpectation, check_relationship};
///
/// let expectation = RelationshipExpectation::expect("articles", "author");
/// let report = check_relationship(&expectation, r#"{"data":null}"#);
/// assert!(report.is_compliant());
/// ```
#[must_use]
pub fn check_relationship(expectation: &RelationshipExpectation, raw: &str) -> CheckReport {
    debug!(
        resource_type = expectation.resource_type(),
        field = expectation.field(),
        "checking relationship document"
    );
    match serde_json::from_str::<Value>(raw) {
        Ok(document) => check_relationship_value(expectation, &document),
        Err(error) => CheckReport::new(vec![contextualise(
            Violation::InvalidJson {
                message: error.to_string(),
            },
            expectation,
        )]),
    }
}

/// Checks an already-parsed document against a relationship expectation.
#[must_use]
pub fn check_relationship_value(
    expectation: &RelationshipExpectation,
    document: &Value,
) -> CheckReport {
    let mut violations = Vec::new();
    if document.is_object() {
        check_relationship_object(
            document,
            &JsonPointer::root(),
            expectation.field(),
            &mut violations,
        );
    } else {
        violations.push(Violation::InvalidDocument);
    }

    violations
        .into_iter()
        .map(|violation| contextualise(violation, expectation))
        .collect()
}

/// Renders a violation with the owning relationship named in the detail.
fn contextualise(violation: Violation, expectation: &RelationshipExpectation) -> ErrorObject {
    let base = violation.into_error_object();
    let detail = format!(
        "{} (relationship '{}' of resource type '{}')",
        base.detail(),
        expectation.field(),
        expectation.resource_type()
    );
    ErrorObject::new(
        base.status().to_owned(),
        base.title().to_owned(),
        detail,
        base.source().cloned(),
    )
}
