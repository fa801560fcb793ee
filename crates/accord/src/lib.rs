//! Accord: JSON:API query parsing, document compliance checking, and
//! resource serialization.
//!
//! This facade crate re-exports stable types from [`accord_core`],
//! [`accord_query`], [`accord_document`], and [`accord_resource`]. It is
//! the only semver-stable entrypoint; the implementation crates may evolve,
//! but this facade preserves type names, serialisation formats, and method
//! behaviour within documented constraints.
//!
//! # Core types
//!
//! - [`QueryParameters`] and [`parse_query`] — validated query parameters
//! - [`RelationshipPath`], [`SortField`], [`SparseFieldSets`] — query
//!   value objects
//! - [`ResourceExpectation`] and [`check_resource`] — resource document
//!   compliance
//! - [`RelationshipExpectation`] and [`check_relationship`] —
//!   relationship document compliance
//! - [`CheckReport`], [`ErrorObject`], [`ErrorDocument`] — error
//!   reporting
//! - [`Outcome`] and [`Payload`] — generic operation results
//! - [`Resource`], [`Field`], [`serialize_resource`] — resource objects
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use accord::{QueryValue, ResourceExpectation, check_resource, parse_query};
//!
//! let mut raw = BTreeMap::new();
//! raw.insert(String::from("include"), QueryValue::from("author"));
//! let parameters = parse_query(&raw).expect("well-formed query");
//! assert_eq!(parameters.include().map(<[_]>::len), Some(1));
//!
//! let expectation = ResourceExpectation::expect_with_id("articles", "1");
//! let report = check_resource(&expectation, r#"{"data":{"type":"articles","id":"1"}}"#);
//! assert!(report.is_compliant());
//! ```

// Re-export all stable types from the implementation crates.
pub use accord_core::{
    CheckReport, ErrorDocument, ErrorObject, ErrorSource, Outcome, PathError, Payload,
    QueryParameters, QueryValue, RelationshipPath, ResourceIdentifier, SortDirection, SortError,
    SortField, SparseFieldSets,
};
pub use accord_document::{
    JsonPointer, RelationshipExpectation, ResourceExpectation, Violation, check_relationship,
    check_relationship_value, check_resource, check_resource_value, is_valid_member_name,
};
pub use accord_query::{QueryParameterError, parse_query};
pub use accord_resource::{Field, Resource, serialize_resource};

#[cfg(test)]
mod tests;
