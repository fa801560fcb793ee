//! JSON:API document compliance checking for the Accord toolkit.
//!
//! This crate validates inbound resource and relationship documents
//! against the JSON:API specification's structural rules before they reach
//! application code. A check is configured with an immutable expectation
//! (the resource type, and optionally the id or relationship field the
//! request addresses), then run against raw JSON text. Every applicable
//! violation is collected into a
//! [`CheckReport`](accord_core::CheckReport) — checks never stop at the
//! first failure, and never panic on malformed input.
//!
//! # Core types
//!
//! - [`ResourceExpectation`] and [`check_resource`] — resource documents
//! - [`RelationshipExpectation`] and [`check_relationship`] —
//!   relationship documents
//! - [`Violation`] — the structural rule taxonomy
//! - [`JsonPointer`] — RFC 6901 pointers for error sources
//!
//! # Example
//!
//! ```
//! use accord_document::{ResourceExpectation, check_resource};
//!
//! let expectation = ResourceExpectation::expect_with_id("articles", "1");
//! let report = check_resource(&expectation, r#"{"data":{"type":"people","id":"1"}}"#);
//! assert!(report.has_errors());
//! assert_eq!(report.errors().first().map(|e| e.status()), Some("409"));
//! ```

mod expectation;
mod linkage;
mod member;
mod pointer;
mod relationship;
mod resource;
mod violation;

pub use expectation::{RelationshipExpectation, ResourceExpectation};
pub use member::is_valid_member_name;
pub use pointer::JsonPointer;
pub use relationship::{check_relationship, check_relationship_value};
pub use resource::{check_resource, check_resource_value};
pub use violation::Violation;

#[cfg(test)]
mod tests;
