//! Core data model and error reporting types for the Accord JSON:API
//! toolkit.
//!
//! This crate provides the canonical type definitions used throughout the
//! Accord pipeline: query parameter value objects, relationship paths,
//! sparse field sets, sort fields, the JSON:API error object, and the
//! report/outcome carriers produced by compliance checking and dispatched
//! operations.  It is re-exported by the `accord` facade crate for stable
//! public consumption.
//!
//! # Core types
//!
//! - [`QueryParameters`] — validated query parameters of one request
//! - [`RelationshipPath`] — non-empty dotted include path
//! - [`SparseFieldSets`] — per-type field restrictions
//! - [`SortField`] and [`SortDirection`] — ordered sort members
//! - [`QueryValue`] — raw query-string value tree
//! - [`ErrorObject`] and [`ErrorSource`] — the JSON:API error object
//! - [`CheckReport`] — ordered, never-deduplicated compliance errors
//! - [`ErrorDocument`] — the `{"errors": [...]}` failure body
//! - [`Outcome`] and [`Payload`] — generic operation result with explicit
//!   absent/null/data tri-state
//! - [`ResourceIdentifier`] — a `{type, id}` reference
//!
//! # Example
//!
//! ```
//! use accord_core::{RelationshipPath, SortDirection, SortField};
//!
//! let path: RelationshipPath = "author.comments".parse().expect("valid path");
//! assert_eq!(path.to_string(), "author.comments");
//!
//! let sort: SortField = "-created".parse().expect("valid sort member");
//! assert_eq!(sort.direction(), SortDirection::Descending);
//! ```

mod document;
mod error;
mod fieldsets;
mod identifier;
mod outcome;
mod path;
mod query;
mod report;
mod sort;
mod value;

pub use document::ErrorDocument;
pub use error::{ErrorObject, ErrorSource};
pub use fieldsets::SparseFieldSets;
pub use identifier::ResourceIdentifier;
pub use outcome::{Outcome, Payload};
pub use path::{PathError, RelationshipPath};
pub use query::QueryParameters;
pub use report::CheckReport;
pub use sort::{SortDirection, SortError, SortField};
pub use value::QueryValue;

#[cfg(test)]
mod tests;
