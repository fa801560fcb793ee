//! Query-string parsing for the Accord JSON:API toolkit.
//!
//! This crate turns the raw query mapping supplied by the HTTP layer into
//! the validated, immutable [`QueryParameters`](accord_core::QueryParameters)
//! value object: dotted include paths, sparse field sets, ordered sort
//! fields, and opaque page/filter mappings. Parameters outside the reserved
//! JSON:API namespace pass through untouched.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use accord_core::QueryValue;
//! use accord_query::parse_query;
//!
//! let mut raw = BTreeMap::new();
//! raw.insert(String::from("sort"), QueryValue::from("-created,title"));
//! raw.insert(String::from("debug"), QueryValue::from("1"));
//!
//! let parameters = parse_query(&raw).expect("well-formed query");
//! assert_eq!(parameters.sort().map(<[_]>::len), Some(2));
//! assert!(parameters.unrecognised().contains_key("debug"));
//! ```

mod error;
mod parser;

pub use error::QueryParameterError;
pub use parser::parse_query;

#[cfg(test)]
mod tests;
