//! Resource object serialization for the Accord JSON:API toolkit.
//!
//! Models declare their serializable surface as a list of typed
//! [`Field`]s — attributes, to-one and to-many relationships, and
//! conditional wrappers — and [`serialize_resource`] turns that
//! declaration into a JSON:API resource object, honouring any sparse
//! field sets the request supplied. Request-scoped configuration is always
//! passed explicitly; nothing is resolved from ambient state.
//!
//! # Example
//!
//! ```
//! use accord_core::ResourceIdentifier;
//! use accord_resource::{Field, Resource, serialize_resource};
//!
//! struct Article;
//!
//! impl Resource for Article {
//!     fn resource_type(&self) -> &str {
//!         "articles"
//!     }
//!     fn id(&self) -> String {
//!         String::from("1")
//!     }
//!     fn fields(&self) -> Vec<Field> {
//!         vec![
//!             Field::attribute("title", "Accord"),
//!             Field::to_one("author", Some(ResourceIdentifier::new("people", "9"))),
//!         ]
//!     }
//! }
//!
//! let object = serialize_resource(&Article, None);
//! assert_eq!(object["relationships"]["author"]["data"]["id"], "9");
//! ```

mod field;
mod serializer;

pub use field::Field;
pub use serializer::{Resource, serialize_resource};

#[cfg(test)]
mod tests;
