//! Serializable resource fields.
//!
//! A resource declares its serializable surface as a list of [`Field`]s,
//! dispatched by kind: plain attributes, to-one and to-many relationships,
//! and conditional wrappers that include or drop an inner field per
//! request. This replaces implicit per-field delegation with one explicit,
//! matchable type.

use serde_json::Value;

use accord_core::ResourceIdentifier;

/// One serializable field of a resource.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// A plain attribute serialized under `attributes`.
    Attribute {
        /// The member name.
        name: String,
        /// The attribute value, already JSON-shaped.
        value: Value,
    },
    /// A to-one relationship serialized under `relationships`.
    ToOne {
        /// The member name.
        name: String,
        /// The related resource, or `None` for an empty to-one.
        identifier: Option<ResourceIdentifier>,
    },
    /// A to-many relationship serialized under `relationships`.
    ToMany {
        /// The member name.
        name: String,
        /// The related resources, possibly empty.
        identifiers: Vec<ResourceIdentifier>,
    },
    /// A field included only when `present` is true.
    Conditional {
        /// Whether the inner field participates in serialization.
        present: bool,
        /// The wrapped field.
        field: Box<Field>,
    },
}

impl Field {
    /// Creates an attribute field.
    #[must_use]
    pub fn attribute(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Attribute {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Creates a to-one relationship field.
    #[must_use]
    pub fn to_one(name: impl Into<String>, identifier: Option<ResourceIdentifier>) -> Self {
        Self::ToOne {
            name: name.into(),
            identifier,
        }
    }

    /// Creates a to-many relationship field.
    #[must_use]
    pub fn to_many(name: impl Into<String>, identifiers: Vec<ResourceIdentifier>) -> Self {
        Self::ToMany {
            name: name.into(),
            identifiers,
        }
    }

    /// Wraps a field so it only serializes when `present` is true.
    #[must_use]
    pub fn conditional(present: bool, field: Self) -> Self {
        Self::Conditional {
            present,
            field: Box::new(field),
        }
    }

    /// Returns the member name this field serializes under.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Attribute { name, .. }
            | Self::ToOne { name, .. }
            | Self::ToMany { name, .. } => name,
            Self::Conditional { field, .. } => field.name(),
        }
    }
}
