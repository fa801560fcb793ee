//! The structural violation taxonomy.
//!
//! Every rule a compliance check can break is a [`Violation`] variant. The
//! taxonomy is data, not control flow: checkers collect violations and
//! convert them into wire-level [`ErrorObject`]s at the end, so a single
//! check reports every applicable violation rather than stopping at the
//! first.

use accord_core::ErrorObject;
use thiserror::Error;

/// A single structural rule violation found in a document.
///
/// Type and id mismatches map to HTTP 409 (the document contradicts the
/// resource addressed by the request); everything else maps to 400.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// The request body is not parseable JSON.
    #[error("the document is not valid JSON: {message}")]
    InvalidJson {
        /// The parser's description of the failure.
        message: String,
    },

    /// The document's top level is not a JSON object.
    #[error("the document must be an object")]
    InvalidDocument,

    /// A required member is absent.
    #[error("the member '{member}' is required")]
    MissingMember {
        /// Pointer to where the member should be.
        pointer: String,
        /// The missing member's name.
        member: String,
    },

    /// A member is present with the wrong JSON shape.
    #[error("the member '{member}' must be {expected}")]
    InvalidShape {
        /// Pointer to the offending member.
        pointer: String,
        /// The offending member's name.
        member: String,
        /// Human-readable description of the required shape.
        expected: String,
    },

    /// The resource's `type` does not match the expected type.
    #[error("the resource type must be '{expected}', got '{actual}'")]
    TypeMismatch {
        /// Pointer to the `type` member.
        pointer: String,
        /// The type the checker expected.
        expected: String,
        /// The type the document carried.
        actual: String,
    },

    /// The resource's `id` does not match the expected id.
    #[error("the resource id must be '{expected}', got '{actual}'")]
    IdMismatch {
        /// Pointer to the `id` member.
        pointer: String,
        /// The id the checker expected.
        expected: String,
        /// The id the document carried.
        actual: String,
    },

    /// A field is declared in both `attributes` and `relationships`.
    #[error("the field '{field}' is declared in both attributes and relationships")]
    FieldCollision {
        /// Pointer to the relationships-side declaration.
        pointer: String,
        /// The colliding field name.
        field: String,
    },
}

impl Violation {
    /// Returns the HTTP status this violation maps to.
    #[must_use]
    pub const fn status(&self) -> &'static str {
        match self {
            Self::TypeMismatch { .. } | Self::IdMismatch { .. } => "409",
            Self::InvalidJson { .. }
            | Self::InvalidDocument
            | Self::MissingMember { .. }
            | Self::InvalidShape { .. }
            | Self::FieldCollision { .. } => "400",
        }
    }

    /// Returns the stable title for this violation class.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::InvalidJson { .. } => "Invalid JSON",
            Self::InvalidDocument => "Invalid Document",
            Self::MissingMember { .. } => "Required Member Missing",
            Self::InvalidShape { .. } => "Invalid Member Shape",
            Self::TypeMismatch { .. } => "Resource Type Mismatch",
            Self::IdMismatch { .. } => "Resource Id Mismatch",
            Self::FieldCollision { .. } => "Field Declared Twice",
        }
    }

    /// Returns the JSON pointer locating the violation.
    ///
    /// Whole-document violations use the root pointer (the empty string).
    #[must_use]
    pub fn pointer(&self) -> &str {
        match self {
            Self::InvalidJson { .. } | Self::InvalidDocument => "",
            Self::MissingMember { pointer, .. }
            | Self::InvalidShape { pointer, .. }
            | Self::TypeMismatch { pointer, .. }
            | Self::IdMismatch { pointer, .. }
            | Self::FieldCollision { pointer, .. } => pointer,
        }
    }

    /// Renders this violation as a wire-level error object.
    #[must_use]
    pub fn into_error_object(self) -> ErrorObject {
        let detail = self.to_string();
        ErrorObject::with_pointer(self.status(), self.title(), detail, self.pointer())
    }
}
