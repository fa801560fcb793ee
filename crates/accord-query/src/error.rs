//! Query parameter parse errors.

use accord_core::{ErrorObject, PathError};
use thiserror::Error;

/// Errors produced while parsing the raw query mapping.
///
/// Every variant names the offending parameter so the embedder can point
/// the client at what to fix. Parse errors are recoverable by design: the
/// embedder renders them into a 400-class JSON:API response via
/// [`to_error_object`](Self::to_error_object).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryParameterError {
    /// A parameter that requires a value was supplied empty.
    #[error("query parameter '{parameter}' must not be empty")]
    Empty {
        /// The offending parameter.
        parameter: String,
    },

    /// A parameter that requires text was supplied as a map.
    #[error("query parameter '{parameter}' must be a string value")]
    ExpectedText {
        /// The offending parameter.
        parameter: String,
    },

    /// A parameter that requires a map was supplied as text.
    #[error("query parameter '{parameter}' must be a map of values")]
    ExpectedMap {
        /// The offending parameter.
        parameter: String,
    },

    /// A comma-separated list contains an empty member.
    #[error("query parameter '{parameter}' contains an empty member")]
    EmptyMember {
        /// The offending parameter.
        parameter: String,
    },

    /// An include member is not a valid relationship path.
    #[error("query parameter '{parameter}' holds an invalid relationship path: {source}")]
    Path {
        /// The offending parameter.
        parameter: String,
        /// The underlying path error.
        #[source]
        source: PathError,
    },
}

impl QueryParameterError {
    /// Creates an `Empty` error for a parameter.
    #[must_use]
    pub fn empty(parameter: impl Into<String>) -> Self {
        Self::Empty {
            parameter: parameter.into(),
        }
    }

    /// Creates an `ExpectedText` error for a parameter.
    #[must_use]
    pub fn expected_text(parameter: impl Into<String>) -> Self {
        Self::ExpectedText {
            parameter: parameter.into(),
        }
    }

    /// Creates an `ExpectedMap` error for a parameter.
    #[must_use]
    pub fn expected_map(parameter: impl Into<String>) -> Self {
        Self::ExpectedMap {
            parameter: parameter.into(),
        }
    }

    /// Creates an `EmptyMember` error for a parameter.
    #[must_use]
    pub fn empty_member(parameter: impl Into<String>) -> Self {
        Self::EmptyMember {
            parameter: parameter.into(),
        }
    }

    /// Creates a `Path` error for a parameter.
    #[must_use]
    pub fn path(parameter: impl Into<String>, source: PathError) -> Self {
        Self::Path {
            parameter: parameter.into(),
            source,
        }
    }

    /// Returns the name of the offending parameter.
    #[must_use]
    pub fn parameter(&self) -> &str {
        match self {
            Self::Empty { parameter }
            | Self::ExpectedText { parameter }
            | Self::ExpectedMap { parameter }
            | Self::EmptyMember { parameter }
            | Self::Path { parameter, .. } => parameter,
        }
    }

    /// Renders this error as a JSON:API error object.
    ///
    /// Query-string errors locate their offender by parameter name, not by
    /// document pointer, so the error object carries no source member.
    #[must_use]
    pub fn to_error_object(&self) -> ErrorObject {
        ErrorObject::without_source("400", "Invalid Query Parameter", self.to_string())
    }
}
