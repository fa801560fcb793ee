//! The JSON:API error object and its source locator.
//!
//! Every structural violation found by the compliance checkers, and every
//! failure surfaced through an [`Outcome`](crate::Outcome), is reported as
//! an [`ErrorObject`]: an HTTP status, a short title, a human-readable
//! detail, and an optional [`ErrorSource`] locating the offending document
//! member by JSON pointer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Locates the document member an error refers to.
///
/// # Example
///
/// ```
/// use accord_core::ErrorSource;
///
/// let source = ErrorSource::pointer("/data/type");
/// assert_eq!(source.as_pointer(), "/data/type");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorSource {
    /// JSON pointer (RFC 6901) to the offending member.
    pointer: String,
}

impl ErrorSource {
    /// Creates a source from a JSON pointer.
    #[must_use]
    pub fn pointer(pointer: impl Into<String>) -> Self {
        Self {
            pointer: pointer.into(),
        }
    }

    /// Returns the JSON pointer.
    #[must_use]
    pub fn as_pointer(&self) -> &str {
        &self.pointer
    }
}

impl fmt::Display for ErrorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pointer)
    }
}

/// A single JSON:API error object.
///
/// Serializes to the wire shape consumed by error-document renderers:
///
/// ```json
/// { "status": "400", "title": "...", "detail": "...",
///   "source": { "pointer": "/data" } }
/// ```
///
/// The `source` member is omitted when no pointer applies (for example a
/// query-string error, whose locator is a parameter name rather than a
/// document member).
///
/// # Example
///
/// ```
/// use accord_core::ErrorObject;
///
/// let error = ErrorObject::with_pointer(
///     "400",
///     "Required Member Missing",
///     "the member 'data' is required",
///     "/data",
/// );
/// assert_eq!(error.status(), "400");
/// assert_eq!(error.pointer(), Some("/data"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorObject {
    /// HTTP status code, as a string per the JSON:API error object shape.
    status: String,
    /// Short, stable summary of the error class.
    title: String,
    /// Human-readable explanation specific to this occurrence.
    detail: String,
    /// Locator for the offending member, when one applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<ErrorSource>,
}

impl ErrorObject {
    /// Creates an error object with an explicit (possibly absent) source.
    #[must_use]
    pub const fn new(
        status: String,
        title: String,
        detail: String,
        source: Option<ErrorSource>,
    ) -> Self {
        Self {
            status,
            title,
            detail,
            source,
        }
    }

    /// Creates an error object pointing at a document member.
    #[must_use]
    pub fn with_pointer(
        status: impl Into<String>,
        title: impl Into<String>,
        detail: impl Into<String>,
        pointer: impl Into<String>,
    ) -> Self {
        Self {
            status: status.into(),
            title: title.into(),
            detail: detail.into(),
            source: Some(ErrorSource::pointer(pointer)),
        }
    }

    /// Creates an error object with no source locator.
    #[must_use]
    pub fn without_source(
        status: impl Into<String>,
        title: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            status: status.into(),
            title: title.into(),
            detail: detail.into(),
            source: None,
        }
    }

    /// Returns the HTTP status string.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the error title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the occurrence-specific detail.
    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// Returns the source locator, if any.
    #[must_use]
    pub const fn source(&self) -> Option<&ErrorSource> {
        self.source.as_ref()
    }

    /// Returns the source pointer, if any.
    #[must_use]
    pub fn pointer(&self) -> Option<&str> {
        self.source.as_ref().map(ErrorSource::as_pointer)
    }
}

impl fmt::Display for ErrorObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.detail)
    }
}
