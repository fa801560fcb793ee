//! The top-level JSON:API error document.

use serde::{Deserialize, Serialize};

use crate::error::ErrorObject;
use crate::report::CheckReport;

/// A JSON:API failure body: `{ "errors": [...] }`.
///
/// This is the document a collaborator serializes into a 4xx response when
/// a compliance check or query-parameter parse fails. It carries the error
/// list verbatim; mapping errors to a single response status is the
/// collaborator's concern.
///
/// # Example
///
/// ```
/// use accord_core::{CheckReport, ErrorDocument, ErrorObject};
///
/// let report = CheckReport::new(vec![ErrorObject::with_pointer(
///     "400",
///     "Required Member Missing",
///     "the member 'data' is required",
///     "/data",
/// )]);
/// let document = ErrorDocument::from(report);
/// let json = serde_json::to_value(&document).expect("serialize");
/// assert!(json.get("errors").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDocument {
    errors: Vec<ErrorObject>,
}

impl ErrorDocument {
    /// Creates an error document from a list of errors.
    #[must_use]
    pub const fn new(errors: Vec<ErrorObject>) -> Self {
        Self { errors }
    }

    /// Returns the errors in the document.
    #[must_use]
    pub fn errors(&self) -> &[ErrorObject] {
        &self.errors
    }
}

impl From<CheckReport> for ErrorDocument {
    fn from(report: CheckReport) -> Self {
        Self {
            errors: report.into_errors(),
        }
    }
}
