//! Compliance check reports.
//!
//! A [`CheckReport`] is the outcome of running a document compliance check:
//! an ordered list of [`ErrorObject`] entries, empty when the document is
//! compliant. Errors appear in discovery order and are never deduplicated,
//! so callers can assert exact counts and pointers.

use serde::{Deserialize, Serialize};

use crate::error::ErrorObject;

/// Summarises the first error in a report for the `Display` impl.
fn error_summary(errors: &[ErrorObject]) -> String {
    errors.first().map_or_else(
        || String::from("compliant document"),
        |error| format!("{}: {}", error.title(), error.detail()),
    )
}

/// The result of a document compliance check.
///
/// Immutable once produced. A report with no errors means the document
/// satisfied every applicable rule; a report with errors lists one
/// [`ErrorObject`] per violated rule, in the order the violations were
/// discovered.
///
/// Implements [`std::error::Error`] so a failed check can travel through
/// error-propagation seams unchanged.
///
/// # Example
///
/// ```
/// use accord_core::{CheckReport, ErrorObject};
///
/// let report = CheckReport::new(vec![ErrorObject::with_pointer(
///     "400",
///     "Required Member Missing",
///     "the member 'data' is required",
///     "/data",
/// )]);
/// assert!(report.has_errors());
/// assert_eq!(report.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{}", error_summary(&self.errors))]
pub struct CheckReport {
    errors: Vec<ErrorObject>,
}

impl CheckReport {
    /// Creates a report from a list of errors, preserving their order.
    #[must_use]
    pub const fn new(errors: Vec<ErrorObject>) -> Self {
        Self { errors }
    }

    /// Creates an empty report for a compliant document.
    #[must_use]
    pub const fn compliant() -> Self {
        Self { errors: Vec::new() }
    }

    /// Returns `true` if the checked document violated no rules.
    #[must_use]
    pub fn is_compliant(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns `true` if the checked document violated at least one rule.
    ///
    /// Always the negation of [`is_compliant`](Self::is_compliant).
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the collected errors in discovery order.
    #[must_use]
    pub fn errors(&self) -> &[ErrorObject] {
        &self.errors
    }

    /// Consumes the report, returning the collected errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ErrorObject> {
        self.errors
    }

    /// Returns the number of collected errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` if the report contains no errors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl FromIterator<ErrorObject> for CheckReport {
    fn from_iter<I: IntoIterator<Item = ErrorObject>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}
