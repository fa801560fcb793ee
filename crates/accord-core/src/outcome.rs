//! Generic success/failure carrier for dispatched operations.
//!
//! An [`Outcome`] reports whether an operation succeeded, carrying either a
//! [`Payload`] (on success) or a non-empty error list (on failure). The
//! payload keeps the distinction between "the operation produced no
//! document", "the document's primary data is null", and "primary data is
//! present" as an explicit tri-state rather than an optional-of-optional.

use serde_json::Value;

use crate::error::ErrorObject;

/// The primary data carried by a successful [`Outcome`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Payload {
    /// The operation produced no document at all.
    #[default]
    Absent,
    /// The operation produced a document whose primary data is `null`.
    Null,
    /// The operation produced a document with primary data.
    Data(Value),
}

impl Payload {
    /// Returns `true` when no document was produced.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` when the document's primary data is `null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the primary data, when present.
    #[must_use]
    pub const fn data(&self) -> Option<&Value> {
        match self {
            Self::Data(value) => Some(value),
            Self::Absent | Self::Null => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum State {
    Succeeded(Payload),
    Failed(Vec<ErrorObject>),
}

/// The result of a dispatched command or query.
///
/// Exactly one of the two states holds: succeeded with a [`Payload`], or
/// failed with at least one [`ErrorObject`]. `did_succeed()` is always the
/// negation of `did_fail()`, and `errors()` is non-empty precisely when the
/// outcome failed. A failed outcome has no payload, by construction.
///
/// # Example
///
/// ```
/// use accord_core::{ErrorObject, Outcome, Payload};
///
/// let ok = Outcome::success(Payload::Null);
/// assert!(ok.did_succeed());
/// assert!(ok.errors().is_empty());
///
/// let failed = Outcome::failure(vec![ErrorObject::without_source(
///     "400",
///     "Invalid Query Parameter",
///     "include must not be empty",
/// )]);
/// assert!(failed.did_fail());
/// assert!(failed.payload().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    state: State,
}

impl Outcome {
    /// Creates a successful outcome carrying the given payload.
    #[must_use]
    pub const fn success(payload: Payload) -> Self {
        Self {
            state: State::Succeeded(payload),
        }
    }

    /// Creates a failed outcome carrying the given errors.
    ///
    /// The error list must be non-empty; an empty list indicates a bug in
    /// the caller, not a data error.
    #[must_use]
    pub fn failure(errors: Vec<ErrorObject>) -> Self {
        debug_assert!(!errors.is_empty(), "a failed outcome requires errors");
        Self {
            state: State::Failed(errors),
        }
    }

    /// Returns `true` if the operation succeeded.
    #[must_use]
    pub const fn did_succeed(&self) -> bool {
        matches!(self.state, State::Succeeded(_))
    }

    /// Returns `true` if the operation failed.
    ///
    /// Always the negation of [`did_succeed`](Self::did_succeed).
    #[must_use]
    pub const fn did_fail(&self) -> bool {
        matches!(self.state, State::Failed(_))
    }

    /// Returns the payload of a successful outcome, or `None` on failure.
    #[must_use]
    pub const fn payload(&self) -> Option<&Payload> {
        match &self.state {
            State::Succeeded(payload) => Some(payload),
            State::Failed(_) => None,
        }
    }

    /// Returns the collected errors; empty exactly when the outcome
    /// succeeded.
    #[must_use]
    pub fn errors(&self) -> &[ErrorObject] {
        match &self.state {
            State::Succeeded(_) => &[],
            State::Failed(errors) => errors,
        }
    }
}
