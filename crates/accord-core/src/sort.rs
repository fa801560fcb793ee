//! Sort fields and directions.
//!
//! JSON:API sort members are field names with an optional leading `-` for
//! descending order. Order of appearance is significant, so callers keep
//! sort fields in lists rather than sets.

use std::fmt;
use std::str::FromStr;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{Display, EnumString};
use thiserror::Error;

/// Sort order for a single field.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, Hash, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SortDirection {
    /// Ascending order (the JSON:API default).
    #[default]
    Ascending,
    /// Descending order, written with a leading `-`.
    Descending,
}

/// Errors encountered while parsing a [`SortField`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// The sort member is empty, or is a bare `-` with no field name.
    #[error("sort field must not be empty")]
    Empty,
}

/// A single sort member: a field name plus a direction.
///
/// # Example
///
/// ```
/// use accord_core::{SortDirection, SortField};
///
/// let field: SortField = "-created".parse().expect("valid sort member");
/// assert_eq!(field.name(), "created");
/// assert_eq!(field.direction(), SortDirection::Descending);
/// assert_eq!(field.to_string(), "-created");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortField {
    name: String,
    direction: SortDirection,
}

impl SortField {
    /// Creates a sort field with an explicit direction.
    #[must_use]
    pub fn new(name: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            name: name.into(),
            direction,
        }
    }

    /// Returns the field name, without any direction prefix.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the sort direction.
    #[must_use]
    pub const fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Returns `true` when the field sorts descending.
    #[must_use]
    pub fn is_descending(&self) -> bool {
        self.direction == SortDirection::Descending
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            SortDirection::Ascending => f.write_str(&self.name),
            SortDirection::Descending => write!(f, "-{}", self.name),
        }
    }
}

impl FromStr for SortField {
    type Err = SortError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (name, direction) = input.strip_prefix('-').map_or(
            (input, SortDirection::Ascending),
            |stripped| (stripped, SortDirection::Descending),
        );
        if name.is_empty() {
            return Err(SortError::Empty);
        }
        Ok(Self {
            name: name.to_owned(),
            direction,
        })
    }
}

impl Serialize for SortField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SortField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
