//! Relationship paths for include parameters.
//!
//! A [`RelationshipPath`] is a non-empty, ordered sequence of relationship
//! member names, written and parsed in dot-joined form (`author.comments`).
//! Parsing and display round-trip: `path.to_string().parse()` reproduces an
//! equal path.

use std::fmt;
use std::str::FromStr;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors encountered while constructing a [`RelationshipPath`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The path has no segments at all.
    #[error("relationship path must not be empty")]
    Empty,
    /// A dot-delimited segment is the empty string.
    #[error("relationship path '{path}' contains an empty segment")]
    EmptySegment {
        /// The offending path as written.
        path: String,
    },
}

/// A non-empty dotted relationship path.
///
/// # Example
///
/// ```
/// use accord_core::RelationshipPath;
///
/// let path: RelationshipPath = "author.comments".parse().expect("valid path");
/// assert_eq!(path.len(), 2);
/// assert_eq!(path.first(), "author");
/// assert_eq!(path.to_string(), "author.comments");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RelationshipPath {
    segments: Vec<String>,
}

impl RelationshipPath {
    /// Creates a path from pre-split segments.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::Empty`] for an empty segment list and
    /// [`PathError::EmptySegment`] if any segment is the empty string.
    pub fn new(segments: Vec<String>) -> Result<Self, PathError> {
        if segments.is_empty() {
            return Err(PathError::Empty);
        }
        if segments.iter().any(String::is_empty) {
            return Err(PathError::EmptySegment {
                path: segments.join("."),
            });
        }
        Ok(Self { segments })
    }

    /// Returns the path segments in order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns the first segment.
    ///
    /// The path is non-empty by construction, so a first segment always
    /// exists.
    #[must_use]
    pub fn first(&self) -> &str {
        self.segments.first().map_or("", String::as_str)
    }

    /// Returns the path with its first segment removed, or `None` for a
    /// single-segment path.
    #[must_use]
    pub fn rest(&self) -> Option<Self> {
        match self.segments.split_first() {
            Some((_, rest)) if !rest.is_empty() => Some(Self {
                segments: rest.to_vec(),
            }),
            _ => None,
        }
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always `false`: a path has at least one segment by construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for RelationshipPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

impl FromStr for RelationshipPath {
    type Err = PathError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input.is_empty() {
            return Err(PathError::Empty);
        }
        let segments: Vec<String> = input.split('.').map(str::to_owned).collect();
        Self::new(segments)
    }
}

impl Serialize for RelationshipPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RelationshipPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
