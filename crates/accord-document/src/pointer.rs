//! JSON pointer construction.
//!
//! Compliance errors locate their offending member with an RFC 6901 JSON
//! pointer. Pointers here are built top-down while walking a document, so
//! the builder is immutable: `child` returns a new pointer one level
//! deeper, leaving the parent usable for sibling members.

use std::fmt;

/// An RFC 6901 JSON pointer.
///
/// The root pointer is the empty string; each segment is prefixed with `/`
/// and escapes `~` as `~0` and `/` as `~1`.
///
/// # Example
///
/// ```
/// use accord_document::JsonPointer;
///
/// let data = JsonPointer::root().child("data");
/// let first_id = data.child("relationships").child("tags").child_index(0);
/// assert_eq!(data.as_str(), "/data");
/// assert_eq!(first_id.as_str(), "/data/relationships/tags/0");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct JsonPointer {
    text: String,
}

impl JsonPointer {
    /// Returns the whole-document pointer.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Returns the pointer for a named member of this location.
    #[must_use]
    pub fn child(&self, segment: &str) -> Self {
        let escaped = segment.replace('~', "~0").replace('/', "~1");
        Self {
            text: format!("{}/{escaped}", self.text),
        }
    }

    /// Returns the pointer for an array element of this location.
    #[must_use]
    pub fn child_index(&self, index: usize) -> Self {
        Self {
            text: format!("{}/{index}", self.text),
        }
    }

    /// Returns the pointer text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consumes the pointer, returning its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
