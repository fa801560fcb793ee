//! Raw query-string values.
//!
//! The HTTP layer hands the query parser a string-keyed mapping whose
//! values are either text (`sort=-created`) or nested maps produced by
//! bracket syntax (`fields[articles]=title`). [`QueryValue`] models that
//! tree. Page and filter parameters stay in this raw form on
//! [`QueryParameters`](crate::QueryParameters); their structure is owned by
//! the paginator or filter implementation, not interpreted here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A raw query-string value: text or a nested map.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use accord_core::QueryValue;
///
/// let text = QueryValue::from("10");
/// assert_eq!(text.as_text(), Some("10"));
///
/// let mut nested = BTreeMap::new();
/// nested.insert(String::from("size"), QueryValue::from("10"));
/// let map = QueryValue::Map(nested);
/// assert!(map.as_text().is_none());
/// assert!(map.as_map().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    /// A plain textual value.
    Text(String),
    /// A nested mapping from bracket syntax.
    Map(BTreeMap<String, QueryValue>),
}

impl QueryValue {
    /// Returns the text content, when this value is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Map(_) => None,
        }
    }

    /// Returns the nested map, when this value is a map.
    #[must_use]
    pub const fn as_map(&self) -> Option<&BTreeMap<String, QueryValue>> {
        match self {
            Self::Map(map) => Some(map),
            Self::Text(_) => None,
        }
    }

    /// Returns `true` when this value is text.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Returns `true` when this value is a nested map.
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }
}

impl From<&str> for QueryValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for QueryValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<BTreeMap<String, QueryValue>> for QueryValue {
    fn from(map: BTreeMap<String, QueryValue>) -> Self {
        Self::Map(map)
    }
}
