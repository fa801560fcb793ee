//! Resource identifier objects.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A `{type, id}` pair referencing a resource without its attributes.
///
/// # Example
///
/// ```
/// use accord_core::ResourceIdentifier;
///
/// let identifier = ResourceIdentifier::new("articles", "1");
/// let json = serde_json::to_value(&identifier).expect("serialize");
/// assert_eq!(json["type"], "articles");
/// assert_eq!(json["id"], "1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    /// The resource type.
    #[serde(rename = "type")]
    resource_type: String,
    /// The resource id.
    id: String,
}

impl ResourceIdentifier {
    /// Creates an identifier from a type and id.
    #[must_use]
    pub fn new(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }

    /// Returns the resource type.
    #[must_use]
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// Returns the resource id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for ResourceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.resource_type, self.id)
    }
}
