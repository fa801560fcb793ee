//! Check expectations.
//!
//! A checker's configuration is an immutable expectation struct built
//! before any document is seen. The expectation can be reused for any
//! number of checks; nothing about a check mutates it.

/// What a resource document check expects to see.
///
/// Built with [`expect`](Self::expect) for create-style requests (no id
/// known yet) or [`expect_with_id`](Self::expect_with_id) for update-style
/// requests addressing an existing resource.
///
/// # Example
///
/// ```
/// use accord_document::ResourceExpectation;
///
/// let expectation = ResourceExpectation::expect_with_id("articles", "1");
/// assert_eq!(expectation.resource_type(), "articles");
/// assert_eq!(expectation.id(), Some("1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceExpectation {
    resource_type: String,
    id: Option<String>,
}

impl ResourceExpectation {
    /// Expects a resource of the given type, with no id requirement.
    #[must_use]
    pub fn expect(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            id: None,
        }
    }

    /// Expects a resource of the given type carrying the given id.
    #[must_use]
    pub fn expect_with_id(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            id: Some(id.into()),
        }
    }

    /// Returns the expected resource type.
    #[must_use]
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// Returns the expected id, if one is required.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// What a relationship document check expects.
///
/// The owning resource type and field name appear in error details only;
/// relationship documents carry no structural trace of their owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipExpectation {
    resource_type: String,
    field: String,
}

impl RelationshipExpectation {
    /// Expects the named relationship of the given resource type.
    #[must_use]
    pub fn expect(resource_type: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            field: field.into(),
        }
    }

    /// Returns the owning resource type.
    #[must_use]
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// Returns the relationship field name.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }
}
