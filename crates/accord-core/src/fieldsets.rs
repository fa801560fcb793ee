//! Sparse field sets.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-resource-type restrictions on which fields to include.
///
/// The map distinguishes three cases a serializer must keep apart:
///
/// - a type that is not in the map is unrestricted
///   ([`fields_for`](Self::fields_for) returns `None`);
/// - a type mapped to an empty list is restricted to *no* fields
///   (`Some(&[])`);
/// - a type mapped to a non-empty list is restricted to exactly those
///   fields.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use accord_core::SparseFieldSets;
///
/// let mut sets = BTreeMap::new();
/// sets.insert(
///     String::from("articles"),
///     vec![String::from("title"), String::from("body")],
/// );
/// let fields = SparseFieldSets::new(sets);
/// assert_eq!(fields.fields_for("articles").map(<[String]>::len), Some(2));
/// assert!(fields.fields_for("people").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SparseFieldSets {
    sets: BTreeMap<String, Vec<String>>,
}

impl SparseFieldSets {
    /// Creates field sets from a type-to-fields map.
    #[must_use]
    pub const fn new(sets: BTreeMap<String, Vec<String>>) -> Self {
        Self { sets }
    }

    /// Returns the field restriction for a resource type.
    ///
    /// `None` means the type is unrestricted; an empty slice means the type
    /// is restricted to no fields at all.
    #[must_use]
    pub fn fields_for(&self, resource_type: &str) -> Option<&[String]> {
        self.sets.get(resource_type).map(Vec::as_slice)
    }

    /// Returns `true` when a field is allowed for a resource type.
    ///
    /// Unrestricted types allow every field.
    #[must_use]
    pub fn allows(&self, resource_type: &str, field: &str) -> bool {
        self.fields_for(resource_type)
            .is_none_or(|fields| fields.iter().any(|allowed| allowed == field))
    }

    /// Iterates over the restricted types and their field lists, in
    /// deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.sets
            .iter()
            .map(|(resource_type, fields)| (resource_type.as_str(), fields.as_slice()))
    }

    /// Returns the number of restricted types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Returns `true` when no type is restricted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
