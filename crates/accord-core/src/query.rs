//! Parsed query parameters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::fieldsets::SparseFieldSets;
use crate::path::RelationshipPath;
use crate::sort::SortField;
use crate::value::QueryValue;

/// The validated query parameters of one request.
///
/// Built once by the query parser and read-only thereafter. Every
/// recognised parameter is an `Option`, keeping the distinction between an
/// absent parameter (`None`, meaning "use the server default") and a
/// present-but-empty one. Unrecognised keys pass through verbatim in
/// [`unrecognised`](Self::unrecognised).
///
/// # Example
///
/// ```
/// use accord_core::QueryParameters;
///
/// let parameters = QueryParameters::empty();
/// assert!(parameters.include().is_none());
/// assert!(parameters.unrecognised().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParameters {
    /// Ordered include paths, as given on the wire.
    include: Option<Vec<RelationshipPath>>,
    /// Sparse field sets keyed by resource type.
    fields: Option<SparseFieldSets>,
    /// Sort fields in order of appearance.
    sort: Option<Vec<SortField>>,
    /// Opaque page parameters, paginator-defined.
    page: Option<BTreeMap<String, QueryValue>>,
    /// Opaque filter parameters, filter-implementation-defined.
    filter: Option<BTreeMap<String, QueryValue>>,
    /// Parameters outside the reserved JSON:API namespace.
    unrecognised: BTreeMap<String, QueryValue>,
}

impl QueryParameters {
    /// Assembles query parameters from already-validated parts.
    #[must_use]
    pub const fn new(
        include: Option<Vec<RelationshipPath>>,
        fields: Option<SparseFieldSets>,
        sort: Option<Vec<SortField>>,
        page: Option<BTreeMap<String, QueryValue>>,
        filter: Option<BTreeMap<String, QueryValue>>,
        unrecognised: BTreeMap<String, QueryValue>,
    ) -> Self {
        Self {
            include,
            fields,
            sort,
            page,
            filter,
            unrecognised,
        }
    }

    /// Creates parameters with nothing requested.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            include: None,
            fields: None,
            sort: None,
            page: None,
            filter: None,
            unrecognised: BTreeMap::new(),
        }
    }

    /// Returns the include paths, if the parameter was supplied.
    #[must_use]
    pub fn include(&self) -> Option<&[RelationshipPath]> {
        self.include.as_deref()
    }

    /// Returns the sparse field sets, if the parameter was supplied.
    #[must_use]
    pub const fn fields(&self) -> Option<&SparseFieldSets> {
        self.fields.as_ref()
    }

    /// Returns the sort fields, if the parameter was supplied.
    #[must_use]
    pub fn sort(&self) -> Option<&[SortField]> {
        self.sort.as_deref()
    }

    /// Returns the raw page parameters, if supplied.
    #[must_use]
    pub const fn page(&self) -> Option<&BTreeMap<String, QueryValue>> {
        self.page.as_ref()
    }

    /// Returns the raw filter parameters, if supplied.
    #[must_use]
    pub const fn filter(&self) -> Option<&BTreeMap<String, QueryValue>> {
        self.filter.as_ref()
    }

    /// Returns the parameters outside the reserved namespace.
    #[must_use]
    pub const fn unrecognised(&self) -> &BTreeMap<String, QueryValue> {
        &self.unrecognised
    }
}
