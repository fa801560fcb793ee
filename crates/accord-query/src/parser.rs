//! The query parameter parser.
//!
//! Turns the raw string-keyed mapping handed over by the HTTP layer into a
//! validated [`QueryParameters`] value object. The parser interprets only
//! the reserved JSON:API parameters (`include`, `fields`, `sort`, `page`,
//! `filter`); everything else passes through verbatim as unrecognised.

use std::collections::BTreeMap;

use tracing::debug;

use accord_core::{
    QueryParameters, QueryValue, RelationshipPath, SortError, SortField, SparseFieldSets,
};

use crate::error::QueryParameterError;

/// Parses a raw query mapping into [`QueryParameters`].
///
/// The parser is pure: the same input always yields the same result, and
/// nothing outside the returned value is touched. Well-formed input never
/// fails; structural violations fail with a [`QueryParameterError`] naming
/// the offending parameter.
///
/// # Errors
///
/// Returns a [`QueryParameterError`] when a reserved parameter has the
/// wrong shape (text where a map is required or vice versa), is empty, or
/// contains a malformed member.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use accord_core::QueryValue;
/// use accord_query::parse_query;
///
/// let mut raw = BTreeMap::new();
/// raw.insert(String::from("include"), QueryValue::from("author.comments,tags"));
/// let parameters = parse_query(&raw).expect("well-formed query");
/// assert_eq!(parameters.include().map(<[_]>::len), Some(2));
/// ```
pub fn parse_query(
    raw: &BTreeMap<String, QueryValue>,
) -> Result<QueryParameters, QueryParameterError> {
    debug!(parameters = raw.len(), "parsing query parameters");

    let mut include = None;
    let mut fields = None;
    let mut sort = None;
    let mut page = None;
    let mut filter = None;
    let mut unrecognised = BTreeMap::new();

    for (key, value) in raw {
        match key.as_str() {
            "include" => include = Some(parse_include(value)?),
            "fields" => fields = Some(parse_fields(value)?),
            "sort" => sort = Some(parse_sort(value)?),
            "page" => page = Some(expect_map("page", value)?.clone()),
            "filter" => filter = Some(expect_map("filter", value)?.clone()),
            _ => {
                unrecognised.insert(key.clone(), value.clone());
            }
        }
    }

    debug!(
        include = include.as_ref().map(Vec::len),
        sort = sort.as_ref().map(Vec::len),
        unrecognised = unrecognised.len(),
        "query parameters parsed"
    );

    Ok(QueryParameters::new(
        include,
        fields,
        sort,
        page,
        filter,
        unrecognised,
    ))
}

/// Parses the `include` parameter: a comma-separated list of dot-paths.
fn parse_include(value: &QueryValue) -> Result<Vec<RelationshipPath>, QueryParameterError> {
    let text = expect_text("include", value)?;
    if text.is_empty() {
        return Err(QueryParameterError::empty("include"));
    }
    text.split(',')
        .map(|member| {
            member
                .parse()
                .map_err(|source| QueryParameterError::path("include", source))
        })
        .collect()
}

/// Parses the `fields` parameter: a map of resource type to comma-separated
/// field list. An empty list is preserved as an explicitly empty set.
fn parse_fields(value: &QueryValue) -> Result<SparseFieldSets, QueryParameterError> {
    let map = expect_map("fields", value)?;
    let mut sets = BTreeMap::new();
    for (resource_type, list) in map {
        let parameter = format!("fields[{resource_type}]");
        let text = expect_text(&parameter, list)?;
        let fields = if text.is_empty() {
            Vec::new()
        } else {
            text.split(',')
                .map(|member| {
                    if member.is_empty() {
                        Err(QueryParameterError::empty_member(parameter.as_str()))
                    } else {
                        Ok(member.to_owned())
                    }
                })
                .collect::<Result<_, _>>()?
        };
        sets.insert(resource_type.clone(), fields);
    }
    Ok(SparseFieldSets::new(sets))
}

/// Parses the `sort` parameter: comma-separated field names with an
/// optional `-` prefix, order preserved.
fn parse_sort(value: &QueryValue) -> Result<Vec<SortField>, QueryParameterError> {
    let text = expect_text("sort", value)?;
    if text.is_empty() {
        return Err(QueryParameterError::empty("sort"));
    }
    text.split(',')
        .map(|member| {
            member.parse().map_err(|source| match source {
                SortError::Empty => QueryParameterError::empty_member("sort"),
            })
        })
        .collect()
}

/// Requires a textual value, naming the parameter on failure.
fn expect_text<'a>(
    parameter: &str,
    value: &'a QueryValue,
) -> Result<&'a str, QueryParameterError> {
    value
        .as_text()
        .ok_or_else(|| QueryParameterError::expected_text(parameter))
}

/// Requires a map value, naming the parameter on failure.
fn expect_map<'a>(
    parameter: &str,
    value: &'a QueryValue,
) -> Result<&'a BTreeMap<String, QueryValue>, QueryParameterError> {
    value
        .as_map()
        .ok_or_else(|| QueryParameterError::expected_map(parameter))
}
