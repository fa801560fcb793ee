//! End-to-end tests spanning query parsing, compliance checking, and
//! resource serialization.

use std::collections::BTreeMap;

use serde_json::json;

use crate::{
    ErrorDocument, Field, Outcome, Payload, QueryValue, RelationshipExpectation, Resource,
    ResourceExpectation, check_relationship, check_resource, parse_query, serialize_resource,
};

struct Article;

impl Resource for Article {
    fn resource_type(&self) -> &str {
        "articles"
    }

    fn id(&self) -> String {
        String::from("1")
    }

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::attribute("title", "Accord"),
            Field::attribute("body", "JSON:API compliance"),
            Field::attribute("created", "2026-08-01"),
        ]
    }
}

#[test]
fn sparse_fields_flow_from_query_to_serializer() {
    let mut fields = BTreeMap::new();
    fields.insert(String::from("articles"), QueryValue::from("title,body"));
    let mut raw = BTreeMap::new();
    raw.insert(String::from("fields"), QueryValue::Map(fields));

    let parameters = parse_query(&raw).expect("well-formed query");
    let object = serialize_resource(&Article, parameters.fields());

    assert_eq!(
        object,
        json!({
            "type": "articles",
            "id": "1",
            "attributes": { "title": "Accord", "body": "JSON:API compliance" },
        })
    );
}

#[test]
fn a_failed_check_becomes_a_failed_outcome() {
    let expectation = ResourceExpectation::expect_with_id("articles", "1");
    let report = check_resource(&expectation, r#"{"data":{"type":"people","id":"1"}}"#);
    assert!(report.has_errors());

    let outcome = Outcome::failure(report.clone().into_errors());
    assert!(outcome.did_fail());
    assert_eq!(outcome.errors(), report.errors());

    let document = ErrorDocument::from(report);
    let rendered = serde_json::to_value(&document).expect("serialize");
    let statuses: Vec<&str> = rendered
        .get("errors")
        .and_then(|errors| errors.as_array())
        .expect("errors array")
        .iter()
        .filter_map(|error| error.get("status").and_then(|status| status.as_str()))
        .collect();
    assert_eq!(statuses, vec!["409"]);
}

#[test]
fn a_compliant_check_feeds_a_successful_outcome() {
    let expectation = RelationshipExpectation::expect("articles", "author");
    let report = check_relationship(&expectation, r#"{"data":null}"#);
    assert!(report.is_compliant());

    let outcome = Outcome::success(Payload::Null);
    assert!(outcome.did_succeed());
    assert!(outcome.payload().is_some_and(Payload::is_null));
}

#[test]
fn serialized_resources_pass_the_resource_check() {
    let object = serialize_resource(&Article, None);
    let raw = serde_json::to_string(&json!({ "data": object })).expect("serialize");

    let expectation = ResourceExpectation::expect_with_id("articles", "1");
    let report = check_resource(&expectation, &raw);
    assert!(report.is_compliant());
}
