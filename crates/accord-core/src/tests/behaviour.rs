//! Behaviour-driven tests for `accord_core` types.

use std::str::FromStr;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

use crate::{CheckReport, ErrorObject, RelationshipPath};

// ---------------------------------------------------------------------------
// Typed wrappers for Gherkin step parameters
// ---------------------------------------------------------------------------

/// A quoted string value from a Gherkin feature file.
#[derive(Debug, Clone, PartialEq, Eq)]
struct QuotedString(String);

impl FromStr for QuotedString {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim_matches('"').to_owned()))
    }
}

impl QuotedString {
    fn as_str(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Test world
// ---------------------------------------------------------------------------

#[derive(Default)]
struct TestWorld {
    report: Option<CheckReport>,
    path: Option<RelationshipPath>,
    formatted_output: Option<String>,
}

#[fixture]
fn world() -> TestWorld {
    TestWorld::default()
}

// ---------------------------------------------------------------------------
// Given steps
// ---------------------------------------------------------------------------

#[given("a check report with title {title} and detail {detail} at pointer {pointer}")]
fn given_report(
    world: &mut TestWorld,
    title: QuotedString,
    detail: QuotedString,
    pointer: QuotedString,
) {
    let report = CheckReport::new(vec![ErrorObject::with_pointer(
        "400",
        title.as_str(),
        detail.as_str(),
        pointer.as_str(),
    )]);
    world.report = Some(report);
}

#[given("the relationship path {path}")]
fn given_path(world: &mut TestWorld, path: QuotedString) {
    world.path = Some(path.as_str().parse().expect("valid relationship path"));
}

// ---------------------------------------------------------------------------
// When steps
// ---------------------------------------------------------------------------

#[when("the check report is formatted")]
fn when_format_report(world: &mut TestWorld) {
    let report = world.report.as_ref().expect("report should be set");
    world.formatted_output = Some(format!("{report}"));
}

#[when("the relationship path is formatted")]
fn when_format_path(world: &mut TestWorld) {
    let path = world.path.as_ref().expect("path should be set");
    world.formatted_output = Some(format!("{path}"));
}

// ---------------------------------------------------------------------------
// Then steps
// ---------------------------------------------------------------------------

#[then("the formatted output contains {snippet}")]
fn then_formatted_contains(world: &mut TestWorld, snippet: QuotedString) {
    let output = world
        .formatted_output
        .as_ref()
        .expect("formatted output should be set");
    assert!(
        output.contains(snippet.as_str()),
        "expected output to contain '{}', got: {}",
        snippet.as_str(),
        output
    );
}

#[then("the report counts {count} error")]
fn then_report_counts(world: &mut TestWorld, count: QuotedString) {
    let report = world.report.as_ref().expect("report should be set");
    let expected: usize = count.as_str().parse().expect("numeric error count");
    assert_eq!(report.len(), expected);
}

// ---------------------------------------------------------------------------
// Scenario registration
// ---------------------------------------------------------------------------

#[scenario(path = "tests/features/accord_core.feature")]
fn check_report_behaviour(world: TestWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/relationship_paths.feature")]
fn relationship_path_behaviour(world: TestWorld) {
    let _ = world;
}
