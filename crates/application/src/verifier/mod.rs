//! Response verification.
//!
//! Given a buffered response, checks the status code first and the body
//! assertions second. XML and JSON bodies verify identically: both parse
//! into the same value-tree shape and share the path resolver and the
//! loose-equality rules.

mod xml;

use argonaut_domain::{
    AssertionFailure, ResolvedCase, ResponseType, VerificationOutcome, loosely_equal, resolve,
};
use serde_json::Value;

/// Verifies a response against a resolved case.
///
/// The status check short-circuits: on a mismatch the body is never
/// parsed, so a malformed body behind a wrong status still reports as a
/// status mismatch. All path assertions are evaluated independently and
/// every failure is collected; evaluation never stops at the first miss.
#[must_use]
pub fn verify(case: &ResolvedCase, status: u16, body: &str) -> VerificationOutcome {
    if status != case.expected_status {
        return VerificationOutcome::StatusMismatch {
            expected: case.expected_status,
            actual: status,
        };
    }

    let tree = match parse_body(case.response_type, body) {
        Some(tree) => tree,
        None => return VerificationOutcome::InvalidBody(case.response_type),
    };

    let mut failures = Vec::new();
    for assertion in &case.expected {
        for (path, expected) in assertion.entries() {
            let actual = resolve(&tree, path);
            if !loosely_equal(actual, expected) {
                failures.push(AssertionFailure {
                    path: path.to_string(),
                    expected: expected.clone(),
                    actual: actual.cloned(),
                });
            }
        }
    }

    if failures.is_empty() {
        VerificationOutcome::Pass
    } else {
        VerificationOutcome::AssertionFailures(failures)
    }
}

fn parse_body(kind: ResponseType, body: &str) -> Option<Value> {
    match kind {
        ResponseType::Xml => xml::parse(body).ok(),
        ResponseType::Json => serde_json::from_str(body).ok(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use argonaut_domain::{ExpectedAssertion, HttpMethod};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn case(response_type: ResponseType, expected: Vec<(&str, Value)>) -> ResolvedCase {
        ResolvedCase {
            name: "case".to_string(),
            url: "http://example.com".to_string(),
            method: HttpMethod::Get,
            response_type,
            parameters: BTreeMap::new(),
            expected: expected
                .into_iter()
                .map(|(path, value)| {
                    ExpectedAssertion([(path.to_string(), value)].into_iter().collect())
                })
                .collect(),
            expected_status: 200,
        }
    }

    #[test]
    fn xml_loose_equality_passes_string_against_number() {
        let case = case(ResponseType::Xml, vec![("r.a", json!("5"))]);
        let outcome = verify(&case, 200, "<r><a>5</a></r>");
        assert_eq!(outcome, VerificationOutcome::Pass);
    }

    #[test]
    fn xml_mismatch_reports_path_expected_and_actual() {
        let case = case(ResponseType::Xml, vec![("r.a", json!("6"))]);
        let outcome = verify(&case, 200, "<r><a>5</a></r>");

        assert_eq!(
            outcome,
            VerificationOutcome::AssertionFailures(vec![AssertionFailure {
                path: "r.a".to_string(),
                expected: json!("6"),
                actual: Some(json!("5")),
            }])
        );
    }

    #[test]
    fn status_mismatch_short_circuits_before_body_parsing() {
        let case = case(ResponseType::Xml, vec![("r.a", json!("5"))]);
        // Malformed body; a wrong status must still win.
        let outcome = verify(&case, 404, "<<<definitely not xml");
        assert_eq!(
            outcome,
            VerificationOutcome::StatusMismatch {
                expected: 200,
                actual: 404
            }
        );
    }

    #[test]
    fn malformed_xml_with_matching_status_is_invalid_body() {
        let case = case(ResponseType::Xml, vec![("r.a", json!("5"))]);
        let outcome = verify(&case, 200, "<<<definitely not xml");
        assert_eq!(outcome, VerificationOutcome::InvalidBody(ResponseType::Xml));
    }

    #[test]
    fn json_bodies_verify_with_the_same_rules() {
        let case = case(
            ResponseType::Json,
            vec![("user.id", json!("7")), ("user.name", json!("ada"))],
        );
        let outcome = verify(&case, 200, r#"{"user": {"id": 7, "name": "ada"}}"#);
        assert_eq!(outcome, VerificationOutcome::Pass);
    }

    #[test]
    fn malformed_json_is_invalid_body() {
        let case = case(ResponseType::Json, vec![("a", json!(1))]);
        let outcome = verify(&case, 200, "{broken");
        assert_eq!(outcome, VerificationOutcome::InvalidBody(ResponseType::Json));
    }

    #[test]
    fn all_assertions_are_evaluated_not_just_the_first_failure() {
        let case = case(
            ResponseType::Json,
            vec![("a", json!(1)), ("b", json!(2)), ("c", json!(3))],
        );
        let outcome = verify(&case, 200, r#"{"a": 9, "b": 2, "c": 9}"#);

        let VerificationOutcome::AssertionFailures(failures) = outcome else {
            panic!("expected assertion failures");
        };
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].path, "a");
        assert_eq!(failures[1].path, "c");
    }

    #[test]
    fn missing_path_fails_against_non_null_expectation() {
        let case = case(ResponseType::Json, vec![("a.missing", json!("x"))]);
        let outcome = verify(&case, 200, r#"{"a": {}}"#);

        let VerificationOutcome::AssertionFailures(failures) = outcome else {
            panic!("expected assertion failures");
        };
        assert_eq!(failures[0].actual, None);
    }

    #[test]
    fn missing_path_passes_against_null_expectation() {
        let case = case(ResponseType::Json, vec![("a.missing", json!(null))]);
        let outcome = verify(&case, 200, r#"{"a": {}}"#);
        assert_eq!(outcome, VerificationOutcome::Pass);
    }

    #[test]
    fn no_assertions_with_matching_status_is_a_pass() {
        let case = case(ResponseType::Json, vec![]);
        assert_eq!(verify(&case, 200, "{}"), VerificationOutcome::Pass);
    }
}
