//! Default-message checks against the English catalogue.

use std::collections::{BTreeMap, HashMap};

use pretty_assertions::assert_eq;
use rstest::rstest;
use tiny_preconditions::prelude::*;

use crate::common::english;

// ============================================================================
// NOT NULL
// ============================================================================

#[test]
fn not_null_reports_argument_name() {
    english();
    let error = not_null("dummy", None::<&String>).unwrap_err();
    insta::assert_snapshot!(error, @"dummy should not be null");
    assert_eq!(error.code(), "should_not_be_null");
}

#[test]
fn not_null_accepts_any_present_value() {
    english();
    let value: Option<Vec<u8>> = Some(Vec::new());
    assert!(not_null("bytes", value.as_ref()).is_ok());
    assert!(not_null("text", Some("")).is_ok());
}

// ============================================================================
// IN RANGE
// ============================================================================

#[test]
fn in_range_below_minimum() {
    english();
    let error = in_range("dummy", Some(0), 1, 10).unwrap_err();
    insta::assert_snapshot!(error, @"dummy should be between 1 and 10 (inclusive)");
    let params: Vec<_> = error.params().collect();
    assert_eq!(params, vec![("min", "1"), ("max", "10"), ("actual", "0")]);
}

#[rstest]
#[case(Some(1))]
#[case(Some(10))]
#[case(Some(7))]
fn in_range_bounds_are_inclusive(#[case] value: Option<i64>) {
    english();
    assert!(in_range("dummy", value, 1, 10).is_ok());
}

#[test]
fn in_range_missing_value_is_out_of_range() {
    english();
    let error = in_range::<i32>("dummy", None, 1, 10).unwrap_err();
    assert_eq!(error.kind(), MessageKind::ShouldBeBetween);
    assert_eq!(error.param("actual"), None);
}

#[test]
fn in_range_works_for_strings() {
    english();
    assert!(in_range("grade", Some("B"), "A", "C").is_ok());
    let error = in_range("grade", Some("F"), "A", "C").unwrap_err();
    insta::assert_snapshot!(error, @"grade should be between A and C (inclusive)");
}

// ============================================================================
// NOT EMPTY
// ============================================================================

#[test]
fn not_empty_rejects_empty_list() {
    english();
    let list: Vec<String> = Vec::new();
    let error = not_empty("emptyList", Some(&list)).unwrap_err();
    insta::assert_snapshot!(error, @"emptyList should not be null nor empty");
}

#[test]
fn not_empty_missing_and_empty_are_the_same_failure() {
    english();
    let missing = not_empty("list", None::<&Vec<u8>>).unwrap_err();
    let empty = not_empty("list", Some(&Vec::<u8>::new())).unwrap_err();
    assert_eq!(missing, empty);
}

// ============================================================================
// MATCHES
// ============================================================================

#[rstest]
#[case("AB", false)]
#[case("ABCD", false)]
#[case("ABC", true)]
fn matches_requires_a_full_match(#[case] input: &str, #[case] ok: bool) {
    english();
    let pattern = Pattern::new("[A-Z]{3}").unwrap();
    assert_eq!(matches("code", input, &pattern).is_ok(), ok);
}

#[test]
fn matches_message_shows_pattern_verbatim() {
    english();
    let pattern = Pattern::new(r"^\d+'s$").unwrap();
    let error = matches("count", "many", &pattern).unwrap_err();
    insta::assert_snapshot!(error, @r"count should match the regular expression ^\d+'s$");
}

// ============================================================================
// RESPECTS
// ============================================================================

#[test]
fn respects_interpolates_caller_message() {
    english();
    let error = respects("dummy", || 2 + 2 == 5, "arithmetic must hold").unwrap_err();
    insta::assert_snapshot!(error, @"dummy should respect the condition: arithmetic must hold");
}

#[test]
fn respects_value_with_predicate() {
    english();
    let even = |n: &i32| n % 2 == 0;
    assert!(respects_value("n", &4, even, "must be even").is_ok());

    let error = respects_value("n", &5, even, "must be even").unwrap_err();
    assert_eq!(error.param("message"), Some("must be even"));
}

// ============================================================================
// NO NULL VALUES
// ============================================================================

fn sample_map() -> BTreeMap<String, Option<String>> {
    (1..=5)
        .map(|i| {
            let value = (i != 2).then(|| format!("value-{i:02}"));
            (format!("key-{i:02}"), value)
        })
        .collect()
}

#[test]
fn no_null_values_reports_offending_key() {
    english();
    let error = no_null_values("argMap", &sample_map()).unwrap_err();
    insta::assert_snapshot!(
        error,
        @"argMap should not contain any null value, but key key-02 maps to null"
    );
}

#[test]
fn no_null_values_reports_first_in_order() {
    english();
    let mut map = sample_map();
    map.insert("key-04".to_string(), None);
    let error = no_null_values("argMap", &map).unwrap_err();
    assert_eq!(error.param("key"), Some("key-02"));
}

#[test]
fn no_null_values_accepts_complete_map() {
    english();
    let map: HashMap<u32, Option<u32>> = (0..10).map(|i| (i, Some(i * i))).collect();
    assert!(no_null_values("squares", &map).is_ok());
}

// ============================================================================
// SERIALIZED ERRORS
// ============================================================================

#[cfg(feature = "serde")]
#[test]
fn error_serializes_to_json() {
    english();
    let error = in_range("port", Some(70000), 1, 65535).unwrap_err();
    assert_eq!(
        error.to_json_value(),
        serde_json::json!({
            "code": "should_be_between",
            "argument": "port",
            "message": "port should be between 1 and 65535 (inclusive)",
            "params": { "min": "1", "max": "65535", "actual": "70000" },
        })
    );
}
