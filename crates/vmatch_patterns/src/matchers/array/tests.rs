use super::*;
use crate::p;
use pretty_assertions::assert_eq;

fn numbers(ns: &[i64]) -> Value {
    Value::array(ns.iter().copied().map(Value::int).collect())
}

#[test]
fn test_every_element_must_match() {
    let matcher = ArrayMatcher::new(p::number());
    assert!(matcher.match_value(&numbers(&[1, 2, 3])).matched);
    assert!(!matcher
        .match_value(&Value::array(vec![Value::int(1), Value::from("x")]))
        .matched);
    assert!(!matcher.match_value(&Value::object([("0", 1)])).matched);
}

#[test]
fn test_selections_accumulate() {
    let matcher = ArrayMatcher::new(Pattern::object([("id", p::select_as("ids"))]));
    let value = Value::array(vec![
        Value::object([("id", 1)]),
        Value::object([("id", 2)]),
    ]);
    let result = matcher.match_value(&value);
    assert!(result.matched);
    assert_eq!(result.selections.get_named("ids"), Some(&numbers(&[1, 2])));
}

#[test]
fn test_empty_array_seeds_empty_sequences() {
    let matcher = ArrayMatcher::new(p::select_as("xs"));
    let result = matcher.match_value(&Value::array(vec![]));
    assert!(result.matched);
    assert_eq!(result.selections.get_named("xs"), Some(&Value::array(vec![])));
}

#[test]
fn test_nested_arrays_nest_sequences() {
    let matcher = ArrayMatcher::new(p::array(p::select()));
    let value = Value::array(vec![numbers(&[1, 2]), numbers(&[3])]);
    let result = matcher.match_value(&value);
    assert_eq!(
        result.selections.anonymous(),
        Some(&Value::array(vec![numbers(&[1, 2]), numbers(&[3])]))
    );
}
