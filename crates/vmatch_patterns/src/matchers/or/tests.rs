use super::*;
use crate::p;
use pretty_assertions::assert_eq;

#[test]
fn test_any_branch_matches() {
    let matcher = OrMatcher::new(vec![Pattern::from("a"), Pattern::from("b")]);
    assert!(matcher.match_value(&Value::from("a")).matched);
    assert!(matcher.match_value(&Value::from("b")).matched);
    assert!(!matcher.match_value(&Value::from("c")).matched);
}

#[test]
fn test_unmatched_branch_keys_are_absent() {
    let matcher = OrMatcher::new(vec![
        Pattern::object([("a", p::select_as("a"))]),
        Pattern::object([("b", p::select_as("b"))]),
    ]);
    let result = matcher.match_value(&Value::object([("b", 2)]));
    assert!(result.matched);
    assert_eq!(result.selections.get_named("a"), Some(&Value::Undefined));
    assert_eq!(result.selections.get_named("b"), Some(&Value::int(2)));
    // Seeded keys keep branch order.
    let keys: Vec<_> = result.selections.keys().cloned().collect();
    assert_eq!(keys, vec![SelectionKey::named("a"), SelectionKey::named("b")]);
}

#[test]
fn test_empty_union_matches_nothing() {
    assert!(!OrMatcher::new(vec![]).match_value(&Value::Null).matched);
}
