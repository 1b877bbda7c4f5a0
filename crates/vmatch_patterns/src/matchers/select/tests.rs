use super::*;
use crate::p;
use pretty_assertions::assert_eq;

#[test]
fn test_bare_select_always_matches() {
    let matcher = SelectMatcher::new(SelectionKey::Anonymous, None);
    let result = matcher.match_value(&Value::Null);
    assert!(result.matched);
    assert_eq!(result.selections.anonymous(), Some(&Value::Null));
}

#[test]
fn test_select_with_sub_pattern() {
    let matcher = SelectMatcher::new(SelectionKey::named("n"), Some(p::number()));
    let result = matcher.match_value(&Value::int(3));
    assert!(result.matched);
    assert_eq!(result.selections.get_named("n"), Some(&Value::int(3)));
    assert!(!matcher.match_value(&Value::from("3")).matched);
}

#[test]
fn test_keys_include_inner() {
    let matcher = SelectMatcher::new(
        SelectionKey::named("outer"),
        Some(Pattern::object([("a", p::select_as("inner"))])),
    );
    assert_eq!(
        matcher.selection_keys(),
        vec![SelectionKey::named("outer"), SelectionKey::named("inner")]
    );

    let value = Value::object([("a", 1)]);
    let result = matcher.match_value(&value);
    assert_eq!(result.selections.get_named("outer"), Some(&value));
    assert_eq!(result.selections.get_named("inner"), Some(&Value::int(1)));
}
