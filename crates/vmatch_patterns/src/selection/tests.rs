use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_insert_overwrites_in_place() {
    let mut selections = Selections::new();
    selections.insert(SelectionKey::named("a"), Value::int(1));
    selections.insert(SelectionKey::named("b"), Value::int(2));
    selections.insert(SelectionKey::named("a"), Value::int(3));

    assert_eq!(selections.len(), 2);
    assert_eq!(selections.get_named("a"), Some(&Value::int(3)));
    let keys: Vec<_> = selections.keys().cloned().collect();
    assert_eq!(keys, vec![SelectionKey::named("a"), SelectionKey::named("b")]);
}

#[test]
fn test_merge_later_wins() {
    let mut left: Selections = [
        (SelectionKey::named("x"), Value::int(1)),
        (SelectionKey::Anonymous, Value::int(2)),
    ]
    .into_iter()
    .collect();
    let right: Selections = [(SelectionKey::named("x"), Value::int(9))]
        .into_iter()
        .collect();

    left.merge(right);
    assert_eq!(left.get_named("x"), Some(&Value::int(9)));
    assert_eq!(left.anonymous(), Some(&Value::int(2)));
}

#[test]
fn test_seed_absent() {
    let mut selections = Selections::new();
    selections.seed_absent([SelectionKey::named("a"), SelectionKey::Anonymous]);
    assert_eq!(selections.get_named("a"), Some(&Value::Undefined));
    assert_eq!(selections.anonymous(), Some(&Value::Undefined));
}

#[test]
fn test_to_value_skips_anonymous() {
    let selections: Selections = [
        (SelectionKey::named("x"), Value::int(1)),
        (SelectionKey::Anonymous, Value::int(2)),
    ]
    .into_iter()
    .collect();
    assert_eq!(selections.to_value(), Value::object([("x", 1)]));
}

#[test]
fn test_match_result_constructors() {
    assert!(!MatchResult::no_match().matched);
    assert!(MatchResult::from_bool(true).matched);
    assert!(MatchResult::from_bool(true).selections.is_empty());
}
