use super::*;

#[test]
fn test_predicate_decides() {
    let even = GuardMatcher::new(|v| v.as_number().is_some_and(|n| n % 2.0 == 0.0));
    assert!(even.match_value(&Value::int(4)).matched);
    assert!(!even.match_value(&Value::int(3)).matched);
    assert!(!even.match_value(&Value::from("4")).matched);
    assert!(even.selection_keys().is_empty());
}

#[test]
fn test_debug_shows_label() {
    let guard = GuardMatcher::labelled("string", |v| v.as_str().is_some());
    assert_eq!(format!("{guard:?}"), "GuardMatcher(string)");
}
