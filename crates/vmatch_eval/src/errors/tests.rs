use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_unmatched_value_message() {
    let err = unmatched_value(&Value::object([("type", "x")]), &RenderConfig::default());
    assert_eq!(
        err.to_string(),
        r#"Pattern matching error: no pattern matches value {"type":"x"}"#
    );
    assert_eq!(err.subject(), Some(&Value::object([("type", "x")])));
}

#[test]
fn test_unmatched_value_falls_back_for_bigint() {
    let err = unmatched_value(&Value::bigint(10), &RenderConfig::default());
    assert_eq!(
        err.to_string(),
        "Pattern matching error: no pattern matches value 10n"
    );
}

#[test]
fn test_unmatched_value_respects_max_chars() {
    let err = unmatched_value(&Value::string("abcdef"), &RenderConfig::with_max_chars(3));
    assert_eq!(
        err.to_string(),
        "Pattern matching error: no pattern matches value \"ab…"
    );
}

#[test]
fn test_invalid_argument_count_message() {
    let err = invalid_argument_count(3);
    assert_eq!(
        err.to_string(),
        "isMatching wasn't given the right number of arguments: expected 1 or 2, received 3."
    );
    assert_eq!(err.subject(), None);
}
