use super::*;
use crate::MatchError;
use pretty_assertions::assert_eq;
use vmatch_patterns::p;

#[test]
fn test_is_matching() {
    let pattern = Pattern::object([("type", "ok")]);
    assert!(is_matching(&pattern, &Value::object([("type", "ok")])));
    assert!(!is_matching(&pattern, &Value::object([("type", "err")])));
}

#[test]
fn test_curried() {
    let is_number = is_matching_fn(p::number());
    let values = [Value::int(1), Value::from("a"), Value::number(2.5)];
    let count = values.iter().filter(|&v| is_number(v)).count();
    assert_eq!(count, 2);
}

#[test]
fn test_args_one_gives_checker() {
    let Ok(IsMatching::Checker(checker)) = is_matching_args("a", &[]) else {
        panic!("expected a checker");
    };
    assert!(checker.check(&Value::from("a")));
    assert!(!checker.check(&Value::from("b")));
}

#[test]
fn test_args_two_gives_outcome() {
    assert!(matches!(
        is_matching_args(p::string(), &[Value::from("s")]),
        Ok(IsMatching::Outcome(true))
    ));
    assert!(matches!(
        is_matching_args(p::string(), &[Value::int(1)]),
        Ok(IsMatching::Outcome(false))
    ));
}

#[test]
fn test_args_too_many() {
    let Err(err) = is_matching_args(p::any(), &[Value::Null, Value::Null]) else {
        panic!("expected an argument count error");
    };
    assert_eq!(err, MatchError::InvalidArgumentCount { received: 3 });
    assert_eq!(
        err.to_string(),
        "isMatching wasn't given the right number of arguments: expected 1 or 2, received 3."
    );
}
