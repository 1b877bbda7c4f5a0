use super::*;
use crate::{is_match, match_pattern};
use vmatch_value::{Class, Symbol};

#[test]
fn test_type_guards() {
    assert!(is_match(&string(), &Value::from("s")));
    assert!(!is_match(&string(), &Value::int(1)));
    assert!(is_match(&number(), &Value::number(f64::NAN)));
    assert!(!is_match(&number(), &Value::bigint(1)));
    assert!(is_match(&bigint(), &Value::bigint(1)));
    assert!(is_match(&boolean(), &Value::Bool(false)));
    assert!(is_match(&symbol(), &Value::Symbol(Symbol::new(None))));
    assert!(is_match(&nullish(), &Value::Null));
    assert!(is_match(&nullish(), &Value::Undefined));
    assert!(!is_match(&nullish(), &Value::Bool(false)));
}

#[test]
fn test_any_and_wildcard() {
    for value in [Value::Undefined, Value::Null, Value::int(0), Value::array(vec![])] {
        assert!(is_match(&any(), &value));
        assert!(is_match(&wildcard(), &value));
    }
}

#[test]
fn test_instance_of_walks_parents() {
    let shape = Class::new("Shape");
    let circle = Class::extending("Circle", &shape);
    let value = Value::instance(&circle, [("r", 1)]);
    assert!(is_match(&instance_of(&shape), &value));
    assert!(is_match(&instance_of(&circle), &value));
    assert!(!is_match(&instance_of(&Class::new("Shape")), &value));
}

#[test]
fn test_when() {
    let long = when(|v| v.as_str().is_some_and(|s| s.len() > 3));
    assert!(is_match(&long, &Value::from("hello")));
    assert!(!is_match(&long, &Value::from("hi")));
}

#[test]
fn test_select_variants() {
    let result = match_pattern(&select_as("x"), &Value::int(1));
    assert_eq!(result.selections.get_named("x"), Some(&Value::int(1)));

    let result = match_pattern(&select_pattern(number()), &Value::int(2));
    assert_eq!(result.selections.anonymous(), Some(&Value::int(2)));
    assert!(!is_match(&select_pattern(number()), &Value::from("2")));

    let result = match_pattern(&select_with("y", string()), &Value::from("s"));
    assert_eq!(result.selections.get_named("y"), Some(&Value::from("s")));
}

#[test]
fn test_typed_builders_match_like_untyped() {
    struct Event;
    let t = typed::<Event>();
    let pat = t.union(["a", "b"]);
    assert!(is_match(&pat, &Value::from("a")));
    assert!(is_match(&t.optional("a"), &Value::Undefined));
    assert!(is_match(&t.array(number()), &Value::array(vec![Value::int(1)])));
    assert!(is_match(&t.not("a"), &Value::from("b")));
    assert!(is_match(&t.intersection([number(), when(|_| true)]), &Value::int(1)));
    assert!(is_match(&t.when(|v| v.is_nullish()), &Value::Null));

    let result = match_pattern(&t.select(), &Value::int(4));
    assert_eq!(result.selections.anonymous(), Some(&Value::int(4)));
    let result = match_pattern(&t.select_as("x"), &Value::int(3));
    assert_eq!(result.selections.get_named("x"), Some(&Value::int(3)));
    let result = match_pattern(&t.select_pattern(number()), &Value::int(5));
    assert_eq!(result.selections.anonymous(), Some(&Value::int(5)));
    assert!(!is_match(&t.select_pattern(number()), &Value::from("5")));
    let result = match_pattern(&t.select_with("k", any()), &Value::int(6));
    assert_eq!(result.selections.get_named("k"), Some(&Value::int(6)));
}
