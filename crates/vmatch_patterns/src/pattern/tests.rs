use super::*;
use crate::p;
use vmatch_value::Class;

#[test]
fn test_lift_primitives() {
    assert!(matches!(Pattern::from(Value::int(1)), Pattern::Literal(_)));
    assert!(matches!(Pattern::from("a"), Pattern::Literal(_)));
    assert!(matches!(Pattern::from(Value::Null), Pattern::Literal(Value::Null)));
}

#[test]
fn test_lift_containers() {
    let tuple = Pattern::from(Value::array(vec![Value::int(1), Value::from("x")]));
    assert!(matches!(&tuple, Pattern::Tuple(items) if items.len() == 2));

    let object = Pattern::from(Value::object([("a", Value::array(vec![]))]));
    let Pattern::Object(fields) = object else {
        panic!("expected object pattern");
    };
    assert_eq!(fields[0].0, "a");
    assert!(matches!(&fields[0].1, Pattern::Tuple(items) if items.is_empty()));

    let point = Class::new("Point");
    let inst = Pattern::from(Value::instance(&point, [("x", 1)]));
    assert!(matches!(inst, Pattern::Object(fields) if fields.len() == 1));

    let map = Pattern::from(Value::map([("k", Value::array(vec![]))]));
    assert!(matches!(&map, Pattern::Map(pairs) if matches!(pairs[0].1, Pattern::Tuple(_))));
}

#[test]
fn test_lift_set_keeps_members_literal() {
    let set = Pattern::from(Value::set([Value::array(vec![]), Value::int(1)]));
    let Pattern::Set(members) = set else {
        panic!("expected set pattern");
    };
    assert!(members.iter().all(|m| matches!(m, Pattern::Literal(_))));
}

#[test]
fn test_object_duplicate_key_replaces() {
    let pat = Pattern::object([("a", Pattern::from(1)), ("b", Pattern::from(2)), ("a", Pattern::from(3))]);
    let Pattern::Object(fields) = pat else {
        panic!("expected object pattern");
    };
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].0, "a");
    assert!(matches!(&fields[0].1, Pattern::Literal(v) if *v == Value::int(3)));
}

#[test]
fn test_set_collapses_duplicates() {
    let pat = Pattern::set([Pattern::from(1), Pattern::from(1), Pattern::from(0.0), Pattern::from(-0.0)]);
    assert!(matches!(pat, Pattern::Set(members) if members.len() == 2));

    let any = p::any();
    let pat = Pattern::set([any.clone(), any]);
    assert!(matches!(pat, Pattern::Set(members) if members.len() == 1));
}

#[test]
fn test_is_optional() {
    assert!(p::optional("a").is_optional());
    assert!(!p::string().is_optional());
    assert!(!Pattern::from("a").is_optional());
}
