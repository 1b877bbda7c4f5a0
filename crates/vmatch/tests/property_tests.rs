//! Property tests for the matching engine.

use proptest::prelude::*;
use vmatch::{is_matching, match_pattern, match_value, p, selection_keys, Pattern, Selected, Value};

fn primitive() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<f64>().prop_map(Value::number),
        any::<i64>().prop_map(|n| Value::bigint(i128::from(n))),
        "[a-z]{0,6}".prop_map(Value::string),
    ]
}

fn value() -> impl Strategy<Value = Value> {
    primitive().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::array),
            prop::collection::vec(("[a-c]", inner), 0..4).prop_map(Value::object),
        ]
    })
}

proptest! {
    #[test]
    fn test_lifted_primitive_matches_itself(v in primitive()) {
        prop_assert!(is_matching(&Pattern::from(v.clone()), &v));
    }

    #[test]
    fn test_lifted_value_matches_itself(v in value()) {
        prop_assert!(is_matching(&Pattern::from(v.clone()), &v));
    }

    #[test]
    fn test_wildcard_matches_everything(v in value()) {
        prop_assert!(is_matching(&p::wildcard(), &v));
    }

    #[test]
    fn test_optional_is_total_on_undefined(inner in value()) {
        let pattern = p::optional(Pattern::from(inner));
        prop_assert!(is_matching(&pattern, &Value::Undefined));
    }

    #[test]
    fn test_optional_seeds_every_key(names in prop::collection::vec("[a-e]", 1..4)) {
        let pattern = p::optional(Pattern::tuple(names.iter().map(|n| p::select_as(n.as_str()))));
        let result = match_pattern(&pattern, &Value::Undefined);
        prop_assert!(result.matched);
        for name in &names {
            prop_assert_eq!(result.selections.get_named(name), Some(&Value::Undefined));
        }
    }

    #[test]
    fn test_not_inverts(v in value(), target in primitive()) {
        let pattern = Pattern::from(target);
        prop_assert_eq!(is_matching(&p::not(pattern.clone()), &v), !is_matching(&pattern, &v));
    }

    #[test]
    fn test_union_seeds_all_branch_keys(x in any::<i32>()) {
        let pattern = p::union([
            p::select_with("s", p::string()),
            p::select_with("n", p::number()),
        ]);
        let result = match_pattern(&pattern, &Value::from(x));
        prop_assert!(result.matched);
        prop_assert_eq!(result.selections.get_named("s"), Some(&Value::Undefined));
        prop_assert_eq!(result.selections.get_named("n"), Some(&Value::from(x)));
    }

    #[test]
    fn test_selections_only_use_declared_keys(v in value()) {
        let pattern = Pattern::object([("a", p::select_as("a")), ("b", p::optional(p::select_as("b")))]);
        let declared = selection_keys(&pattern);
        let result = match_pattern(&pattern, &v);
        if result.matched {
            prop_assert!(result.selections.keys().all(|k| declared.contains(k)));
        }
    }

    #[test]
    fn test_array_selects_one_entry_per_element(xs in prop::collection::vec(any::<i32>(), 0..8)) {
        let subject = Value::from(xs.clone());
        let result = match_pattern(&p::array(p::select_as("x")), &subject);
        prop_assert!(result.matched);
        prop_assert_eq!(result.selections.get_named("x"), Some(&subject));
    }

    #[test]
    fn test_first_registered_case_wins(v in value(), extra in 0usize..4) {
        let mut m = match_value(v.clone()).with(p::any(), |_, _| 0usize);
        for i in 0..extra {
            m = m.with(p::any(), move |_, _| i + 1);
        }
        prop_assert_eq!(m.run(), Ok(0));
    }

    #[test]
    fn test_handler_gets_subject_without_selections(v in value()) {
        let selected = match_value(v.clone()).with(p::any(), |x, _| x).run();
        prop_assert_eq!(selected, Ok(Selected::Subject(v)));
    }
}
