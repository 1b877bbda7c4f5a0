//! The structural matcher.
//!
//! `match_pattern` is pure: each call returns its own `MatchResult` and the
//! caller merges child selections into its own. A failed branch contributes
//! nothing.

use vmatch_stack::ensure_sufficient_stack;
use vmatch_value::Value;

use crate::{MatchResult, Pattern, Selections};

/// Test `value` against `pattern`.
///
/// 1. Matcher: delegate; its selections flow up only on success.
/// 2. Literal: `Object.is` identity.
/// 3. Containers require an object-like value, then:
///    - tuple: an array of the same length, elements matched left to right;
///    - map: a map whose entry under each pattern key matches
///      (a missing key reads as `undefined`);
///    - set: empty, all-elements-match or membership (see `match_set`);
///    - object: every key is present (or its sub-pattern is optional) and
///      the property matches.
pub fn match_pattern(pattern: &Pattern, value: &Value) -> MatchResult {
    ensure_sufficient_stack(|| match pattern {
        Pattern::Matcher(matcher) => {
            let result = matcher.match_value(value);
            tracing::trace!(
                kind = ?matcher.kind(),
                matched = result.matched,
                "delegated to matcher"
            );
            if result.matched {
                result
            } else {
                MatchResult::no_match()
            }
        }
        Pattern::Literal(literal) => MatchResult::from_bool(value.same_value(literal)),
        _ if !value.is_object_like() => MatchResult::no_match(),
        Pattern::Tuple(items) => match value.as_array() {
            Some(elements) if elements.len() == items.len() => {
                match_all(items.iter().zip(elements.iter()))
            }
            _ => MatchResult::no_match(),
        },
        Pattern::Map(entries) => match value.as_map() {
            Some(map) => {
                let mut selections = Selections::new();
                for (key, sub) in entries {
                    let entry = map.get(key).cloned().unwrap_or(Value::Undefined);
                    let result = match_pattern(sub, &entry);
                    if !result.matched {
                        return MatchResult::no_match();
                    }
                    selections.merge(result.selections);
                }
                MatchResult::matched(selections)
            }
            None => MatchResult::no_match(),
        },
        Pattern::Set(members) => match_set(members, value),
        Pattern::Object(fields) => {
            let mut selections = Selections::new();
            for (key, sub) in fields {
                if !(value.has_property(key) || sub.is_optional()) {
                    return MatchResult::no_match();
                }
                let field = value.property(key).unwrap_or(Value::Undefined);
                let result = match_pattern(sub, &field);
                if !result.matched {
                    return MatchResult::no_match();
                }
                selections.merge(result.selections);
            }
            MatchResult::matched(selections)
        }
    })
}

/// Whether `value` matches `pattern`, discarding selections.
#[inline]
pub fn is_match(pattern: &Pattern, value: &Value) -> bool {
    match_pattern(pattern, value).matched
}

fn match_all<'a>(pairs: impl Iterator<Item = (&'a Pattern, &'a Value)>) -> MatchResult {
    let mut selections = Selections::new();
    for (sub, value) in pairs {
        let result = match_pattern(sub, value);
        if !result.matched {
            return MatchResult::no_match();
        }
        selections.merge(result.selections);
    }
    MatchResult::matched(selections)
}

/// Set rules:
/// - no members: the set must be empty;
/// - a single matcher: every element must match it;
/// - a single literal: the set must contain it;
/// - several members: every member must be a literal the set contains.
///
/// Membership is SameValueZero, so a structural (tuple, object, map, set)
/// member is never contained.
fn match_set(members: &[Pattern], value: &Value) -> MatchResult {
    let Some(set) = value.as_set() else {
        return MatchResult::no_match();
    };
    let contains = |member: &Pattern| match member {
        Pattern::Literal(literal) => set.contains(literal),
        _ => false,
    };
    match members {
        [] => MatchResult::from_bool(set.is_empty()),
        [only @ Pattern::Matcher(_)] => {
            let mut selections = Selections::new();
            for element in set.iter() {
                let result = match_pattern(only, element);
                if !result.matched {
                    return MatchResult::no_match();
                }
                selections.merge(result.selections);
            }
            MatchResult::matched(selections)
        }
        _ => MatchResult::from_bool(members.iter().all(contains)),
    }
}
