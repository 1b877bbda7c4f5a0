use vmatch_value::Value;

use crate::{match_pattern, selection_keys, MatchResult, Matcher, MatcherKind, Pattern, SelectionKey, Selections};

/// `optional(p)`: `undefined`, or a value matching `p`.
///
/// On `undefined` every key of `p` is selected as `undefined`. Object
/// patterns let an optional sub-pattern match a missing key.
#[derive(Clone, Debug)]
pub struct OptionalMatcher {
    pattern: Pattern,
}

impl OptionalMatcher {
    pub fn new(pattern: Pattern) -> Self {
        OptionalMatcher { pattern }
    }
}

impl Matcher for OptionalMatcher {
    fn match_value(&self, value: &Value) -> MatchResult {
        if value.is_undefined() {
            let mut selections = Selections::new();
            selections.seed_absent(selection_keys(&self.pattern));
            return MatchResult::matched(selections);
        }
        match_pattern(&self.pattern, value)
    }

    fn selection_keys(&self) -> Vec<SelectionKey> {
        selection_keys(&self.pattern)
    }

    fn kind(&self) -> Option<MatcherKind> {
        Some(MatcherKind::Optional)
    }
}
