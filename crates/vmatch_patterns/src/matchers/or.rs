use vmatch_value::Value;

use crate::keys::flat_keys;
use crate::{match_pattern, MatchResult, Matcher, MatcherKind, Pattern, SelectionKey, Selections};

/// `union(ps)`: the first pattern that matches wins.
///
/// Every key of every branch is selected as `undefined` first, then the
/// winning branch overwrites its own keys. No patterns matches nothing.
#[derive(Clone, Debug)]
pub struct OrMatcher {
    patterns: Vec<Pattern>,
}

impl OrMatcher {
    pub fn new(patterns: Vec<Pattern>) -> Self {
        OrMatcher { patterns }
    }
}

impl Matcher for OrMatcher {
    fn match_value(&self, value: &Value) -> MatchResult {
        let Some(result) = self
            .patterns
            .iter()
            .map(|pattern| match_pattern(pattern, value))
            .find(|result| result.matched)
        else {
            return MatchResult::no_match();
        };
        let mut selections = Selections::new();
        selections.seed_absent(self.selection_keys());
        selections.merge(result.selections);
        MatchResult::matched(selections)
    }

    fn selection_keys(&self) -> Vec<SelectionKey> {
        flat_keys(&self.patterns)
    }

    fn kind(&self) -> Option<MatcherKind> {
        Some(MatcherKind::Or)
    }
}

#[cfg(test)]
mod tests;
