use vmatch_value::Value;

use crate::keys::flat_keys;
use crate::{match_pattern, MatchResult, Matcher, MatcherKind, Pattern, SelectionKey, Selections};

/// `intersection(ps)`: every pattern matches. Later selections overwrite
/// earlier ones under the same key. No patterns matches everything.
#[derive(Clone, Debug)]
pub struct AndMatcher {
    patterns: Vec<Pattern>,
}

impl AndMatcher {
    pub fn new(patterns: Vec<Pattern>) -> Self {
        AndMatcher { patterns }
    }
}

impl Matcher for AndMatcher {
    fn match_value(&self, value: &Value) -> MatchResult {
        let mut selections = Selections::new();
        for pattern in &self.patterns {
            let result = match_pattern(pattern, value);
            if !result.matched {
                return MatchResult::no_match();
            }
            selections.merge(result.selections);
        }
        MatchResult::matched(selections)
    }

    fn selection_keys(&self) -> Vec<SelectionKey> {
        flat_keys(&self.patterns)
    }

    fn kind(&self) -> Option<MatcherKind> {
        Some(MatcherKind::And)
    }
}
