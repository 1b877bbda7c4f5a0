use vmatch_value::Value;

use crate::{match_pattern, selection_keys, MatchResult, Matcher, Pattern, SelectionKey, Selections};

/// `select(key?, pattern?)`: captures the value under `key`.
///
/// Without a sub-pattern it always matches. With one it matches when the
/// sub-pattern does, and the sub-pattern's own selections are added after
/// the capture.
#[derive(Clone, Debug)]
pub struct SelectMatcher {
    key: SelectionKey,
    pattern: Option<Pattern>,
}

impl SelectMatcher {
    pub fn new(key: SelectionKey, pattern: Option<Pattern>) -> Self {
        SelectMatcher { key, pattern }
    }
}

impl Matcher for SelectMatcher {
    fn match_value(&self, value: &Value) -> MatchResult {
        let mut selections = Selections::new();
        selections.insert(self.key.clone(), value.clone());
        if let Some(pattern) = &self.pattern {
            let result = match_pattern(pattern, value);
            if !result.matched {
                return MatchResult::no_match();
            }
            selections.merge(result.selections);
        }
        MatchResult::matched(selections)
    }

    fn selection_keys(&self) -> Vec<SelectionKey> {
        let mut keys = vec![self.key.clone()];
        if let Some(pattern) = &self.pattern {
            keys.extend(selection_keys(pattern));
        }
        keys
    }
}

#[cfg(test)]
mod tests;
