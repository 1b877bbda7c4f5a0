use smallvec::SmallVec;
use vmatch_value::Value;

use crate::{match_pattern, selection_keys, MatchResult, Matcher, Pattern, SelectionKey};

/// `array(p)`: an array whose every element matches `p`.
///
/// Each key selected by `p` collects one entry per element into an array,
/// in element order. An empty array matches and selects an empty array
/// under every key of `p`.
#[derive(Clone, Debug)]
pub struct ArrayMatcher {
    pattern: Pattern,
}

impl ArrayMatcher {
    pub fn new(pattern: Pattern) -> Self {
        ArrayMatcher { pattern }
    }
}

impl Matcher for ArrayMatcher {
    fn match_value(&self, value: &Value) -> MatchResult {
        let Some(elements) = value.as_array() else {
            return MatchResult::no_match();
        };

        let mut sequences: SmallVec<[(SelectionKey, Vec<Value>); 4]> = SmallVec::new();
        if elements.is_empty() {
            for key in selection_keys(&self.pattern) {
                if !sequences.iter().any(|(k, _)| *k == key) {
                    sequences.push((key, Vec::new()));
                }
            }
        }

        for element in elements {
            let result = match_pattern(&self.pattern, element);
            if !result.matched {
                return MatchResult::no_match();
            }
            for (key, selected) in result.selections {
                match sequences.iter_mut().find(|(k, _)| *k == key) {
                    Some((_, seq)) => seq.push(selected),
                    None => sequences.push((key, vec![selected])),
                }
            }
        }

        MatchResult::matched(
            sequences
                .into_iter()
                .map(|(key, seq)| (key, Value::array(seq)))
                .collect(),
        )
    }

    fn selection_keys(&self) -> Vec<SelectionKey> {
        selection_keys(&self.pattern)
    }
}

#[cfg(test)]
mod tests;
