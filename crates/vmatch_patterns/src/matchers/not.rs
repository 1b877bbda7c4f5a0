use vmatch_value::Value;

use crate::{is_match, MatchResult, Matcher, MatcherKind, Pattern};

/// `not(p)`: matches exactly when `p` does not. Never selects.
#[derive(Clone, Debug)]
pub struct NotMatcher {
    pattern: Pattern,
}

impl NotMatcher {
    pub fn new(pattern: Pattern) -> Self {
        NotMatcher { pattern }
    }
}

impl Matcher for NotMatcher {
    fn match_value(&self, value: &Value) -> MatchResult {
        MatchResult::from_bool(!is_match(&self.pattern, value))
    }

    fn kind(&self) -> Option<MatcherKind> {
        Some(MatcherKind::Not)
    }
}
