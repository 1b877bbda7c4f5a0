use std::fmt;
use std::sync::Arc;

use vmatch_value::Value;

use crate::{MatchResult, Matcher};

/// Shared predicate used by guard matchers.
pub type GuardFn = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// `when(predicate)`: matches when the predicate holds. Never selects.
#[derive(Clone)]
pub struct GuardMatcher {
    predicate: GuardFn,
    label: &'static str,
}

impl GuardMatcher {
    pub fn new(predicate: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        GuardMatcher::labelled("when", predicate)
    }

    /// A guard with a name shown in `Debug` output.
    pub fn labelled(
        label: &'static str,
        predicate: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        GuardMatcher {
            predicate: Arc::new(predicate),
            label,
        }
    }
}

impl Matcher for GuardMatcher {
    fn match_value(&self, value: &Value) -> MatchResult {
        MatchResult::from_bool((self.predicate)(value))
    }
}

impl fmt::Debug for GuardMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GuardMatcher({})", self.label)
    }
}

#[cfg(test)]
mod tests;
