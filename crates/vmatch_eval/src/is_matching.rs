//! `is_matching`: pattern tests outside of a `Match`.

use vmatch_patterns::{is_match, Pattern};
use vmatch_value::Value;

use crate::{invalid_argument_count, EvalResult};

/// Whether `value` matches `pattern`.
pub fn is_matching(pattern: &Pattern, value: &Value) -> bool {
    is_match(pattern, value)
}

/// Curried form: a reusable predicate for `pattern`.
///
/// ```text
/// let is_ok = is_matching_fn(Pattern::object([("type", "ok")]));
/// let oks: Vec<_> = events.iter().filter(|e| is_ok(e)).collect();
/// ```
pub fn is_matching_fn(pattern: impl Into<Pattern>) -> impl Fn(&Value) -> bool + Clone + Send + Sync {
    let checker = Checker::new(pattern);
    move |value: &Value| checker.check(value)
}

/// A pattern bound for repeated checks.
#[derive(Clone, Debug)]
pub struct Checker {
    pattern: Pattern,
}

impl Checker {
    pub fn new(pattern: impl Into<Pattern>) -> Self {
        Checker {
            pattern: pattern.into(),
        }
    }

    pub fn check(&self, value: &Value) -> bool {
        is_match(&self.pattern, value)
    }
}

/// Result of a dynamically-sized `is_matching` call.
#[derive(Clone, Debug)]
pub enum IsMatching {
    /// Called with the pattern only.
    Checker(Checker),
    /// Called with the pattern and a value.
    Outcome(bool),
}

/// `is_matching` with a runtime argument list: the pattern followed by
/// `values`.
///
/// One argument (no values) yields a [`Checker`], two yield the outcome,
/// anything else is `MatchError::InvalidArgumentCount`. The pattern is
/// always present, so the count is never below one.
pub fn is_matching_args(pattern: impl Into<Pattern>, values: &[Value]) -> EvalResult<IsMatching> {
    match values {
        [] => Ok(IsMatching::Checker(Checker::new(pattern))),
        [value] => Ok(IsMatching::Outcome(is_match(&pattern.into(), value))),
        _ => Err(invalid_argument_count(values.len() + 1)),
    }
}

#[cfg(test)]
mod tests;
