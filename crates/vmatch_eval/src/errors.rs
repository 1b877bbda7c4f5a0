//! Errors raised by the evaluator.
//!
//! Factory functions are the public way to build errors; they are `#[cold]`
//! so the matching fast path stays tight.

use thiserror::Error;
use vmatch_value::{render_subject, RenderConfig, Value};

/// Result of evaluating a match.
pub type EvalResult<T> = Result<T, MatchError>;

/// Failure of `Match::run` or `is_matching_args`.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum MatchError {
    /// No case matched the subject and there was no `otherwise`.
    #[error("Pattern matching error: no pattern matches value {rendered}")]
    UnmatchedValue {
        /// Best-effort rendering of the subject.
        rendered: String,
        subject: Value,
    },

    #[error(
        "isMatching wasn't given the right number of arguments: expected 1 or 2, received {received}."
    )]
    InvalidArgumentCount { received: usize },
}

impl MatchError {
    /// The unmatched subject, for `UnmatchedValue`.
    pub fn subject(&self) -> Option<&Value> {
        match self {
            MatchError::UnmatchedValue { subject, .. } => Some(subject),
            MatchError::InvalidArgumentCount { .. } => None,
        }
    }
}

/// No case matched `subject`.
#[cold]
pub fn unmatched_value(subject: &Value, config: &RenderConfig) -> MatchError {
    MatchError::UnmatchedValue {
        rendered: render_subject(subject, config),
        subject: subject.clone(),
    }
}

/// `is_matching` called with the wrong number of arguments.
#[cold]
pub fn invalid_argument_count(received: usize) -> MatchError {
    MatchError::InvalidArgumentCount { received }
}

#[cfg(test)]
mod tests;
