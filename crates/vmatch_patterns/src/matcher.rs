//! The matcher protocol.
//!
//! A matcher is an opaque pattern with its own matching logic. The
//! structural matcher delegates to it and, on success, takes over its
//! selections. All built-in composite patterns (`optional`, `array`,
//! `union`, ...) are matchers; callers can add their own by implementing
//! [`Matcher`] and wrapping it with [`Pattern::matcher`](crate::Pattern::matcher).

use std::fmt;

use vmatch_value::Value;

use crate::{MatchResult, SelectionKey};

/// Tag identifying built-in matchers the structural matcher treats
/// specially.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MatcherKind {
    /// Absent object keys are allowed to match.
    Optional,
    And,
    Or,
    Not,
}

/// An immutable, shareable matcher.
pub trait Matcher: Send + Sync + fmt::Debug {
    /// Test `value`, returning whether it matched and what was selected.
    fn match_value(&self, value: &Value) -> MatchResult;

    /// Every selection key this matcher can produce, in order.
    fn selection_keys(&self) -> Vec<SelectionKey> {
        Vec::new()
    }

    fn kind(&self) -> Option<MatcherKind> {
        None
    }
}
