//! vmatch Eval - Case evaluation for the vmatch pattern engine.
//!
//! This crate provides:
//! - `Match`, the ordered first-match case evaluator
//! - `Selected`, the first argument handed to case handlers
//! - `is_matching` and its curried and dynamic-arity forms
//! - `MatchError` / `EvalResult` and their `#[cold]` factories

mod case;
mod errors;
mod evaluator;
mod is_matching;

pub use case::{Guard, Handler, Selected};
pub use errors::{invalid_argument_count, unmatched_value, EvalResult, MatchError};
pub use evaluator::Match;
pub use is_matching::{is_matching, is_matching_args, is_matching_fn, Checker, IsMatching};
