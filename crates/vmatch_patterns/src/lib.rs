//! vmatch Patterns - Patterns and the structural matcher.
//!
//! This crate provides:
//! - The `Pattern` sum type (literal, object, tuple, map, set, matcher)
//! - The `Matcher` protocol and the built-in matchers (`optional`, `array`,
//!   `intersection`, `union`, `not`, `when`, `select`)
//! - `match_pattern`, the recursive structural matching algorithm
//! - `selection_keys`, the selection-key collector
//! - The `p` builder namespace
//!
//! # Selections
//!
//! Matching is pure. Every call returns a `MatchResult` whose selections
//! the caller merges into its own; no callback or shared state is threaded
//! through the recursion. Within one match a key written twice keeps the
//! last value, in left-to-right evaluation order.

mod keys;
mod matcher;
pub mod matchers;
pub mod p;
mod pattern;
mod selection;
mod structural;

pub use keys::{flat_keys, selection_keys};
pub use matcher::{Matcher, MatcherKind};
pub use pattern::Pattern;
pub use selection::{MatchResult, SelectionKey, Selections};
pub use structural::{is_match, match_pattern};
