//! Stack safety for recursive matching.
//!
//! The structural matcher recurses once per level of pattern nesting, and
//! nothing bounds how deep a caller-built pattern (or the value it is tested
//! against) may go. Every recursive step runs through
//! [`ensure_sufficient_stack`], which grows the stack on demand instead of
//! overflowing it.
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker` grows the stack when the red zone is hit.
//! - **WASM targets**: plain call; the runtime manages its own stack.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn depth(pattern: &Pattern) -> usize {
///     ensure_sufficient_stack(|| match pattern {
///         Pattern::Tuple(items) => 1 + items.iter().map(depth).max().unwrap_or(0),
///         _ => 1,
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version: call `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
