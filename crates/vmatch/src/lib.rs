//! vmatch - Structural pattern matching over tree-shaped runtime values.
//!
//! Describe a shape with a [`Pattern`], test values against it, capture
//! sub-values with `p::select`, and dispatch to the first case that
//! matches:
//!
//! ```text
//! use vmatch::{match_value, p, Pattern, Value};
//!
//! let event = Value::object([("type", Value::from("a")), ("data", Value::int(1))]);
//! let data = match_value(event)
//!     .with(Pattern::object([("type", Pattern::from("a")), ("data", p::select())]), |x, _| x.into_value())
//!     .run()?;
//! assert_eq!(data, Value::int(1));
//! ```
//!
//! # Logging
//!
//! The engine emits `tracing` events: one span per `run`, a trace event per
//! tried case and per matcher delegation. [`init_tracing`] installs a
//! subscriber driven by `VMATCH_LOG` (filter directives, e.g.
//! `VMATCH_LOG=vmatch_eval=debug`); set `VMATCH_LOG_TREE` for indented
//! hierarchical output.

use std::sync::Once;

pub use vmatch_eval::{
    is_matching, is_matching_args, is_matching_fn, Checker, EvalResult, IsMatching, Match,
    MatchError, Selected,
};
pub use vmatch_patterns::matchers;
pub use vmatch_patterns::p;
pub use vmatch_patterns::p as P;
pub use vmatch_patterns::{
    match_pattern, selection_keys, MatchResult, Matcher, MatcherKind, Pattern, SelectionKey,
    Selections,
};
pub use vmatch_value::{
    render_subject, to_json, Class, ClassRef, InstanceValue, MapValue, ObjectValue, RenderConfig,
    RenderError, SetValue, Symbol, Value,
};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "VMATCH_LOG";

/// Environment variable selecting hierarchical log output.
pub const LOG_TREE_ENV: &str = "VMATCH_LOG_TREE";

/// Start a match over `subject`.
pub fn match_value<'h, R>(subject: impl Into<Value>) -> Match<'h, R> {
    Match::new(subject)
}

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber if `VMATCH_LOG` is set.
///
/// Safe to call more than once; only the first call has any effect. If the
/// host already installed a global subscriber, that one is kept.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if VMATCH_LOG is set and parses
        let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) else {
            return;
        };
        let tree = std::env::var_os(LOG_TREE_ENV).is_some();

        let installed = tracing_subscriber::registry()
            .with(filter)
            .with((!tree).then(|| fmt::layer().with_target(true).with_level(true)))
            .with(tree.then(|| tracing_tree::HierarchicalLayer::new(2).with_targets(true)))
            .try_init();
        if installed.is_err() {
            tracing::debug!("global subscriber already set, keeping it");
        }
    });
}
