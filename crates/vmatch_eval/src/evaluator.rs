//! The case evaluator.
//!
//! A `Match` holds the subject and an append-only list of cases. Every
//! registration returns a new evaluator and leaves the receiver untouched,
//! so a partial chain can be cloned and extended in different directions:
//!
//! ```text
//! let base = match_value(event).with(Pattern::object([("type", "ping")]), |_, _| "pong");
//! let strict = base.clone().run();
//! let lenient = base.otherwise(|_| "ignored");
//! ```

use std::rc::Rc;

use vmatch_patterns::Pattern;
use vmatch_value::{RenderConfig, Value};

use crate::case::{Case, Selected};
use crate::{unmatched_value, EvalResult};

/// Builder and evaluator for one match over `subject`.
///
/// `'h` is the lifetime of the registered handlers and guards; `R` is what
/// every handler returns.
pub struct Match<'h, R> {
    subject: Value,
    cases: Vec<Rc<Case<'h, R>>>,
    render: RenderConfig,
}

impl<R> Clone for Match<'_, R> {
    fn clone(&self) -> Self {
        Match {
            subject: self.subject.clone(),
            cases: self.cases.clone(),
            render: self.render,
        }
    }
}

impl<'h, R> Match<'h, R> {
    /// Start a match over `subject` with no cases.
    pub fn new(subject: impl Into<Value>) -> Self {
        Match {
            subject: subject.into(),
            cases: Vec::new(),
            render: RenderConfig::default(),
        }
    }

    pub fn subject(&self) -> &Value {
        &self.subject
    }

    /// Add a case for one pattern.
    pub fn with(
        &self,
        pattern: impl Into<Pattern>,
        handler: impl Fn(Selected, &Value) -> R + 'h,
    ) -> Self {
        self.push(Case::patterns(vec![pattern.into()], None, Rc::new(handler)))
    }

    /// Add a case that accepts any of `patterns`. The first pattern that
    /// matches supplies the selections.
    pub fn with_any<P, I>(
        &self,
        patterns: I,
        handler: impl Fn(Selected, &Value) -> R + 'h,
    ) -> Self
    where
        P: Into<Pattern>,
        I: IntoIterator<Item = P>,
    {
        let patterns = patterns.into_iter().map(Into::into).collect();
        self.push(Case::patterns(patterns, None, Rc::new(handler)))
    }

    /// Add a case for a pattern plus a guard on the subject.
    pub fn with_guarded(
        &self,
        pattern: impl Into<Pattern>,
        guard: impl Fn(&Value) -> bool + 'h,
        handler: impl Fn(Selected, &Value) -> R + 'h,
    ) -> Self {
        self.push(Case::patterns(
            vec![pattern.into()],
            Some(Rc::new(guard)),
            Rc::new(handler),
        ))
    }

    /// Add a case for any of `patterns` plus a guard on the subject.
    pub fn with_any_guarded<P, I>(
        &self,
        patterns: I,
        guard: impl Fn(&Value) -> bool + 'h,
        handler: impl Fn(Selected, &Value) -> R + 'h,
    ) -> Self
    where
        P: Into<Pattern>,
        I: IntoIterator<Item = P>,
    {
        let patterns = patterns.into_iter().map(Into::into).collect();
        self.push(Case::patterns(
            patterns,
            Some(Rc::new(guard)),
            Rc::new(handler),
        ))
    }

    /// Add a guard-only case. Its handler receives the subject.
    pub fn when(
        &self,
        guard: impl Fn(&Value) -> bool + 'h,
        handler: impl Fn(Selected, &Value) -> R + 'h,
    ) -> Self {
        self.push(Case::guard(Rc::new(guard), Rc::new(handler)))
    }

    /// Set how the subject is rendered in an unmatched-value error.
    pub fn render_config(&self, config: RenderConfig) -> Self {
        let mut next = self.clone();
        next.render = config;
        next
    }

    /// Evaluate, falling back to `handler` (called with the subject) when no
    /// case matches.
    pub fn otherwise(&self, handler: impl FnOnce(&Value) -> R) -> R {
        match self.first_match() {
            Some((case, selected)) => case.call(selected, &self.subject),
            None => {
                tracing::debug!("no case matched, running otherwise");
                handler(&self.subject)
            }
        }
    }

    /// Evaluate: run the handler of the first case that matches.
    ///
    /// Fails with `MatchError::UnmatchedValue` when no case matches.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(subject = self.subject.type_name(), cases = self.cases.len())
    )]
    pub fn run(&self) -> EvalResult<R> {
        match self.first_match() {
            Some((case, selected)) => Ok(case.call(selected, &self.subject)),
            None => {
                tracing::debug!("no case matched");
                Err(unmatched_value(&self.subject, &self.render))
            }
        }
    }

    /// Same as [`Match::run`]. Coverage of every input shape is not checked
    /// at runtime; a missed shape surfaces as `UnmatchedValue`.
    pub fn exhaustive(&self) -> EvalResult<R> {
        self.run()
    }

    fn push(&self, case: Case<'h, R>) -> Self {
        let mut next = self.clone();
        next.cases.push(Rc::new(case));
        next
    }

    fn first_match(&self) -> Option<(&Case<'h, R>, Selected)> {
        self.cases.iter().enumerate().find_map(|(index, case)| {
            let selected = case.try_match(&self.subject);
            tracing::trace!(index, matched = selected.is_some(), "tried case");
            selected.map(|selected| {
                tracing::debug!(index, "case matched");
                (case.as_ref(), selected)
            })
        })
    }
}
