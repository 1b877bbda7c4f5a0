//! Cases and the value handed to their handlers.

use std::rc::Rc;

use vmatch_patterns::{match_pattern, Pattern, Selections};
use vmatch_value::Value;

/// Case handler: receives what was selected and the original subject.
pub type Handler<'h, R> = Rc<dyn Fn(Selected, &Value) -> R + 'h>;

/// Case guard, called with the subject.
pub type Guard<'h> = Rc<dyn Fn(&Value) -> bool + 'h>;

/// First argument of a case handler.
#[derive(Clone, Debug, PartialEq)]
pub enum Selected {
    /// Nothing was selected: the subject itself.
    Subject(Value),
    /// The anonymous selection. Named selections made alongside it are
    /// dropped.
    Anonymous(Value),
    /// The named selections.
    Named(Selections),
}

impl Selected {
    /// Pick the handler argument from a successful match.
    pub fn from_selections(subject: &Value, selections: Selections) -> Self {
        if selections.is_empty() {
            return Selected::Subject(subject.clone());
        }
        match selections.anonymous() {
            Some(value) => Selected::Anonymous(value.clone()),
            None => Selected::Named(selections),
        }
    }

    /// A named selection.
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self {
            Selected::Named(selections) => selections.get_named(name),
            Selected::Subject(_) | Selected::Anonymous(_) => None,
        }
    }

    /// The argument as one value; named selections become a record.
    pub fn into_value(self) -> Value {
        match self {
            Selected::Subject(value) | Selected::Anonymous(value) => value,
            Selected::Named(selections) => selections.to_value(),
        }
    }
}

/// What a case tests before its handler runs.
enum CaseTest<'h> {
    /// Any of the patterns, then the optional guard.
    Patterns {
        patterns: Vec<Pattern>,
        guard: Option<Guard<'h>>,
    },
    /// Only the guard.
    Guard(Guard<'h>),
}

/// One registered case.
pub(crate) struct Case<'h, R> {
    test: CaseTest<'h>,
    handler: Handler<'h, R>,
}

impl<'h, R> Case<'h, R> {
    pub(crate) fn patterns(
        patterns: Vec<Pattern>,
        guard: Option<Guard<'h>>,
        handler: Handler<'h, R>,
    ) -> Self {
        Case {
            test: CaseTest::Patterns { patterns, guard },
            handler,
        }
    }

    pub(crate) fn guard(guard: Guard<'h>, handler: Handler<'h, R>) -> Self {
        Case {
            test: CaseTest::Guard(guard),
            handler,
        }
    }

    /// The handler argument if this case accepts `subject`.
    ///
    /// Patterns are tried in order and the first match supplies the
    /// selections; the guard sees the subject.
    pub(crate) fn try_match(&self, subject: &Value) -> Option<Selected> {
        match &self.test {
            CaseTest::Patterns { patterns, guard } => {
                let result = patterns
                    .iter()
                    .map(|pattern| match_pattern(pattern, subject))
                    .find(|result| result.matched)?;
                if guard.as_ref().is_some_and(|guard| !guard(subject)) {
                    return None;
                }
                Some(Selected::from_selections(subject, result.selections))
            }
            CaseTest::Guard(guard) => guard(subject).then(|| Selected::Subject(subject.clone())),
        }
    }

    pub(crate) fn call(&self, selected: Selected, subject: &Value) -> R {
        (self.handler)(selected, subject)
    }
}
