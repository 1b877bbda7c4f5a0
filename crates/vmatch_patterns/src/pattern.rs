//! The `Pattern` sum type.

use std::sync::Arc;

use vmatch_value::{Symbol, Value};

use crate::{Matcher, MatcherKind};

/// A shape a value can be tested against.
///
/// Patterns are immutable and cheap to clone; matchers are shared through
/// `Arc`, so one pattern can be used from many threads.
#[derive(Clone, Debug)]
pub enum Pattern {
    /// Matches a value that is `Object.is`-identical.
    Literal(Value),
    /// Matches any object-like value having every listed key (or an
    /// optional sub-pattern for it) whose values match. Extra keys are
    /// ignored.
    Object(Vec<(String, Pattern)>),
    /// Matches an array of exactly this length, element by element.
    Tuple(Vec<Pattern>),
    /// Matches a map whose value under each listed key matches.
    Map(Vec<(Value, Pattern)>),
    /// Matches a set: empty, all-elements-match (one matcher), or
    /// membership (literals).
    Set(Vec<Pattern>),
    /// Delegates to an opaque matcher.
    Matcher(Arc<dyn Matcher>),
}

impl Pattern {
    pub fn literal(value: impl Into<Value>) -> Self {
        Pattern::Literal(value.into())
    }

    /// Literal `undefined`.
    pub fn undefined() -> Self {
        Pattern::Literal(Value::Undefined)
    }

    /// Literal `null`.
    pub fn null() -> Self {
        Pattern::Literal(Value::Null)
    }

    /// Object pattern. A repeated key replaces the earlier sub-pattern and
    /// keeps its position.
    ///
    /// ```text
    /// let pat = Pattern::object([("type", Pattern::from("ok")), ("data", p::select())]);
    /// ```
    pub fn object<K, P, I>(entries: I) -> Self
    where
        K: Into<String>,
        P: Into<Pattern>,
        I: IntoIterator<Item = (K, P)>,
    {
        let mut fields: Vec<(String, Pattern)> = Vec::new();
        for (key, pattern) in entries {
            let key = key.into();
            let pattern = pattern.into();
            match fields.iter_mut().find(|(k, _)| *k == key) {
                Some((_, slot)) => *slot = pattern,
                None => fields.push((key, pattern)),
            }
        }
        Pattern::Object(fields)
    }

    /// Tuple pattern.
    pub fn tuple<P, I>(items: I) -> Self
    where
        P: Into<Pattern>,
        I: IntoIterator<Item = P>,
    {
        Pattern::Tuple(items.into_iter().map(Into::into).collect())
    }

    /// Map pattern. Keys are compared with SameValueZero; a repeated key
    /// replaces the earlier sub-pattern.
    pub fn map<K, P, I>(entries: I) -> Self
    where
        K: Into<Value>,
        P: Into<Pattern>,
        I: IntoIterator<Item = (K, P)>,
    {
        let mut pairs: Vec<(Value, Pattern)> = Vec::new();
        for (key, pattern) in entries {
            let key = key.into();
            let pattern = pattern.into();
            match pairs.iter_mut().find(|(k, _)| k.same_value_zero(&key)) {
                Some((_, slot)) => *slot = pattern,
                None => pairs.push((key, pattern)),
            }
        }
        Pattern::Map(pairs)
    }

    /// Set pattern. Duplicate literals (SameValueZero) and duplicate
    /// matcher handles collapse, as they would in a set.
    pub fn set<P, I>(items: I) -> Self
    where
        P: Into<Pattern>,
        I: IntoIterator<Item = P>,
    {
        let mut members: Vec<Pattern> = Vec::new();
        for item in items {
            let item = item.into();
            if !members.iter().any(|m| m.same_member(&item)) {
                members.push(item);
            }
        }
        Pattern::Set(members)
    }

    /// Wrap a custom matcher.
    pub fn matcher(matcher: impl Matcher + 'static) -> Self {
        Pattern::Matcher(Arc::new(matcher))
    }

    pub fn as_matcher(&self) -> Option<&dyn Matcher> {
        match self {
            Pattern::Matcher(m) => Some(m.as_ref()),
            _ => None,
        }
    }

    /// Whether this is an `optional(...)` matcher.
    pub fn is_optional(&self) -> bool {
        self.as_matcher()
            .is_some_and(|m| m.kind() == Some(MatcherKind::Optional))
    }

    fn same_member(&self, other: &Pattern) -> bool {
        match (self, other) {
            (Pattern::Literal(a), Pattern::Literal(b)) => a.same_value_zero(b),
            (Pattern::Matcher(a), Pattern::Matcher(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Lift a value into a pattern.
///
/// Primitives become literals. Arrays become tuples, records and instances
/// become object patterns over their fields, maps become map patterns; the
/// children are lifted recursively. Set members stay literals, so they are
/// tested by membership.
impl From<Value> for Pattern {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Pattern::Tuple(items.iter().cloned().map(Pattern::from).collect()),
            Value::Object(obj) => Pattern::Object(
                obj.iter()
                    .map(|(k, v)| (k.to_string(), Pattern::from(v.clone())))
                    .collect(),
            ),
            Value::Instance(inst) => Pattern::Object(
                inst.fields
                    .iter()
                    .map(|(k, v)| (k.to_string(), Pattern::from(v.clone())))
                    .collect(),
            ),
            Value::Map(map) => Pattern::Map(
                map.iter()
                    .map(|(k, v)| (k.clone(), Pattern::from(v.clone())))
                    .collect(),
            ),
            Value::Set(set) => Pattern::Set(set.iter().cloned().map(Pattern::Literal).collect()),
            primitive => Pattern::Literal(primitive),
        }
    }
}

impl From<&Value> for Pattern {
    fn from(value: &Value) -> Self {
        Pattern::from(value.clone())
    }
}

impl From<&str> for Pattern {
    fn from(s: &str) -> Self {
        Pattern::Literal(Value::from(s))
    }
}

impl From<String> for Pattern {
    fn from(s: String) -> Self {
        Pattern::Literal(Value::from(s))
    }
}

impl From<f64> for Pattern {
    fn from(n: f64) -> Self {
        Pattern::Literal(Value::from(n))
    }
}

impl From<i32> for Pattern {
    fn from(n: i32) -> Self {
        Pattern::Literal(Value::from(n))
    }
}

impl From<i64> for Pattern {
    fn from(n: i64) -> Self {
        Pattern::Literal(Value::from(n))
    }
}

impl From<bool> for Pattern {
    fn from(b: bool) -> Self {
        Pattern::Literal(Value::from(b))
    }
}

impl From<Symbol> for Pattern {
    fn from(sym: Symbol) -> Self {
        Pattern::Literal(Value::Symbol(sym))
    }
}

impl From<Arc<dyn Matcher>> for Pattern {
    fn from(matcher: Arc<dyn Matcher>) -> Self {
        Pattern::Matcher(matcher)
    }
}

#[cfg(test)]
mod tests;
