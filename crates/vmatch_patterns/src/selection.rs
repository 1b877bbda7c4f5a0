//! Selection keys, captured selections and match results.

use std::fmt;

use smallvec::SmallVec;
use vmatch_value::Value;

/// Key under which a selection is captured.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SelectionKey {
    /// `select("name")`.
    Named(String),
    /// `select()` without a name. At most one per handler argument.
    Anonymous,
}

impl SelectionKey {
    pub fn named(name: impl Into<String>) -> Self {
        SelectionKey::Named(name.into())
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            SelectionKey::Named(name) => Some(name),
            SelectionKey::Anonymous => None,
        }
    }
}

impl fmt::Display for SelectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionKey::Named(name) => write!(f, "{name}"),
            SelectionKey::Anonymous => write!(f, "<anonymous>"),
        }
    }
}

/// Ordered key → value mapping of captured sub-values.
///
/// Keys keep the position of their first insertion; re-inserting a key
/// overwrites its value (last write wins).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selections {
    entries: SmallVec<[(SelectionKey, Value); 4]>,
}

impl Selections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` under `key`, overwriting any previous value.
    pub fn insert(&mut self, key: SelectionKey, value: Value) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Insert every entry of `other`, in order, overwriting existing keys.
    pub fn merge(&mut self, other: Selections) {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
    }

    /// Record `Undefined` under each key (the "absent" marker).
    pub fn seed_absent(&mut self, keys: impl IntoIterator<Item = SelectionKey>) {
        for key in keys {
            self.insert(key, Value::Undefined);
        }
    }

    pub fn get(&self, key: &SelectionKey) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Look up a named selection.
    pub fn get_named(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_name() == Some(name))
            .map(|(_, v)| v)
    }

    /// The anonymous selection, if one was captured.
    pub fn anonymous(&self) -> Option<&Value> {
        self.get(&SelectionKey::Anonymous)
    }

    pub fn keys(&self) -> impl Iterator<Item = &SelectionKey> + '_ {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SelectionKey, &Value)> + '_ {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Named selections as a record value. The anonymous selection is not
    /// part of the record.
    pub fn to_value(&self) -> Value {
        Value::object(
            self.entries
                .iter()
                .filter_map(|(k, v)| k.as_name().map(|name| (name, v.clone()))),
        )
    }
}

impl FromIterator<(SelectionKey, Value)> for Selections {
    fn from_iter<I: IntoIterator<Item = (SelectionKey, Value)>>(iter: I) -> Self {
        let mut selections = Selections::new();
        for (key, value) in iter {
            selections.insert(key, value);
        }
        selections
    }
}

impl IntoIterator for Selections {
    type Item = (SelectionKey, Value);
    type IntoIter = smallvec::IntoIter<[(SelectionKey, Value); 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Outcome of testing one value against one pattern.
///
/// `selections` is meaningful only when `matched` is true.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MatchResult {
    pub matched: bool,
    pub selections: Selections,
}

impl MatchResult {
    /// A successful match with the given selections.
    pub fn matched(selections: Selections) -> Self {
        MatchResult {
            matched: true,
            selections,
        }
    }

    /// A failed match.
    pub fn no_match() -> Self {
        MatchResult::default()
    }

    /// A match (or not) that selects nothing.
    pub fn from_bool(matched: bool) -> Self {
        MatchResult {
            matched,
            selections: Selections::new(),
        }
    }
}

#[cfg(test)]
mod tests;
