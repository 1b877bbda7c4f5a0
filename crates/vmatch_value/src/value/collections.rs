//! Insertion-ordered records, maps and sets.
//!
//! All three keep entries in a `Vec` for ordered iteration and an
//! `FxHashMap` from key to position for O(1) lookup. Map keys and set
//! members are compared with SameValueZero (see [`ValueKey`]).

use rustc_hash::FxHashMap;

use super::Value;

// ObjectValue

/// String-keyed record with insertion-ordered fields.
#[derive(Clone, Debug, Default)]
pub struct ObjectValue {
    entries: Vec<(String, Value)>,
    index: FxHashMap<String, usize>,
}

impl ObjectValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field. Re-inserting an existing key replaces the value in place
    /// and returns the previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        let key = key.into();
        if let Some(&pos) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[pos].1, value));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        let pos = *self.index.get(key)?;
        self.entries.get(pos).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> + '_ {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for ObjectValue {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut object = ObjectValue::new();
        for (key, value) in iter {
            object.insert(key, value);
        }
        object
    }
}

impl PartialEq for ObjectValue {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|ov| v == ov))
    }
}

// ValueKey

/// Hashable identity of a value under SameValueZero.
///
/// Primitives key by content (all NaNs collapse, `-0` keys as `+0`); heap
/// values key by allocation address, so two structurally equal arrays are
/// distinct keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum ValueKey {
    Undefined,
    Null,
    Bool(bool),
    Number(u64),
    BigInt(i128),
    Str(String),
    Symbol(u64),
    Ref(usize),
}

impl ValueKey {
    pub(crate) fn of(value: &Value) -> Self {
        match value {
            Value::Undefined => ValueKey::Undefined,
            Value::Null => ValueKey::Null,
            Value::Bool(b) => ValueKey::Bool(*b),
            Value::Number(n) => {
                let canonical = if n.is_nan() {
                    f64::NAN
                } else if *n == 0.0 {
                    0.0
                } else {
                    *n
                };
                ValueKey::Number(canonical.to_bits())
            }
            Value::BigInt(n) => ValueKey::BigInt(*n),
            Value::Str(s) => ValueKey::Str(s.to_string()),
            Value::Symbol(sym) => ValueKey::Symbol(sym.id()),
            Value::Array(h) => ValueKey::Ref(h.addr()),
            Value::Object(h) => ValueKey::Ref(h.addr()),
            Value::Map(h) => ValueKey::Ref(h.addr()),
            Value::Set(h) => ValueKey::Ref(h.addr()),
            Value::Instance(h) => ValueKey::Ref(h.addr()),
        }
    }
}

// MapValue

/// Map from arbitrary values to values, in insertion order.
#[derive(Clone, Debug, Default)]
pub struct MapValue {
    entries: Vec<(Value, Value)>,
    index: FxHashMap<ValueKey, usize>,
}

impl MapValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an entry; an existing key keeps its position.
    pub fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
        let id = ValueKey::of(&key);
        if let Some(&pos) = self.index.get(&id) {
            return Some(std::mem::replace(&mut self.entries[pos].1, value));
        }
        self.index.insert(id, self.entries.len());
        self.entries.push((key, value));
        None
    }

    pub fn get(&self, key: &Value) -> Option<&Value> {
        let pos = *self.index.get(&ValueKey::of(key))?;
        self.entries.get(pos).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &Value) -> bool {
        self.index.contains_key(&ValueKey::of(key))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> + '_ {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(Value, Value)> for MapValue {
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        let mut map = MapValue::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl PartialEq for MapValue {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|ov| v == ov))
    }
}

// SetValue

/// Set of values in insertion order.
#[derive(Clone, Debug, Default)]
pub struct SetValue {
    items: Vec<Value>,
    index: FxHashMap<ValueKey, usize>,
}

impl SetValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member; returns `false` if it was already present.
    pub fn insert(&mut self, item: Value) -> bool {
        let id = ValueKey::of(&item);
        if self.index.contains_key(&id) {
            return false;
        }
        self.index.insert(id, self.items.len());
        self.items.push(item);
        true
    }

    pub fn contains(&self, item: &Value) -> bool {
        self.index.contains_key(&ValueKey::of(item))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Value> + '_ {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<Value> for SetValue {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut set = SetValue::new();
        for item in iter {
            set.insert(item);
        }
        set
    }
}

impl PartialEq for SetValue {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|item| other.contains(item))
    }
}
