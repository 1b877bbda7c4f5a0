//! Runtime values matched by the engine.
//!
//! # Heap Enforcement
//!
//! Containers are stored behind `Heap<T>`, whose constructor is private to
//! this crate. The factory methods on `Value` are the only way to build
//! them:
//!
//! ```text
//! let s = Value::string("hello");                       // OK
//! let xs = Value::array(vec![Value::int(1)]);            // OK
//! let rec = Value::object([("type", Value::from("a"))]); // OK
//! let bad = Value::Array(Heap::new(vec![]));            // ERROR: Heap::new is pub(crate)
//! ```
//!
//! # Identity
//!
//! `same_value` is the literal-pattern comparison: NaN equals NaN, `+0` and
//! `-0` differ, and heap values compare by reference. `same_value_zero` is
//! the map-key / set-member comparison and treats both zeros as equal.
//! `PartialEq` is deep structural equality and exists for assertions.

mod class;
mod collections;
mod heap;
mod symbol;

use std::fmt;

pub use class::{Class, ClassRef, InstanceValue};
pub use collections::{MapValue, ObjectValue, SetValue};
pub use heap::Heap;
pub use symbol::Symbol;

/// A runtime value.
#[derive(Clone)]
pub enum Value {
    // Primitives
    /// Absent value; also the marker for selections that were not captured.
    Undefined,
    Null,
    Bool(bool),
    /// IEEE double.
    Number(f64),
    BigInt(i128),
    Str(Heap<String>),
    Symbol(Symbol),

    // Object-like values
    /// Array, also used for tuples.
    Array(Heap<Vec<Value>>),
    /// Plain string-keyed record.
    Object(Heap<ObjectValue>),
    /// Map keyed by arbitrary values.
    Map(Heap<MapValue>),
    Set(Heap<SetValue>),
    /// Instance of a user class.
    Instance(Heap<InstanceValue>),
}

// Factory Methods

impl Value {
    #[inline]
    pub fn number(n: f64) -> Self {
        Value::Number(n)
    }

    /// Create a number from an integer.
    #[inline]
    #[expect(
        clippy::cast_precision_loss,
        reason = "numbers are doubles; integers beyond 2^53 round like any other double"
    )]
    pub fn int(n: i64) -> Self {
        Value::Number(n as f64)
    }

    #[inline]
    pub fn bigint(n: i128) -> Self {
        Value::BigInt(n)
    }

    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create a fresh symbol value.
    pub fn symbol(description: &str) -> Self {
        Value::Symbol(Symbol::described(description))
    }

    /// Create an array value.
    ///
    /// ```text
    /// let empty = Value::array(vec![]);
    /// let pair = Value::array(vec![Value::from("+"), Value::int(2)]);
    /// ```
    #[inline]
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Heap::new(items))
    }

    /// Create a record from `(key, value)` pairs. Later duplicates overwrite.
    ///
    /// ```text
    /// let event = Value::object([("type", Value::from("success")), ("data", Value::from("yo"))]);
    /// ```
    pub fn object<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Object(Heap::new(
            entries.into_iter().map(|(k, v)| (k, v.into())).collect(),
        ))
    }

    /// Create a map from `(key, value)` pairs.
    pub fn map<K, V, I>(entries: I) -> Self
    where
        K: Into<Value>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Map(Heap::new(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        ))
    }

    /// Create a set; duplicate members (under SameValueZero) are dropped.
    pub fn set<V, I>(items: I) -> Self
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        Value::Set(Heap::new(items.into_iter().map(Into::into).collect()))
    }

    /// Create an instance of `class` with the given fields.
    pub fn instance<K, V, I>(class: &ClassRef, fields: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Instance(Heap::new(InstanceValue {
            class: ClassRef::clone(class),
            fields: fields.into_iter().map(|(k, v)| (k, v.into())).collect(),
        }))
    }
}

// Value Methods

impl Value {
    #[inline]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// `null` or `undefined`.
    #[inline]
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// Whether the value is a container that structural patterns can
    /// descend into.
    #[inline]
    pub fn is_object_like(&self) -> bool {
        matches!(
            self,
            Value::Array(_) | Value::Object(_) | Value::Map(_) | Value::Set(_) | Value::Instance(_)
        )
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bigint(&self) -> Option<i128> {
        match self {
            Value::BigInt(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Value::Symbol(sym) => Some(sym),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectValue> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&MapValue> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_set(&self) -> Option<&SetValue> {
        match self {
            Value::Set(set) => Some(set),
            _ => None,
        }
    }

    pub fn as_instance(&self) -> Option<&InstanceValue> {
        match self {
            Value::Instance(inst) => Some(inst),
            _ => None,
        }
    }

    /// The `typeof` name of this value.
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::BigInt(_) => "bigint",
            Value::Str(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Null
            | Value::Array(_)
            | Value::Object(_)
            | Value::Map(_)
            | Value::Set(_)
            | Value::Instance(_) => "object",
        }
    }

    /// Descriptive type name for logs and messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
            Value::Set(_) => "set",
            Value::Instance(_) => "instance",
            _ => self.type_of(),
        }
    }

    /// Whether this value is an instance of `class` or one of its subclasses.
    pub fn is_instance_of(&self, class: &Class) -> bool {
        match self {
            Value::Instance(inst) => inst.class.derives_from(class),
            _ => false,
        }
    }

    /// `Object.is` identity.
    pub fn same_value(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => {
                (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()
            }
            _ => self.same_value_zero(other),
        }
    }

    /// SameValueZero identity: like [`Value::same_value`] but `+0 == -0`.
    #[expect(clippy::float_cmp, reason = "identity is exact comparison")]
    pub fn same_value_zero(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => (a.is_nan() && b.is_nan()) || a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => Heap::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Heap::ptr_eq(a, b),
            (Value::Map(a), Value::Map(b)) => Heap::ptr_eq(a, b),
            (Value::Set(a), Value::Set(b)) => Heap::ptr_eq(a, b),
            (Value::Instance(a), Value::Instance(b)) => Heap::ptr_eq(a, b),
            _ => false,
        }
    }

    /// The `key in value` test.
    ///
    /// Records and instances expose their fields, arrays expose `length` and
    /// their indices, maps and sets expose `size`. Primitives have none.
    pub fn has_property(&self, key: &str) -> bool {
        match self {
            Value::Object(obj) => obj.contains_key(key),
            Value::Instance(inst) => inst.fields.contains_key(key),
            Value::Array(items) => key == "length" || array_index(key, items.len()).is_some(),
            Value::Map(_) | Value::Set(_) => key == "size",
            _ => false,
        }
    }

    /// The `value[key]` read; `None` where [`Value::has_property`] is false.
    pub fn property(&self, key: &str) -> Option<Value> {
        match self {
            Value::Object(obj) => obj.get(key).cloned(),
            Value::Instance(inst) => inst.fields.get(key).cloned(),
            Value::Array(items) if key == "length" => Some(Value::int(len_as_i64(items.len()))),
            Value::Array(items) => array_index(key, items.len()).map(|i| items[i].clone()),
            Value::Map(map) if key == "size" => Some(Value::int(len_as_i64(map.len()))),
            Value::Set(set) if key == "size" => Some(Value::int(len_as_i64(set.len()))),
            _ => None,
        }
    }
}

/// Parse a canonical array index (`"0"`, `"12"`, never `"01"`) below `len`.
fn array_index(key: &str, len: usize) -> Option<usize> {
    let index: usize = key.parse().ok()?;
    (index < len && index.to_string() == key).then_some(index)
}

fn len_as_i64(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}

/// Format a number the way it prints in source: integral values without a
/// fraction, `NaN`, `Infinity`, and `-0` as `0`. Magnitudes from `1e21` up
/// and below `1e-6` use exponent form with a signed exponent (`1.5e+300`).
pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let formatted = format!("{n:e}");
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        }
    } else {
        n.to_string()
    }
}

// Conversions

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<Symbol> for Value {
    fn from(sym: Symbol) -> Self {
        Value::Symbol(sym)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Undefined, Into::into)
    }
}

// Trait Implementations

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Set(a), Value::Set(b)) => a == b,
            (Value::Instance(a), Value::Instance(b)) => a == b,
            _ => self.same_value(other),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "Undefined"),
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Number(n) => write!(f, "Number({})", format_number(*n)),
            Value::BigInt(n) => write!(f, "BigInt({n})"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::Symbol(sym) => write!(f, "{sym:?}"),
            Value::Array(items) => write!(f, "Array({:?})", &**items),
            Value::Object(obj) => f.debug_map().entries(obj.iter()).finish(),
            Value::Map(map) => {
                write!(f, "Map")?;
                f.debug_map().entries(map.iter()).finish()
            }
            Value::Set(set) => {
                write!(f, "Set")?;
                f.debug_set().entries(set.iter()).finish()
            }
            Value::Instance(inst) => {
                write!(f, "{}", inst.class.name())?;
                f.debug_map().entries(inst.fields.iter()).finish()
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{}", format_number(*n)),
            Value::BigInt(n) => write!(f, "{n}n"),
            Value::Str(s) => write!(f, "\"{}\"", &**s),
            Value::Symbol(sym) => write!(f, "{sym}"),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Object(obj) => write_fields(f, obj),
            Value::Map(map) => {
                write!(f, "Map {{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k} => {v}")?;
                }
                write!(f, "}}")
            }
            Value::Set(set) => {
                write!(f, "Set {{")?;
                for (i, item) in set.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "}}")
            }
            Value::Instance(inst) => {
                write!(f, "{} ", inst.class.name())?;
                write_fields(f, &inst.fields)
            }
        }
    }
}

fn write_fields(f: &mut fmt::Formatter<'_>, obj: &ObjectValue) -> fmt::Result {
    write!(f, "{{")?;
    for (i, (k, v)) in obj.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{k}: {v}")?;
    }
    write!(f, "}}")
}
