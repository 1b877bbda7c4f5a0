//! `serde::Serialize` for `Value`, following `JSON.stringify` rules.
//!
//! - integral numbers print without a fraction, non-finite numbers as `null`
//! - `undefined` and symbol fields are skipped in records, `null` in arrays
//! - maps and sets have no enumerable fields and print as `{}`
//! - `BigInt` cannot be serialized

use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::value::{ObjectValue, Value};

/// Integral numbers below this magnitude print in plain decimal form.
const DECIMAL_LIMIT: f64 = 1e21;

const BIGINT_MESSAGE: &str = "Do not know how to serialize a BigInt";

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Undefined | Value::Symbol(_) | Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serialize_number(*n, serializer),
            Value::BigInt(_) => Err(S::Error::custom(BIGINT_MESSAGE)),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(obj) => serialize_fields(obj, serializer),
            Value::Instance(inst) => serialize_fields(&inst.fields, serializer),
            Value::Map(_) | Value::Set(_) => serializer.serialize_map(Some(0))?.end(),
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "guarded: integral and below 1e21 in magnitude, which fits in i128"
)]
fn serialize_number<S: Serializer>(n: f64, serializer: S) -> Result<S::Ok, S::Error> {
    if !n.is_finite() {
        serializer.serialize_unit()
    } else if n.fract() == 0.0 && n.abs() < DECIMAL_LIMIT {
        serializer.serialize_i128(n as i128)
    } else {
        serializer.serialize_f64(n)
    }
}

fn serialize_fields<S: Serializer>(obj: &ObjectValue, serializer: S) -> Result<S::Ok, S::Error> {
    let visible = obj
        .iter()
        .filter(|(_, v)| !matches!(v, Value::Undefined | Value::Symbol(_)));
    let mut map = serializer.serialize_map(None)?;
    for (key, value) in visible {
        map.serialize_entry(key, value)?;
    }
    map.end()
}
