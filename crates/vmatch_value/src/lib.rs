//! vmatch Value - Runtime values for the vmatch pattern engine.
//!
//! This crate provides:
//! - The closed `Value` enum the engine matches against (primitives, arrays,
//!   records, maps, sets, class instances)
//! - Identity comparisons (`same_value`, `same_value_zero`) with the exact
//!   NaN and signed-zero rules the matcher relies on
//! - Property access (`has_property`, `property`) used by object patterns
//! - JSON rendering of values for error messages (`render`)
//!
//! # Heap Values
//!
//! Containers live behind `Heap<T>`, an `Arc` wrapper whose constructor is
//! private to this crate. All heap values are built through `Value::` factory
//! methods, so reference identity (`Heap::ptr_eq`) is meaningful: two values
//! built by separate calls are never the same reference.

pub mod render;
mod serialize;
mod value;

pub use render::{render_subject, to_json, RenderConfig, RenderError};
pub use value::{Class, ClassRef, Heap, InstanceValue, MapValue, ObjectValue, SetValue, Symbol, Value};
