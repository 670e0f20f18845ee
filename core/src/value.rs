//! Helpers over the [`Node`] model.
//!
//! A node is a plain [`serde_json::Value`]: scalars (`Null`, `Bool`,
//! `Number`, `String`), sequences (`Array`) and mappings (`Object`). Every
//! recursive operation in this crate matches on those variants instead of
//! probing types at runtime.

use crate::{error::Result, Error};
use serde_json::{Map, Number, Value};

/// A nested JSON-like value.
pub type Node = Value;

/// A single-level mapping from joined paths to leaf values.
pub type FlatMap = Map<String, Value>;

/// Human-readable name of a value's variant, used in error messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "Null",
        Value::Bool(_) => "Bool",
        Value::Number(n) if n.is_i64() || n.is_u64() => "Int",
        Value::Number(_) => "Float",
        Value::String(_) => "String",
        Value::Array(_) => "Array",
        Value::Object(_) => "Object",
    }
}

/// Borrow `value` as a mapping or fail with [`Error::InvalidInput`].
pub(crate) fn expect_object<'a>(
    value: &'a Value,
    operation: &'static str,
) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| Error::invalid_input(operation, expected_object(value)))
}

/// Mutable counterpart of [`expect_object`].
pub(crate) fn expect_object_mut<'a>(
    value: &'a mut Value,
    operation: &'static str,
) -> Result<&'a mut Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(Error::invalid_input(operation, expected_object(other))),
    }
}

fn expected_object(value: &Value) -> String {
    format!("expected Object, got {}", type_name(value))
}

/// Return the mapping stored in `slot`, replacing any non-mapping first.
pub(crate) fn ensure_object(slot: &mut Value) -> &mut Map<String, Value> {
    match slot {
        Value::Object(map) => map,
        other => {
            if !other.is_null() {
                tracing::debug!(
                    replaced = type_name(other),
                    "overwriting non-object intermediate with an empty object"
                );
            }
            *other = Value::Object(Map::new());
            ensure_object(other)
        }
    }
}

/// Leaf equality used by diffing.
///
/// Numbers compare by numeric value so that `1` and `1.0` are equal.
/// Arrays and strings compare structurally as whole values.
pub fn leaf_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => number_eq(x, y),
        _ => a == b,
    }
}

fn number_eq(x: &Number, y: &Number) -> bool {
    if let (Some(x), Some(y)) = (x.as_i64(), y.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (x.as_u64(), y.as_u64()) {
        return x == y;
    }
    x.as_f64() == y.as_f64()
}
