//! Flattening nested mappings into delimiter-joined keys, and back.
//!
//! Arrays are leaves: they are never traversed element-wise. An empty nested
//! mapping has no leaves, so it contributes no keys and does not survive a
//! round trip.
//!
//! ```rust
//! use nestkit_core::{flatten, unflatten};
//! use serde_json::{json, Value};
//!
//! let nested = json!({"a": {"b": 1, "c": {"d": 2}}});
//! let flat = flatten(&nested, "")?;
//! assert_eq!(Value::Object(flat.clone()), json!({"a.b": 1, "a.c.d": 2}));
//! assert_eq!(unflatten(&Value::Object(flat))?, nested);
//! # Ok::<(), nestkit_core::Error>(())
//! ```

use crate::path::insert_at;
use crate::value::{expect_object, FlatMap};
use crate::{error::Result, Error, DEFAULT_DELIMITER};
use serde_json::{Map, Value};

/// Flatten `node` using the default `.` delimiter.
///
/// A non-empty `prefix` is prepended to every emitted key.
pub fn flatten(node: &Value, prefix: &str) -> Result<FlatMap> {
    flatten_with(node, prefix, DEFAULT_DELIMITER)
}

/// Flatten `node`, joining path segments with `delimiter`.
pub fn flatten_with(node: &Value, prefix: &str, delimiter: &str) -> Result<FlatMap> {
    check_delimiter("flatten", delimiter)?;
    let map = expect_object(node, "flatten")?;

    let mut out = FlatMap::new();
    flatten_into(map, prefix, delimiter, &mut out);
    tracing::trace!(keys = out.len(), "flattened object");
    Ok(out)
}

fn flatten_into(map: &Map<String, Value>, prefix: &str, delimiter: &str, out: &mut FlatMap) {
    for (key, value) in map {
        let joined = join_key(prefix, key, delimiter);
        match value {
            Value::Object(child) => flatten_into(child, &joined, delimiter, out),
            leaf => {
                out.insert(joined, leaf.clone());
            }
        }
    }
}

/// Join `key` onto `prefix`; an empty prefix contributes nothing.
pub(crate) fn join_key(prefix: &str, key: &str, delimiter: &str) -> String {
    if prefix.is_empty() {
        key.to_owned()
    } else {
        format!("{prefix}{delimiter}{key}")
    }
}

/// Rebuild a nested mapping from a flat one using the default delimiter.
pub fn unflatten(flat: &Value) -> Result<Value> {
    unflatten_with(flat, DEFAULT_DELIMITER)
}

/// Rebuild a nested mapping, splitting keys on `delimiter`.
///
/// Entries are applied in iteration order. When two keys collide at a
/// leaf/mapping boundary the later entry wins: a leaf standing where a
/// mapping is needed is replaced by one, and a later leaf replaces an
/// earlier mapping.
pub fn unflatten_with(flat: &Value, delimiter: &str) -> Result<Value> {
    check_delimiter("unflatten", delimiter)?;
    let entries = expect_object(flat, "unflatten")?;

    let mut out = Map::new();
    for (key, value) in entries {
        let segments: Vec<&str> = key.split(delimiter).collect();
        if let Some((last, parents)) = segments.split_last() {
            insert_at(&mut out, parents, last, value.clone());
        }
    }
    Ok(Value::Object(out))
}

pub(crate) fn check_delimiter(operation: &'static str, delimiter: &str) -> Result<()> {
    if delimiter.is_empty() {
        return Err(Error::invalid_input(operation, "delimiter must not be empty"));
    }
    Ok(())
}
