//! Top-level key operations.
//!
//! Unlike flatten, merge and diff, nothing here recurses: only the first
//! level of a mapping is considered. Flatten first to work on nested keys.

use crate::error::Result;
use crate::value::expect_object;
use serde_json::{Map, Value};

/// Keys present in both `a` and `b`, in `a`'s order.
pub fn common_keys(a: &Value, b: &Value) -> Result<Vec<String>> {
    let left = expect_object(a, "common_keys")?;
    let right = expect_object(b, "common_keys")?;

    Ok(left
        .keys()
        .filter(|key| right.contains_key(key.as_str()))
        .cloned()
        .collect())
}

/// A new mapping holding only the listed keys that exist, in `keys` order.
pub fn pick<S: AsRef<str>>(object: &Value, keys: &[S]) -> Result<Value> {
    let source = expect_object(object, "pick")?;

    let mut out = Map::new();
    for key in keys {
        let key = key.as_ref();
        if let Some(value) = source.get(key) {
            out.insert(key.to_owned(), value.clone());
        }
    }
    Ok(Value::Object(out))
}

/// A copy of `object` without the listed keys.
pub fn omit<S: AsRef<str>>(object: &Value, keys: &[S]) -> Result<Value> {
    let source = expect_object(object, "omit")?;

    Ok(Value::Object(
        source
            .iter()
            .filter(|(k, _)| !keys.iter().any(|key| key.as_ref() == k.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
    ))
}

/// Whether `object` has no keys.
pub fn is_empty(object: &Value) -> Result<bool> {
    Ok(expect_object(object, "is_empty")?.is_empty())
}
