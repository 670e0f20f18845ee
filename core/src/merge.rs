//! Deep and shallow merging of mappings.
//!
//! Both merges fold left to right into a fresh accumulator, so later
//! sources win at matching keys. The result owns every level it contains;
//! no input is modified.

use crate::error::Result;
use crate::value::{ensure_object, expect_object};
use serde_json::{Map, Value};

/// Recursively merge `nodes` into a new mapping.
///
/// A mapping value is merged into whatever the accumulator holds at that key
/// (a non-mapping there is replaced with an empty mapping first). Any other
/// value, arrays included, replaces the accumulator's value outright.
/// Merging zero nodes yields `{}`.
///
/// ```rust
/// use nestkit_core::deep_merge;
/// use serde_json::json;
///
/// let merged = deep_merge([&json!({"a": {"x": 1}}), &json!({"a": {"y": 2}})])?;
/// assert_eq!(merged, json!({"a": {"x": 1, "y": 2}}));
/// # Ok::<(), nestkit_core::Error>(())
/// ```
pub fn deep_merge<'a, I>(nodes: I) -> Result<Value>
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut acc = Map::new();
    for (index, node) in nodes.into_iter().enumerate() {
        let source =
            expect_object(node, "deep_merge").map_err(|e| e.at_position("node", index))?;
        merge_into(&mut acc, source);
    }
    Ok(Value::Object(acc))
}

/// Two-argument form of [`deep_merge`].
pub fn deep_merge_pair(a: &Value, b: &Value) -> Result<Value> {
    deep_merge([a, b])
}

/// Shallow merge: top-level keys of later nodes replace earlier ones
/// wholesale, nested mappings included.
pub fn merge<'a, I>(nodes: I) -> Result<Value>
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut acc = Map::new();
    for (index, node) in nodes.into_iter().enumerate() {
        let source = expect_object(node, "merge").map_err(|e| e.at_position("node", index))?;
        for (key, value) in source {
            acc.insert(key.clone(), value.clone());
        }
    }
    Ok(Value::Object(acc))
}

/// Deep-merge `source` into `target` in place.
pub fn merge_into(target: &mut Map<String, Value>, source: &Map<String, Value>) {
    for (key, value) in source {
        match value {
            Value::Object(child) => {
                let slot = target
                    .entry(key.as_str())
                    .or_insert_with(|| Value::Object(Map::new()));
                merge_into(ensure_object(slot), child);
            }
            other => {
                target.insert(key.clone(), other.clone());
            }
        }
    }
}
