//! Asymmetric structural diff.
//!
//! [`diff`] answers "what in `a` is missing from, or different in, `b`".
//! Keys that only exist in `b` are never reported. Results are flat and use
//! the same joined-path keys as [`crate::flatten()`].

use crate::flatten::{check_delimiter, join_key};
use crate::value::{expect_object, leaf_eq, FlatMap};
use crate::{error::Result, DEFAULT_DELIMITER};
use serde_json::{Map, Value};

/// Diff `a` against `b` using the default `.` delimiter.
///
/// ```rust
/// use nestkit_core::diff;
/// use serde_json::{json, Value};
///
/// let changed = diff(&json!({"a": 1, "b": 2}), &json!({"a": 1}))?;
/// assert_eq!(Value::Object(changed), json!({"b": 2}));
///
/// let changed = diff(&json!({"a": 1}), &json!({"a": 1, "b": 2}))?;
/// assert!(changed.is_empty());
/// # Ok::<(), nestkit_core::Error>(())
/// ```
pub fn diff(a: &Value, b: &Value) -> Result<FlatMap> {
    diff_with(a, b, DEFAULT_DELIMITER)
}

/// Diff `a` against `b`, joining path segments with `delimiter`.
pub fn diff_with(a: &Value, b: &Value, delimiter: &str) -> Result<FlatMap> {
    check_delimiter("diff", delimiter)?;
    let left = expect_object(a, "diff")?;
    let right = expect_object(b, "diff")?;

    let mut out = FlatMap::new();
    compare(left, right, "", delimiter, &mut out);
    tracing::trace!(differences = out.len(), "computed diff");
    Ok(out)
}

fn compare(
    left: &Map<String, Value>,
    right: &Map<String, Value>,
    base: &str,
    delimiter: &str,
    out: &mut FlatMap,
) {
    let empty = Map::new();
    for (key, value) in left {
        let path = join_key(base, key, delimiter);
        match (value, right.get(key)) {
            (_, None) => {
                out.insert(path, value.clone());
            }
            (Value::Object(child), Some(other)) => {
                let other = other.as_object().unwrap_or(&empty);
                compare(child, other, &path, delimiter, out);
            }
            (_, Some(other)) => {
                if !leaf_eq(value, other) {
                    out.insert(path, value.clone());
                }
            }
        }
    }
}
