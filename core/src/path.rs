//! Path access into nested mappings.
//!
//! A [`Path`] is an ordered list of key segments. [`get`] walks a path
//! without ever failing; [`set`] and [`remove`] mutate the caller's value in
//! place and hand the same reference back so calls can be chained.
//!
//! ```rust
//! use nestkit_core::path::{get, remove, set};
//! use serde_json::json;
//!
//! let mut config = json!({"server": {"port": 80}});
//! set(&mut config, &["server", "host"], json!("localhost"))?;
//! assert_eq!(get(&config, &["server", "host"]), Some(&json!("localhost")));
//!
//! remove(&mut config, &["server", "port"])?;
//! assert_eq!(config, json!({"server": {"host": "localhost"}}));
//! # Ok::<(), nestkit_core::Error>(())
//! ```

use crate::value::{ensure_object, expect_object_mut};
use crate::{error::Result, Error, DEFAULT_DELIMITER};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{fmt, ops::Deref, str::FromStr};

/// An owned sequence of key segments.
///
/// Serializes as a JSON array of strings. Parsing a delimited string does
/// not normalise anything: `"a..b"` has three segments, the middle one
/// empty. Only the empty string parses to the empty path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// Create an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Split `input` on `delimiter`.
    pub fn parse(input: &str, delimiter: &str) -> Result<Self> {
        if delimiter.is_empty() {
            return Err(Error::invalid_input("parse path", "delimiter must not be empty"));
        }
        if input.is_empty() {
            return Ok(Self::new());
        }
        Ok(input.split(delimiter).collect())
    }

    /// Builder-style method to append a segment.
    pub fn push(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Join the segments with `delimiter`.
    pub fn join(&self, delimiter: &str) -> String {
        self.segments.join(delimiter)
    }
}

impl Deref for Path {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.segments
    }
}

impl<S: Into<String>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Vec<String>> for Path {
    fn from(segments: Vec<String>) -> Self {
        Self { segments }
    }
}

impl FromStr for Path {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, DEFAULT_DELIMITER)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(DEFAULT_DELIMITER))
    }
}

/// Look up the value at `path`.
///
/// Returns `None` as soon as a segment is missing or the current value is
/// not a mapping. An empty path yields `root` itself. A stored `null` is
/// `Some(&Value::Null)`, which is distinct from a missing key.
pub fn get<'a, S: AsRef<str>>(root: &'a Value, path: &[S]) -> Option<&'a Value> {
    path.iter()
        .try_fold(root, |node, segment| node.as_object()?.get(segment.as_ref()))
}

/// Assign `value` at `path`, creating intermediate mappings as needed.
///
/// An intermediate segment that holds a non-mapping is overwritten with an
/// empty mapping. An empty path leaves `root` untouched.
pub fn set<'a, S: AsRef<str>>(
    root: &'a mut Value,
    path: &[S],
    value: Value,
) -> Result<&'a mut Value> {
    let map = expect_object_mut(root, "set")?;
    if let Some((last, parents)) = path.split_last() {
        insert_at(map, parents, last.as_ref(), value);
    }
    Ok(root)
}

/// Delete the key at `path`.
///
/// Missing links anywhere along the path make this a silent no-op, as does
/// an empty path. Remaining keys keep their order.
pub fn remove<'a, S: AsRef<str>>(root: &'a mut Value, path: &[S]) -> Result<&'a mut Value> {
    let map = expect_object_mut(root, "remove")?;
    if let Some((last, parents)) = path.split_last() {
        if let Some(removed) = remove_at(map, parents, last.as_ref()) {
            tracing::trace!(key = last.as_ref(), removed = %removed, "removed nested key");
        }
    }
    Ok(root)
}

pub(crate) fn insert_at<S: AsRef<str>>(
    map: &mut Map<String, Value>,
    parents: &[S],
    last: &str,
    value: Value,
) {
    let mut current = map;
    for segment in parents {
        let slot = current
            .entry(segment.as_ref())
            .or_insert_with(|| Value::Object(Map::new()));
        current = ensure_object(slot);
    }
    current.insert(last.to_owned(), value);
}

fn remove_at<S: AsRef<str>>(
    map: &mut Map<String, Value>,
    parents: &[S],
    last: &str,
) -> Option<Value> {
    let mut current = map;
    for segment in parents {
        current = current.get_mut(segment.as_ref())?.as_object_mut()?;
    }
    current.shift_remove(last)
}
