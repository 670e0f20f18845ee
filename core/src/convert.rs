//! Conversions between JSON values and other text formats.
//!
//! Query strings use URI-component percent-encoding (a space is `%20`,
//! never `+`). CSV output renders every cell as JSON text, so strings keep
//! their quotes.

use crate::value::{expect_object, type_name};
use crate::{error::Result, Error};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Map, Serializer, Value};

/// Characters left unescaped in a URI component.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Largest indent accepted by [`pretty_print`].
pub const MAX_INDENT: usize = 10;

/// Encode the top-level entries of `object` as `key=value&...`.
///
/// Arrays are written as their elements joined by `,`; nested mappings are
/// rejected.
pub fn to_query_string(object: &Value) -> Result<String> {
    let map = expect_object(object, "to_query_string")?;

    let pairs = map
        .iter()
        .map(|(key, value)| -> Result<String> {
            let text = query_text(key, value)?;
            Ok(format!("{}={}", encode_component(key), encode_component(&text)))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(pairs.join("&"))
}

fn query_text(key: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Null => Ok("null".to_owned()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Array(items) => {
            let parts = items
                .iter()
                .map(|item| match item {
                    Value::Null => Ok(String::new()),
                    other => query_text(key, other),
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(parts.join(","))
        }
        Value::Object(_) => Err(Error::invalid_input(
            "to_query_string",
            format!("value for '{key}' is a nested Object"),
        )),
    }
}

fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

fn decode_component(text: &str) -> Result<String> {
    percent_decode_str(text)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|e| Error::invalid_input("from_query_string", e.to_string()))
}

/// Decode `key=value&...` into a mapping of strings.
///
/// A single leading `?` is ignored, as are empty pairs. A pair without `=`
/// maps to `null`. Later duplicates replace earlier values.
pub fn from_query_string(query: &str) -> Result<Value> {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut out = Map::new();
    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        let (key, value) = match pair.split_once('=') {
            Some((key, value)) => (key, Value::String(decode_component(value)?)),
            None => (pair, Value::Null),
        };
        out.insert(decode_component(key)?, value);
    }
    Ok(Value::Object(out))
}

/// Render `value` as JSON indented by `indent` spaces per level.
///
/// The indent is clamped to [`MAX_INDENT`]; zero gives compact output.
pub fn pretty_print(value: &Value, indent: usize) -> Result<String> {
    let indent = indent.min(MAX_INDENT);
    if indent == 0 {
        return Ok(serde_json::to_string(value)?);
    }

    let pad = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(pad.as_bytes());
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| Error::Serialization(e.to_string()))
}

/// Parse `text` as JSON, returning `None` when it is malformed.
pub fn safe_parse(text: &str) -> Option<Value> {
    match serde_json::from_str(text) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(error = %e, "discarding malformed JSON");
            None
        }
    }
}

/// Render an array of mappings as CSV.
///
/// The header row comes from the first row's keys. Each cell is the JSON
/// text of the field, with `null`s written as `""`; a missing field leaves
/// the cell empty. An empty array gives an empty string.
pub fn to_csv(rows: &Value) -> Result<String> {
    let rows = rows.as_array().ok_or_else(|| {
        Error::invalid_input("to_csv", format!("expected Array, got {}", type_name(rows)))
    })?;
    let Some(first) = rows.first() else {
        return Ok(String::new());
    };
    let headers: Vec<&str> = expect_object(first, "to_csv")
        .map_err(|e| e.at_position("row", 0))?
        .keys()
        .map(String::as_str)
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(headers.join(","));
    for (index, row) in rows.iter().enumerate() {
        let row = expect_object(row, "to_csv").map_err(|e| e.at_position("row", index))?;
        let cells = headers
            .iter()
            .map(|header| -> Result<String> {
                match row.get(*header) {
                    Some(value) => Ok(serde_json::to_string(&blank_nulls(value))?),
                    None => Ok(String::new()),
                }
            })
            .collect::<Result<Vec<_>>>()?;
        lines.push(cells.join(","));
    }
    Ok(lines.join("\n"))
}

fn blank_nulls(value: &Value) -> Value {
    match value {
        Value::Null => Value::String(String::new()),
        Value::Array(items) => Value::Array(items.iter().map(blank_nulls).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), blank_nulls(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}
