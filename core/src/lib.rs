//! # nestkit
//!
//! Structural transformations for nested JSON values.
//!
//! Every function takes plain [`serde_json::Value`]s and returns a new value,
//! except [`set`] and [`remove`], which mutate the value they are given and
//! hand the same reference back.
//!
//! ## Design Principles
//!
//! - **No IO**: nothing here touches files, network or global state
//! - **Arrays are leaves**: no operation recurses into sequences
//! - **Insertion order**: mappings keep key order (`serde_json`'s
//!   `preserve_order`), so flattened keys follow a depth-first walk
//! - **Explicit shapes**: a non-object where an object is required is an
//!   [`Error::InvalidInput`], never a panic. [`get`] never fails.
//!
//! ## Components
//!
//! - [`path`] - [`get`], [`set`] and [`remove`] at a key path
//! - [`flatten`](mod@flatten) - [`flatten()`] and [`unflatten`]
//! - [`merge`](mod@merge) - [`deep_merge`] and shallow [`merge()`]
//! - [`diff`](mod@diff) - asymmetric [`diff()`] of two mappings
//! - [`keys`] - [`common_keys`], [`pick`], [`omit`]
//! - [`convert`] - query strings, pretty printing, safe parsing, CSV
//!
//! ## Quick Start
//!
//! ```rust
//! use nestkit_core::{common_keys, deep_merge, diff, flatten, get, set};
//! use serde_json::{json, Value};
//!
//! let defaults = json!({"server": {"host": "0.0.0.0", "port": 80}});
//! let overrides = json!({"server": {"port": 8080}, "debug": true});
//!
//! // 1. Merge configuration layers
//! let mut config = deep_merge([&defaults, &overrides])?;
//! assert_eq!(get(&config, &["server", "port"]), Some(&json!(8080)));
//!
//! // 2. Edit in place
//! set(&mut config, &["server", "tls"], json!(false))?;
//!
//! // 3. Inspect what changed relative to the defaults
//! let changed = diff(&config, &defaults)?;
//! assert_eq!(
//!     Value::Object(changed),
//!     json!({"server.port": 8080, "server.tls": false, "debug": true})
//! );
//!
//! // 4. Flatten for key/value storage
//! let flat = flatten(&config, "")?;
//! assert_eq!(flat["server.host"], json!("0.0.0.0"));
//!
//! assert_eq!(common_keys(&config, &defaults)?, vec!["server"]);
//! # Ok::<(), nestkit_core::Error>(())
//! ```

pub mod convert;
pub mod diff;
pub mod error;
pub mod flatten;
pub mod keys;
pub mod merge;
pub mod path;
pub mod value;

// Re-export main types at crate root
pub use convert::{from_query_string, pretty_print, safe_parse, to_csv, to_query_string};
pub use diff::{diff, diff_with};
pub use error::{Error, Result};
pub use flatten::{flatten, flatten_with, unflatten, unflatten_with};
pub use keys::{common_keys, is_empty, omit, pick};
pub use merge::{deep_merge, deep_merge_pair, merge, merge_into};
pub use path::{get, remove, set, Path};
pub use value::{FlatMap, Node};

/// Delimiter used to join path segments unless one is given explicitly.
pub const DEFAULT_DELIMITER: &str = ".";
