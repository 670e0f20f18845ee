//! Path get, set and remove handlers.

use crate::config::Config;
use crate::error::Result;
use crate::handlers::ResultResponse;
use nestkit_core::{get, remove, set, Path};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A path as sent by clients: either explicit segments or a delimited string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PathSpec {
    Segments(Path),
    Joined(String),
}

impl PathSpec {
    /// Resolve into a [`Path`], splitting strings on `delimiter`.
    pub fn into_path(self, delimiter: &str) -> Result<Path> {
        match self {
            PathSpec::Segments(path) => Ok(path),
            PathSpec::Joined(joined) => Ok(Path::parse(&joined, delimiter)?),
        }
    }
}

/// Request body for `POST /path/get`.
#[derive(Debug, Deserialize)]
pub struct GetRequest {
    pub root: Value,
    pub path: PathSpec,
}

/// Response for `POST /path/get`.
#[derive(Debug, Serialize)]
pub struct GetResponse {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

/// Request body for `POST /path/set`.
#[derive(Debug, Deserialize)]
pub struct SetRequest {
    pub root: Value,
    pub path: PathSpec,
    pub value: Value,
}

/// Request body for `POST /path/remove`.
#[derive(Debug, Deserialize)]
pub struct RemoveRequest {
    pub root: Value,
    pub path: PathSpec,
}

pub fn handle_get(config: &Config, request: GetRequest) -> Result<GetResponse> {
    let path = request.path.into_path(&config.delimiter)?;
    let value = get(&request.root, &path).cloned();
    Ok(GetResponse {
        found: value.is_some(),
        value,
    })
}

pub fn handle_set(config: &Config, request: SetRequest) -> Result<ResultResponse<Value>> {
    let path = request.path.into_path(&config.delimiter)?;
    let mut root = request.root;
    set(&mut root, &path, request.value)?;
    tracing::debug!(%path, "Set value");
    Ok(ResultResponse::new(root))
}

pub fn handle_remove(config: &Config, request: RemoveRequest) -> Result<ResultResponse<Value>> {
    let path = request.path.into_path(&config.delimiter)?;
    let mut root = request.root;
    remove(&mut root, &path)?;
    Ok(ResultResponse::new(root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn path_spec_accepts_both_forms() {
        let segments: PathSpec = serde_json::from_value(json!(["a.b", "c"])).unwrap();
        assert_eq!(
            segments.into_path(".").unwrap().segments(),
            &["a.b".to_string(), "c".to_string()]
        );

        let joined: PathSpec = serde_json::from_value(json!("a.b.c")).unwrap();
        assert_eq!(joined.into_path(".").unwrap().len(), 3);
    }

    #[test]
    fn get_distinguishes_null_from_missing() {
        let root = json!({"a": null});
        let config = Config::default();

        let present = handle_get(
            &config,
            GetRequest {
                root: root.clone(),
                path: PathSpec::Joined("a".into()),
            },
        )
        .unwrap();
        assert!(present.found);
        assert_eq!(present.value, Some(Value::Null));

        let missing = handle_get(
            &config,
            GetRequest {
                root,
                path: PathSpec::Joined("b".into()),
            },
        )
        .unwrap();
        assert!(!missing.found);
        assert_eq!(serde_json::to_value(&missing).unwrap(), json!({"found": false}));
    }

    #[test]
    fn set_and_remove_return_root() {
        let config = Config::default();
        let set_response = handle_set(
            &config,
            SetRequest {
                root: json!({}),
                path: PathSpec::Joined("a.b".into()),
                value: json!(1),
            },
        )
        .unwrap();
        assert_eq!(set_response.result, json!({"a": {"b": 1}}));

        let remove_response = handle_remove(
            &config,
            RemoveRequest {
                root: set_response.result,
                path: PathSpec::Segments(Path::new().push("a").push("b")),
            },
        )
        .unwrap();
        assert_eq!(remove_response.result, json!({"a": {}}));
    }

    #[test]
    fn set_on_scalar_root_fails() {
        let request = SetRequest {
            root: json!(5),
            path: PathSpec::Joined("a".into()),
            value: json!(1),
        };
        assert!(handle_set(&Config::default(), request).is_err());
    }
}
