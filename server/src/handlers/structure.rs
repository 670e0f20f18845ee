//! Flatten, unflatten, merge, diff and common-key handlers.

use crate::config::Config;
use crate::error::Result;
use crate::handlers::ResultResponse;
use nestkit_core::{common_keys, deep_merge, diff_with, flatten_with, merge, unflatten_with, FlatMap};
use serde::Deserialize;
use serde_json::Value;

/// Request body for `POST /flatten`.
#[derive(Debug, Deserialize)]
pub struct FlattenRequest {
    pub node: Value,
    /// Prefix prepended to every key
    #[serde(default)]
    pub prefix: String,
}

/// Request body for `POST /unflatten`.
#[derive(Debug, Deserialize)]
pub struct UnflattenRequest {
    pub flat: Value,
}

/// Request body for `POST /merge`.
#[derive(Debug, Deserialize)]
pub struct MergeRequest {
    pub nodes: Vec<Value>,
    /// Recursive merge when true, top-level replacement otherwise
    #[serde(default = "default_deep")]
    pub deep: bool,
}

fn default_deep() -> bool {
    true
}

/// Request body for `POST /diff` and `POST /common-keys`.
#[derive(Debug, Deserialize)]
pub struct PairRequest {
    pub a: Value,
    pub b: Value,
}

pub fn handle_flatten(config: &Config, request: FlattenRequest) -> Result<ResultResponse<FlatMap>> {
    let flat = flatten_with(&request.node, &request.prefix, &config.delimiter)?;
    tracing::debug!(leaves = flat.len(), "Flattened node");
    Ok(ResultResponse::new(flat))
}

pub fn handle_unflatten(config: &Config, request: UnflattenRequest) -> Result<ResultResponse<Value>> {
    let nested = unflatten_with(&request.flat, &config.delimiter)?;
    Ok(ResultResponse::new(nested))
}

pub fn handle_merge(request: MergeRequest) -> Result<ResultResponse<Value>> {
    tracing::debug!(nodes = request.nodes.len(), deep = request.deep, "Merging nodes");

    let merged = if request.deep {
        deep_merge(&request.nodes)?
    } else {
        merge(&request.nodes)?
    };
    Ok(ResultResponse::new(merged))
}

pub fn handle_diff(config: &Config, request: PairRequest) -> Result<ResultResponse<FlatMap>> {
    let changed = diff_with(&request.a, &request.b, &config.delimiter)?;
    tracing::debug!(changed = changed.len(), "Computed diff");
    Ok(ResultResponse::new(changed))
}

pub fn handle_common_keys(request: PairRequest) -> Result<ResultResponse<Vec<String>>> {
    let keys = common_keys(&request.a, &request.b)?;
    Ok(ResultResponse::new(keys))
}
