//! Transformation endpoint routes.

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use nestkit_core::FlatMap;
use serde_json::Value;

use crate::error::Result;
use crate::handlers::{
    handle_common_keys, handle_csv, handle_diff, handle_flatten, handle_get, handle_merge,
    handle_omit, handle_pick, handle_query_decode, handle_query_encode, handle_remove,
    handle_set, handle_unflatten, CsvRequest, FlattenRequest, GetRequest, GetResponse,
    KeysRequest, MergeRequest, PairRequest, QueryDecodeRequest, QueryEncodeRequest,
    QueryEncodeResponse, RemoveRequest, ResultResponse, SetRequest, UnflattenRequest,
};
use crate::AppState;

/// Create transformation routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/flatten", post(flatten_handler))
        .route("/unflatten", post(unflatten_handler))
        .route("/merge", post(merge_handler))
        .route("/diff", post(diff_handler))
        .route("/common-keys", post(common_keys_handler))
        .route("/path/get", post(get_handler))
        .route("/path/set", post(set_handler))
        .route("/path/remove", post(remove_handler))
        .route("/pick", post(pick_handler))
        .route("/omit", post(omit_handler))
        .route("/query/encode", post(query_encode_handler))
        .route("/query/decode", post(query_decode_handler))
        .route("/csv", post(csv_handler))
}

/// POST /flatten - Flatten a nested mapping.
async fn flatten_handler(
    State(state): State<AppState>,
    Json(request): Json<FlattenRequest>,
) -> Result<Json<ResultResponse<FlatMap>>> {
    Ok(Json(handle_flatten(&state.config, request)?))
}

/// POST /unflatten - Rebuild a nested mapping from flat keys.
async fn unflatten_handler(
    State(state): State<AppState>,
    Json(request): Json<UnflattenRequest>,
) -> Result<Json<ResultResponse<Value>>> {
    Ok(Json(handle_unflatten(&state.config, request)?))
}

/// POST /merge - Merge a list of mappings.
async fn merge_handler(
    Json(request): Json<MergeRequest>,
) -> Result<Json<ResultResponse<Value>>> {
    Ok(Json(handle_merge(request)?))
}

/// POST /diff - Leaves of `a` that differ from `b`.
async fn diff_handler(
    State(state): State<AppState>,
    Json(request): Json<PairRequest>,
) -> Result<Json<ResultResponse<FlatMap>>> {
    Ok(Json(handle_diff(&state.config, request)?))
}

/// POST /common-keys - Top-level keys shared by `a` and `b`.
async fn common_keys_handler(
    Json(request): Json<PairRequest>,
) -> Result<Json<ResultResponse<Vec<String>>>> {
    Ok(Json(handle_common_keys(request)?))
}

/// POST /path/get
async fn get_handler(
    State(state): State<AppState>,
    Json(request): Json<GetRequest>,
) -> Result<Json<GetResponse>> {
    Ok(Json(handle_get(&state.config, request)?))
}

/// POST /path/set
async fn set_handler(
    State(state): State<AppState>,
    Json(request): Json<SetRequest>,
) -> Result<Json<ResultResponse<Value>>> {
    Ok(Json(handle_set(&state.config, request)?))
}

/// POST /path/remove
async fn remove_handler(
    State(state): State<AppState>,
    Json(request): Json<RemoveRequest>,
) -> Result<Json<ResultResponse<Value>>> {
    Ok(Json(handle_remove(&state.config, request)?))
}

/// POST /pick
async fn pick_handler(Json(request): Json<KeysRequest>) -> Result<Json<ResultResponse<Value>>> {
    Ok(Json(handle_pick(request)?))
}

/// POST /omit
async fn omit_handler(Json(request): Json<KeysRequest>) -> Result<Json<ResultResponse<Value>>> {
    Ok(Json(handle_omit(request)?))
}

/// POST /query/encode - Render a flat mapping as a query string.
async fn query_encode_handler(
    Json(request): Json<QueryEncodeRequest>,
) -> Result<Json<QueryEncodeResponse>> {
    Ok(Json(handle_query_encode(request)?))
}

/// POST /query/decode - Parse a query string into a mapping.
async fn query_decode_handler(
    Json(request): Json<QueryDecodeRequest>,
) -> Result<Json<ResultResponse<Value>>> {
    Ok(Json(handle_query_decode(request)?))
}

/// POST /csv - Render rows as `text/csv`.
async fn csv_handler(Json(request): Json<CsvRequest>) -> Result<impl IntoResponse> {
    let body = handle_csv(request)?;
    Ok(([(header::CONTENT_TYPE, "text/csv; charset=utf-8")], body))
}
