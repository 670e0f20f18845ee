//! Key selection and format conversion handlers.

use crate::error::{AppError, Result};
use crate::handlers::ResultResponse;
use nestkit_core::{from_query_string, omit, pick, to_csv, to_query_string};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for `POST /pick` and `POST /omit`.
#[derive(Debug, Deserialize)]
pub struct KeysRequest {
    pub object: Value,
    pub keys: Vec<String>,
}

/// Request body for `POST /query/encode`.
#[derive(Debug, Deserialize)]
pub struct QueryEncodeRequest {
    pub object: Value,
}

/// Response for `POST /query/encode`.
#[derive(Debug, Serialize)]
pub struct QueryEncodeResponse {
    pub query: String,
}

/// Request body for `POST /query/decode`.
#[derive(Debug, Deserialize)]
pub struct QueryDecodeRequest {
    pub query: String,
}

/// Request body for `POST /csv`.
#[derive(Debug, Deserialize)]
pub struct CsvRequest {
    pub rows: Value,
}

pub fn handle_pick(request: KeysRequest) -> Result<ResultResponse<Value>> {
    Ok(ResultResponse::new(pick(&request.object, &request.keys)?))
}

pub fn handle_omit(request: KeysRequest) -> Result<ResultResponse<Value>> {
    Ok(ResultResponse::new(omit(&request.object, &request.keys)?))
}

pub fn handle_query_encode(request: QueryEncodeRequest) -> Result<QueryEncodeResponse> {
    let query = to_query_string(&request.object)?;
    Ok(QueryEncodeResponse { query })
}

pub fn handle_query_decode(request: QueryDecodeRequest) -> Result<ResultResponse<Value>> {
    Ok(ResultResponse::new(from_query_string(&request.query)?))
}

pub fn handle_csv(request: CsvRequest) -> Result<String> {
    let rows = match &request.rows {
        Value::Array(rows) => rows.len(),
        _ => return Err(AppError::BadRequest("rows must be an array".to_string())),
    };
    tracing::debug!(rows, "Rendering CSV");
    Ok(to_csv(&request.rows)?)
}
