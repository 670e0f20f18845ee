//! Health and service information endpoints.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

/// Health check response, including the transformation settings in effect.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Delimiter used to join and split paths
    pub delimiter: String,
    pub max_body_bytes: usize,
}

/// Create health routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/", get(banner))
}

/// GET /health - Liveness plus the configured delimiter and body limit.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        delimiter: state.config.delimiter.clone(),
        max_body_bytes: state.config.max_body_bytes,
    })
}

/// GET / - Plain-text banner listing the transformation endpoints.
async fn banner() -> String {
    format!(
        "nestkit {}\nPOST /flatten /unflatten /merge /diff /common-keys\n\
         POST /path/get /path/set /path/remove /pick /omit\n\
         POST /query/encode /query/decode /csv\n",
        env!("CARGO_PKG_VERSION")
    )
}
