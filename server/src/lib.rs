//! Nestkit Server - HTTP front end for nestkit JSON transformations.
//!
//! Every transformation in `nestkit_core` is exposed as a `POST` endpoint that
//! takes its operands as a JSON body and answers with `{"result": ...}`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;

use crate::config::Config;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

/// Build the application router with all routes and layers installed.
pub fn build_router(config: Config) -> Router {
    let body_limit = config.max_body_bytes;
    let state = AppState {
        config: Arc::new(config),
    };

    Router::new()
        .merge(routes::create_routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
