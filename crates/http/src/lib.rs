//! HTTP API server for sf-weather.
//!
//! Read-only JSON endpoints over the store plus two embedded dashboard
//! pages. Clients poll; nothing is pushed.

pub mod api_error;
mod blocking;
mod handlers;
mod pages;
mod query_types;

use std::path::PathBuf;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use sf_weather_storage::Storage;

/// Shared state for all HTTP handlers.
///
/// The store handle is path-only and cheap to clone; every request opens
/// its own connection, so no connection is shared across requests.
pub struct AppState {
    pub storage: Storage,
    /// Location of the dashboard config file read by `/api/config`.
    pub config_path: PathBuf,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(pages::serve_index))
        .route("/map", get(pages::serve_map))
        .route("/health", get(health))
        .route("/api/latest", get(handlers::api_latest))
        .route("/api/history", get(handlers::api_history))
        .route("/api/status", get(handlers::api_status))
        .route("/api/config", get(handlers::api_config))
        .route("/api/city-summary", get(handlers::api_city_summary))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
