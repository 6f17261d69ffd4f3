//! API handlers: thin async shims over the store's query layer.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;

use sf_weather_core::{DashboardConfig, Reading};
use sf_weather_storage::{DailySummary, ScrapeStatus};

use crate::api_error::ApiError;
use crate::blocking::blocking_json;
use crate::query_types::{HistoryQuery, SummaryQuery};
use crate::AppState;

pub async fn api_latest(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Reading>>, ApiError> {
    let storage = state.storage.clone();
    blocking_json(move || storage.latest()).await
}

pub async fn api_history(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<Reading>>, ApiError> {
    let storage = state.storage.clone();
    blocking_json(move || storage.history(&query.neighborhood, query.days)).await
}

pub async fn api_status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ScrapeStatus>, ApiError> {
    let storage = state.storage.clone();
    blocking_json(move || storage.status()).await
}

/// Missing or corrupt config degrades to `{}`, never an error response.
pub async fn api_config(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    match DashboardConfig::load(&state.config_path) {
        Some(cfg) => Json(serde_json::json!({
            "favorite_neighborhood": cfg.favorite_neighborhood
        })),
        None => Json(serde_json::json!({})),
    }
}

pub async fn api_city_summary(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SummaryQuery>,
) -> Result<Json<Vec<DailySummary>>, ApiError> {
    let storage = state.storage.clone();
    blocking_json(move || storage.city_summary(query.days)).await
}
