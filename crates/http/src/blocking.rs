//! Helper for running rusqlite operations inside async handlers.

use axum::Json;
use serde::Serialize;
use tokio::task::spawn_blocking;

use crate::api_error::ApiError;

/// Runs a blocking closure and returns `Result<Json<T>, ApiError>`.
///
/// The store is synchronous; queries run on the blocking pool so the
/// request executor is never stalled behind SQLite.
pub async fn blocking_json<T, F>(f: F) -> Result<Json<T>, ApiError>
where
    F: FnOnce() -> anyhow::Result<T> + Send + 'static,
    T: Send + 'static + Serialize,
{
    spawn_blocking(f)
        .await
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("join error: {e}")))?
        .map(Json)
        .map_err(ApiError::Internal)
}
