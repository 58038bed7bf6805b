use super::state::AppState;

use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Drops every built index; the next request reloads from the data source.
pub async fn handle_reload(Extension(state): Extension<Arc<AppState>>) -> StatusCode {
    state.cache.invalidate_all();
    tracing::info!("Index cache cleared on request");
    StatusCode::NO_CONTENT
}
