use super::types::{SearchParams, SearchResponse};
use crate::error::Result;
use crate::server::extract::ApiQuery;
use crate::server::state::AppState;

use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_search(
    ApiQuery(params): ApiQuery<SearchParams>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<SearchResponse>> {
    let response = state.search.search(&params.q, &params.selected()).await?;
    Ok(Json(response))
}
