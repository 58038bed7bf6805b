use super::handlers::{handle_health, handle_reload};
use super::state::AppState;
use crate::catalog::handlers::handle_get_books;
use crate::query::handlers::{handle_get_chapters, handle_get_verses, handle_preload};
use crate::search::handlers::handle_search;

use axum::extract::Extension;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/books", get(handle_get_books))
        .route("/chapters", get(handle_get_chapters))
        .route("/verses", get(handle_get_verses))
        .route("/preload/:version", get(handle_preload))
        .route("/search", get(handle_search))
        .route("/reload", post(handle_reload));

    Router::new()
        .nest("/api", api)
        .route("/health", get(handle_health))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
}
