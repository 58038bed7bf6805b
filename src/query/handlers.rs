use super::types::{ChapterParams, PreloadBook, VerseParams, VerseRow};
use crate::error::{Result, ScriptureError};
use crate::records::types::{BookMeta, Translation};
use crate::server::extract::ApiQuery;
use crate::server::state::AppState;

use axum::extract::Path;
use axum::{Extension, Json};
use std::sync::Arc;

/// Resolves the zero-based catalog position sent by the browsing UI.
fn book_at(state: &AppState, position: i64) -> Result<&BookMeta> {
    let position = usize::try_from(position).map_err(|_| ScriptureError::BookNotFound {
        book: format!("position {}", position),
    })?;
    state.catalog.by_position(position)
}

pub async fn handle_get_chapters(
    ApiQuery(params): ApiQuery<ChapterParams>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Vec<u32>>> {
    let book = book_at(&state, params.book_index)?;
    tracing::debug!("Chapters requested for book {}", book.index);

    let chapters = state.queries.get_chapters(&book.index).await?;
    Ok(Json(chapters))
}

pub async fn handle_get_verses(
    ApiQuery(params): ApiQuery<VerseParams>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Vec<VerseRow>>> {
    let book = book_at(&state, params.book_index)?;

    let verses = state
        .queries
        .get_verses(&book.index, params.chapter, &Translation::ALL)
        .await?;
    Ok(Json(verses))
}

pub async fn handle_preload(
    Path(version): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Vec<PreloadBook>>> {
    let translation: Translation = version.parse()?;

    let books = state.queries.preload(translation).await?;
    Ok(Json(books))
}
