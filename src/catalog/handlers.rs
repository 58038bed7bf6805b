use super::catalog::Testament;
use crate::records::types::BookMeta;
use crate::server::state::AppState;

use axum::{Extension, Json};
use serde::Serialize;
use std::sync::Arc;

/// One `/api/books` entry: the catalog columns plus the testament the book sits in.
#[derive(Debug, Clone, Serialize)]
pub struct BookEntry {
    #[serde(flatten)]
    pub book: BookMeta,
    #[serde(rename = "Testament")]
    pub testament: Testament,
}

pub async fn handle_get_books(
    Extension(state): Extension<Arc<AppState>>,
) -> Json<Vec<BookEntry>> {
    let entries = [Testament::Old, Testament::New]
        .into_iter()
        .flat_map(|testament| {
            state
                .catalog
                .books_in(testament)
                .iter()
                .map(move |book| BookEntry {
                    book: book.clone(),
                    testament,
                })
        })
        .collect();

    Json(entries)
}
