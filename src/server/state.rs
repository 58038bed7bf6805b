use crate::catalog::catalog::BookCatalog;
use crate::error::Result;
use crate::index::cache::IndexCache;
use crate::query::engine::QueryEngine;
use crate::records::store::RecordStore;
use crate::records::types::Translation;
use crate::search::engine::SearchEngine;

use std::sync::Arc;

/// Read-only state shared by every handler.
pub struct AppState {
    pub catalog: Arc<BookCatalog>,
    pub cache: Arc<IndexCache>,
    pub queries: QueryEngine,
    pub search: SearchEngine,
}

impl AppState {
    pub fn new(catalog: BookCatalog, store: RecordStore, reference: Translation) -> Self {
        let catalog = Arc::new(catalog);
        let cache = Arc::new(IndexCache::new(store));

        Self {
            queries: QueryEngine::new(cache.clone(), catalog.clone(), reference),
            search: SearchEngine::new(cache.clone()),
            catalog,
            cache,
        }
    }

    /// Loads the full canonical catalog from `store`; indexes are built on
    /// first use.
    pub async fn load(store: RecordStore, reference: Translation) -> Result<Self> {
        let catalog = BookCatalog::canonical(store.load_catalog().await?)?;
        tracing::info!("Loaded {} books from {}", catalog.len(), store.describe());

        Ok(Self::new(catalog, store, reference))
    }
}
