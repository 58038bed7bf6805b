use super::tokenizer::{matches_all, normalize_text, tokenize_query};
use super::types::{SearchHit, SearchResponse};
use crate::error::Result;
use crate::index::cache::{IndexCache, IndexSnapshot};
use crate::records::types::{ParallelText, Translation, VerseKey};

use std::collections::HashSet;
use std::sync::Arc;

#[derive(Clone)]
pub struct SearchEngine {
    cache: Arc<IndexCache>,
}

impl SearchEngine {
    pub fn new(cache: Arc<IndexCache>) -> Self {
        Self { cache }
    }

    /// Conjunctive search over the `selected` translations.
    ///
    /// An empty query, or no selected translation, yields zero hits without
    /// touching the data source.
    pub async fn search(&self, query: &str, selected: &[Translation]) -> Result<SearchResponse> {
        let tokens = tokenize_query(query);
        if tokens.is_empty() || selected.is_empty() {
            return Ok(SearchResponse::default());
        }

        let snapshot = self.cache.snapshot().await?;
        let hits = find_hits(&tokens, selected, &snapshot);
        tracing::debug!("Search {:?} over {:?}: {} hits", tokens, selected, hits.len());

        Ok(SearchResponse {
            total_count: hits.len(),
            results: hits,
        })
    }
}

/// Scans each selected translation in turn, in record order. A verse is
/// reported once, at its first discovery.
pub fn find_hits(
    tokens: &[String],
    selected: &[Translation],
    snapshot: &IndexSnapshot,
) -> Vec<SearchHit> {
    let mut seen: HashSet<VerseKey> = HashSet::new();
    let mut hits = Vec::new();

    for &translation in selected {
        for record in snapshot.get(translation).records() {
            let key = record.key();
            if seen.contains(&key) {
                continue;
            }
            if matches_all(&normalize_text(&record.scripture), tokens) {
                hits.push(hydrate(&key, snapshot));
                seen.insert(key);
            }
        }
    }

    hits
}

/// Fills in every translation's normalized text for `key`, empty where absent.
fn hydrate(key: &VerseKey, snapshot: &IndexSnapshot) -> SearchHit {
    let mut text = ParallelText::default();
    for translation in Translation::ALL {
        if let Some(record) = snapshot.get(translation).lookup(key) {
            text.set(translation, normalize_text(&record.scripture));
        }
    }

    SearchHit {
        book: key.book.clone(),
        chapter: key.chapter,
        verse: key.verse,
        text,
    }
}
