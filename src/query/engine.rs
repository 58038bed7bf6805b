use super::types::{PreloadBook, PreloadVerse, VerseRow};
use crate::catalog::catalog::BookCatalog;
use crate::error::Result;
use crate::index::cache::IndexCache;
use crate::index::verse_index::TranslationIndex;
use crate::records::types::{ParallelText, Translation};
use crate::search::tokenizer::strip_markup;

use std::collections::BTreeMap;
use std::sync::Arc;

/// Read paths over the index cache. Chapter and verse listings follow the
/// reference translation; other translations are joined in by
/// (book, chapter, verse).
#[derive(Clone)]
pub struct QueryEngine {
    cache: Arc<IndexCache>,
    catalog: Arc<BookCatalog>,
    reference: Translation,
}

impl QueryEngine {
    pub fn new(cache: Arc<IndexCache>, catalog: Arc<BookCatalog>, reference: Translation) -> Self {
        Self {
            cache,
            catalog,
            reference,
        }
    }

    pub fn reference(&self) -> Translation {
        self.reference
    }

    pub async fn get_chapters(&self, book: &str) -> Result<Vec<u32>> {
        self.cache.get(self.reference).await?.chapters_of(book)
    }

    /// Verses of `book` `chapter` in reference order. Requested translations
    /// lacking a verse contribute the empty string; translations not requested
    /// are left empty.
    pub async fn get_verses(
        &self,
        book: &str,
        chapter: u32,
        translations: &[Translation],
    ) -> Result<Vec<VerseRow>> {
        let reference = self.cache.get(self.reference).await?;
        let verses = reference.verses_of(book, chapter)?;

        let mut joined: Vec<(Translation, Arc<TranslationIndex>)> =
            Vec::with_capacity(translations.len());
        for &translation in translations {
            let index = if translation == self.reference {
                Arc::clone(&reference)
            } else {
                self.cache.get(translation).await?
            };
            joined.push((translation, index));
        }

        let rows = verses
            .iter()
            .map(|record| {
                let mut text = ParallelText::default();
                for (translation, index) in &joined {
                    if let Some(found) = index.get(book, chapter, record.verse) {
                        text.set(*translation, strip_markup(&found.scripture));
                    }
                }
                VerseRow {
                    chapter,
                    verse: record.verse,
                    text,
                }
            })
            .collect();

        Ok(rows)
    }

    /// Every catalog book, in catalog order, with all of its chapters in
    /// `translation`. Books the translation lacks carry no chapters.
    pub async fn preload(&self, translation: Translation) -> Result<Vec<PreloadBook>> {
        let index = self.cache.get(translation).await?;

        let books = self
            .catalog
            .books()
            .iter()
            .map(|book| PreloadBook {
                book: book.clone(),
                chapters: preload_chapters(&index, &book.index),
            })
            .collect();

        Ok(books)
    }
}

fn preload_chapters(index: &TranslationIndex, book: &str) -> BTreeMap<u32, Vec<PreloadVerse>> {
    let Ok(chapters) = index.chapters_of(book) else {
        return BTreeMap::new();
    };

    chapters
        .into_iter()
        .map(|chapter| {
            let verses = index
                .verses_of(book, chapter)
                .unwrap_or_default()
                .into_iter()
                .map(|record| PreloadVerse {
                    chapter,
                    verse: record.verse,
                    text: strip_markup(&record.scripture),
                })
                .collect();
            (chapter, verses)
        })
        .collect()
}
