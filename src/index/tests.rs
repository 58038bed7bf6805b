//! Verse Index Tests
//!
//! ## Test Scopes
//! - **Build**: Grouping, numeric ordering and duplicate handling.
//! - **Queries**: `chapters_of`, `verses_of` and point lookups.
//! - **Cache**: One build per translation, retry after failure, invalidation.

#[cfg(test)]
mod tests {
    use crate::error::{Result, ScriptureError};
    use crate::index::cache::IndexCache;
    use crate::index::verse_index::TranslationIndex;
    use crate::records::source::{DataSource, MemorySource};
    use crate::records::store::RecordStore;
    use crate::records::types::{RawBookRow, RawVerseRow, Translation, VerseKey, VerseRecord};

    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    fn record(book: &str, chapter: u32, verse: u32, text: &str) -> VerseRecord {
        VerseRecord {
            book: book.to_string(),
            chapter,
            verse,
            scripture: text.to_string(),
        }
    }

    fn sample_index() -> TranslationIndex {
        TranslationIndex::build(
            Translation::Cn,
            vec![
                record("1", 10, 1, "ten"),
                record("1", 2, 3, "two-three"),
                record("1", 9, 1, "nine"),
                record("1", 2, 1, "two-one"),
                record("1", 2, 2, "two-two"),
                record("1", 10, 2, "ten-two"),
                record("43", 3, 16, "john"),
            ],
        )
    }

    // ============================================================
    // BUILD & QUERIES
    // ============================================================

    #[test]
    fn test_chapters_sorted_numerically_without_duplicates() {
        let index = sample_index();

        let chapters = index.chapters_of("1").unwrap();

        assert_eq!(chapters, vec![2, 9, 10]);
        assert!(chapters.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_verses_sorted_ascending() {
        let index = sample_index();

        let verses: Vec<u32> = index
            .verses_of("1", 2)
            .unwrap()
            .iter()
            .map(|r| r.verse)
            .collect();

        assert_eq!(verses, vec![1, 2, 3]);
    }

    #[test]
    fn test_unknown_chapter_is_empty() {
        let index = sample_index();

        assert!(index.verses_of("1", 50).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_book_is_book_not_found() {
        let index = sample_index();

        assert!(matches!(
            index.chapters_of("999"),
            Err(ScriptureError::BookNotFound { .. })
        ));
        assert!(matches!(
            index.verses_of("999", 1),
            Err(ScriptureError::BookNotFound { .. })
        ));
    }

    #[test]
    fn test_duplicate_key_keeps_first() {
        let index = TranslationIndex::build(
            Translation::Kjv,
            vec![
                record("1", 1, 1, "first"),
                record("1", 1, 1, "second"),
                record("1", 1, 2, "next"),
            ],
        );

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("1", 1, 1).unwrap().scripture, "first");
        let verses = index.verses_of("1", 1).unwrap();
        assert_eq!(verses.len(), 2);
    }

    #[test]
    fn test_records_keep_ingestion_order() {
        let index = sample_index();

        assert_eq!(index.records()[0].scripture, "ten");
        assert_eq!(index.records()[6].scripture, "john");
        assert_eq!(index.book_count(), 2);
    }

    #[test]
    fn test_point_lookup() {
        let index = sample_index();
        let key = VerseKey {
            book: "43".to_string(),
            chapter: 3,
            verse: 16,
        };

        assert_eq!(index.lookup(&key).unwrap().scripture, "john");
        assert!(index.get("43", 3, 17).is_none());
        assert!(index.get("2", 1, 1).is_none());
    }

    #[test]
    fn test_empty_index() {
        let index = TranslationIndex::build(Translation::Nkjv, vec![]);

        assert!(index.is_empty());
        assert!(!index.contains_book("1"));
        assert_eq!(index.translation(), Translation::Nkjv);
    }

    // ============================================================
    // CACHE
    // ============================================================

    /// Counts loads and optionally fails the first one.
    struct CountingSource {
        inner: MemorySource,
        loads: AtomicUsize,
        fail_next: AtomicBool,
    }

    #[async_trait]
    impl DataSource for CountingSource {
        fn describe(&self) -> String {
            "counting".to_string()
        }

        async fn catalog_rows(&self) -> Result<Vec<RawBookRow>> {
            self.inner.catalog_rows().await
        }

        async fn verse_rows(&self, translation: Translation) -> Result<Vec<RawVerseRow>> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(20)).await;
            if self.fail_next.swap(false, Ordering::SeqCst) {
                return Err(ScriptureError::SourceUnavailable {
                    source_name: "counting".to_string(),
                    message: "transient".to_string(),
                });
            }
            self.inner.verse_rows(translation).await
        }
    }

    fn counting_source(fail_first: bool) -> Arc<CountingSource> {
        let rows = vec![RawVerseRow::new("1", "1", "1", "In the beginning")];
        let inner = MemorySource::new()
            .with_verses(Translation::Cn, rows.clone())
            .with_verses(Translation::Nkjv, rows.clone())
            .with_verses(Translation::Kjv, rows);
        Arc::new(CountingSource {
            inner,
            loads: AtomicUsize::new(0),
            fail_next: AtomicBool::new(fail_first),
        })
    }

    #[tokio::test]
    async fn test_concurrent_requests_share_one_build() {
        let source = counting_source(false);
        let cache = Arc::new(IndexCache::new(RecordStore::new(source.clone())));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let cache = cache.clone();
            handles.push(tokio::spawn(async move {
                cache.get(Translation::Cn).await.unwrap().len()
            }));
        }
        for handle in handles {
            assert_eq!(handle.await.unwrap(), 1);
        }

        assert_eq!(source.loads.load(Ordering::SeqCst), 1);
        assert!(cache.is_built(Translation::Cn));
        assert!(!cache.is_built(Translation::Kjv));
    }

    #[tokio::test]
    async fn test_failed_build_is_retried() {
        let source = counting_source(true);
        let cache = IndexCache::new(RecordStore::new(source.clone()));

        assert!(cache.get(Translation::Kjv).await.is_err());
        assert!(!cache.is_built(Translation::Kjv));

        let index = cache.get(Translation::Kjv).await.unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(source.loads.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_invalidate_forces_rebuild() {
        let source = counting_source(false);
        let cache = IndexCache::new(RecordStore::new(source.clone()));

        cache.snapshot().await.unwrap();
        assert_eq!(source.loads.load(Ordering::SeqCst), 3);

        cache.get(Translation::Nkjv).await.unwrap();
        assert_eq!(source.loads.load(Ordering::SeqCst), 3);

        cache.invalidate(Translation::Nkjv);
        assert!(!cache.is_built(Translation::Nkjv));
        cache.get(Translation::Nkjv).await.unwrap();
        assert_eq!(source.loads.load(Ordering::SeqCst), 4);

        cache.invalidate_all();
        cache.warm().await.unwrap();
        assert_eq!(source.loads.load(Ordering::SeqCst), 7);
    }

    #[tokio::test]
    async fn test_snapshot_fails_when_one_translation_missing() {
        let source = MemorySource::new()
            .with_verses(Translation::Cn, vec![RawVerseRow::new("1", "1", "1", "x")]);
        let cache = IndexCache::new(RecordStore::new(Arc::new(source)));

        assert!(matches!(
            cache.snapshot().await,
            Err(ScriptureError::SourceUnavailable { .. })
        ));
    }
}
