//! Query Module Tests
//!
//! Validates chapter listings, the cross-translation verse join and the
//! preload document.

#[cfg(test)]
mod tests {
    use crate::catalog::catalog::BookCatalog;
    use crate::error::ScriptureError;
    use crate::index::cache::IndexCache;
    use crate::query::engine::QueryEngine;
    use crate::query::types::VerseRow;
    use crate::records::source::MemorySource;
    use crate::records::store::RecordStore;
    use crate::records::types::{BookMeta, RawVerseRow, Translation};
    use std::sync::Arc;

    fn book(index: &str, name: &str) -> BookMeta {
        BookMeta {
            index: index.to_string(),
            english_abbrev: name[..3].to_string(),
            english_full_name: name.to_string(),
            chinese_abbrev: String::new(),
            chinese_full_name: String::new(),
        }
    }

    fn rows(book: &str, chapter: &str, verses: &[(&str, &str)]) -> Vec<RawVerseRow> {
        verses
            .iter()
            .map(|(verse, text)| RawVerseRow::new(book, chapter, verse, text))
            .collect()
    }

    fn engine_with(reference: Translation) -> QueryEngine {
        let mut cn = rows(
            "1",
            "1",
            &[
                ("3", "神说：要有光"),
                ("1", "起初，<i>神</i>创造天地。"),
                ("2", "地是空虚混沌"),
                ("4", "神看光是好的"),
                ("5", "这是头一日"),
            ],
        );
        cn.extend(rows("1", "10", &[("1", "挪亚的儿子")]));
        cn.extend(rows("1", "2", &[("1", "天地万物都造齐了")]));

        let kjv = rows(
            "1",
            "1",
            &[
                ("1", "In the beginning God created the heaven and the earth."),
                ("2", "And the earth was without form"),
                ("3", "And God said, Let there be light"),
                ("4", "And God saw the light, that <i>it was</i> good"),
            ],
        );

        let nkjv = rows(
            "1",
            "1",
            &[
                ("1", "In the beginning God created the heavens and the earth."),
                ("5", "So the evening and the morning were the first day."),
            ],
        );

        let source = MemorySource::new()
            .with_verses(Translation::Cn, cn)
            .with_verses(Translation::Nkjv, nkjv)
            .with_verses(Translation::Kjv, kjv);
        let cache = Arc::new(IndexCache::new(RecordStore::new(Arc::new(source))));
        let catalog = Arc::new(
            BookCatalog::new(vec![book("1", "Genesis"), book("2", "Exodus")]).unwrap(),
        );

        QueryEngine::new(cache, catalog, reference)
    }

    // ============================================================
    // CHAPTERS
    // ============================================================

    #[tokio::test]
    async fn test_get_chapters_numeric_order() {
        let engine = engine_with(Translation::Cn);

        assert_eq!(engine.get_chapters("1").await.unwrap(), vec![1, 2, 10]);
    }

    #[tokio::test]
    async fn test_get_chapters_unknown_book() {
        let engine = engine_with(Translation::Cn);

        match engine.get_chapters("999").await {
            Err(ScriptureError::BookNotFound { book }) => assert_eq!(book, "999"),
            other => panic!("expected BookNotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_chapters_follows_reference_translation() {
        let engine = engine_with(Translation::Kjv);

        assert_eq!(engine.reference(), Translation::Kjv);
        assert_eq!(engine.get_chapters("1").await.unwrap(), vec![1]);
    }

    // ============================================================
    // VERSES
    // ============================================================

    #[tokio::test]
    async fn test_get_verses_missing_secondary_verse_is_empty() {
        let engine = engine_with(Translation::Cn);

        let verses = engine
            .get_verses("1", 1, &[Translation::Cn, Translation::Kjv])
            .await
            .unwrap();

        let numbers: Vec<u32> = verses.iter().map(|v| v.verse).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);

        let fifth = &verses[4];
        assert_eq!(fifth.text.cn, "这是头一日");
        assert_eq!(fifth.text.kjv, "");
    }

    #[tokio::test]
    async fn test_get_verses_strips_markup_everywhere() {
        let engine = engine_with(Translation::Cn);

        let verses = engine.get_verses("1", 1, &Translation::ALL).await.unwrap();

        assert_eq!(verses[0].text.cn, "起初，神创造天地。");
        assert_eq!(verses[3].text.kjv, "And God saw the light, that it was good");
        assert_eq!(verses[4].text.nkjv, "So the evening and the morning were the first day.");
        assert_eq!(verses[1].text.nkjv, "");
    }

    #[tokio::test]
    async fn test_get_verses_unrequested_translation_left_empty() {
        let engine = engine_with(Translation::Cn);

        let verses = engine.get_verses("1", 1, &[Translation::Kjv]).await.unwrap();

        assert_eq!(verses.len(), 5);
        assert_eq!(verses[0].text.cn, "");
        assert!(verses[0].text.kjv.starts_with("In the beginning"));
    }

    #[tokio::test]
    async fn test_get_verses_empty_chapter_and_unknown_book() {
        let engine = engine_with(Translation::Cn);

        assert!(engine
            .get_verses("1", 40, &Translation::ALL)
            .await
            .unwrap()
            .is_empty());
        assert!(matches!(
            engine.get_verses("2", 1, &Translation::ALL).await,
            Err(ScriptureError::BookNotFound { .. })
        ));
    }

    #[test]
    fn test_verse_row_wire_shape() {
        let row = VerseRow {
            chapter: 1,
            verse: 5,
            text: Default::default(),
        };

        let json = serde_json::to_value(&row).unwrap();

        assert_eq!(json["Chapter"], 1);
        assert_eq!(json["Verse"], 5);
        assert_eq!(json["Scripture_CN"], "");
        assert_eq!(json["Scripture_NKJV"], "");
        assert_eq!(json["Scripture_KJV"], "");
        assert!(json.get("BookIndex").is_none());
    }

    // ============================================================
    // PRELOAD
    // ============================================================

    #[tokio::test]
    async fn test_preload_nests_books_chapters_verses() {
        let engine = engine_with(Translation::Cn);

        let books = engine.preload(Translation::Cn).await.unwrap();

        assert_eq!(books.len(), 2);
        assert_eq!(books[0].book.index, "1");
        assert_eq!(books[0].chapters.keys().copied().collect::<Vec<_>>(), vec![1, 2, 10]);
        let first = &books[0].chapters[&1][0];
        assert_eq!((first.chapter, first.verse), (1, 1));
        assert_eq!(first.text, "起初，神创造天地。");
        assert!(books[1].chapters.is_empty());
    }

    #[tokio::test]
    async fn test_preload_json_uses_string_chapter_keys() {
        let engine = engine_with(Translation::Nkjv);

        let books = engine.preload(Translation::Nkjv).await.unwrap();
        let json = serde_json::to_value(&books).unwrap();

        assert_eq!(json[0]["book"]["English Full Name"], "Genesis");
        assert_eq!(json[0]["chapters"]["1"][1]["verse"], 5);
        assert_eq!(json[1]["chapters"], serde_json::json!({}));
    }
}
