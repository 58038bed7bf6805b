use super::source::DataSource;
use super::types::{BookMeta, RawBookRow, RawVerseRow, Translation, VerseRecord};
use crate::error::{Result, ScriptureError};

use std::sync::Arc;

/// Validating front for a `DataSource`.
///
/// Catalog rows are structural, so one bad row fails the load. Verse rows are
/// ingested leniently: a bad row is logged and skipped.
#[derive(Clone)]
pub struct RecordStore {
    source: Arc<dyn DataSource>,
}

impl RecordStore {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source }
    }

    pub fn describe(&self) -> String {
        self.source.describe()
    }

    pub async fn load_catalog(&self) -> Result<Vec<BookMeta>> {
        let rows = self.source.catalog_rows().await?;
        rows.into_iter()
            .enumerate()
            .map(|(i, row)| parse_book_row(i + 1, row))
            .collect()
    }

    pub async fn load_translation(&self, translation: Translation) -> Result<Vec<VerseRecord>> {
        let rows = self.source.verse_rows(translation).await?;
        let total = rows.len();

        let mut records = Vec::with_capacity(total);
        for (i, row) in rows.into_iter().enumerate() {
            match parse_verse_row(i + 1, row) {
                Ok(record) => records.push(record),
                Err(e) => tracing::warn!("{}: {}", translation, e),
            }
        }

        let skipped = total - records.len();
        if skipped > 0 {
            tracing::warn!(
                "{}: skipped {} of {} rows during ingestion",
                translation,
                skipped,
                total
            );
        }

        Ok(records)
    }
}

/// Canonical form of a book id: trimmed, numeric ids without zero padding.
pub fn normalize_book_id(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.parse::<u32>() {
        Ok(n) if trimmed.bytes().all(|b| b.is_ascii_digit()) => n.to_string(),
        _ => trimmed.to_string(),
    }
}

pub fn parse_book_row(row: usize, raw: RawBookRow) -> Result<BookMeta> {
    let index = required(row, "Index", raw.index)?;
    let text = |value: Option<String>| value.map(|v| v.trim().to_string()).unwrap_or_default();

    Ok(BookMeta {
        index: normalize_book_id(&index),
        english_abbrev: text(raw.english_abbrev),
        english_full_name: text(raw.english_full_name),
        chinese_abbrev: text(raw.chinese_abbrev),
        chinese_full_name: text(raw.chinese_full_name),
    })
}

pub fn parse_verse_row(row: usize, raw: RawVerseRow) -> Result<VerseRecord> {
    let book = required(row, "Book", raw.book)?;
    let chapter = positive_number(row, "Chapter", raw.chapter)?;
    let verse = positive_number(row, "Verse", raw.verse)?;

    Ok(VerseRecord {
        book: normalize_book_id(&book),
        chapter,
        verse,
        scripture: raw.scripture.unwrap_or_default(),
    })
}

fn required(row: usize, field: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ScriptureError::MalformedRecord {
            row,
            reason: format!("missing {}", field),
        }),
    }
}

fn positive_number(row: usize, field: &str, value: Option<String>) -> Result<u32> {
    let text = required(row, field, value)?;
    match text.trim().parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(ScriptureError::MalformedRecord {
            row,
            reason: format!("{} is not a positive integer: {:?}", field, text),
        }),
    }
}
