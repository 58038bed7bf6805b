//! Data Source Capability
//!
//! The `DataSource` trait is the only place the service touches I/O. Sources
//! hand back raw rows; validation belongs to `RecordStore`.

use super::types::{RawBookRow, RawVerseRow, Translation};
use crate::error::{Result, ScriptureError};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const CATALOG_FILE: &str = "Books.csv";

#[async_trait]
pub trait DataSource: Send + Sync {
    /// Human-readable description used in logs.
    fn describe(&self) -> String;

    async fn catalog_rows(&self) -> Result<Vec<RawBookRow>>;

    async fn verse_rows(&self, translation: Translation) -> Result<Vec<RawVerseRow>>;
}

/// Reads `Books.csv` and `Bible_<CODE>.csv` from a directory.
#[derive(Debug, Clone)]
pub struct CsvDirSource {
    root: PathBuf,
}

impl CsvDirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.root.join(CATALOG_FILE)
    }

    pub fn translation_path(&self, translation: Translation) -> PathBuf {
        self.root.join(format!("{}.csv", translation.file_stem()))
    }

    async fn read(&self, path: &Path) -> Result<Vec<u8>> {
        tokio::fs::read(path)
            .await
            .map_err(|e| ScriptureError::SourceUnavailable {
                source_name: path.display().to_string(),
                message: e.to_string(),
            })
    }
}

#[async_trait]
impl DataSource for CsvDirSource {
    fn describe(&self) -> String {
        format!("csv:{}", self.root.display())
    }

    /// Any undecodable catalog row fails the load: positions are structural.
    async fn catalog_rows(&self) -> Result<Vec<RawBookRow>> {
        let path = self.catalog_path();
        let bytes = self.read(&path).await?;
        parse_csv(&bytes).into_iter().collect()
    }

    async fn verse_rows(&self, translation: Translation) -> Result<Vec<RawVerseRow>> {
        let path = self.translation_path(translation);
        let bytes = self.read(&path).await?;

        let rows = parse_csv(&bytes)
            .into_iter()
            .filter_map(|row| match row {
                Ok(row) => Some(row),
                Err(e) => {
                    tracing::warn!("Skipping row in {}: {}", path.display(), e);
                    None
                }
            })
            .collect();
        Ok(rows)
    }
}

/// Parses headed CSV into rows keyed by column name, one result per data row.
///
/// A row the CSV reader cannot decode is a `MalformedRecord` carrying its
/// 1-based data row number; the caller decides whether to skip or fail.
pub fn parse_csv<T: DeserializeOwned>(bytes: &[u8]) -> Vec<Result<T>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(bytes);

    let rows = reader
        .deserialize::<T>()
        .enumerate()
        .map(|(i, result)| {
            result.map_err(|e| ScriptureError::MalformedRecord {
                row: i + 1,
                reason: e.to_string(),
            })
        })
        .collect();
    rows
}

/// Rows held in memory, for embedding the service and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    books: Vec<RawBookRow>,
    verses: HashMap<Translation, Vec<RawVerseRow>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(mut self, books: Vec<RawBookRow>) -> Self {
        self.books = books;
        self
    }

    pub fn with_verses(mut self, translation: Translation, rows: Vec<RawVerseRow>) -> Self {
        self.verses.insert(translation, rows);
        self
    }
}

#[async_trait]
impl DataSource for MemorySource {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    async fn catalog_rows(&self) -> Result<Vec<RawBookRow>> {
        Ok(self.books.clone())
    }

    async fn verse_rows(&self, translation: Translation) -> Result<Vec<RawVerseRow>> {
        self.verses
            .get(&translation)
            .cloned()
            .ok_or_else(|| ScriptureError::SourceUnavailable {
                source_name: format!("memory:{}", translation),
                message: "no rows registered for translation".to_string(),
            })
    }
}
