use crate::error::{Result, ScriptureError};
use crate::records::types::{Translation, VerseKey, VerseRecord};

use std::collections::{BTreeMap, HashMap, HashSet};

/// Lookup structure for one translation.
///
/// `records` keeps ingestion order (search scans it); `books` holds, per book
/// and chapter, positions into `records` sorted by verse number.
#[derive(Debug, Clone)]
pub struct TranslationIndex {
    translation: Translation,
    records: Vec<VerseRecord>,
    books: HashMap<String, BTreeMap<u32, Vec<usize>>>,
}

impl TranslationIndex {
    /// Groups records by book then chapter. The first occurrence of a
    /// duplicated (book, chapter, verse) wins.
    pub fn build(translation: Translation, records: Vec<VerseRecord>) -> Self {
        let mut seen: HashSet<VerseKey> = HashSet::with_capacity(records.len());
        let mut kept = Vec::with_capacity(records.len());
        for record in records {
            if seen.insert(record.key()) {
                kept.push(record);
            } else {
                tracing::warn!(
                    "{}: duplicate verse {} {}:{} ignored",
                    translation,
                    record.book,
                    record.chapter,
                    record.verse
                );
            }
        }

        let mut books: HashMap<String, BTreeMap<u32, Vec<usize>>> = HashMap::new();
        for (position, record) in kept.iter().enumerate() {
            books
                .entry(record.book.clone())
                .or_default()
                .entry(record.chapter)
                .or_default()
                .push(position);
        }
        for chapters in books.values_mut() {
            for positions in chapters.values_mut() {
                positions.sort_by_key(|&p| kept[p].verse);
            }
        }

        Self {
            translation,
            records: kept,
            books,
        }
    }

    pub fn translation(&self) -> Translation {
        self.translation
    }

    /// All records in ingestion order.
    pub fn records(&self) -> &[VerseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains_book(&self, book: &str) -> bool {
        self.books.contains_key(book)
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Distinct chapter numbers of `book`, ascending.
    pub fn chapters_of(&self, book: &str) -> Result<Vec<u32>> {
        Ok(self.chapter_map(book)?.keys().copied().collect())
    }

    /// Verses of one chapter, ascending by verse. An unknown chapter of a
    /// known book is an empty listing.
    pub fn verses_of(&self, book: &str, chapter: u32) -> Result<Vec<&VerseRecord>> {
        let chapters = self.chapter_map(book)?;
        Ok(chapters
            .get(&chapter)
            .map(|positions| positions.iter().map(|&p| &self.records[p]).collect())
            .unwrap_or_default())
    }

    pub fn get(&self, book: &str, chapter: u32, verse: u32) -> Option<&VerseRecord> {
        let positions = self.books.get(book)?.get(&chapter)?;
        positions
            .binary_search_by_key(&verse, |&p| self.records[p].verse)
            .ok()
            .map(|i| &self.records[positions[i]])
    }

    pub fn lookup(&self, key: &VerseKey) -> Option<&VerseRecord> {
        self.get(&key.book, key.chapter, key.verse)
    }

    fn chapter_map(&self, book: &str) -> Result<&BTreeMap<u32, Vec<usize>>> {
        self.books
            .get(book)
            .ok_or_else(|| ScriptureError::BookNotFound {
                book: book.to_string(),
            })
    }
}
