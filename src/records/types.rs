//! Record Data Types
//!
//! Typed rows produced at the ingestion boundary. Raw rows mirror the CSV
//! headers one-to-one and carry every field as optional text; the record store
//! turns them into `BookMeta` and `VerseRecord` exactly once.

use crate::error::ScriptureError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three recognised scripture editions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Translation {
    #[serde(rename = "CN")]
    Cn,
    #[serde(rename = "NKJV")]
    Nkjv,
    #[serde(rename = "KJV")]
    Kjv,
}

impl Translation {
    /// Canonical order, also the order search scans selected translations in.
    pub const ALL: [Translation; 3] = [Translation::Cn, Translation::Nkjv, Translation::Kjv];

    pub fn code(self) -> &'static str {
        match self {
            Translation::Cn => "CN",
            Translation::Nkjv => "NKJV",
            Translation::Kjv => "KJV",
        }
    }

    /// File stem of the tabular source, e.g. `Bible_CN`.
    pub fn file_stem(self) -> String {
        format!("Bible_{}", self.code())
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Exact codes only: `cn` or ` KJV` are not translation codes.
impl FromStr for Translation {
    type Err = ScriptureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Translation::ALL
            .into_iter()
            .find(|t| t.code() == s)
            .ok_or_else(|| ScriptureError::InvalidVersion {
                code: s.to_string(),
            })
    }
}

/// Canonical book metadata. Serialised with the catalog's column names,
/// which is also the JSON shape the browsing front end reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookMeta {
    #[serde(rename = "Index")]
    pub index: String,
    #[serde(rename = "English Abbreviation")]
    pub english_abbrev: String,
    #[serde(rename = "English Full Name")]
    pub english_full_name: String,
    #[serde(rename = "Chinese Abbreviation")]
    pub chinese_abbrev: String,
    #[serde(rename = "Chinese Full Name")]
    pub chinese_full_name: String,
}

/// Join key across translations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VerseKey {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseRecord {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    /// Raw text, possibly carrying inline `<...>` markup.
    pub scripture: String,
}

impl VerseRecord {
    pub fn key(&self) -> VerseKey {
        VerseKey {
            book: self.book.clone(),
            chapter: self.chapter,
            verse: self.verse,
        }
    }
}

/// One catalog row as read from the source, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawBookRow {
    #[serde(rename = "Index", default)]
    pub index: Option<String>,
    #[serde(rename = "English Abbreviation", default)]
    pub english_abbrev: Option<String>,
    #[serde(rename = "English Full Name", default)]
    pub english_full_name: Option<String>,
    #[serde(rename = "Chinese Abbreviation", default)]
    pub chinese_abbrev: Option<String>,
    #[serde(rename = "Chinese Full Name", default)]
    pub chinese_full_name: Option<String>,
}

/// One verse row as read from the source, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawVerseRow {
    #[serde(rename = "Book", default)]
    pub book: Option<String>,
    #[serde(rename = "Chapter", default)]
    pub chapter: Option<String>,
    #[serde(rename = "Verse", default)]
    pub verse: Option<String>,
    #[serde(rename = "Scripture", default)]
    pub scripture: Option<String>,
}

impl RawVerseRow {
    pub fn new(book: &str, chapter: &str, verse: &str, scripture: &str) -> Self {
        Self {
            book: Some(book.to_string()),
            chapter: Some(chapter.to_string()),
            verse: Some(verse.to_string()),
            scripture: Some(scripture.to_string()),
        }
    }
}

/// The same verse position in all three translations.
///
/// A translation that lacks the verse carries the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParallelText {
    #[serde(rename = "Scripture_CN")]
    pub cn: String,
    #[serde(rename = "Scripture_NKJV")]
    pub nkjv: String,
    #[serde(rename = "Scripture_KJV")]
    pub kjv: String,
}

impl ParallelText {
    pub fn get(&self, translation: Translation) -> &str {
        match translation {
            Translation::Cn => &self.cn,
            Translation::Nkjv => &self.nkjv,
            Translation::Kjv => &self.kjv,
        }
    }

    pub fn set(&mut self, translation: Translation, text: String) {
        match translation {
            Translation::Cn => self.cn = text,
            Translation::Nkjv => self.nkjv = text,
            Translation::Kjv => self.kjv = text,
        }
    }
}
