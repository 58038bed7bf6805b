use crate::records::types::{ParallelText, Translation, VerseKey};
use serde::{Deserialize, Serialize};

/// A verse that matched in at least one selected translation, with the
/// normalized text of all three translations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "BookIndex")]
    pub book: String,
    #[serde(rename = "Chapter")]
    pub chapter: u32,
    #[serde(rename = "Verse")]
    pub verse: u32,
    #[serde(flatten)]
    pub text: ParallelText,
}

impl SearchHit {
    pub fn key(&self) -> VerseKey {
        VerseKey {
            book: self.book.clone(),
            chapter: self.chapter,
            verse: self.verse,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "totalResult")]
    pub total_count: usize,
    pub results: Vec<SearchHit>,
}

/// Query string of `GET /search`. Translation flags default to off.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    #[serde(rename = "CN", default)]
    pub cn: bool,
    #[serde(rename = "NKJV", default)]
    pub nkjv: bool,
    #[serde(rename = "KJV", default)]
    pub kjv: bool,
}

impl SearchParams {
    /// Selected translations in canonical order.
    pub fn selected(&self) -> Vec<Translation> {
        Translation::ALL
            .into_iter()
            .filter(|t| match t {
                Translation::Cn => self.cn,
                Translation::Nkjv => self.nkjv,
                Translation::Kjv => self.kjv,
            })
            .collect()
    }
}
