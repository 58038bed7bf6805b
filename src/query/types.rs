use crate::records::types::{BookMeta, ParallelText};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One verse position of a chapter, text per translation with markup stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRow {
    #[serde(rename = "Chapter")]
    pub chapter: u32,
    #[serde(rename = "Verse")]
    pub verse: u32,
    #[serde(flatten)]
    pub text: ParallelText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreloadVerse {
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

/// A catalog book with every chapter of one translation. Chapter keys
/// serialise as JSON object keys (`"1"`, `"2"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreloadBook {
    pub book: BookMeta,
    pub chapters: BTreeMap<u32, Vec<PreloadVerse>>,
}

#[derive(Debug, Deserialize)]
pub struct ChapterParams {
    #[serde(rename = "bookIndex")]
    pub book_index: i64,
}

#[derive(Debug, Deserialize)]
pub struct VerseParams {
    #[serde(rename = "bookIndex")]
    pub book_index: i64,
    pub chapter: u32,
}
