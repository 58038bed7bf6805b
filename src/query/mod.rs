//! Chapter/Verse Query Module
//!
//! Serves the browsing read patterns: the chapter list of a book, a chapter's
//! verses side by side across translations, and the full nested dump of one
//! translation for clients that browse offline.

pub mod engine;
pub mod handlers;
pub mod types;

#[cfg(test)]
mod tests;
