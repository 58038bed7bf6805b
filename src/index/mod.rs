//! Verse Index Module
//!
//! Maps a translation's flat records into a book → chapter → verse hierarchy.
//!
//! ## Submodules
//! - **`verse_index`**: `TranslationIndex`, a pure function of its records.
//! - **`cache`**: `IndexCache`, which builds each translation's index at most
//!   once per load cycle and publishes it only when complete.

pub mod cache;
pub mod verse_index;

#[cfg(test)]
mod tests;
