//! Search Module
//!
//! Free-text search across the selected translations.
//!
//! ## Pipeline
//! 1. **Tokenize**: trim, lowercase, split on whitespace.
//! 2. **Normalize**: strip `<...>` markup and lowercase each verse.
//! 3. **Match**: a verse matches when every token is a substring (AND, no ranking).
//! 4. **Hydrate**: each hit carries the text of all three translations.
//!
//! ## Submodules
//! - **`engine`**: The scan and the async entry point over the index cache.
//! - **`handlers`**: `GET /search`.
//! - **`tokenizer`**: Query tokenization and markup stripping.
//! - **`types`**: Hit and response DTOs.

pub mod engine;
pub mod handlers;
pub mod tokenizer;
pub mod types;
