//! Scripture Server Library
//!
//! Serves three scripture translations (Chinese Union, NKJV, KJV) over a small
//! read-only REST surface. The binary (`main.rs`) wires these modules together.
//!
//! ## Modules
//! Data flows `records` → `index` → {`query`, `search`}:
//!
//! - **`records`**: Typed verse and book rows, the `DataSource` seam and the
//!   `RecordStore` that validates raw rows once at ingestion.
//! - **`catalog`**: The ordered list of the 66 canonical books and the
//!   position ↔ book id mapping used by the browsing UI.
//! - **`index`**: Builds the book → chapter → verse lookup per translation and
//!   caches built indexes (one build per translation).
//! - **`query`**: Chapter listings, parallel verse listings across translations
//!   and the full per-translation preload document.
//! - **`search`**: Conjunctive multi-term, multi-translation substring search
//!   over markup-stripped text.
//! - **`server`**: Shared application state and the HTTP router.

pub mod catalog;
pub mod config;
pub mod error;
pub mod index;
pub mod query;
pub mod records;
pub mod search;
pub mod server;
