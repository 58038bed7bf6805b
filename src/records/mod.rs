//! Record Store Module
//!
//! Owns the ingestion boundary: everything past this module sees typed
//! `BookMeta` and `VerseRecord` values, never flat string-keyed rows.
//!
//! ## Submodules
//! - **`source`**: The `DataSource` capability (`CsvDirSource`, `MemorySource`).
//! - **`store`**: `RecordStore`, which validates raw rows exactly once.
//! - **`types`**: Translation codes, typed records and raw row shapes.

pub mod source;
pub mod store;
pub mod types;
