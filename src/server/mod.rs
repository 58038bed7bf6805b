//! HTTP Server Module
//!
//! Wires the components into one shared `AppState` and mounts every endpoint.
//!
//! ## Endpoints
//! - `GET  /api/books`: the ordered catalog, each book tagged with its testament.
//! - `GET  /api/chapters?bookIndex=`: chapter numbers of a book.
//! - `GET  /api/verses?bookIndex=&chapter=`: a chapter across all translations.
//! - `GET  /api/preload/:version`: one translation, fully nested.
//! - `GET  /api/search?q=&CN=&NKJV=&KJV=`: conjunctive text search.
//! - `POST /api/reload`: drop cached indexes.
//! - `GET  /health`: liveness.

pub mod extract;
pub mod handlers;
pub mod router;
pub mod state;
