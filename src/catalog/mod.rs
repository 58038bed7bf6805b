//! Book Catalog Module
//!
//! The ordered list of canonical books. List position is what the browsing UI
//! selects by; `BookMeta::index` is what verse records join on.

pub mod catalog;
pub mod handlers;
