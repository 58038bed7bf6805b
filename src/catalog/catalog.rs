use crate::error::{Result, ScriptureError};
use crate::records::types::BookMeta;

use serde::Serialize;
use std::collections::HashMap;

/// Books in the canonical list.
pub const CANON_BOOKS: usize = 66;
/// Positions `0..OLD_TESTAMENT_BOOKS` are the Old Testament.
pub const OLD_TESTAMENT_BOOKS: usize = 39;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Testament {
    Old,
    New,
}

/// Immutable, ordered book list with a reverse lookup from book id to position.
#[derive(Debug, Clone)]
pub struct BookCatalog {
    books: Vec<BookMeta>,
    positions: HashMap<String, usize>,
}

impl BookCatalog {
    /// Fails with `MalformedRecord` when two entries share an index.
    pub fn new(books: Vec<BookMeta>) -> Result<Self> {
        let mut positions = HashMap::with_capacity(books.len());
        for (position, book) in books.iter().enumerate() {
            if positions.insert(book.index.clone(), position).is_some() {
                return Err(ScriptureError::MalformedRecord {
                    row: position + 1,
                    reason: format!("duplicate book index {:?}", book.index),
                });
            }
        }

        Ok(Self { books, positions })
    }

    /// Like `new`, but the list must hold exactly the 66 canonical books.
    pub fn canonical(books: Vec<BookMeta>) -> Result<Self> {
        if books.len() != CANON_BOOKS {
            return Err(ScriptureError::CatalogIncomplete {
                expected: CANON_BOOKS,
                found: books.len(),
            });
        }
        Self::new(books)
    }

    pub fn books(&self) -> &[BookMeta] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn by_position(&self, position: usize) -> Result<&BookMeta> {
        self.books
            .get(position)
            .ok_or_else(|| ScriptureError::BookNotFound {
                book: format!("position {}", position),
            })
    }

    pub fn position_of(&self, index: &str) -> Result<usize> {
        self.positions
            .get(index)
            .copied()
            .ok_or_else(|| ScriptureError::BookNotFound {
                book: index.to_string(),
            })
    }

    /// Positions `0..39` are Old; a short catalog has no New Testament.
    pub fn books_in(&self, testament: Testament) -> &[BookMeta] {
        let split = OLD_TESTAMENT_BOOKS.min(self.books.len());
        match testament {
            Testament::Old => &self.books[..split],
            Testament::New => &self.books[split..],
        }
    }
}
