//! Error taxonomy shared by every component.
//!
//! Row-level parse problems are recovered locally by the record store; the
//! variants that reach a caller are mapped to distinct HTTP status codes so the
//! boundary layer never has to inspect message text.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScriptureError {
    /// The underlying data collaborator (file, database) could not be read.
    #[error("source unavailable: {source_name}: {message}")]
    SourceUnavailable {
        source_name: String,
        message: String,
    },

    /// A row lacks a required field or carries an unparsable value.
    #[error("malformed record at row {row}: {reason}")]
    MalformedRecord { row: usize, reason: String },

    /// The catalog does not hold the full canonical book list.
    #[error("catalog has {found} books, expected {expected}")]
    CatalogIncomplete { expected: usize, found: usize },

    /// The book reference does not resolve to a catalog entry or an indexed book.
    #[error("book not found: {book}")]
    BookNotFound { book: String },

    /// Translation code outside the closed set `CN`, `NKJV`, `KJV`.
    #[error("invalid version: {code}")]
    InvalidVersion { code: String },

    /// Query string that does not decode into the endpoint's parameters.
    #[error("invalid request: {message}")]
    InvalidRequest { message: String },
}

impl ScriptureError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ScriptureError::BookNotFound { .. } => StatusCode::NOT_FOUND,
            ScriptureError::InvalidVersion { .. } | ScriptureError::InvalidRequest { .. } => {
                StatusCode::BAD_REQUEST
            }
            ScriptureError::SourceUnavailable { .. }
            | ScriptureError::MalformedRecord { .. }
            | ScriptureError::CatalogIncomplete { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ScriptureError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected: {}", self);
        }
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

pub type Result<T> = std::result::Result<T, ScriptureError>;
