// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the qrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'querys init' first")]
    NotInitialized,

    #[error("no record titled '{0}'")]
    RecordNotFound(String),

    #[error("schema conflict on {object}: {reason}\n  hint: an existing object has a different definition; rename or drop it first")]
    SchemaConflict { object: String, reason: String },

    #[error("{field} is required")]
    FieldRequired { field: &'static str },

    #[error("question cannot be empty")]
    EmptyQuestion,

    #[error("language model error: {0}")]
    Llm(String),

    #[error("unexpected reply from language model: {0}")]
    UnexpectedReply(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("corrupted data in database: {0}")]
    CorruptedData(String),
}

/// A specialized Result type for qrs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<querys_core::Error> for Error {
    fn from(e: querys_core::Error) -> Self {
        match e {
            querys_core::Error::SchemaConflict { object, reason } => {
                Error::SchemaConflict { object, reason }
            }
            querys_core::Error::TitleRequired => Error::FieldRequired { field: "title" },
            querys_core::Error::EmptyQuestion => Error::EmptyQuestion,
            querys_core::Error::Llm(s) => Error::Llm(s),
            querys_core::Error::UnexpectedReply(s) => Error::UnexpectedReply(s),
            querys_core::Error::Database(e) => Error::Database(e),
            querys_core::Error::Io(e) => Error::Io(e),
            querys_core::Error::Json(e) => Error::Json(e),
            querys_core::Error::CorruptedData(s) => Error::CorruptedData(s),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
