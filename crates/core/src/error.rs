// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for querys-core operations.

use thiserror::Error;

/// All possible errors that can occur in querys-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("schema conflict on {object}: {reason}\n  hint: an existing object has a different definition; rename or drop it first")]
    SchemaConflict { object: String, reason: String },

    #[error("a title is required to upsert a record")]
    TitleRequired,

    #[error("question cannot be empty")]
    EmptyQuestion,

    #[error("unexpected reply from language model: {0}\n  hint: expected a JSON array [score, question, null, answer]")]
    UnexpectedReply(String),

    #[error("language model error: {0}")]
    Llm(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

/// A specialized Result type for querys-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
