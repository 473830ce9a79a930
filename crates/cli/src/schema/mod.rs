// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for JSON output structures.
//!
//! These are separate from runtime types so the core crate stays free of
//! schemars. [`RecordJson`] is the record shape shared by every command that
//! prints rows; the other modules hold per-command output types.

use querys_core::QueryRecord;
use schemars::JsonSchema;
use serde::Serialize;

pub mod ask;
pub mod describe;
pub mod list;

/// JSON representation of one `public.querys` row. Absent fields are `null`.
#[derive(Debug, JsonSchema, Serialize)]
pub struct RecordJson {
    /// Answer quality score.
    pub score: Option<i64>,
    /// The question as asked.
    pub title: Option<String>,
    /// Extra question context.
    pub body: Option<String>,
    /// The answer text.
    pub answer: Option<String>,
}

impl From<&QueryRecord> for RecordJson {
    fn from(record: &QueryRecord) -> Self {
        RecordJson {
            score: record.score,
            title: record.title.clone(),
            body: record.body.clone(),
            answer: record.answer.clone(),
        }
    }
}

/// JSON output of `querys upsert`.
#[derive(Debug, JsonSchema, Serialize)]
pub struct UpsertOutputJson {
    /// Whether existing rows were updated or a new one inserted.
    pub outcome: UpsertOutcome,
    /// Number of rows written.
    pub rows: usize,
    /// The record as written.
    pub record: RecordJson,
}

/// Result of an upsert.
#[derive(Debug, JsonSchema, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpsertOutcome {
    Updated,
    Inserted,
}

/// JSON output of `querys health`.
#[derive(Debug, JsonSchema, Serialize)]
pub struct HealthJson {
    /// True when both the store and the answer cache respond.
    pub ok: bool,
}
