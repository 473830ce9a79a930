// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `querys ask` JSON output.

use querys_core::{AskResponse, Source};
use schemars::JsonSchema;
use serde::Serialize;

use super::RecordJson;

/// JSON output structure for the ask command.
#[derive(Debug, JsonSchema, Serialize)]
pub struct AskOutputJson {
    /// Which tier answered the question.
    pub source: SourceJson,
    /// The answering record.
    pub row: RecordJson,
    /// Human-readable summary of question, answer and score.
    pub message: String,
}

/// Where an answer came from.
#[derive(Debug, JsonSchema, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceJson {
    /// The answer cache.
    Cache,
    /// The record store.
    Db,
    /// The language model.
    Llm,
}

impl From<Source> for SourceJson {
    fn from(value: Source) -> Self {
        match value {
            Source::Cache => SourceJson::Cache,
            Source::Db => SourceJson::Db,
            Source::Llm => SourceJson::Llm,
        }
    }
}

impl From<&AskResponse> for AskOutputJson {
    fn from(response: &AskResponse) -> Self {
        AskOutputJson {
            source: response.source.into(),
            row: (&response.row).into(),
            message: response.message.clone(),
        }
    }
}
