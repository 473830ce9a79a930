// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `querys list` JSON output.

use schemars::JsonSchema;
use serde::Serialize;

use super::RecordJson;

/// JSON output structure for the list command.
#[derive(Debug, JsonSchema, Serialize)]
pub struct ListOutputJson {
    /// Rows in insertion order.
    pub records: Vec<RecordJson>,
    /// Maximum number of results requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}
