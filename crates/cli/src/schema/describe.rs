// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `querys describe` JSON output.

use querys_core::{Column, IndexInfo, Layout};
use schemars::JsonSchema;
use serde::Serialize;

/// JSON output structure for the describe command.
#[derive(Debug, JsonSchema, Serialize)]
pub struct DescribeOutputJson {
    /// Attached namespaces (SQLite's `main` and `temp` excluded).
    pub namespaces: Vec<String>,
    /// Tables in the `public` namespace.
    pub tables: Vec<String>,
    /// Columns of `public.querys` in declaration order.
    pub columns: Vec<ColumnJson>,
    /// Indexes in the `public` namespace.
    pub indexes: Vec<IndexJson>,
}

/// A column of `public.querys`.
#[derive(Debug, JsonSchema, Serialize)]
pub struct ColumnJson {
    pub name: String,
    /// Declared type, e.g. `INTEGER` or `TEXT`.
    #[serde(rename = "type")]
    pub decl_type: String,
    pub nullable: bool,
    pub primary_key: bool,
}

/// An index in the `public` namespace.
#[derive(Debug, JsonSchema, Serialize)]
pub struct IndexJson {
    pub name: String,
    pub table: String,
    pub columns: Vec<String>,
}

impl From<&Column> for ColumnJson {
    fn from(column: &Column) -> Self {
        ColumnJson {
            name: column.name.clone(),
            decl_type: column.decl_type.clone(),
            nullable: !column.not_null,
            primary_key: column.primary_key,
        }
    }
}

impl From<&IndexInfo> for IndexJson {
    fn from(index: &IndexInfo) -> Self {
        IndexJson {
            name: index.name.clone(),
            table: index.table.clone(),
            columns: index.columns.clone(),
        }
    }
}

impl From<&Layout> for DescribeOutputJson {
    fn from(layout: &Layout) -> Self {
        DescribeOutputJson {
            namespaces: layout.namespaces.clone(),
            tables: layout.tables.clone(),
            columns: layout.columns.iter().map(ColumnJson::from).collect(),
            indexes: layout.indexes.iter().map(IndexJson::from).collect(),
        }
    }
}
