// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Declaration of the `public.querys` relation.
//!
//! SQLite has no `CREATE SCHEMA`, so the `public` namespace is an attached
//! database. [`ensure_namespace`] attaches it if it is not already attached and
//! [`apply_schema`] creates the table with `IF NOT EXISTS` semantics. Both are
//! safe to repeat against a store where they already ran.

use std::path::PathBuf;

use rusqlite::{params, Connection, OptionalExtension};
use serde::Serialize;

use crate::error::{Error, Result};

/// Namespace holding the table.
pub const NAMESPACE: &str = "public";

/// Name of the only table.
pub const TABLE: &str = "querys";

/// Declared shape of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub decl_type: &'static str,
}

/// Columns of `public.querys`, in declaration order. All are nullable.
pub const COLUMNS: [ColumnDef; 4] = [
    ColumnDef {
        name: "score",
        decl_type: "INTEGER",
    },
    ColumnDef {
        name: "title",
        decl_type: "TEXT",
    },
    ColumnDef {
        name: "body",
        decl_type: "TEXT",
    },
    ColumnDef {
        name: "answer",
        decl_type: "TEXT",
    },
];

/// SQL schema for the question/answer store.
pub const SCHEMA: &str = r#"
-- Question/answer records: no key, no constraints, every column nullable
CREATE TABLE IF NOT EXISTS public.querys (
    score INTEGER,
    title TEXT,
    body TEXT,
    answer TEXT
);

-- Title search index (disabled)
-- CREATE INDEX IF NOT EXISTS idx_querys_title ON querys(title);
"#;

/// Where the namespace's database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamespaceLocation {
    /// An SQLite file, created on first attach.
    File(PathBuf),
    /// A private in-memory database that lives as long as the connection.
    Memory,
}

/// A column as reported by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub name: String,
    pub decl_type: String,
    pub not_null: bool,
    pub primary_key: bool,
}

/// An index as reported by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexInfo {
    pub name: String,
    pub table: String,
    pub columns: Vec<String>,
}

/// Everything the store reports about the declared objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub namespaces: Vec<String>,
    pub tables: Vec<String>,
    pub columns: Vec<Column>,
    pub indexes: Vec<IndexInfo>,
}

/// Attach the `public` namespace unless it is already attached.
///
/// Returns `true` when this call attached it.
pub fn ensure_namespace(conn: &Connection, location: &NamespaceLocation) -> Result<bool> {
    if namespaces(conn)?.iter().any(|n| n == NAMESPACE) {
        return Ok(false);
    }

    let target = match location {
        NamespaceLocation::File(path) => path.to_string_lossy().into_owned(),
        NamespaceLocation::Memory => ":memory:".to_string(),
    };
    conn.execute(
        &format!("ATTACH DATABASE ?1 AS {NAMESPACE}"),
        params![target],
    )?;
    tracing::debug!(namespace = NAMESPACE, target = %target, "attached namespace");
    Ok(true)
}

/// Create `public.querys` if it does not exist, then check that whatever
/// carries that name has the declared shape.
///
/// Existing rows are never touched. No index is created.
pub fn apply_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    verify_schema(conn)?;
    tracing::debug!(table = TABLE, namespace = NAMESPACE, "schema applied");
    Ok(())
}

/// Check that `public.querys` is a table with exactly the declared columns.
///
/// `CREATE TABLE IF NOT EXISTS` accepts any same-named object, so this is
/// where an incompatible definition is rejected.
pub fn verify_schema(conn: &Connection) -> Result<()> {
    let conflict = |reason: String| Error::SchemaConflict {
        object: format!("{NAMESPACE}.{TABLE}"),
        reason,
    };

    let kind: Option<String> = conn
        .query_row(
            &format!(
                "SELECT type FROM {NAMESPACE}.sqlite_master
                 WHERE name = ?1 AND type IN ('table', 'view')"
            ),
            params![TABLE],
            |row| row.get(0),
        )
        .optional()?;

    match kind.as_deref() {
        Some("table") => {}
        Some(other) => return Err(conflict(format!("exists as a {other}, expected a table"))),
        None => return Err(conflict("table does not exist".to_string())),
    }

    let actual = columns(conn)?;
    if actual.len() != COLUMNS.len() {
        return Err(conflict(format!(
            "has {} columns, expected {}",
            actual.len(),
            COLUMNS.len()
        )));
    }

    for (column, expected) in actual.iter().zip(COLUMNS.iter()) {
        if !column.name.eq_ignore_ascii_case(expected.name) {
            return Err(conflict(format!(
                "found column '{}' where '{}' was expected",
                column.name, expected.name
            )));
        }
        if !column.decl_type.eq_ignore_ascii_case(expected.decl_type) {
            return Err(conflict(format!(
                "column '{}' has type {}, expected {}",
                column.name, column.decl_type, expected.decl_type
            )));
        }
        if column.not_null {
            return Err(conflict(format!("column '{}' is NOT NULL", column.name)));
        }
        if column.primary_key {
            return Err(conflict(format!(
                "column '{}' is part of a primary key",
                column.name
            )));
        }
    }

    Ok(())
}

/// Attached namespaces, excluding SQLite's built-in `main` and `temp`.
pub fn namespaces(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT name FROM pragma_database_list
         WHERE name NOT IN ('main', 'temp') ORDER BY seq",
    )?;

    let names = stmt
        .query_map([], |row| row.get(0))?
        .collect::<std::result::Result<Vec<String>, _>>()?;

    Ok(names)
}

/// User tables in the `public` namespace.
pub fn tables(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT name FROM {NAMESPACE}.sqlite_master
         WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name"
    ))?;

    let names = stmt
        .query_map([], |row| row.get(0))?
        .collect::<std::result::Result<Vec<String>, _>>()?;

    Ok(names)
}

/// Columns of `public.querys` in declaration order. Empty if the table is missing.
pub fn columns(conn: &Connection) -> Result<Vec<Column>> {
    let mut stmt = conn.prepare(
        "SELECT name, type, \"notnull\", pk FROM pragma_table_info(?1, ?2) ORDER BY cid",
    )?;

    let columns = stmt
        .query_map(params![TABLE, NAMESPACE], |row| {
            let not_null: i64 = row.get(2)?;
            let pk: i64 = row.get(3)?;
            Ok(Column {
                name: row.get(0)?,
                decl_type: row.get(1)?,
                not_null: not_null != 0,
                primary_key: pk != 0,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(columns)
}

/// Every index in the `public` namespace, including automatic ones.
pub fn indexes(conn: &Connection) -> Result<Vec<IndexInfo>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT name, tbl_name FROM {NAMESPACE}.sqlite_master
         WHERE type = 'index' ORDER BY name"
    ))?;

    let named = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
        .collect::<std::result::Result<Vec<(String, String)>, _>>()?;

    let mut cols_stmt =
        conn.prepare("SELECT name FROM pragma_index_info(?1, ?2) ORDER BY seqno")?;

    let mut indexes = Vec::with_capacity(named.len());
    for (name, table) in named {
        let columns = cols_stmt
            .query_map(params![name, NAMESPACE], |row| {
                // NULL for expression columns
                let column: Option<String> = row.get(0)?;
                Ok(column.unwrap_or_else(|| "<expr>".to_string()))
            })?
            .collect::<std::result::Result<Vec<String>, _>>()?;
        indexes.push(IndexInfo {
            name,
            table,
            columns,
        });
    }

    Ok(indexes)
}

/// Snapshot of namespaces, tables, columns and indexes.
pub fn describe(conn: &Connection) -> Result<Layout> {
    Ok(Layout {
        namespaces: namespaces(conn)?,
        tables: tables(conn)?,
        columns: columns(conn)?,
        indexes: indexes(conn)?,
    })
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
