// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed store for query records.
//!
//! The [`Database`] struct attaches the `public` namespace, applies the schema
//! and provides all data access for `public.querys`.

use rusqlite::functions::FunctionFlags;
use rusqlite::types::{Value, ValueRef};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use crate::error::{Error, Result};
use crate::record::QueryRecord;
use crate::schema::{self, Layout, NamespaceLocation};

/// Outcome of [`Database::upsert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upserted {
    /// This many existing rows were updated.
    Updated(usize),
    /// No row matched, so a new one was inserted.
    Inserted,
}

fn row_to_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<QueryRecord> {
    Ok(QueryRecord {
        score: row.get(0)?,
        title: row.get(1)?,
        body: row.get(2)?,
        answer: row.get(3)?,
    })
}

/// Replace SQLite's ASCII-only `lower()` with Unicode lowercasing so title
/// matching agrees with [`normalize_question`](crate::question::normalize_question).
///
/// Non-text values pass through unchanged.
fn register_unicode_lower(conn: &Connection) -> Result<()> {
    conn.create_scalar_function(
        "lower",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            Ok(match ctx.get_raw(0) {
                ValueRef::Text(text) => Value::Text(String::from_utf8_lossy(text).to_lowercase()),
                other => Value::from(other),
            })
        },
    )?;
    Ok(())
}

/// SQLite connection with the `public` namespace attached.
pub struct Database {
    /// The underlying SQLite connection.
    pub conn: Connection,
}

impl Database {
    /// Open the store whose `public` namespace lives at `path`, creating and
    /// applying the schema if needed.
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open_in_memory()?;
        register_unicode_lower(&conn)?;
        schema::ensure_namespace(&conn, &NamespaceLocation::File(path.to_path_buf()))?;

        conn.execute_batch(
            "PRAGMA public.journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;

        schema::apply_schema(&conn)?;
        tracing::debug!(path = %path.display(), "opened store");
        Ok(Database { conn })
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        register_unicode_lower(&conn)?;
        schema::ensure_namespace(&conn, &NamespaceLocation::Memory)?;
        schema::apply_schema(&conn)?;
        Ok(Database { conn })
    }

    /// Reapply the schema. Safe on a store where it already exists.
    pub fn apply_schema(&self) -> Result<()> {
        schema::apply_schema(&self.conn)
    }

    /// Namespaces, tables, columns and indexes as the store reports them.
    pub fn describe(&self) -> Result<Layout> {
        schema::describe(&self.conn)
    }

    /// Insert one record as given. NULL fields stay NULL.
    pub fn insert(&self, record: &QueryRecord) -> Result<()> {
        self.conn.execute(
            "INSERT INTO public.querys (score, title, body, answer)
             VALUES (?1, ?2, ?3, ?4)",
            params![record.score, record.title, record.body, record.answer],
        )?;
        Ok(())
    }

    /// All records in insertion order.
    pub fn all(&self) -> Result<Vec<QueryRecord>> {
        self.list(None)
    }

    /// Records in insertion order, at most `limit` of them.
    pub fn list(&self, limit: Option<usize>) -> Result<Vec<QueryRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT score, title, body, answer FROM public.querys
             ORDER BY rowid LIMIT ?1",
        )?;

        // LIMIT -1 means no limit in SQLite
        let limit_i64 = limit.map_or(-1, |n| i64::try_from(n).unwrap_or(i64::MAX));
        let records = stmt
            .query_map(params![limit_i64], row_to_record)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(records)
    }

    /// Number of rows.
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM public.querys", [], |row| row.get(0))?;
        usize::try_from(count).map_err(|_| Error::CorruptedData(format!("row count {count}")))
    }

    /// First record whose title equals `title`, ignoring case.
    pub fn find_by_title(&self, title: &str) -> Result<Option<QueryRecord>> {
        let record = self
            .conn
            .query_row(
                "SELECT score, title, body, answer FROM public.querys
                 WHERE LOWER(title) = LOWER(?1)
                 ORDER BY rowid LIMIT 1",
                params![title],
                row_to_record,
            )
            .optional()?;

        Ok(record)
    }

    /// Update the score, answer and body of rows matching the record's title
    /// (ignoring case) and body (NULL matches NULL); insert when none match.
    pub fn upsert(&self, record: &QueryRecord) -> Result<Upserted> {
        let title = record.title.as_deref().ok_or(Error::TitleRequired)?;

        let affected = self.conn.execute(
            "UPDATE public.querys
                SET score = ?1, answer = ?2, body = ?3
              WHERE LOWER(title) = LOWER(?4) AND body IS ?3",
            params![record.score, record.answer, record.body, title],
        )?;

        if affected > 0 {
            tracing::debug!(title, affected, "updated existing rows");
            return Ok(Upserted::Updated(affected));
        }

        self.insert(record)?;
        tracing::debug!(title, "inserted new row");
        Ok(Upserted::Inserted)
    }

    /// Round-trip a trivial query.
    pub fn ping(&self) -> Result<()> {
        self.conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
