// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Expiring answer cache.
//!
//! Answers are kept in their own SQLite file, keyed by
//! [`cache_key`](crate::question::cache_key), so the record store keeps
//! exactly one table. Every entry carries an absolute expiry time; expired
//! entries read as misses and are removed when seen.

use chrono::{DateTime, Duration, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use crate::error::Result;
use crate::record::QueryRecord;

/// Default time-to-live for cached answers: seven days.
pub const DEFAULT_TTL_SECS: u64 = 604_800;

/// Longest accepted time-to-live; larger values are clamped to a century.
pub const MAX_TTL_SECS: u64 = 100 * 365 * 86_400;

const CACHE_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS answers (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    expires_at TEXT NOT NULL
);
"#;

/// Trait for getting the current wall clock time.
///
/// This allows injecting a mock clock for testing.
pub trait ClockSource: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// System clock implementation.
#[derive(Debug, Default)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<C: ClockSource> ClockSource for &C {
    fn now(&self) -> DateTime<Utc> {
        (*self).now()
    }
}

/// SQLite-backed key/value cache with a fixed time-to-live.
pub struct AnswerCache<C: ClockSource = SystemClock> {
    conn: Connection,
    ttl: Duration,
    clock: C,
}

impl AnswerCache<SystemClock> {
    /// Open the cache file at `path`, creating it if needed.
    pub fn open(path: &Path, ttl_secs: u64) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA busy_timeout = 5000;")?;
        Self::with_connection(conn, ttl_secs, SystemClock)
    }

    /// Open an in-memory cache (for testing).
    pub fn open_in_memory(ttl_secs: u64) -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?, ttl_secs, SystemClock)
    }
}

impl<C: ClockSource> AnswerCache<C> {
    /// Build a cache over an open connection with a custom clock source.
    pub fn with_connection(conn: Connection, ttl_secs: u64, clock: C) -> Result<Self> {
        conn.execute_batch(CACHE_SCHEMA)?;
        let secs = i64::try_from(ttl_secs.min(MAX_TTL_SECS)).unwrap_or(i64::MAX);
        let ttl = Duration::try_seconds(secs).unwrap_or(Duration::MAX);
        Ok(AnswerCache { conn, ttl, clock })
    }

    /// Look up a live entry. Expired or unreadable entries are dropped and
    /// reported as misses.
    pub fn get(&self, key: &str) -> Result<Option<QueryRecord>> {
        let entry: Option<(String, String)> = self
            .conn
            .query_row(
                "SELECT value, expires_at FROM answers WHERE key = ?1",
                params![key],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        let Some((value, expires_at)) = entry else {
            return Ok(None);
        };

        let live = DateTime::parse_from_rfc3339(&expires_at)
            .map(|t| t.with_timezone(&Utc) > self.clock.now())
            .unwrap_or(false);
        if !live {
            self.remove(key)?;
            return Ok(None);
        }

        match serde_json::from_str(&value) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                tracing::warn!(key, error = %e, "dropping unreadable cache entry");
                self.remove(key)?;
                Ok(None)
            }
        }
    }

    /// Store `record` under `key`, replacing any previous entry and restarting its TTL.
    pub fn set(&self, key: &str, record: &QueryRecord) -> Result<()> {
        let value = serde_json::to_string(record)?;
        let expires_at = self.clock.now() + self.ttl;
        self.conn.execute(
            "INSERT OR REPLACE INTO answers (key, value, expires_at) VALUES (?1, ?2, ?3)",
            params![key, value, expires_at.to_rfc3339()],
        )?;
        Ok(())
    }

    /// Delete an entry. Returns true if one existed.
    pub fn remove(&self, key: &str) -> Result<bool> {
        let affected = self
            .conn
            .execute("DELETE FROM answers WHERE key = ?1", params![key])?;
        Ok(affected > 0)
    }

    /// Delete every expired entry. Returns how many were removed.
    pub fn purge_expired(&self) -> Result<usize> {
        let mut stmt = self.conn.prepare("SELECT key, expires_at FROM answers")?;
        let entries = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<std::result::Result<Vec<(String, String)>, _>>()?;

        let now = self.clock.now();
        let mut removed = 0;
        for (key, expires_at) in entries {
            let expired = DateTime::parse_from_rfc3339(&expires_at)
                .map(|t| t.with_timezone(&Utc) <= now)
                .unwrap_or(true);
            if expired && self.remove(&key)? {
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Round-trip a trivial query.
    pub fn ping(&self) -> Result<()> {
        self.conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
