// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! Test infrastructure for command testing without filesystem setup.
//!
//! This module provides a `TestContext` that wraps an in-memory store, an
//! in-memory answer cache and a default config, enabling commands to be tested
//! without requiring an actual `.querys/` directory.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::commands::testing::TestContext;
//!
//! #[test]
//! fn test_some_command() {
//!     let mut ctx = TestContext::new();
//!     ctx.add(5, "What is Rust?", "A language");
//!
//!     // Test command logic using ctx.db and ctx.cache
//! }
//! ```

use crate::config::Config;
use querys_core::{AnswerCache, Answerer, Database, QueryRecord};
use std::cell::Cell;

/// Test context providing an in-memory store and cache.
pub struct TestContext {
    pub db: Database,
    pub cache: AnswerCache,
    pub config: Config,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Create a new test context with in-memory store and cache and default config.
    pub fn new() -> Self {
        let config = Config::default();
        let db = Database::open_in_memory().expect("Failed to create in-memory store");
        let cache = AnswerCache::open_in_memory(config.cache.ttl_secs)
            .expect("Failed to create in-memory cache");
        TestContext { db, cache, config }
    }

    /// Insert a record with all four fields set.
    pub fn add(&mut self, score: i64, title: &str, answer: &str) -> &mut Self {
        self.db
            .insert(&QueryRecord {
                score: Some(score),
                title: Some(title.to_string()),
                body: None,
                answer: Some(answer.to_string()),
            })
            .expect("Failed to insert record");
        self
    }

    /// All rows in insertion order.
    pub fn rows(&self) -> Vec<QueryRecord> {
        self.db.all().expect("Failed to read records")
    }
}

/// An answerer that returns a fixed record and counts calls.
pub struct FakeModel {
    pub score: i64,
    pub answer: &'static str,
    pub calls: Cell<usize>,
}

impl FakeModel {
    pub fn new(score: i64, answer: &'static str) -> Self {
        FakeModel {
            score,
            answer,
            calls: Cell::new(0),
        }
    }
}

impl Answerer for FakeModel {
    fn answer(&self, question: &str) -> querys_core::Result<QueryRecord> {
        self.calls.set(self.calls.get() + 1);
        Ok(QueryRecord {
            score: Some(self.score),
            title: Some(question.to_string()),
            body: None,
            answer: Some(self.answer.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_starts_empty() {
        let ctx = TestContext::new();
        assert!(ctx.rows().is_empty());
        assert_eq!(ctx.db.count().unwrap(), 0);
    }

    #[test]
    fn test_chained_adds_keep_order() {
        let mut ctx = TestContext::new();
        ctx.add(1, "first", "a").add(2, "second", "b");

        let titles: Vec<_> = ctx
            .rows()
            .into_iter()
            .filter_map(|r| r.title)
            .collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[test]
    fn test_fake_model_counts_calls() {
        let model = FakeModel::new(7, "yes");
        let row = model.answer("q").unwrap();
        assert_eq!(row.score, Some(7));
        assert_eq!(model.calls.get(), 1);
    }
}
