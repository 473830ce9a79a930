// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Question answering over the record store.
//!
//! A question is answered from the first source that has it:
//! 1. the answer cache
//! 2. the record store (title match, ignoring case)
//! 3. the language model, whose answer is upserted into the store
//!
//! Whatever answered is written back to the cache. Cache failures are logged
//! and treated as misses; they never fail a question.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cache::{AnswerCache, ClockSource};
use crate::db::Database;
use crate::error::{Error, Result};
use crate::question::cache_key;
use crate::record::QueryRecord;

/// Something that can answer a question it has never seen.
pub trait Answerer {
    /// Produce a record whose title is `question`.
    fn answer(&self, question: &str) -> Result<QueryRecord>;
}

impl<A: Answerer + ?Sized> Answerer for &A {
    fn answer(&self, question: &str) -> Result<QueryRecord> {
        (**self).answer(question)
    }
}

/// Where an answer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Cache,
    Db,
    Llm,
}

impl Source {
    /// Returns the string representation used in output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Cache => "cache",
            Source::Db => "db",
            Source::Llm => "llm",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of [`ask`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    pub source: Source,
    pub row: QueryRecord,
    pub message: String,
}

impl AskResponse {
    fn new(source: Source, row: QueryRecord) -> Self {
        let message = row.message();
        AskResponse {
            source,
            row,
            message,
        }
    }
}

/// Answer `question` from cache, store, or model, in that order.
pub fn ask<C, A>(
    question: &str,
    db: &Database,
    cache: &AnswerCache<C>,
    answerer: &A,
) -> Result<AskResponse>
where
    C: ClockSource,
    A: Answerer + ?Sized,
{
    let question = question.trim();
    if question.is_empty() {
        return Err(Error::EmptyQuestion);
    }
    let key = cache_key(question);

    match cache.get(&key) {
        Ok(Some(row)) => {
            tracing::debug!(key = %key, "answered from cache");
            return Ok(AskResponse::new(Source::Cache, row));
        }
        Ok(None) => {}
        Err(e) => tracing::warn!(error = %e, "cache lookup failed"),
    }

    if let Some(row) = db.find_by_title(question)? {
        tracing::debug!("answered from store");
        remember(cache, &key, &row);
        return Ok(AskResponse::new(Source::Db, row));
    }

    let row = answerer.answer(question)?;
    db.upsert(&row)?;
    tracing::debug!(score = ?row.score, "answered by model");
    remember(cache, &key, &row);
    Ok(AskResponse::new(Source::Llm, row))
}

fn remember<C: ClockSource>(cache: &AnswerCache<C>, key: &str, row: &QueryRecord) {
    if let Err(e) = cache.set(key, row) {
        tracing::warn!(error = %e, "cache write failed");
    }
}

#[cfg(test)]
#[path = "ask_tests.rs"]
mod tests;
