// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The query record stored in `public.querys`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of `public.querys`. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRecord {
    /// Answer quality score. Unbounded in storage; model answers use 1..=10.
    pub score: Option<i64>,
    /// The question as asked.
    pub title: Option<String>,
    /// Extra question context.
    pub body: Option<String>,
    /// The answer text.
    pub answer: Option<String>,
}

impl QueryRecord {
    /// Creates a record with every field populated.
    pub fn new(score: i64, title: &str, body: &str, answer: &str) -> Self {
        QueryRecord {
            score: Some(score),
            title: Some(title.to_string()),
            body: Some(body.to_string()),
            answer: Some(answer.to_string()),
        }
    }

    /// Returns true if every field is NULL.
    pub fn is_empty(&self) -> bool {
        self.score.is_none() && self.title.is_none() && self.body.is_none() && self.answer.is_none()
    }

    /// Human-readable summary of question, answer and score.
    ///
    /// Missing fields render as empty text.
    pub fn message(&self) -> String {
        format!(
            "Question: {}\nAnswer: {}\nScore (1-10): {}",
            self.title.as_deref().unwrap_or(""),
            self.answer.as_deref().unwrap_or(""),
            self.score.map(|s| s.to_string()).unwrap_or_default(),
        )
    }
}

impl fmt::Display for QueryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let score = self
            .score
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        write!(f, "[{}] {}", score, self.title.as_deref().unwrap_or("(untitled)"))
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
