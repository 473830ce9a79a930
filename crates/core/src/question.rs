// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use sha2::{Digest, Sha256};

/// Prefix for answer cache keys.
pub const CACHE_KEY_PREFIX: &str = "qa:";

/// Lowercase a question and collapse every whitespace run to a single space.
pub fn normalize_question(question: &str) -> String {
    question
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cache key for a question: `qa:` followed by the hex SHA-256 of its normalized form.
///
/// Questions that differ only in case or spacing share a key.
pub fn cache_key(question: &str) -> String {
    let hash = Sha256::digest(normalize_question(question).as_bytes());
    format!("{}{}", CACHE_KEY_PREFIX, hex::encode(hash))
}

#[cfg(test)]
#[path = "question_tests.rs"]
mod tests;
