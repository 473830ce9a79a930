// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Prompt construction and parsing of language-model replies.
//!
//! The model is asked for a bare JSON array `[score, question, null, answer]`.
//! Replies are accepted either as exactly that array or with the array
//! embedded in surrounding prose.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::record::QueryRecord;

/// Lowest score a parsed reply can carry.
pub const MIN_SCORE: i64 = 1;
/// Highest score a parsed reply can carry.
pub const MAX_SCORE: i64 = 10;

const PROMPT_TEMPLATE: &str = "\
Answer the user's question and compute ONE final score from 1 to 10, internally weighing:
- Accuracy (40%)
- Completeness (25%)
- Clarity (20%)
- Concision (10%)
- Usefulness (5%)

Return ONLY valid JSON in exactly this FORMAT and ORDER (no extra text):
[
  final_integer_score_1_to_10,
  \"<repeat the question EXACTLY as you received it>\",
  null,
  \"<answer as text>\"
]

Do not include breakdowns or commentary.

Question:
";

/// Full prompt for `question`.
pub fn build_prompt(question: &str) -> String {
    format!("{PROMPT_TEMPLATE}{question}")
}

/// Turn a raw model reply into a record for `question`.
///
/// The title is always the question as asked, never the model's echo of it,
/// and the body is left empty.
pub fn parse_reply(raw: &str, question: &str) -> Result<QueryRecord> {
    let raw = raw.trim();
    let parsed = serde_json::from_str::<Value>(raw)
        .ok()
        .or_else(|| embedded_array(raw));

    let items = match parsed {
        Some(Value::Array(items)) if items.len() == 4 => items,
        Some(Value::Array(items)) => {
            return Err(Error::UnexpectedReply(format!(
                "array has {} elements, expected 4",
                items.len()
            )))
        }
        Some(_) => return Err(Error::UnexpectedReply("reply is not an array".to_string())),
        None => return Err(Error::UnexpectedReply("no JSON array found".to_string())),
    };

    let answer = match &items[3] {
        Value::String(s) => s.trim().to_string(),
        other => other.to_string().trim().to_string(),
    };

    Ok(QueryRecord {
        score: Some(score_from(&items[0])),
        title: Some(question.to_string()),
        body: None,
        answer: Some(answer),
    })
}

/// Parse the slice from the first `[` to the last `]`.
fn embedded_array(raw: &str) -> Option<Value> {
    let start = raw.find('[')?;
    let end = raw.rfind(']')?;
    if end <= start {
        return None;
    }
    serde_json::from_str(&raw[start..=end]).ok()
}

/// Score as an integer in `MIN_SCORE..=MAX_SCORE`.
///
/// Numbers and numeric strings are rounded half to even; anything else
/// scores the minimum.
fn score_from(value: &Value) -> i64 {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };

    match number {
        Some(n) if n.is_finite() => {
            let rounded = n.round_ties_even();
            rounded.clamp(MIN_SCORE as f64, MAX_SCORE as f64) as i64
        }
        _ => MIN_SCORE,
    }
}

#[cfg(test)]
#[path = "reply_tests.rs"]
mod tests;
