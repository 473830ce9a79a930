// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ollama client for answering questions the store has never seen.

use std::time::Duration;

use querys_core::{build_prompt, parse_reply, Answerer, QueryRecord};
use serde::Serialize;
use serde_json::Value;

use crate::config::LlmConfig;

/// Body of `POST /api/generate`.
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    stream: bool,
}

/// Blocking client for a single Ollama model.
pub struct OllamaClient {
    agent: ureq::Agent,
    url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(config: &LlmConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build();
        OllamaClient {
            agent,
            url: generate_url(&config.host),
            model: config.model.clone(),
        }
    }
}

/// The generate endpoint under `host`, tolerating a trailing slash.
pub fn generate_url(host: &str) -> String {
    format!("{}/api/generate", host.trim_end_matches('/'))
}

/// The model's text from a generate response body.
fn response_text(body: &Value) -> String {
    match body.get("response") {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

impl Answerer for OllamaClient {
    fn answer(&self, question: &str) -> querys_core::Result<QueryRecord> {
        let request = GenerateRequest {
            model: &self.model,
            prompt: build_prompt(question),
            stream: false,
        };
        tracing::debug!(url = %self.url, model = %self.model, "asking model");

        let response = match self.agent.post(&self.url).send_json(&request) {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                let text = response.into_string().unwrap_or_default();
                return Err(querys_core::Error::Llm(format!(
                    "ollama returned {code}: {text}"
                )));
            }
            Err(e) => {
                return Err(querys_core::Error::Llm(format!(
                    "request to {} failed: {e}",
                    self.url
                )))
            }
        };

        let body: Value = response.into_json().map_err(|e| {
            querys_core::Error::Llm(format!("unreadable ollama response: {e}"))
        })?;
        parse_reply(&response_text(&body), question)
    }
}

#[cfg(test)]
#[path = "llm_tests.rs"]
mod tests;
