// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use querys_core::{AskResponse, Layout, QueryRecord};

/// Maximum line width for wrapped text content (excluding 4-space indent).
const WRAP_WIDTH: usize = 96;

/// Wrap text at word boundaries if it's a single line.
///
/// - If content contains newlines: return as-is (preserve user formatting)
/// - If content is single line >width: wrap at word boundaries
/// - If content is single line <=width: return as-is
pub fn wrap_text(content: &str, width: usize) -> String {
    if content.contains('\n') || content.len() <= width {
        return content.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();

    for word in content.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines.join("\n")
}

/// Format a single record line for list output.
pub fn format_record_line(record: &QueryRecord) -> String {
    format!("- {}", record)
}

/// Format a record with its body and answer indented beneath the title line.
///
/// Output format:
/// ```text
/// [5] What is Rust?
///   Body:
///     Optional context
///   Answer:
///     A systems programming language.
/// ```
pub fn format_record_details(record: &QueryRecord) -> Vec<String> {
    let mut lines = vec![record.to_string()];

    for (label, text) in [("Body", &record.body), ("Answer", &record.answer)] {
        if let Some(text) = text {
            lines.push(format!("  {}:", label));
            for line in wrap_text(text, WRAP_WIDTH).lines() {
                lines.push(format!("    {}", line));
            }
        }
    }

    lines
}

/// Text output of `querys ask`.
pub fn format_ask(response: &AskResponse) -> String {
    let score = response
        .row
        .score
        .map(|s| s.to_string())
        .unwrap_or_default();
    format!(
        "Score: {}\nAnswer: {}",
        score,
        response.row.answer.as_deref().unwrap_or("")
    )
}

/// Text output of `querys describe`.
pub fn format_layout(layout: &Layout) -> Vec<String> {
    let mut lines = Vec::new();

    for namespace in &layout.namespaces {
        lines.push(format!("Namespace: {}", namespace));
    }
    for table in &layout.tables {
        lines.push(format!("Table: {}", table));
    }

    lines.push("Columns:".to_string());
    for column in &layout.columns {
        let mut line = format!("  {} {}", column.name, column.decl_type);
        if column.not_null {
            line.push_str(" NOT NULL");
        }
        if column.primary_key {
            line.push_str(" PRIMARY KEY");
        }
        lines.push(line);
    }

    if layout.indexes.is_empty() {
        lines.push("Indexes: (none)".to_string());
    } else {
        lines.push("Indexes:".to_string());
        for index in &layout.indexes {
            lines.push(format!(
                "  {} on {}({})",
                index.name,
                index.table,
                index.columns.join(", ")
            ));
        }
    }

    lines
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
