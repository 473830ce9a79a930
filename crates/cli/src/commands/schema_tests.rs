// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use crate::schema::{ask, describe, list, RecordJson, UpsertOutputJson};

#[test]
fn schema_list_produces_valid_json() {
    let schema = schemars::schema_for!(list::ListOutputJson);
    let json = serde_json::to_string_pretty(&schema).unwrap();

    assert!(json.contains("\"$schema\""));
    assert!(json.contains("\"ListOutputJson\""));
    assert!(json.contains("\"records\""));
}

#[test]
fn schema_record_has_four_nullable_fields() {
    let schema = schemars::schema_for!(RecordJson);
    let value = serde_json::to_value(&schema).unwrap();

    let props = value["properties"].as_object().unwrap();
    let mut keys: Vec<_> = props.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["answer", "body", "score", "title"]);
    assert!(value.get("required").is_none());
}

#[test]
fn schema_ask_includes_source_enum() {
    let schema = schemars::schema_for!(ask::AskOutputJson);
    let json = serde_json::to_string(&schema).unwrap();

    assert!(json.contains("\"SourceJson\""));
    assert!(json.contains("\"cache\""));
    assert!(json.contains("\"db\""));
    assert!(json.contains("\"llm\""));
}

#[test]
fn schema_describe_uses_type_key() {
    let schema = schemars::schema_for!(describe::DescribeOutputJson);
    let json = serde_json::to_string(&schema).unwrap();

    assert!(json.contains("\"ColumnJson\""));
    assert!(json.contains("\"type\""));
    assert!(json.contains("\"nullable\""));
}

#[test]
fn schema_upsert_includes_outcome() {
    let schema = schemars::schema_for!(UpsertOutputJson);
    let json = serde_json::to_string(&schema).unwrap();

    assert!(json.contains("\"updated\""));
    assert!(json.contains("\"inserted\""));
}

#[test]
fn all_schema_commands_run() {
    use crate::cli::SchemaCommand;
    for cmd in [
        SchemaCommand::List,
        SchemaCommand::Record,
        SchemaCommand::Upsert,
        SchemaCommand::Ask,
        SchemaCommand::Describe,
        SchemaCommand::Health,
    ] {
        super::run(cmd).unwrap();
    }
}
