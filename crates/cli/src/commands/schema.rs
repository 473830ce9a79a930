// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Outputs JSON Schema specifications for commands that support JSON output.

use crate::cli::SchemaCommand;
use crate::error::Result;
use crate::schema::{ask, describe, list, HealthJson, RecordJson, UpsertOutputJson};
use schemars::schema_for;

/// Run the schema command.
pub fn run(cmd: SchemaCommand) -> Result<()> {
    let schema = match cmd {
        SchemaCommand::List => schema_for!(list::ListOutputJson),
        SchemaCommand::Record => schema_for!(RecordJson),
        SchemaCommand::Upsert => schema_for!(UpsertOutputJson),
        SchemaCommand::Ask => schema_for!(ask::AskOutputJson),
        SchemaCommand::Describe => schema_for!(describe::DescribeOutputJson),
        SchemaCommand::Health => schema_for!(HealthJson),
    };

    let json = serde_json::to_string_pretty(&schema)?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
