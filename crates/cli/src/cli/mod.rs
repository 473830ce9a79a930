// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::{LimitArgs, RecordArgs};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "querys")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A question/answer store backed by SQLite")]
#[command(
    long_about = "A question/answer store backed by SQLite.\n\n\
    Keeps question/answer records in the public.querys table and answers new \
    questions from a cache, the store, or a language model."
)]
pub struct Cli {
    /// Run as if querys was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create .querys/ and apply the schema (safe to repeat)
    Init {
        /// Path to initialize (defaults to current directory)
        path: Option<String>,
    },

    /// Insert one record
    #[command(after_help = "\
Examples:
  querys add -s 5 -t \"What is Rust?\" -a \"A language\"   Insert a full record
  querys add                                            Insert an all-NULL record")]
    Add {
        #[command(flatten)]
        record: RecordArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List records in insertion order
    List {
        #[command(flatten)]
        limits: LimitArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Find the first record with a title, ignoring case
    #[command(arg_required_else_help = true)]
    Find {
        /// Title to look up
        #[arg(value_parser = non_empty_string)]
        title: String,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Update records matching title and body, or insert when none match
    Upsert {
        #[command(flatten)]
        record: RecordArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Answer a question from the cache, the store, or the language model
    #[command(after_help = "\
Examples:
  querys ask \"What is Rust?\"        Ask a question
  querys ask                         Prompt for the question on stdin
  querys ask \"Why?\" -o json         Show source, row and message as JSON")]
    Ask {
        /// Question to ask (prompted for when omitted)
        question: Option<String>,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show namespaces, tables, columns and indexes of the store
    Describe {
        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Check that the store and answer cache respond
    Health,

    /// Output JSON Schema for commands with JSON output
    #[command(subcommand)]
    Schema(SchemaCommand),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Schema output commands.
#[derive(Clone, Copy, Debug, Subcommand)]
pub enum SchemaCommand {
    /// Output JSON Schema for 'querys list' JSON output
    List,
    /// Output JSON Schema for 'querys add', 'find' JSON output
    Record,
    /// Output JSON Schema for 'querys upsert' JSON output
    Upsert,
    /// Output JSON Schema for 'querys ask' JSON output
    Ask,
    /// Output JSON Schema for 'querys describe' JSON output
    Describe,
    /// Output JSON Schema for 'querys health' output
    Health,
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
