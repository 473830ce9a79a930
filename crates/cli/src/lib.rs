// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! qrs - the command-line front end of the querys question/answer store.
//!
//! This crate provides the `querys` binary: it finds the `.querys/` work
//! directory, loads its configuration, and runs commands against the store
//! and answer cache from [`querys_core`].
//!
//! # Main Components
//!
//! - [`Config`] - Project configuration (language model endpoint, cache TTL)
//! - [`llm::OllamaClient`] - The language model behind `querys ask`
//! - [`Error`] - Error types for all operations
//!
//! # Initialization
//!
//! Use [`init_work_dir`] to create a new `.querys/` directory, then open the store:
//!
//! ```rust,ignore
//! use qrs::{find_work_dir, get_db_path, init_work_dir, Config};
//! use querys_core::Database;
//!
//! // Initialize a new project
//! let (work_dir, _created) = init_work_dir(Path::new("."))?;
//!
//! // Later, find and open an existing project
//! let work_dir = find_work_dir()?;
//! let config = Config::load_with_env(&work_dir)?;
//! let db = Database::open(&get_db_path(&work_dir))?;
//! ```

mod cli;
mod commands;
mod display;
mod schema;

pub mod config;
pub mod env;
pub mod error;
pub mod llm;

pub use cli::{Cli, Command, LimitArgs, OutputFormat, RecordArgs, SchemaCommand};
pub use config::{find_work_dir, get_cache_path, get_db_path, init_work_dir, Config};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI invocation. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    if let Some(dir) = &cli.directory {
        std::env::set_current_dir(dir)?;
    }

    match cli.command {
        Command::Init { path } => commands::init::run(path),
        Command::Add { record, output } => commands::add::run(record.into(), output),
        Command::List { limits, output } => commands::list::run(limits.limit, output),
        Command::Find { title, output } => commands::find::run(&title, output),
        Command::Upsert { record, output } => commands::upsert::run(record.into(), output),
        Command::Ask { question, output } => commands::ask::run(question, output),
        Command::Describe { output } => commands::describe::run(output),
        Command::Health => commands::health::run(),
        Command::Schema(cmd) => commands::schema::run(cmd),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "querys", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
