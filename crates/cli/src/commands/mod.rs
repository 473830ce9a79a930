// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod add;
pub mod ask;
pub mod describe;
pub mod find;
pub mod health;
pub mod init;
pub mod list;
pub mod schema;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;
pub mod upsert;

use querys_core::{AnswerCache, Database};

use crate::cli::OutputFormat;
use crate::config::{find_work_dir, get_cache_path, get_db_path, Config};
use crate::error::Result;

/// Everything `querys ask` needs: the store, the answer cache and the config
/// they were opened with.
pub struct Store {
    pub db: Database,
    pub cache: AnswerCache,
    pub config: Config,
}

/// Helper to open the database from the current context.
pub fn open_db() -> Result<Database> {
    let work_dir = find_work_dir()?;
    let db = Database::open(&get_db_path(&work_dir))?;
    Ok(db)
}

/// Helper to open the database, answer cache and config from the current context.
pub fn open_store() -> Result<Store> {
    let work_dir = find_work_dir()?;
    let config = Config::load_with_env(&work_dir)?;
    let db = Database::open(&get_db_path(&work_dir))?;
    let cache = AnswerCache::open(&get_cache_path(&work_dir), config.cache.ttl_secs)?;
    Ok(Store { db, cache, config })
}

/// Print `value` as pretty JSON on stdout.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print either the text lines or the JSON value, per `format`.
pub(crate) fn emit<T: serde::Serialize>(
    format: OutputFormat,
    lines: impl FnOnce() -> Vec<String>,
    json: impl FnOnce() -> T,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for line in lines() {
                println!("{}", line);
            }
            Ok(())
        }
        OutputFormat::Json => print_json(&json()),
    }
}
