// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

use querys_core::{AnswerCache, Database};

use crate::config::{get_cache_path, get_db_path, init_work_dir, Config};
use crate::error::Result;

/// What `querys init` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct InitReport {
    pub work_dir: PathBuf,
    pub created: bool,
    pub records: usize,
}

pub fn run(path: Option<String>) -> Result<()> {
    let target_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };

    let report = run_impl(&target_path)?;
    if report.created {
        println!("Initialized querys store at {}", report.work_dir.display());
    } else {
        println!(
            "Reapplied schema at {} ({} records kept)",
            report.work_dir.display(),
            report.records
        );
    }
    Ok(())
}

/// Create `.querys/` under `target_path` and apply the schema.
///
/// Safe to repeat: an existing config and existing rows are kept.
pub(crate) fn run_impl(target_path: &Path) -> Result<InitReport> {
    let (work_dir, created) = init_work_dir(target_path)?;
    let config = Config::load_with_env(&work_dir)?;

    let db = Database::open(&get_db_path(&work_dir))?;
    let records = db.count()?;
    AnswerCache::open(&get_cache_path(&work_dir), config.cache.ttl_secs)?;

    tracing::debug!(work_dir = %work_dir.display(), created, records, "initialized");
    Ok(InitReport {
        work_dir,
        created,
        records,
    })
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
