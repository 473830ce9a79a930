// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use querys_core::{Database, QueryRecord};

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::schema::RecordJson;

use super::{emit, open_db};

pub fn run(record: QueryRecord, output: OutputFormat) -> Result<()> {
    let db = open_db()?;
    run_impl(&db, &record, output)
}

/// Insert `record` as given. Every field may be absent.
pub(crate) fn run_impl(db: &Database, record: &QueryRecord, output: OutputFormat) -> Result<()> {
    db.insert(record)?;
    tracing::debug!(empty = record.is_empty(), "record added");

    emit(
        output,
        || vec![format!("Added {}", record)],
        || RecordJson::from(record),
    )
}

#[cfg(test)]
#[path = "add_tests.rs"]
mod tests;
