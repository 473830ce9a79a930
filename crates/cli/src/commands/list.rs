// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use querys_core::{Database, QueryRecord};

use crate::cli::OutputFormat;
use crate::display::format_record_line;
use crate::error::Result;
use crate::schema::list::ListOutputJson;
use crate::schema::RecordJson;

use super::{emit, open_db};

pub fn run(limit: Option<usize>, output: OutputFormat) -> Result<()> {
    let db = open_db()?;
    run_impl(&db, limit, output).map(|_| ())
}

/// Print rows in insertion order, at most `limit` of them.
pub(crate) fn run_impl(
    db: &Database,
    limit: Option<usize>,
    output: OutputFormat,
) -> Result<Vec<QueryRecord>> {
    let records = db.list(limit)?;

    emit(
        output,
        || records.iter().map(format_record_line).collect(),
        || ListOutputJson {
            records: records.iter().map(RecordJson::from).collect(),
            limit,
        },
    )?;
    Ok(records)
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
