// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use querys_core::{Database, QueryRecord};

use crate::cli::OutputFormat;
use crate::display::format_record_details;
use crate::error::{Error, Result};
use crate::schema::RecordJson;

use super::{emit, open_db};

pub fn run(title: &str, output: OutputFormat) -> Result<()> {
    let db = open_db()?;
    run_impl(&db, title, output).map(|_| ())
}

/// Print the first record titled `title`, ignoring case.
pub(crate) fn run_impl(db: &Database, title: &str, output: OutputFormat) -> Result<QueryRecord> {
    let record = db
        .find_by_title(title)?
        .ok_or_else(|| Error::RecordNotFound(title.to_string()))?;

    emit(
        output,
        || format_record_details(&record),
        || RecordJson::from(&record),
    )?;
    Ok(record)
}

#[cfg(test)]
#[path = "find_tests.rs"]
mod tests;
