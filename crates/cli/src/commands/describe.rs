// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use querys_core::{Database, Layout};

use crate::cli::OutputFormat;
use crate::display::format_layout;
use crate::error::Result;
use crate::schema::describe::DescribeOutputJson;

use super::{emit, open_db};

pub fn run(output: OutputFormat) -> Result<()> {
    let db = open_db()?;
    run_impl(&db, output).map(|_| ())
}

/// Print the namespaces, tables, columns and indexes the store reports.
pub(crate) fn run_impl(db: &Database, output: OutputFormat) -> Result<Layout> {
    let layout = db.describe()?;

    emit(
        output,
        || format_layout(&layout),
        || DescribeOutputJson::from(&layout),
    )?;
    Ok(layout)
}

#[cfg(test)]
#[path = "describe_tests.rs"]
mod tests;
