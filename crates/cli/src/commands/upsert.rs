// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use querys_core::{Database, QueryRecord, Upserted};

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::schema::{RecordJson, UpsertOutcome, UpsertOutputJson};

use super::{emit, open_db};

pub fn run(record: QueryRecord, output: OutputFormat) -> Result<()> {
    let db = open_db()?;
    run_impl(&db, &record, output).map(|_| ())
}

/// Update rows matching `record`'s title and body, or insert it.
pub(crate) fn run_impl(
    db: &Database,
    record: &QueryRecord,
    output: OutputFormat,
) -> Result<Upserted> {
    let outcome = db.upsert(record)?;

    let (summary, json_outcome, rows) = match outcome {
        Upserted::Updated(n) => (
            format!("Updated {} record(s): {}", n, record),
            UpsertOutcome::Updated,
            n,
        ),
        Upserted::Inserted => (format!("Inserted {}", record), UpsertOutcome::Inserted, 1),
    };

    emit(
        output,
        || vec![summary],
        || UpsertOutputJson {
            outcome: json_outcome,
            rows,
            record: RecordJson::from(record),
        },
    )?;
    Ok(outcome)
}

#[cfg(test)]
#[path = "upsert_tests.rs"]
mod tests;
