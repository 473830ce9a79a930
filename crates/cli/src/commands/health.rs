// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use querys_core::{AnswerCache, ClockSource, Database};

use crate::error::Result;
use crate::schema::HealthJson;

use super::{open_store, print_json};

/// Print `{"ok": ...}`. An unreachable store is reported, not raised.
pub fn run() -> Result<()> {
    let ok = match open_store() {
        Ok(store) => check(&store.db, &store.cache),
        Err(e) => {
            tracing::warn!(error = %e, "health check could not open store");
            false
        }
    };
    print_json(&HealthJson { ok })
}

/// Whether both the store and the cache answer a trivial query.
pub(crate) fn check<C: ClockSource>(db: &Database, cache: &AnswerCache<C>) -> bool {
    let store_ok = db
        .ping()
        .map_err(|e| tracing::warn!(error = %e, "store ping failed"))
        .is_ok();
    let cache_ok = cache
        .ping()
        .map_err(|e| tracing::warn!(error = %e, "cache ping failed"))
        .is_ok();
    store_ok && cache_ok
}

#[cfg(test)]
#[path = "health_tests.rs"]
mod tests;
