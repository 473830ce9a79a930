// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are defined here
//! with typed accessor functions. The variable name constants are generated
//! by `build.rs` and live in the [`vars`] submodule.

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns the log filter directive from `QUERYS_LOG`, if set.
pub fn log_filter() -> Option<String> {
    std::env::var(vars::QUERYS_LOG).ok()
}

/// Returns the value of an environment variable if set and not blank.
///
/// Used for the configuration overrides `OLLAMA_HOST`, `OLLAMA_MODEL` and
/// `CACHE_TTL_SECONDS`.
pub fn lookup(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
