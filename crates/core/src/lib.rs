// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! querys-core: storage and question answering for the querys store
//!
//! This crate declares the `public.querys` relation, provides the SQLite
//! record store and answer cache, and implements the cache → store → model
//! question pipeline used by the `querys` CLI.

pub mod ask;
pub mod cache;
pub mod db;
pub mod error;
pub mod question;
pub mod record;
pub mod reply;
pub mod schema;

pub use ask::{ask, Answerer, AskResponse, Source};
pub use cache::{AnswerCache, ClockSource, SystemClock, DEFAULT_TTL_SECS};
pub use db::{Database, Upserted};
pub use error::{Error, Result};
pub use question::{cache_key, normalize_question};
pub use record::QueryRecord;
pub use reply::{build_prompt, parse_reply};
pub use schema::{Column, IndexInfo, Layout, NamespaceLocation};
