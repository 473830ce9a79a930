// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` to reduce duplication
//! across commands that write or list records.

use clap::Args;
use querys_core::QueryRecord;

/// The four record fields. Any flag left out is stored as NULL.
#[derive(Args, Clone, Debug, Default)]
pub struct RecordArgs {
    /// Answer quality score
    #[arg(long, short, allow_negative_numbers = true)]
    pub score: Option<i64>,

    /// Question text
    #[arg(long, short)]
    pub title: Option<String>,

    /// Extra question context
    #[arg(long, short)]
    pub body: Option<String>,

    /// Answer text
    #[arg(long, short)]
    pub answer: Option<String>,
}

impl From<RecordArgs> for QueryRecord {
    fn from(args: RecordArgs) -> Self {
        QueryRecord {
            score: args.score,
            title: args.title,
            body: args.body,
            answer: args.answer,
        }
    }
}

/// Limit arguments for listing.
#[derive(Args, Clone, Debug, Default)]
pub struct LimitArgs {
    /// Maximum number of results
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}
