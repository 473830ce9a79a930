// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::io::IsTerminal;

use clap::Parser;
use qrs::Cli;

fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = qrs::env::log_filter()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn main() {
    setup_logging();
    let cli = Cli::parse();
    if let Err(e) = qrs::run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
