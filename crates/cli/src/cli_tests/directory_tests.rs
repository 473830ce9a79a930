// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing tests for the global `-C` flag and `init`.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    before = { &["querys", "-C", "/tmp/x", "list"] },
    after = { &["querys", "list", "-C", "/tmp/x"] },
    long = { &["querys", "--directory", "/tmp/x", "list"] },
)]
fn test_directory_flag(args: &[&str]) {
    let cli = Cli::try_parse_from(args).unwrap();
    assert_eq!(cli.directory.as_deref(), Some("/tmp/x"));
}

#[test]
fn test_directory_defaults_to_none() {
    let cli = Cli::try_parse_from(["querys", "health"]).unwrap();
    assert!(cli.directory.is_none());
    assert!(matches!(cli.command, Command::Health));
}

#[parameterized(
    no_path = { &["querys", "init"], None },
    with_path = { &["querys", "init", "some/dir"], Some("some/dir") },
)]
fn test_init_path(args: &[&str], path: Option<&str>) {
    let cli = Cli::try_parse_from(args).unwrap();
    let Command::Init { path: p } = cli.command else {
        unreachable!("expected Init command");
    };
    assert_eq!(p.as_deref(), path);
}

#[test]
fn test_cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
