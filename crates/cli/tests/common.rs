// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// The binary, pointed at a language model address nothing listens on.
pub fn querys() -> Command {
    let mut cmd = cargo_bin_cmd!("querys");
    cmd.env("OLLAMA_HOST", "http://127.0.0.1:1")
        .env_remove("OLLAMA_MODEL")
        .env_remove("CACHE_TTL_SECONDS")
        .env_remove("QUERYS_LOG");
    cmd
}

/// Helper to create an initialized temp directory
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    querys()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

/// Helper to add a full record
pub fn add_record(temp: &TempDir, score: i64, title: &str, body: &str, answer: &str) {
    querys()
        .args(["add", "--score", &score.to_string()])
        .args(["--title", title, "--body", body, "--answer", answer])
        .current_dir(temp.path())
        .assert()
        .success();
}

/// Run a command with `-o json` and parse its stdout.
pub fn json_output(temp: &TempDir, args: &[&str]) -> serde_json::Value {
    let output = querys()
        .args(args)
        .args(["-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}
