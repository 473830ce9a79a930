// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.querys/config.toml` and includes:
//! - `llm`: where the language model lives and how long to wait for it
//! - `cache`: how long answered questions stay cached
//!
//! `OLLAMA_HOST`, `OLLAMA_MODEL` and `CACHE_TTL_SECONDS` override the file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::env;
use crate::error::{Error, Result};

const WORK_DIR_NAME: &str = ".querys";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "public.db";
const CACHE_FILE_NAME: &str = "cache.db";
const GITIGNORE_FILE_NAME: &str = ".gitignore";

/// Project configuration stored in `.querys/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Language model endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Base URL of the Ollama server (default: "http://localhost:11434").
    #[serde(default = "default_host")]
    pub host: String,
    /// Model name passed to Ollama (default: "llama3").
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds (default: 120).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Answer cache settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Time-to-live for cached answers in seconds (default: 604800, seven days).
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

fn default_host() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "llama3".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_ttl_secs() -> u64 {
    querys_core::DEFAULT_TTL_SECS
}

impl Default for LlmConfig {
    fn default() -> Self {
        LlmConfig {
            host: default_host(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        CacheConfig {
            ttl_secs: default_ttl_secs(),
        }
    }
}

impl Config {
    /// Loads configuration from the given `.querys/` directory.
    ///
    /// A missing file yields the defaults. Environment overrides are not applied.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Loads configuration and applies environment overrides.
    pub fn load_with_env(work_dir: &Path) -> Result<Self> {
        let mut config = Config::load(work_dir)?;
        config.apply_overrides(env::lookup)?;
        Ok(config)
    }

    /// Applies overrides from `lookup`, which maps an environment variable
    /// name to its value.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(env::vars::OLLAMA_HOST) {
            self.llm.host = host;
        }
        if let Some(model) = lookup(env::vars::OLLAMA_MODEL) {
            self.llm.model = model;
        }
        if let Some(ttl) = lookup(env::vars::CACHE_TTL_SECONDS) {
            self.cache.ttl_secs = ttl.trim().parse().map_err(|_| {
                Error::Config(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    env::vars::CACHE_TTL_SECONDS,
                    ttl
                ))
            })?;
        }
        Ok(())
    }

    /// Saves configuration to the given `.querys/` directory.
    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }
}

/// Find the .querys directory by walking up from `start`
pub fn find_work_dir_from(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Ok(work_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Find the .querys directory by walking up from the current directory
pub fn find_work_dir() -> Result<PathBuf> {
    find_work_dir_from(&std::env::current_dir()?)
}

/// Path of the `public` namespace file.
pub fn get_db_path(work_dir: &Path) -> PathBuf {
    work_dir.join(DB_FILE_NAME)
}

/// Path of the answer cache file.
pub fn get_cache_path(work_dir: &Path) -> PathBuf {
    work_dir.join(CACHE_FILE_NAME)
}

/// Create the .querys directory at the given path if missing.
///
/// An existing config is left as is; a default one is written otherwise.
/// Returns the work dir and whether a config was written.
pub fn init_work_dir(path: &Path) -> Result<(PathBuf, bool)> {
    let work_dir = path.join(WORK_DIR_NAME);
    fs::create_dir_all(&work_dir)?;

    let config_path = work_dir.join(CONFIG_FILE_NAME);
    let created = !config_path.exists();
    if created {
        Config::default().save(&work_dir)?;
    }

    let gitignore_path = work_dir.join(GITIGNORE_FILE_NAME);
    if !gitignore_path.exists() {
        fs::write(
            &gitignore_path,
            "# Store and cache\npublic.db*\ncache.db*\n",
        )?;
    }

    Ok((work_dir, created))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
