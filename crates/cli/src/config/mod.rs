// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing.
//!
//! Every field is optional; a missing `vouch.toml` means defaults.
//! Command-line flags override config values.

pub mod defaults;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::OutputFormat;
use crate::color::ColorMode;
use crate::error::{Error, Result};
use crate::runner::RunnerConfig;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output: OutputConfig,
    pub run: RunConfig,
}

/// `[output]` table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: ColorMode,
}

/// `[run]` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub parallel: bool,
    /// Glob over test names.
    pub filter: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { parallel: defaults::run::PARALLEL, filter: None }
    }
}

impl RunConfig {
    /// Runner settings, with `--serial` and `--filter` taking precedence.
    pub fn runner(&self, serial: bool, filter: Option<&str>) -> RunnerConfig {
        RunnerConfig {
            parallel: self.parallel && !serial,
            filter: filter.map(str::to_string).or_else(|| self.filter.clone()),
        }
    }
}

/// Load and parse a config file.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
    parse(&content, path)
}

/// Parse config content; `path` is only used in error messages.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    toml::from_str(content)
        .map_err(|e| Error::Config { path: path.to_path_buf(), message: e.message().to_string() })
}

/// `vouch.toml` in `dir`, if present.
pub fn discover(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(defaults::CONFIG_FILE);
    path.is_file().then_some(path)
}

/// Resolve the effective config: an explicit path must exist, otherwise
/// `vouch.toml` in `dir` is used when present.
pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Config> {
    match explicit.map(Path::to_path_buf).or_else(|| discover(dir)) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            load(&path)
        }
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
