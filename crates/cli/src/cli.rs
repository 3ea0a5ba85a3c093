// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Deserialize;

use crate::color::ColorMode;
use crate::config::defaults;

/// Evaluate declarative expectation files and report the results
#[derive(Parser)]
#[command(name = "vouch")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = defaults::env::CONFIG)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the tests declared in expectation files
    Run(RunArgs),
}

#[derive(clap::Args)]
pub struct RunArgs {
    /// Expectation files to run
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Output format (overrides config)
    #[arg(short, long)]
    pub output: Option<OutputFormat>,

    /// Color output mode (overrides config)
    #[arg(long, value_name = "WHEN")]
    pub color: Option<ColorMode>,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Only run tests whose name matches this glob
    #[arg(long, value_name = "GLOB")]
    pub filter: Option<String>,

    /// Run every test serially, ignoring parallel opt-in
    #[arg(long)]
    pub serial: bool,
}

impl RunArgs {
    /// Color mode after applying `--no-color`, falling back to `configured`.
    pub fn color_mode(&self, configured: ColorMode) -> ColorMode {
        if self.no_color { ColorMode::Never } else { self.color.unwrap_or(configured) }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
