// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color handling.

use std::io::IsTerminal;

use serde::Deserialize;
use termcolor::{Color, ColorChoice, ColorSpec};

/// When to emit color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve against the environment: `auto` colors only a terminal
    /// stdout without `NO_COLOR` set.
    pub fn resolve(self) -> ColorChoice {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        match self {
            ColorMode::Always => resolve_color(true, false),
            ColorMode::Never => ColorChoice::Never,
            ColorMode::Auto if std::io::stdout().is_terminal() => resolve_color(false, no_color),
            ColorMode::Auto => ColorChoice::Never,
        }
    }
}

/// `no_color` wins over `force`.
pub fn resolve_color(force: bool, no_color: bool) -> ColorChoice {
    if no_color {
        ColorChoice::Never
    } else if force {
        ColorChoice::Always
    } else {
        ColorChoice::Auto
    }
}

/// Color scheme for text reports.
pub mod scheme {
    use super::*;

    pub fn test_name() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    pub fn fail() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    pub fn pass() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    pub fn path() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    pub fn line_number() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }

    /// Plain text for notes under a failure.
    pub fn note() -> ColorSpec {
        ColorSpec::new()
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
