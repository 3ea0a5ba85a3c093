// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suite report output.
//!
//! Formats a [`SuiteReport`] as human-readable text or JSON.

mod json;
mod text;

use std::io;

use termcolor::{NoColor, WriteColor};

use crate::cli::OutputFormat;
use crate::runner::SuiteReport;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Trait for formatting suite results into various output formats.
pub trait ReportFormatter {
    /// Write the report. Color is applied only if `out` supports it.
    fn write(&self, out: &mut dyn WriteColor, report: &SuiteReport) -> io::Result<()>;

    /// Render the report to an uncolored string.
    fn format(&self, report: &SuiteReport) -> io::Result<String> {
        let mut out = NoColor::new(Vec::new());
        self.write(&mut out, report)?;
        Ok(String::from_utf8_lossy(&out.into_inner()).into_owned())
    }
}

/// Formatter for an output format.
pub fn formatter(format: OutputFormat) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Write `report` in `format` to `out`.
pub fn write_report(
    format: OutputFormat,
    report: &SuiteReport,
    out: &mut dyn WriteColor,
) -> io::Result<()> {
    formatter(format).write(out, report)?;
    out.flush()
}
