// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.

use std::io;

use termcolor::WriteColor;

use crate::color::scheme;
use crate::context::{Outcome, Report};
use crate::runner::SuiteReport;

use super::ReportFormatter;

/// Text format report formatter.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn write(&self, out: &mut dyn WriteColor, report: &SuiteReport) -> io::Result<()> {
        for test in &report.tests {
            write_test(out, test)?;
        }
        if !report.tests.is_empty() {
            writeln!(out)?;
        }
        write_summary(out, report)
    }
}

fn write_test(out: &mut dyn WriteColor, test: &Report) -> io::Result<()> {
    let indent = "  ".repeat(test.id.depth());
    write!(out, "{indent}")?;
    if test.passed {
        out.set_color(&scheme::pass())?;
        write!(out, "PASS")?;
    } else {
        out.set_color(&scheme::fail())?;
        write!(out, "FAIL")?;
    }
    out.set_color(&scheme::test_name())?;
    write!(out, " {}", test.id.name())?;
    out.reset()?;
    writeln!(out)?;

    for failure in &test.failures {
        write_failure(out, &indent, failure)?;
    }
    if test.halted {
        out.set_color(&scheme::note())?;
        writeln!(out, "{indent}  note: statements after the halting failure were not executed")?;
        out.reset()?;
    }
    for child in &test.children {
        write_test(out, child)?;
    }
    Ok(())
}

fn write_failure(out: &mut dyn WriteColor, indent: &str, failure: &Outcome) -> io::Result<()> {
    write!(out, "{indent}  ")?;
    if let Some(location) = failure.location() {
        out.set_color(&scheme::path())?;
        write!(out, "{}", location.file)?;
        out.reset()?;
        write!(out, ":")?;
        out.set_color(&scheme::line_number())?;
        if location.column == 0 {
            write!(out, "{}", location.line)?;
        } else {
            write!(out, "{}:{}", location.line, location.column)?;
        }
        out.reset()?;
        write!(out, ": ")?;
    }
    writeln!(out, "{}", failure.diagnostic().unwrap_or_default())
}

fn write_summary(out: &mut dyn WriteColor, report: &SuiteReport) -> io::Result<()> {
    let failed = report.failed_count();
    out.set_color(&if failed == 0 { scheme::pass() } else { scheme::fail() })?;
    write!(out, "{} passed, {} failed", report.passed_count(), failed)?;
    out.reset()?;
    if report.filtered > 0 {
        write!(out, ", {} filtered out", report.filtered)?;
    }
    writeln!(out)
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
