// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use std::io;
use std::time::Duration;

use serde_json::json;
use termcolor::WriteColor;

use crate::context::{Outcome, Report};
use crate::runner::SuiteReport;

use super::ReportFormatter;

/// JSON format report formatter.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn write(&self, out: &mut dyn WriteColor, report: &SuiteReport) -> io::Result<()> {
        let output = json!({
            "generated": chrono::Utc::now().to_rfc3339(),
            "passed": report.passed(),
            "summary": {
                "passed": report.passed_count(),
                "failed": report.failed_count(),
                "filtered": report.filtered,
            },
            "duration_ms": millis(report.duration),
            "tests": report.tests.iter().map(test_json).collect::<Vec<_>>(),
        });
        serde_json::to_writer_pretty(&mut *out, &output)?;
        writeln!(out)
    }
}

fn test_json(test: &Report) -> serde_json::Value {
    json!({
        "name": test.id.name(),
        "path": test.id.to_string(),
        "passed": test.passed,
        "halted": test.halted,
        "duration_ms": millis(test.duration),
        "failures": test.failures.iter().map(failure_json).collect::<Vec<_>>(),
        "children": test.children.iter().map(test_json).collect::<Vec<_>>(),
    })
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn failure_json(failure: &Outcome) -> serde_json::Value {
    let mut value = json!({
        "message": failure.diagnostic(),
        "halting": failure.halting(),
    });
    if let (Some(location), Some(map)) = (failure.location(), value.as_object_mut()) {
        map.insert("file".to_string(), json!(location.file));
        map.insert("line".to_string(), json!(location.line));
        map.insert("column".to_string(), json!(location.column));
    }
    value
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
