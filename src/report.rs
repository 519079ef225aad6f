//! Test reporting
//!
//! ## TestReporter Trait
//!
//! The test loop reports through the `TestReporter` trait so the output format is independent of execution.
//! [`ConsoleReporter`] writes the classic `Test #<n>: <verdict>` text, [`JsonReporter`] writes one JSON object
//! per line. Both write to any `io::Write`, which keeps them testable with an in-memory buffer.

use std::io::{self, Write};

use serde_json::json;
use verdict_core::Verdict;

use crate::errors::RunError;
use crate::runner::RunSummary;

/// Trait for reporting test execution results.
pub trait TestReporter {
    /// Called once before the first test runs
    fn on_run_start(&mut self, _test_count: u32) {}

    /// Called after each test has been checked
    fn on_test_complete(&mut self, index: u32, verdict: &Verdict);

    /// Called when a fault aborts the remaining tests
    fn on_run_aborted(&mut self, _error: &RunError) {}

    /// Called when every test has run
    fn on_run_complete(&mut self, _summary: &RunSummary) {}
}

/// Format the report line of one test (`Test #<n>: <verdict>`).
pub fn report_line(index: u32, verdict: &Verdict) -> String {
    format!("Test #{index}: {verdict}")
}

/// Write `text` as one line and flush, logging a failure instead of aborting the run.
///
/// ## Returns
/// - (`bool`): `false` if the write or the flush failed.
fn write_line<W: Write>(out: &mut W, text: &str) -> bool {
    match writeln!(out, "{text}").and_then(|()| out.flush()) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "failed to write report");
            false
        }
    }
}

/// Text reporter
pub struct ConsoleReporter<W: Write> {
    out: W,
    failed_writes: usize,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, failed_writes: 0 }
    }

    /// Number of reports that could not be written.
    pub fn failed_writes(&self) -> usize {
        self.failed_writes
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TestReporter for ConsoleReporter<W> {
    fn on_test_complete(&mut self, index: u32, verdict: &Verdict) {
        // Flushed per test so results survive an abort later in the run.
        if !write_line(&mut self.out, &report_line(index, verdict)) {
            self.failed_writes += 1;
        }
    }
}

/// JSON Lines reporter
pub struct JsonReporter<W: Write> {
    out: W,
    failed_writes: usize,
}

impl JsonReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, failed_writes: 0 }
    }

    /// Number of JSON objects that could not be written.
    pub fn failed_writes(&self) -> usize {
        self.failed_writes
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, value: serde_json::Value) {
        if !write_line(&mut self.out, &value.to_string()) {
            self.failed_writes += 1;
        }
    }
}

impl<W: Write> TestReporter for JsonReporter<W> {
    fn on_test_complete(&mut self, index: u32, verdict: &Verdict) {
        let value = match verdict {
            Verdict::Mismatch {
                line_number,
                user_line,
                expected_line,
            } => json!({
                "test": index,
                "status": verdict.status(),
                "line": line_number,
                "user_line": user_line,
                "expected_line": expected_line,
            }),
            _ => json!({ "test": index, "status": verdict.status() }),
        };
        self.emit(value);
    }

    fn on_run_aborted(&mut self, error: &RunError) {
        self.emit(json!({
            "test": error.index(),
            "status": "aborted",
            "error": error.to_string(),
        }));
    }

    fn on_run_complete(&mut self, summary: &RunSummary) {
        self.emit(json!({
            "summary": {
                "total": summary.total,
                "passed": summary.passed,
                "failed": summary.failed,
            }
        }));
    }
}
