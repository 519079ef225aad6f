//! Test loop: load fixture, run the program, check its output, report.
//!
//! Tests run strictly in order `1..=count`, one at a time. Each step blocks until the previous one is done, which
//! is what keeps the shared scratch files consistent: the input copy is complete before the program starts, and the
//! program has exited before its output is read.
//!
//! A verdict of any kind is a normal outcome. A fixture fault (missing file, unreadable output) aborts the
//! remaining tests; results already reported stay reported.

use std::path::Path;
use std::time::Instant;

use verdict_core::Verdict;

use crate::config::RunnerConfig;
use crate::errors::RunError;
use crate::fixtures::{check, copy_test};
use crate::process::ProcessRunner;
use crate::report::TestReporter;
use crate::session::Session;

/// Counts for a completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: u32,
    pub passed: u32,
    pub failed: u32,
}

/// Run tests `1..=test_count` against the compiled program.
///
/// ## Parameters
/// - `session`: directory and prefix the fixtures live under.
/// - `test_count`: number of tests; `0` runs nothing.
/// - `config`: supplies the executable name.
/// - `runner`: launches the program under test.
/// - `reporter`: receives each verdict as soon as it is known.
///
/// ## Errors
/// - [`RunError::Fixture`] for the first fixture fault; no further tests run.
pub fn run_all(
    session: &Session,
    test_count: u32,
    config: &RunnerConfig,
    runner: &dyn ProcessRunner,
    reporter: &mut dyn TestReporter,
) -> Result<RunSummary, RunError> {
    let executable = session.resolve(&config.executable_name);
    let start = Instant::now();
    let mut summary = RunSummary::default();

    tracing::debug!(
        prefix = session.prefix(),
        tests = test_count,
        timeout_ms = config.test_timeout.as_millis() as u64,
        "starting test run"
    );
    reporter.on_run_start(test_count);

    for index in 1..=test_count {
        let verdict = match run_one(session, index, &executable, runner) {
            Ok(verdict) => verdict,
            Err(e) => {
                tracing::error!(test = index, error = %e, "aborting test run");
                reporter.on_run_aborted(&e);
                return Err(e);
            }
        };

        summary.total += 1;
        if verdict.is_correct() {
            summary.passed += 1;
        } else {
            summary.failed += 1;
        }
        reporter.on_test_complete(index, &verdict);
    }

    tracing::info!(
        passed = summary.passed,
        failed = summary.failed,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "test run complete"
    );
    reporter.on_run_complete(&summary);
    Ok(summary)
}

fn run_one(
    session: &Session,
    index: u32,
    executable: &Path,
    runner: &dyn ProcessRunner,
) -> Result<Verdict, RunError> {
    let fault = |source| RunError::Fixture { index, source };

    tracing::debug!(test = index, "loading fixture");
    copy_test(session, index).map_err(fault)?;

    runner.run(executable.as_os_str(), "", session.dir());

    let verdict = check(session, index).map_err(fault)?;
    tracing::debug!(test = index, status = verdict.status(), "checked");
    Ok(verdict)
}
