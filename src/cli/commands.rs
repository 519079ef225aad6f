//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::path::Path;

use miette::{Diagnostic, Report};

use crate::compiler::{Toolchain, compile};
use crate::config::{OutputFormat, RunnerConfig};
use crate::errors::ParseCountError;
use crate::process::SystemRunner;
use crate::report::{ConsoleReporter, JsonReporter, TestReporter};
use crate::runner::run_all;
use crate::session::Session;

use super::{Cli, CliError, CliResult, ExitCode};

/// Build the runner configuration from parsed arguments.
pub fn config_from_cli(cli: &Cli) -> RunnerConfig {
    RunnerConfig::new()
        .with_c_compiler(cli.cc.as_str())
        .with_cpp_compiler(cli.cxx.as_str())
        .with_compile(!cli.no_compile)
        .with_format(cli.format)
}

/// Parse the test count argument.
///
/// Negative counts are accepted and run no tests. Empty input and a bare `-` are rejected.
///
/// ## Errors
/// - [`ParseCountError`] if `input` is not an integer or exceeds `u32::MAX`.
pub fn parse_test_count(input: &str) -> Result<u32, ParseCountError> {
    let invalid = || ParseCountError {
        input: input.to_string(),
    };
    let count: i64 = input.parse().map_err(|_| invalid())?;
    u32::try_from(count.max(0)).map_err(|_| invalid())
}

/// Render a diagnostic the way it is shown on stderr.
pub fn render<E: Diagnostic + Send + Sync + 'static>(err: E) -> String {
    format!("{:?}", Report::new(err))
}

/// Compile `source` in `target_dir` and run `count` tests against it.
///
/// Steps run in the order a user sees their errors: source extension, compilation, test count, then the loop.
/// A valid source is compiled even when the count turns out to be malformed.
///
/// Exit codes:
/// - `0`: all tests ran (mismatches included), or the source extension / count was rejected.
/// - `1`: a fault aborted the test loop. An unusable target directory counts as one as soon as there is a test
///   to run.
pub fn test_program(
    target_dir: &Path,
    source: &str,
    prefix: &str,
    count: &str,
    config: &RunnerConfig,
) -> CliResult<ExitCode> {
    let toolchain = Toolchain::for_source(source).map_err(|e| CliError::reported(render(e)))?;
    let session = Session::open(target_dir, prefix);
    let runner = SystemRunner;

    match &session {
        Ok(session) if config.compile => {
            compile(session, source, config, &runner).map_err(|e| CliError::reported(render(e)))?;
        }
        Ok(_) => tracing::info!(executable = %config.executable_name, "skipping compilation"),
        Err(e) => tracing::warn!(?toolchain, error = %e, "target directory unusable, nothing compiled"),
    }

    let test_count = parse_test_count(count).map_err(|e| CliError::reported(render(e)))?;

    let session = match session {
        Ok(session) => session,
        Err(_) if test_count == 0 => return Ok(ExitCode::SUCCESS),
        Err(e) => return Err(loop_fault(render(e))),
    };

    let mut reporter: Box<dyn TestReporter> = match config.format {
        OutputFormat::Text => Box::new(ConsoleReporter::stdout()),
        OutputFormat::Json => Box::new(JsonReporter::stdout()),
    };

    run_all(&session, test_count, config, &runner, reporter.as_mut())
        .map(|_| ExitCode::SUCCESS)
        .map_err(|e| loop_fault(render(e)))
}

fn loop_fault(rendered: String) -> CliError {
    CliError::failure(format!("An error occurred during testing\n{rendered}"))
}
