//! CLI module for verdict
//!
//! ## Usage
//!
//! ```text
//! verdict <TARGET_DIR> <SOURCE> <PREFIX> <COUNT> [--cc <CC>] [--cxx <CXX>] [--format text|json] [--no-compile]
//! ```
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros. An argument list of the wrong shape is not an error:
//! the usage text is printed to stdout and the process exits with 0.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use clap::error::ErrorKind;

use crate::config::OutputFormat;
use crate::version::VERDICT_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
/// Some reported errors (bad test count, unsupported source) still exit with 0.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Create an error that is reported but exits with 0.
    pub fn reported(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::SUCCESS)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Printed to stdout when the positional arguments are missing or extra ones are given.
pub const USAGE: &str = "verdict expects these arguments:
 - [path from this directory to destination]
 - [source name]
 - [test-files name]
 - [number of tests]
";

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Compile a single-file program and check it against numbered fixtures
#[derive(Parser, Debug)]
#[command(name = "verdict")]
#[command(version = VERDICT_VERSION)]
#[command(about = "Compile a single-file program and check it against numbered fixtures", long_about = None)]
pub struct Cli {
    /// Directory holding the source file and the fixtures
    #[arg(value_name = "TARGET_DIR")]
    pub target_dir: PathBuf,

    /// Source file name, relative to TARGET_DIR (.c, .cpp or .cc)
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Test-file prefix: fixtures are <PREFIX>.<n>.in / <PREFIX>.<n>.out
    #[arg(value_name = "PREFIX")]
    pub prefix: String,

    /// Number of tests to run
    #[arg(value_name = "COUNT", allow_hyphen_values = true)]
    pub test_count: String,

    /// C compiler
    #[arg(long, env = "CC", default_value = "gcc")]
    pub cc: String,

    /// C++ compiler
    #[arg(long, env = "CXX", default_value = "g++")]
    pub cxx: String,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Run the existing executable without compiling first
    #[arg(long)]
    pub no_compile: bool,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                let _ = e.print();
            } else {
                tracing::debug!(error = %e, "invalid invocation");
                print!("{USAGE}");
            }
            return;
        }
    };

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = commands::config_from_cli(&cli);
    commands::test_program(&cli.target_dir, &cli.source, &cli.prefix, &cli.test_count, &config)
}

// ============================================================================
// Tests
// ============================================================================
