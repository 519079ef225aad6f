//! Error types for the compile step and the test loop.
//!
//! Every error carries a stable diagnostic code so wrappers can match on the failure kind without parsing text.
//! Launch failures are deliberately absent: a program that cannot be started is logged by the
//! [`ProcessRunner`](crate::process::ProcessRunner) and the run continues.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;
use verdict_core::Stream;

/// The source file cannot be compiled by any known toolchain.
#[derive(Debug, Error, Diagnostic)]
pub enum CompileError {
    #[error("{file} does not have a supported file extension")]
    #[diagnostic(
        code(verdict::compile::unsupported_extension),
        help("supported extensions are .c, .cpp and .cc")
    )]
    UnsupportedExtension { file: String },
}

/// The test count argument is not an integer.
#[derive(Debug, Error, Diagnostic)]
#[error("`{input}` is not a number")]
#[diagnostic(code(verdict::args::test_count), help("pass the number of tests as a whole number, e.g. `10`"))]
pub struct ParseCountError {
    pub input: String,
}

/// The target directory cannot host a test session.
#[derive(Debug, Error, Diagnostic)]
pub enum SessionError {
    #[error("cannot access target directory `{}`", path.display())]
    #[diagnostic(code(verdict::session::directory))]
    Directory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("target `{}` is not a directory", path.display())]
    #[diagnostic(code(verdict::session::not_a_directory))]
    NotADirectory { path: PathBuf },
}

/// A fixture or scratch file could not be opened, read or written.
#[derive(Debug, Error, Diagnostic)]
pub enum FixtureError {
    #[error("could not open test input file `{}`", path.display())]
    #[diagnostic(code(verdict::fixture::test_input), help("each test needs an input fixture named <prefix>.<n>.in"))]
    OpenTestInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not open user input file `{}`", path.display())]
    #[diagnostic(code(verdict::fixture::user_input))]
    OpenUserInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not open user output file `{}`", path.display())]
    #[diagnostic(
        code(verdict::fixture::user_output),
        help("the program under test must write its answer to <prefix>.out")
    )]
    OpenUserOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not open correct output file `{}`", path.display())]
    #[diagnostic(
        code(verdict::fixture::expected_output),
        help("each test needs an output fixture named <prefix>.<n>.out")
    )]
    OpenExpectedOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to copy `{}` to `{}`", from.display(), to.display())]
    #[diagnostic(code(verdict::fixture::copy))]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {stream} output `{}`", path.display())]
    #[diagnostic(code(verdict::fixture::read))]
    Read {
        path: PathBuf,
        stream: Stream,
        #[source]
        source: io::Error,
    },
}

/// A fault that aborts the remaining tests of a run.
#[derive(Debug, Error, Diagnostic)]
pub enum RunError {
    #[error("test #{index}: {source}")]
    #[diagnostic(code(verdict::run::fixture))]
    Fixture {
        index: u32,
        #[source]
        source: FixtureError,
    },
}

impl RunError {
    /// Index of the test that was running when the fault happened.
    pub fn index(&self) -> u32 {
        match self {
            RunError::Fixture { index, .. } => *index,
        }
    }
}
