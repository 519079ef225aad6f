#![forbid(unsafe_code)]
//! verdict: a local test runner for single-file C and C++ programs
//!
//! Given a target directory, a source file, a fixture prefix and a test count, verdict compiles the source, then
//! for each test `n` copies `<prefix>.<n>.in` to `<prefix>.in`, runs the program, and compares the `<prefix>.out`
//! it wrote against `<prefix>.<n>.out`.
//!
//! ## Layout
//!
//! - `session` - target directory + prefix, owner of the scratch files
//! - `compiler` - extension-based toolchain selection
//! - `process` - the "launch and wait" capability
//! - `fixtures` - fixture loading and output checking
//! - `runner` - the sequential test loop
//! - `report` - console and JSON reporters
//! - `cli` - argument handling and exit codes
//!
//! Fixture naming, the verdict vocabulary and line comparison live in the `verdict_core` crate.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod compiler;
pub mod config;
pub mod errors;
pub mod fixtures;
pub mod process;
pub mod report;
pub mod runner;
pub mod session;
pub mod version;

pub use config::{OutputFormat, RunnerConfig};
pub use errors::{CompileError, FixtureError, ParseCountError, RunError, SessionError};
pub use process::{ProcessRunner, SystemRunner};
pub use report::{ConsoleReporter, JsonReporter, TestReporter};
pub use runner::{run_all, RunSummary};
pub use session::Session;
pub use verdict_core::Verdict;
