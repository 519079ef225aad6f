//! Launch external programs and wait for them.
//!
//! The runner is a capability: callers only rely on "launch, then block until the child exits". Exit status is
//! not reported back, and a launch failure is logged rather than returned. A test whose program never started
//! simply finds a stale or missing `<prefix>.out`, which the comparison step reports.

use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

/// Launch a program and block until it exits.
pub trait ProcessRunner {
    /// Run `program` with `args` split on whitespace, inside `working_dir`.
    ///
    /// The child inherits the standard streams.
    fn run(&self, program: &OsStr, args: &str, working_dir: &Path);
}

/// Runs programs with [`std::process::Command`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &OsStr, args: &str, working_dir: &Path) {
        let program_name = program.to_string_lossy();
        tracing::debug!(program = %program_name, args, dir = %working_dir.display(), "launching process");

        match Command::new(program)
            .args(args.split_whitespace())
            .current_dir(working_dir)
            .status()
        {
            Ok(status) => tracing::debug!(program = %program_name, %status, "process exited"),
            Err(e) => tracing::error!(program = %program_name, error = %e, "child process could not be started"),
        }
    }
}
