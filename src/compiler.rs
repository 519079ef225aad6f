//! Compile the program under test.
//!
//! The toolchain is picked from the source file extension. The compiler's exit status is not inspected: when
//! compilation fails the test loop still runs whatever executable is (or is not) on disk, and the resulting
//! verdicts show the failure.

use std::ffi::OsStr;

use crate::config::RunnerConfig;
use crate::errors::CompileError;
use crate::process::ProcessRunner;
use crate::session::Session;

/// Warning policy shared by both toolchains.
const WARNING_FLAGS: &str = "-Wall -Werror";

/// Supported source languages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toolchain {
    /// `.c` sources
    C,
    /// `.cpp` and `.cc` sources
    Cpp,
}

impl Toolchain {
    /// Pick the toolchain for a source file name.
    ///
    /// ## Errors
    /// - [`CompileError::UnsupportedExtension`] for anything other than `.c`, `.cpp` or `.cc`.
    pub fn for_source(file: &str) -> Result<Self, CompileError> {
        if file.ends_with(".c") {
            Ok(Toolchain::C)
        } else if file.ends_with(".cpp") || file.ends_with(".cc") {
            Ok(Toolchain::Cpp)
        } else {
            Err(CompileError::UnsupportedExtension { file: file.to_string() })
        }
    }

    /// Compiler program for this toolchain.
    pub fn program<'a>(&self, config: &'a RunnerConfig) -> &'a str {
        match self {
            Toolchain::C => &config.c_compiler,
            Toolchain::Cpp => &config.cpp_compiler,
        }
    }

    /// Full argument string: flags, source, and `-o <executable>`.
    pub fn arguments(&self, file: &str, config: &RunnerConfig) -> String {
        match self {
            Toolchain::C => format!("{WARNING_FLAGS} {file} -o {}", config.executable_name),
            Toolchain::Cpp => format!(
                "{WARNING_FLAGS} -std={} {file} -o {}",
                config.cpp_standard, config.executable_name
            ),
        }
    }
}

/// Compile `file` inside the session directory.
///
/// Blocks until the compiler exits.
///
/// ## Errors
/// - [`CompileError::UnsupportedExtension`]; no process is launched in that case.
pub fn compile(
    session: &Session,
    file: &str,
    config: &RunnerConfig,
    runner: &dyn ProcessRunner,
) -> Result<Toolchain, CompileError> {
    let toolchain = Toolchain::for_source(file)?;
    let program = toolchain.program(config);
    let args = toolchain.arguments(file, config);

    tracing::debug!(source = file, compiler = program, args = %args, "compiling");
    runner.run(OsStr::new(program), &args, session.dir());
    Ok(toolchain)
}
