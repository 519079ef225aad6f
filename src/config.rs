//! Runner configuration
//!
//! Defaults follow the classic single-file judge setup: `gcc`/`g++` with all warnings as errors, C++11, and one
//! fixed executable name per platform.

use std::time::Duration;

/// Name of the compiled program under test.
#[cfg(windows)]
pub const EXECUTABLE_NAME: &str = "supercalifragilistic.exe";
/// Name of the compiled program under test.
#[cfg(not(windows))]
pub const EXECUTABLE_NAME: &str = "supercalifragilistic";

/// Per-test time budget.
///
/// Informational only: nothing cancels a test that runs longer.
pub const DEFAULT_TEST_TIMEOUT: Duration = Duration::from_millis(3000);

/// Report format written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// `Test #<n>: <verdict>` lines
    #[default]
    Text,
    /// One JSON object per test, then a summary object
    Json,
}

/// Configuration shared by the compile step and the test loop
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// File name of the compiled program, relative to the target directory
    pub executable_name: String,
    /// C compiler program
    pub c_compiler: String,
    /// C++ compiler program
    pub cpp_compiler: String,
    /// Value passed as `-std=` to the C++ compiler
    pub cpp_standard: String,
    /// Whether to compile the source before running tests
    pub compile: bool,
    /// Report format
    pub format: OutputFormat,
    /// Per-test time budget (not enforced)
    pub test_timeout: Duration,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            executable_name: EXECUTABLE_NAME.to_string(),
            c_compiler: "gcc".to_string(),
            cpp_compiler: "g++".to_string(),
            cpp_standard: "c++11".to_string(),
            compile: true,
            format: OutputFormat::Text,
            test_timeout: DEFAULT_TEST_TIMEOUT,
        }
    }
}

impl RunnerConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the executable name
    pub fn with_executable_name(mut self, name: impl Into<String>) -> Self {
        self.executable_name = name.into();
        self
    }

    /// Set the C compiler
    pub fn with_c_compiler(mut self, program: impl Into<String>) -> Self {
        self.c_compiler = program.into();
        self
    }

    /// Set the C++ compiler
    pub fn with_cpp_compiler(mut self, program: impl Into<String>) -> Self {
        self.cpp_compiler = program.into();
        self
    }

    /// Set the C++ language standard
    pub fn with_cpp_standard(mut self, standard: impl Into<String>) -> Self {
        self.cpp_standard = standard.into();
        self
    }

    /// Enable or disable the compile step
    pub fn with_compile(mut self, compile: bool) -> Self {
        self.compile = compile;
        self
    }

    /// Set the report format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunnerConfig::default();
        assert_eq!(config.executable_name, EXECUTABLE_NAME);
        assert_eq!(config.c_compiler, "gcc");
        assert_eq!(config.cpp_compiler, "g++");
        assert_eq!(config.cpp_standard, "c++11");
        assert!(config.compile);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.test_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_builder() {
        let config = RunnerConfig::new()
            .with_c_compiler("clang")
            .with_cpp_compiler("clang++")
            .with_cpp_standard("c++17")
            .with_compile(false)
            .with_format(OutputFormat::Json)
            .with_executable_name("prog");
        assert_eq!(config.c_compiler, "clang");
        assert_eq!(config.cpp_compiler, "clang++");
        assert_eq!(config.cpp_standard, "c++17");
        assert!(!config.compile);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.executable_name, "prog");
    }
}
