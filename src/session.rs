//! Test session: the directory and prefix that own one set of scratch files.
//!
//! The program under test reads `<prefix>.in` and writes `<prefix>.out` relative to its working directory. Those
//! two files are shared mutable state for the whole run, so a session is the unit of isolation: two sessions only
//! race if they point at the same directory with the same prefix.

use std::fs;
use std::path::{Path, PathBuf};

use verdict_core::{input_filename, output_filename};

use crate::errors::SessionError;

/// A target directory plus the test-file prefix used inside it.
#[derive(Debug, Clone)]
pub struct Session {
    dir: PathBuf,
    prefix: String,
}

impl Session {
    /// Open a session rooted at `dir`.
    ///
    /// The directory is canonicalized so child processes can be given absolute paths regardless of how the
    /// platform resolves relative program names.
    ///
    /// ## Errors
    /// - [`SessionError::Directory`] if `dir` does not exist or cannot be resolved.
    /// - [`SessionError::NotADirectory`] if `dir` is a file.
    pub fn open(dir: impl AsRef<Path>, prefix: impl Into<String>) -> Result<Self, SessionError> {
        let dir = dir.as_ref();
        let dir = fs::canonicalize(dir).map_err(|source| SessionError::Directory {
            path: dir.to_path_buf(),
            source,
        })?;
        if !dir.is_dir() {
            return Err(SessionError::NotADirectory { path: dir });
        }
        Ok(Self {
            dir,
            prefix: prefix.into(),
        })
    }

    /// The canonical target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Resolve a file name relative to the target directory.
    pub fn resolve(&self, name: impl AsRef<Path>) -> PathBuf {
        self.dir.join(name)
    }

    /// Scratch input the program under test reads (`<prefix>.in`).
    pub fn user_input(&self) -> PathBuf {
        self.resolve(input_filename(&self.prefix, None))
    }

    /// Scratch output the program under test writes (`<prefix>.out`).
    pub fn user_output(&self) -> PathBuf {
        self.resolve(output_filename(&self.prefix, None))
    }

    /// Input fixture of test `index` (`<prefix>.<index>.in`).
    pub fn expected_input(&self, index: u32) -> PathBuf {
        self.resolve(input_filename(&self.prefix, Some(index)))
    }

    /// Expected output of test `index` (`<prefix>.<index>.out`).
    pub fn expected_output(&self, index: u32) -> PathBuf {
        self.resolve(output_filename(&self.prefix, Some(index)))
    }
}
