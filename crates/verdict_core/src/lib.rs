//! Provide the pure building blocks of the `verdict` test runner.
//!
//! This crate is intentionally small; its only dependency is `thiserror`. It contains the pieces whose behavior is
//! fixed by the fixture conventions, independent of how programs are compiled or launched:
//! - fixture filename derivation (`<prefix>.in`, `<prefix>.<n>.out`, ...),
//! - the [`Verdict`] vocabulary and its canonical report text,
//! - lockstep line comparison over any [`std::io::BufRead`] pair.
//!
//! ## Notes
//!
//! - No filesystem access and no global state: callers open the files and hand over readers.
//! - Comparison is exact. No trimming, no whitespace folding, no numeric tolerance.

pub mod compare;
pub mod fixtures;
pub mod verdict;

pub use compare::{compare_streams, CompareError, Stream};
pub use fixtures::{input_filename, output_filename};
pub use verdict::Verdict;
