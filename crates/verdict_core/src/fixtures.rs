//! Derive fixture and scratch filenames from a test prefix.
//!
//! Every test case uses four files:
//!
//! | name                 | role                                                     |
//! |----------------------|----------------------------------------------------------|
//! | `<prefix>.in`        | scratch input the program under test reads              |
//! | `<prefix>.out`       | scratch output the program under test writes            |
//! | `<prefix>.<n>.in`    | expected input for test `n` (read-only fixture)          |
//! | `<prefix>.<n>.out`   | expected output for test `n` (read-only fixture)         |
//!
//! The scratch names do not depend on the test index and are overwritten on every iteration.

/// Extension of input files.
pub const INPUT_EXTENSION: &str = "in";
/// Extension of output files.
pub const OUTPUT_EXTENSION: &str = "out";

/// Return the input filename for `prefix`.
///
/// ## Parameters
/// - `prefix`: shared test-file prefix (e.g. `"sum"`).
/// - `index`: `None` for the scratch file the program reads, `Some(n)` for the fixture of test `n`.
///
/// ## Examples
/// ```rust
/// use verdict_core::input_filename;
/// assert_eq!(input_filename("sum", None), "sum.in");
/// assert_eq!(input_filename("sum", Some(3)), "sum.3.in");
/// ```
pub fn input_filename(prefix: &str, index: Option<u32>) -> String {
    filename(prefix, index, INPUT_EXTENSION)
}

/// Return the output filename for `prefix`.
///
/// ## Parameters
/// - `prefix`: shared test-file prefix.
/// - `index`: `None` for the scratch file the program writes, `Some(n)` for the expected output of test `n`.
///
/// ## Examples
/// ```rust
/// use verdict_core::output_filename;
/// assert_eq!(output_filename("sum", None), "sum.out");
/// assert_eq!(output_filename("sum", Some(12)), "sum.12.out");
/// ```
pub fn output_filename(prefix: &str, index: Option<u32>) -> String {
    filename(prefix, index, OUTPUT_EXTENSION)
}

fn filename(prefix: &str, index: Option<u32>, extension: &str) -> String {
    match index {
        Some(n) => format!("{prefix}.{n}.{extension}"),
        None => format!("{prefix}.{extension}"),
    }
}
