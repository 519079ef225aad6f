//! Lockstep line comparison of a program's output against the expected output.
//!
//! Lines are separated by `\n`. The separator is not part of the line, so a trailing newline at the end of a
//! stream does not open an extra empty line. Everything else, `\r` included, is compared byte for byte.
//!
//! The comparison loop reads one line from each stream per step and stops at the first difference. End of stream
//! is only examined before reading the next pair, so a difference on the last pair read always wins over an
//! early/late classification.

use std::fmt;
use std::io::{self, BufRead};

use thiserror::Error;

use crate::verdict::Verdict;

/// Identify which side of a comparison a stream belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    /// Output written by the program under test.
    User,
    /// Reference output supplied with the fixture.
    Expected,
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stream::User => f.write_str("user"),
            Stream::Expected => f.write_str("expected"),
        }
    }
}

/// A read failure on one side of a comparison.
#[derive(Debug, Error)]
#[error("failed to read {stream} output: {source}")]
pub struct CompareError {
    pub stream: Stream,
    #[source]
    pub source: io::Error,
}

impl CompareError {
    fn on(stream: Stream) -> impl FnOnce(io::Error) -> Self {
        move |source| CompareError { stream, source }
    }
}

/// Compare two line streams and classify the result.
///
/// ## Parameters
/// - `user`: output produced by the program under test.
/// - `expected`: reference output.
///
/// ## Returns
/// - (`Verdict`): the first [`Verdict::Mismatch`] found, otherwise an end-of-stream classification.
///
/// ## Errors
/// - [`CompareError`] naming the stream whose read failed.
///
/// ## Examples
/// ```rust
/// use verdict_core::{compare_streams, Verdict};
/// let verdict = compare_streams("1\n4\n".as_bytes(), "1\n4\n9\n".as_bytes()).unwrap();
/// assert_eq!(verdict, Verdict::UserEndedEarly);
/// ```
pub fn compare_streams<U: BufRead, E: BufRead>(mut user: U, mut expected: E) -> Result<Verdict, CompareError> {
    let mut user_line = Vec::new();
    let mut expected_line = Vec::new();
    let mut line_number = 0;

    loop {
        let user_done = at_end(&mut user).map_err(CompareError::on(Stream::User))?;
        let expected_done = at_end(&mut expected).map_err(CompareError::on(Stream::Expected))?;

        match (user_done, expected_done) {
            (true, true) => return Ok(Verdict::Correct),
            (true, false) => return Ok(Verdict::UserEndedEarly),
            (false, true) => return Ok(Verdict::UserEndedLate),
            (false, false) => {}
        }

        read_line(&mut user, &mut user_line).map_err(CompareError::on(Stream::User))?;
        read_line(&mut expected, &mut expected_line).map_err(CompareError::on(Stream::Expected))?;
        line_number += 1;

        if user_line != expected_line {
            return Ok(Verdict::Mismatch {
                line_number,
                user_line: String::from_utf8_lossy(&user_line).into_owned(),
                expected_line: String::from_utf8_lossy(&expected_line).into_owned(),
            });
        }
    }
}

/// Read the next `\n`-terminated line into `buf`, without the terminator.
///
/// ## Returns
/// - (`bool`): `false` if the reader was already exhausted and `buf` is left empty.
pub fn read_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<bool> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(false);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    Ok(true)
}

fn at_end<R: BufRead>(reader: &mut R) -> io::Result<bool> {
    Ok(reader.fill_buf()?.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compare(user: &str, expected: &str) -> Verdict {
        compare_streams(user.as_bytes(), expected.as_bytes()).unwrap()
    }

    #[test]
    fn test_identical_streams_are_correct() {
        assert_eq!(compare("25\n", "25\n"), Verdict::Correct);
        assert_eq!(compare("a\nb\nc", "a\nb\nc"), Verdict::Correct);
    }

    #[test]
    fn test_empty_streams_are_correct() {
        assert_eq!(compare("", ""), Verdict::Correct);
    }

    #[test]
    fn test_trailing_newline_does_not_add_a_line() {
        assert_eq!(compare("25", "25\n"), Verdict::Correct);
        assert_eq!(compare("25\n", "25"), Verdict::Correct);
    }

    #[test]
    fn test_first_divergence_only() {
        let verdict = compare("1\n2\nX\nY\n", "1\n2\n3\n4\n");
        assert_eq!(
            verdict,
            Verdict::Mismatch {
                line_number: 3,
                user_line: "X".to_string(),
                expected_line: "3".to_string(),
            }
        );
    }

    #[test]
    fn test_no_trimming() {
        let verdict = compare("9 \n", "9\n");
        assert!(matches!(verdict, Verdict::Mismatch { line_number: 1, .. }));

        let verdict = compare("9\r\n", "9\n");
        assert_eq!(
            verdict,
            Verdict::Mismatch {
                line_number: 1,
                user_line: "9\r".to_string(),
                expected_line: "9".to_string(),
            }
        );
    }

    #[test]
    fn test_no_numeric_tolerance() {
        assert!(matches!(compare("1.0\n", "1\n"), Verdict::Mismatch { .. }));
    }

    #[test]
    fn test_user_ended_early() {
        assert_eq!(compare("1\n", "1\n2\n"), Verdict::UserEndedEarly);
        assert_eq!(compare("", "1\n"), Verdict::UserEndedEarly);
    }

    #[test]
    fn test_user_ended_late() {
        assert_eq!(compare("1\n2\n", "1\n"), Verdict::UserEndedLate);
        assert_eq!(compare("1\n", ""), Verdict::UserEndedLate);
    }

    #[test]
    fn test_mismatch_on_last_pair_beats_length_difference() {
        // Line 2 is the last expected line; the difference there is reported, not the extra user line.
        let verdict = compare("1\n5\n6\n", "1\n2\n");
        assert!(matches!(verdict, Verdict::Mismatch { line_number: 2, .. }));
    }

    #[test]
    fn test_empty_line_is_a_line() {
        assert_eq!(compare("1\n\n", "1\n"), Verdict::UserEndedLate);
        assert_eq!(compare("\n", "\n"), Verdict::Correct);
    }

    #[test]
    fn test_invalid_utf8_is_compared_bytewise() {
        let verdict = compare_streams(&b"\xff\n"[..], &b"\xfe\n"[..]).unwrap();
        assert!(matches!(verdict, Verdict::Mismatch { line_number: 1, .. }));
    }

    #[test]
    fn test_read_line_strips_only_newline() {
        let mut reader = "a\r\nb".as_bytes();
        let mut buf = Vec::new();
        assert!(read_line(&mut reader, &mut buf).unwrap());
        assert_eq!(buf, b"a\r");
        assert!(read_line(&mut reader, &mut buf).unwrap());
        assert_eq!(buf, b"b");
        assert!(!read_line(&mut reader, &mut buf).unwrap());
        assert!(buf.is_empty());
    }

    struct FailingReader;

    impl io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("disk on fire"))
        }
    }

    #[test]
    fn test_read_failure_names_the_stream() {
        let failing = io::BufReader::new(FailingReader);
        let err = compare_streams("1\n".as_bytes(), failing).unwrap_err();
        assert_eq!(err.stream, Stream::Expected);
        assert!(err.to_string().contains("expected output"));
        assert!(err.to_string().ends_with("disk on fire"));
    }

    #[test]
    fn test_read_failure_keeps_io_cause() {
        let failing = io::BufReader::new(FailingReader);
        let err = compare_streams(failing, "1\n".as_bytes()).unwrap_err();
        assert_eq!(err.stream, Stream::User);
        let cause = std::error::Error::source(&err).unwrap();
        assert_eq!(cause.to_string(), "disk on fire");
    }
}
