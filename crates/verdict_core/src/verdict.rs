//! Define the outcome of comparing a program's output with the expected output.
//!
//! The `Display` text of a [`Verdict`] is the canonical report body printed after `Test #<n>: `.

use std::fmt;

/// Report text for a passing test.
pub const CORRECT_MSG: &str = "CORRECT";
/// Report text when the program's output stops before the expected output does.
pub const ENDED_EARLY_MSG: &str = "wrong: user output ended too early";
/// Report text when the program's output continues past the expected output.
///
/// ## Notes
/// - The `ouput` spelling is kept as-is: existing graders match on this exact string.
pub const ENDED_LATE_MSG: &str = "wrong: user ouput ended too late";

/// Outcome of one output comparison. Exactly one variant holds per comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Both outputs have the same lines and end together.
    Correct,
    /// The first line (1-based) where the outputs differ.
    Mismatch {
        line_number: usize,
        user_line: String,
        expected_line: String,
    },
    /// Every line the program wrote matched, but the expected output has more.
    UserEndedEarly,
    /// Every expected line matched, but the program wrote more.
    UserEndedLate,
}

impl Verdict {
    /// Return `true` for [`Verdict::Correct`].
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }

    /// Return a stable machine-readable status tag.
    ///
    /// ## Returns
    /// - (`&'static str`): one of `correct`, `mismatch`, `ended_early`, `ended_late`.
    pub fn status(&self) -> &'static str {
        match self {
            Verdict::Correct => "correct",
            Verdict::Mismatch { .. } => "mismatch",
            Verdict::UserEndedEarly => "ended_early",
            Verdict::UserEndedLate => "ended_late",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Correct => f.write_str(CORRECT_MSG),
            Verdict::Mismatch {
                line_number,
                user_line,
                expected_line,
            } => write!(
                f,
                "wrong\nline #{line_number}\nuser line:\t{user_line}\ncorrect line:\t{expected_line}"
            ),
            Verdict::UserEndedEarly => f.write_str(ENDED_EARLY_MSG),
            Verdict::UserEndedLate => f.write_str(ENDED_LATE_MSG),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_message() {
        assert_eq!(Verdict::Correct.to_string(), "CORRECT");
        assert!(Verdict::Correct.is_correct());
    }

    #[test]
    fn test_mismatch_message_layout() {
        let verdict = Verdict::Mismatch {
            line_number: 3,
            user_line: "9".to_string(),
            expected_line: "10".to_string(),
        };
        assert_eq!(verdict.to_string(), "wrong\nline #3\nuser line:\t9\ncorrect line:\t10");
        assert!(!verdict.is_correct());
    }

    #[test]
    fn test_termination_messages() {
        assert_eq!(Verdict::UserEndedEarly.to_string(), "wrong: user output ended too early");
        assert_eq!(Verdict::UserEndedLate.to_string(), "wrong: user ouput ended too late");
    }

    #[test]
    fn test_status_tags() {
        assert_eq!(Verdict::Correct.status(), "correct");
        assert_eq!(Verdict::UserEndedEarly.status(), "ended_early");
        assert_eq!(Verdict::UserEndedLate.status(), "ended_late");
        let mismatch = Verdict::Mismatch {
            line_number: 1,
            user_line: String::new(),
            expected_line: "x".to_string(),
        };
        assert_eq!(mismatch.status(), "mismatch");
    }
}
