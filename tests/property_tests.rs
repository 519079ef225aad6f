//! Property-based tests for fixture naming, fixture copying and output comparison
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use std::fs;

use proptest::prelude::*;
use verdict::Session;
use verdict::fixtures::{check, copy_test};
use verdict_core::{Verdict, compare_streams, input_filename, output_filename};

// Strategy for test-file prefixes
fn prefix_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}"
}

// Strategy for a single output line (no newline)
fn line_strategy() -> impl Strategy<Value = String> {
    "[ -~]{0,12}"
}

fn lines_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(line_strategy(), 0..8)
}

fn join(lines: &[String]) -> String {
    lines.iter().map(|l| format!("{l}\n")).collect()
}

fn compare(user: &str, expected: &str) -> Verdict {
    compare_streams(user.as_bytes(), expected.as_bytes()).unwrap()
}

// =============================================================================
// Fixture naming
// =============================================================================

proptest! {
    /// Property: distinct indices never map to the same fixture name
    #[test]
    fn indexed_names_are_injective(prefix in prefix_strategy(), a in 1u32..10_000, b in 1u32..10_000) {
        prop_assume!(a != b);
        prop_assert_ne!(input_filename(&prefix, Some(a)), input_filename(&prefix, Some(b)));
        prop_assert_ne!(output_filename(&prefix, Some(a)), output_filename(&prefix, Some(b)));
    }

    /// Property: scratch names never collide with any fixture name
    #[test]
    fn scratch_names_never_collide(prefix in prefix_strategy(), n in 1u32..u32::MAX) {
        prop_assert_ne!(input_filename(&prefix, None), input_filename(&prefix, Some(n)));
        prop_assert_ne!(output_filename(&prefix, None), output_filename(&prefix, Some(n)));
        prop_assert_ne!(input_filename(&prefix, Some(n)), output_filename(&prefix, Some(n)));
    }
}

// =============================================================================
// Comparison
// =============================================================================

proptest! {
    /// Property: identical outputs are always correct
    #[test]
    fn identical_outputs_are_correct(lines in lines_strategy()) {
        let text = join(&lines);
        prop_assert_eq!(compare(&text, &text), Verdict::Correct);
    }

    /// Property: comparison is idempotent
    #[test]
    fn comparison_is_idempotent(user in lines_strategy(), expected in lines_strategy()) {
        let (user, expected) = (join(&user), join(&expected));
        prop_assert_eq!(compare(&user, &expected), compare(&user, &expected));
    }

    /// Property: the first divergent line is reported, whatever follows it
    #[test]
    fn first_divergence_is_reported(
        common in lines_strategy(),
        user_line in line_strategy(),
        expected_line in line_strategy(),
        user_tail in lines_strategy(),
        expected_tail in lines_strategy(),
    ) {
        prop_assume!(user_line != expected_line);

        let mut user = common.clone();
        user.push(user_line.clone());
        user.extend(user_tail);
        let mut expected = common.clone();
        expected.push(expected_line.clone());
        expected.extend(expected_tail);

        prop_assert_eq!(
            compare(&join(&user), &join(&expected)),
            Verdict::Mismatch {
                line_number: common.len() + 1,
                user_line,
                expected_line,
            }
        );
    }

    /// Property: a strict prefix of the expected output ended early, and the reverse ended late
    #[test]
    fn strict_prefixes_end_early_or_late(common in lines_strategy(), extra in prop::collection::vec(line_strategy(), 1..5)) {
        let mut longer = common.clone();
        longer.extend(extra);
        let (short, long) = (join(&common), join(&longer));

        prop_assert_eq!(compare(&short, &long), Verdict::UserEndedEarly);
        prop_assert_eq!(compare(&long, &short), Verdict::UserEndedLate);
    }
}

// =============================================================================
// Fixture files
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: copying a terminated fixture preserves it byte for byte
    #[test]
    fn copy_preserves_lines(lines in lines_strategy(), crlf in any::<bool>()) {
        let dir = tempfile::tempdir().unwrap();
        let separator = if crlf { "\r\n" } else { "\n" };
        let source: String = lines.iter().map(|l| format!("{l}{separator}")).collect();
        fs::write(dir.path().join("p.5.in"), &source).unwrap();
        let session = Session::open(dir.path(), "p").unwrap();

        copy_test(&session, 5).unwrap();

        let copied = fs::read_to_string(session.user_input()).unwrap();
        prop_assert_eq!(copied, source);
    }

    /// Property: a byte-identical output file checks as correct
    #[test]
    fn identical_files_check_correct(lines in lines_strategy()) {
        let dir = tempfile::tempdir().unwrap();
        let text = join(&lines);
        fs::write(dir.path().join("p.out"), &text).unwrap();
        fs::write(dir.path().join("p.1.out"), &text).unwrap();
        let session = Session::open(dir.path(), "p").unwrap();

        prop_assert_eq!(check(&session, 1).unwrap(), Verdict::Correct);
        prop_assert_eq!(check(&session, 1).unwrap(), Verdict::Correct);
    }
}
