#![no_main]

use libfuzzer_sys::fuzz_target;
use verdict_core::{Verdict, compare_streams};

fuzz_target!(|data: &[u8]| {
    // First byte picks where the user output ends and the expected output begins
    let Some((&split, rest)) = data.split_first() else {
        return;
    };
    let at = usize::from(split).min(rest.len());
    let (user, expected) = rest.split_at(at);

    let verdict = compare_streams(user, expected).expect("in-memory reads cannot fail");
    if user == expected {
        assert_eq!(verdict, Verdict::Correct);
    }
    if let Verdict::Mismatch { line_number, .. } = verdict {
        assert!(line_number >= 1);
    }
});
