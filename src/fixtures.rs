//! Fixture I/O: load a test's input into the scratch file, then check the scratch output.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use verdict_core::compare::read_line;
use verdict_core::{compare_streams, Stream, Verdict};

use crate::errors::FixtureError;
use crate::session::Session;

/// Copy the input fixture of test `index` into the scratch input file.
///
/// Lines are copied in order and byte for byte, `\r` included; each is written with a `\n` terminator, so only a
/// missing final newline is added.
///
/// ## Errors
/// - [`FixtureError::OpenTestInput`] if `<prefix>.<index>.in` cannot be opened.
/// - [`FixtureError::OpenUserInput`] if `<prefix>.in` cannot be created.
/// - [`FixtureError::Copy`] if reading or writing fails midway.
pub fn copy_test(session: &Session, index: u32) -> Result<(), FixtureError> {
    let from = session.expected_input(index);
    let source = File::open(&from).map_err(|source| FixtureError::OpenTestInput {
        path: from.clone(),
        source,
    })?;

    let to = session.user_input();
    let dest = File::create(&to).map_err(|source| FixtureError::OpenUserInput { path: to.clone(), source })?;

    copy_lines(BufReader::new(source), BufWriter::new(dest)).map_err(|source| FixtureError::Copy { from, to, source })
}

fn copy_lines<R: BufRead, W: Write>(mut reader: R, mut writer: W) -> io::Result<()> {
    let mut line = Vec::new();
    while read_line(&mut reader, &mut line)? {
        writer.write_all(&line)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Compare the scratch output with the expected output of test `index`.
///
/// ## Errors
/// - [`FixtureError::OpenUserOutput`] if the program did not leave a `<prefix>.out`.
/// - [`FixtureError::OpenExpectedOutput`] if `<prefix>.<index>.out` is missing.
/// - [`FixtureError::Read`] if either file fails mid-read.
pub fn check(session: &Session, index: u32) -> Result<Verdict, FixtureError> {
    let user_path = session.user_output();
    let user = File::open(&user_path).map_err(|source| FixtureError::OpenUserOutput {
        path: user_path.clone(),
        source,
    })?;

    let expected_path = session.expected_output(index);
    let expected = File::open(&expected_path).map_err(|source| FixtureError::OpenExpectedOutput {
        path: expected_path.clone(),
        source,
    })?;

    compare_streams(BufReader::new(user), BufReader::new(expected)).map_err(|e| FixtureError::Read {
        path: match e.stream {
            Stream::User => user_path,
            Stream::Expected => expected_path,
        },
        stream: e.stream,
        source: e.source,
    })
}
