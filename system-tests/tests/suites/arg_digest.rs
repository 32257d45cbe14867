// system-tests/tests/suites/arg_digest.rs
// ============================================================================
// Module: Arg Digest Fixture Suite
// Description: End-to-end coverage for the corpus-arg-digest binary.
// Purpose: Pin the one-line-per-argument digest contract.
// ============================================================================

//! ## Overview
//! Runs the built `corpus-arg-digest` binary and asserts it emits exactly one
//! `<md5-hex> <argument>` line per process argument, the program name
//! included as the zeroth argument.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use std::path::PathBuf;

use crate::helpers::cli;

// ============================================================================
// SECTION: Suite Helpers
// ============================================================================

/// Locates the arg-digest fixture binary.
fn fixture() -> PathBuf {
    cli::fixture_binary("corpus-arg-digest").expect("corpus-arg-digest binary")
}

/// Splits one output line into its digest and argument halves.
fn split_line(line: &str) -> (&str, &str) {
    assert!(line.len() >= 33, "line too short for a digest pair: {line:?}");
    let (digest, rest) = line.split_at(32);
    assert!(
        digest.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()),
        "digest half must be lowercase hex: {line:?}"
    );
    let argument = rest.strip_prefix(' ').expect("digest and argument are space-separated");
    (digest, argument)
}

// ============================================================================
// SECTION: Output Contract
// ============================================================================

/// Tests one line per argument with known digests for controlled arguments.
#[test]
fn prints_one_digest_line_per_argument() {
    let binary = fixture();

    let output =
        cli::run_fixture(&binary, &["abc", ""], &[], &[]).expect("run corpus-arg-digest");

    assert!(output.status.success(), "fixture must exit cleanly");
    assert!(output.stderr.is_empty(), "fixture writes stdout only");
    let stdout = String::from_utf8(output.stdout).expect("utf-8 output");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3, "program name plus two arguments: {lines:?}");
    assert_eq!(lines[1], "900150983cd24fb0d6963f7d28e17f72 abc");
    assert_eq!(lines[2], "d41d8cd98f00b204e9800998ecf8427e ");
}

/// Tests the zeroth line covers the program name itself.
#[test]
fn covers_the_program_name_as_zeroth_argument() {
    let binary = fixture();

    let output = cli::run_fixture(&binary, &[], &[], &[]).expect("run corpus-arg-digest");

    assert!(output.status.success(), "fixture must exit cleanly");
    let stdout = String::from_utf8(output.stdout).expect("utf-8 output");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "no arguments means exactly the program-name line");
    let (_digest, argument) = split_line(lines[0]);
    assert_eq!(argument, binary.to_string_lossy(), "zeroth argument is the program name");
}

/// Tests every line is well-formed for arbitrary argument mixes.
#[test]
fn keeps_every_line_well_formed() {
    let binary = fixture();

    let output = cli::run_fixture(&binary, &["--not-a-flag", "two words", "ümlaut"], &[], &[])
        .expect("run corpus-arg-digest");

    assert!(output.status.success(), "fixture must exit cleanly");
    let stdout = String::from_utf8(output.stdout).expect("utf-8 output");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4, "program name plus three arguments: {lines:?}");
    let arguments: Vec<&str> =
        lines.iter().map(|line| split_line(line).1).collect();
    assert_eq!(&arguments[1..], &["--not-a-flag", "two words", "ümlaut"][..]);
}
