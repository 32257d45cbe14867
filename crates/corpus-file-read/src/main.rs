// crates/corpus-file-read/src/main.rs
// ============================================================================
// Module: Scanner Corpus File Read Fixture
// Description: Sample program that reads a file named by an environment variable.
// Purpose: Give scanners a deterministic tainted-path file inclusion pattern.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Reads the path in `SCANNER_CORPUS_INPUT_FILE`, reads that file, and prints
//! its contents verbatim. The path flows from the environment into the open
//! call without validation; that unchecked flow is the pattern this fixture
//! exists to exhibit, so it must not gain allowlisting or traversal checks.
//! Read failures emit one JSON diagnostic record to stderr and the program
//! still prints whatever it obtained (possibly nothing) and exits cleanly.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Environment
// ============================================================================

/// Environment variable naming the input file path.
const INPUT_FILE_ENV: &str = "SCANNER_CORPUS_INPUT_FILE";

/// Resolves the input path from the environment.
///
/// Returns `None` when the variable is absent or not valid UTF-8. The value
/// is deliberately used as-is.
fn input_path_from_env() -> Option<PathBuf> {
    std::env::var(INPUT_FILE_ENV).ok().map(PathBuf::from)
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while resolving and reading the input file.
#[derive(Debug, Error)]
enum ReadError {
    /// The input environment variable is absent or not valid UTF-8.
    #[error("environment variable {0} is not set")]
    MissingVariable(&'static str),
    /// The input file could not be opened or read.
    #[error("failed to read {path}: {reason}")]
    Io {
        /// Path that failed to read.
        path: String,
        /// Underlying I/O failure description.
        reason: String,
    },
}

// ============================================================================
// SECTION: Diagnostics
// ============================================================================

/// JSON diagnostic record emitted when the input read fails.
#[derive(Debug, Serialize)]
struct ReadFailure<'a> {
    /// Event identifier.
    event: &'static str,
    /// Input path, when one was resolved from the environment.
    path: Option<&'a str>,
    /// Failure description.
    error: String,
}

/// Writes one JSON diagnostic line for a failed input read.
///
/// # Errors
///
/// Returns the underlying I/O error when the record cannot be written.
fn log_read_failure<W: Write>(
    writer: &mut W,
    path: Option<&str>,
    error: &ReadError,
) -> Result<(), std::io::Error> {
    let record = ReadFailure {
        event: "input_read_failed",
        path,
        error: error.to_string(),
    };
    serde_json::to_writer(&mut *writer, &record)?;
    writer.write_all(b"\n")
}

// ============================================================================
// SECTION: Input Reading
// ============================================================================

/// Reads the whole input file into memory.
///
/// # Errors
///
/// Returns [`ReadError::MissingVariable`] when no path was resolved and
/// [`ReadError::Io`] when the read itself fails.
fn read_input(path: Option<&Path>) -> Result<Vec<u8>, ReadError> {
    let path = path.ok_or(ReadError::MissingVariable(INPUT_FILE_ENV))?;
    std::fs::read(path).map_err(|err| ReadError::Io {
        path: path.to_string_lossy().into_owned(),
        reason: err.to_string(),
    })
}

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// Reads the named file and prints its contents, logging failures to stderr.
fn main() -> Result<(), std::io::Error> {
    let path = input_path_from_env();
    let contents = match read_input(path.as_deref()) {
        Ok(bytes) => bytes,
        Err(error) => {
            let shown = path.as_deref().map(Path::to_string_lossy);
            log_read_failure(&mut std::io::stderr(), shown.as_deref(), &error)?;
            Vec::new()
        }
    };
    let mut out = std::io::stdout();
    out.write_all(&contents)?;
    out.flush()
}
