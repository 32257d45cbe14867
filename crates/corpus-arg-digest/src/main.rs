// crates/corpus-arg-digest/src/main.rs
// ============================================================================
// Module: Scanner Corpus Arg Digest Fixture
// Description: Sample program that MD5-hashes every command-line argument.
// Purpose: Give scanners a deterministic weak-digest usage pattern.
// Dependencies: md-5
// ============================================================================

//! ## Overview
//! Prints one `<md5-hex> <argument>` line per process argument, including the
//! program name as the zeroth argument. MD5 is the subject of the fixture:
//! the digest is intentionally weak and must not be upgraded.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;

use md5::Digest;
use md5::Md5;

// ============================================================================
// SECTION: Digest Helpers
// ============================================================================

/// Hashes bytes with MD5 and returns the lowercase hex digest.
fn md5_hex(bytes: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(bytes);
    hex_encode(&hasher.finalize())
}

/// Encodes bytes as a lowercase hex string.
fn hex_encode(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push(HEX[(byte >> 4) as usize] as char);
        out.push(HEX[(byte & 0x0f) as usize] as char);
    }
    out
}

// ============================================================================
// SECTION: Output
// ============================================================================

/// Writes one digest-and-argument line.
///
/// # Errors
///
/// Returns the underlying I/O error when the line cannot be written.
fn write_digest_line<W: Write>(writer: &mut W, argument: &str) -> Result<(), std::io::Error> {
    let digest = md5_hex(argument.as_bytes());
    writeln!(writer, "{digest} {argument}")
}

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// Hashes and prints every process argument, the program name included.
fn main() -> Result<(), std::io::Error> {
    let mut out = std::io::stdout();
    for argument in std::env::args_os() {
        // Non-UTF-8 arguments are hashed over their lossy rendering so every
        // argument still yields exactly one line.
        write_digest_line(&mut out, &argument.to_string_lossy())?;
    }
    out.flush()
}
