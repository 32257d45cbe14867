// crates/corpus-cert-verify/src/main.rs
// ============================================================================
// Module: Scanner Corpus Cert Verify Fixture
// Description: Sample program that verifies a certificate against empty trust.
// Purpose: Give scanners a deterministic failing certificate-verification pattern.
// Dependencies: rustls, rustls-pki-types, thiserror
// ============================================================================

//! ## Overview
//! Attempts webpki verification of an empty DER certificate against an empty
//! root store and prints the resulting error to stdout. The empty root store
//! guarantees the verifier cannot even be built, so the failure line is
//! printed on every run; the fixture exits successfully regardless.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::sync::Arc;

use rustls::RootCertStore;
use rustls::client::WebPkiServerVerifier;
use rustls::client::danger::ServerCertVerifier;
use rustls::pki_types::CertificateDer;
use rustls::pki_types::ServerName;
use rustls::pki_types::UnixTime;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Hostname the stub verifies the certificate against.
const VERIFY_HOST: &str = "localhost";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while building the verifier or verifying the certificate.
#[derive(Debug, Error)]
enum VerifyError {
    /// The verifier could not be built from the supplied roots.
    #[error("failed to build certificate verifier: {0}")]
    Verifier(String),
    /// The verification hostname is not a valid server name.
    #[error("invalid verification hostname: {0}")]
    HostName(String),
    /// The certificate was rejected by webpki verification.
    #[error("certificate rejected: {0}")]
    Certificate(String),
}

// ============================================================================
// SECTION: Verification
// ============================================================================

/// Verifies `end_entity` as a server certificate against the given roots.
///
/// # Errors
///
/// Returns [`VerifyError::Verifier`] when the verifier cannot be built (an
/// empty root store always fails here), [`VerifyError::HostName`] when the
/// stub hostname is rejected, and [`VerifyError::Certificate`] when the
/// certificate itself fails verification.
fn verify_certificate(
    end_entity: &CertificateDer<'_>,
    roots: RootCertStore,
) -> Result<(), VerifyError> {
    let verifier = WebPkiServerVerifier::builder(Arc::new(roots))
        .build()
        .map_err(|err| VerifyError::Verifier(err.to_string()))?;
    let server_name = ServerName::try_from(VERIFY_HOST)
        .map_err(|err| VerifyError::HostName(err.to_string()))?;
    let _verified = verifier
        .verify_server_cert(end_entity, &[], &server_name, &[], UnixTime::now())
        .map_err(|err| VerifyError::Certificate(err.to_string()))?;
    Ok(())
}

// ============================================================================
// SECTION: Output
// ============================================================================

/// Writes the verification-failure line for an error.
///
/// # Errors
///
/// Returns the underlying I/O error when the line cannot be written.
fn write_failure<W: Write>(writer: &mut W, error: &VerifyError) -> Result<(), std::io::Error> {
    writeln!(writer, "certificate verification failed: {error}")
}

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// Runs the verification stub and prints the expected failure.
fn main() -> Result<(), std::io::Error> {
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();
    let certificate = CertificateDer::from(Vec::new());
    let mut out = std::io::stdout();
    if let Err(error) = verify_certificate(&certificate, RootCertStore::empty()) {
        write_failure(&mut out, &error)?;
    }
    out.flush()
}
