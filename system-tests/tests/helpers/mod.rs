// system-tests/tests/helpers/mod.rs
// ============================================================================
// Module: System Test Helpers
// Description: Shared helpers for Scanner Corpus system-tests.
// Purpose: Provide fixture binary resolution and invocation utilities.
// Dependencies: system-tests, std::process
// ============================================================================

//! ## Overview
//! Shared helpers for Scanner Corpus system-tests.
//! Invariants:
//! - Fixture invocation is hermetic: the environment each fixture sees is
//!   controlled per invocation, never mutated process-wide.

#![allow(dead_code, reason = "Shared helpers are reused across multiple test suites.")]
