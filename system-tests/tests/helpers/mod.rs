// system-tests/tests/helpers/mod.rs
// ============================================================================
// Module: System Test Helpers
// Description: Shared helpers for conformance system-test binaries.
// Purpose: Host artifact reporting used by the live suite.
// Dependencies: helpers/*
// ============================================================================

//! ## Overview
//! Shared helpers for conformance system-test binaries.

pub mod artifacts;
