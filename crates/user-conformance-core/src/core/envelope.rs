// crates/user-conformance-core/src/core/envelope.rs
// ============================================================================
// Module: Response Envelope
// Description: Raw status-plus-body pair returned by the resource client.
// Purpose: Carry uninterpreted responses from transport to verification.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The envelope is the client's entire output: an HTTP status code and the
//! raw body text. The client never interprets either; decoding and assertion
//! belong to the verifier, keeping "API returned an error status" cleanly
//! separate from "request did not complete".

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Envelope
// ============================================================================

/// Raw response envelope: status code plus uninterpreted body text.
///
/// # Invariants
/// - `status` is the HTTP status as received; no classification is applied.
/// - `body` is the full response text, bounded by the client's size limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// HTTP status code as received.
    pub status: u16,
    /// Raw response body text.
    pub body: String,
}

impl Envelope {
    /// Creates an envelope from a status code and body text.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true when the body is empty or whitespace only.
    #[must_use]
    pub fn body_is_blank(&self) -> bool {
        self.body.trim().is_empty()
    }
}
