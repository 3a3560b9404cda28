// crates/user-conformance-core/src/core/validation.rs
// ============================================================================
// Module: Validation Error Shape
// Description: Structured field/message entries returned on 422 responses.
// Purpose: Provide the typed shape for remote validation-failure bodies.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Validation failures arrive as an ordered JSON sequence of
//! `{field, message}` pairs. A request may produce zero or more entries; the
//! verifier asserts non-emptiness and, for specific causes such as duplicate
//! emails, the presence of a matching entry.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Error Entry
// ============================================================================

/// One validation failure reported by the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the rejected field.
    pub field: String,
    /// Human-readable rejection message.
    pub message: String,
}

impl FieldError {
    /// Returns true when this entry rejects the named field with a message
    /// containing the given fragment (case-sensitive, remote messages are
    /// stable in casing).
    #[must_use]
    pub fn matches(&self, field: &str, message_fragment: &str) -> bool {
        self.field == field && self.message.contains(message_fragment)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}
