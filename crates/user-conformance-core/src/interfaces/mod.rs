// crates/user-conformance-core/src/interfaces/mod.rs
// ============================================================================
// Module: User Conformance Interfaces
// Description: Backend-agnostic client seam and scenario error taxonomy.
// Purpose: Define the contract surfaces used by the scenario runtime.
// Dependencies: crate::core, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Interfaces define how the scenario runtime reaches the remote Users API
//! without embedding transport details. Implementations must propagate
//! transport-level failures as [`TransportError`] rather than synthesizing
//! empty envelopes, so callers can always distinguish "API returned an error
//! status" from "request did not complete".

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use thiserror::Error;

use crate::core::Envelope;
use crate::core::UserId;

// ============================================================================
// SECTION: Transport Errors
// ============================================================================

/// Transport-level failures raised by resource clients.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - Never used to represent an HTTP error status; those arrive as envelopes.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be constructed (bad URL, serialization).
    #[error("request build failed: {0}")]
    Build(String),
    /// The request was sent but did not complete (timeout, connection error).
    #[error("request did not complete: {0}")]
    Send(String),
    /// The response body could not be read within configured limits.
    #[error("response read failed: {0}")]
    Read(String),
}

// ============================================================================
// SECTION: Resource Client
// ============================================================================

/// Backend-agnostic client for the five Users CRUD verbs.
///
/// Each operation takes the minimal required input and returns the raw
/// [`Envelope`] without interpretation. Payloads are JSON values so negative
/// scenarios can submit shapes the typed request structs cannot express.
pub trait ResourceClient {
    /// Lists all entities (`GET /users`).
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the request does not complete.
    fn list(&self) -> Result<Envelope, TransportError>;

    /// Creates an entity (`POST /users`).
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the request does not complete.
    fn create(&self, payload: &Value) -> Result<Envelope, TransportError>;

    /// Fetches one entity by identifier (`GET /users/{id}`).
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the request does not complete.
    fn get(&self, id: UserId) -> Result<Envelope, TransportError>;

    /// Replaces all mutable fields of an entity (`PUT /users/{id}`).
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the request does not complete.
    fn replace(&self, id: UserId, payload: &Value) -> Result<Envelope, TransportError>;

    /// Updates a subset of fields of an entity (`PATCH /users/{id}`).
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the request does not complete.
    fn modify(&self, id: UserId, payload: &Value) -> Result<Envelope, TransportError>;

    /// Deletes an entity (`DELETE /users/{id}`).
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the request does not complete.
    fn remove(&self, id: UserId) -> Result<Envelope, TransportError>;
}

// ============================================================================
// SECTION: Scenario Errors
// ============================================================================

/// Failure taxonomy for one scenario.
///
/// # Invariants
/// - Variants are stable for programmatic handling and reporting.
/// - Each failure is local to the scenario that raised it; the runner records
///   it and continues.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// Required prior state was absent; no remote call was made.
    #[error("precondition failed: {0}")]
    Precondition(String),
    /// Remote status differed from the scenario's expectation.
    #[error("expected status {expected}, got {actual}: {body}")]
    UnexpectedStatus {
        /// Status the scenario expected.
        expected: u16,
        /// Status the remote returned.
        actual: u16,
        /// Raw response body for diagnosis.
        body: String,
    },
    /// Response body did not match the expected shape.
    #[error("decode failed ({detail}): {body}")]
    Decode {
        /// What failed to decode.
        detail: String,
        /// Raw response body for diagnosis.
        body: String,
    },
    /// A decoded value failed a field-level or membership check.
    #[error("assertion failed: {0}")]
    Assertion(String),
    /// The request did not complete; distinct from any HTTP status.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// A payload could not be serialized for submission.
    #[error("payload serialization failed: {0}")]
    Payload(String),
}
