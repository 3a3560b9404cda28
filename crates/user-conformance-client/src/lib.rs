// crates/user-conformance-client/src/lib.rs
// ============================================================================
// Module: User Conformance Client Library
// Description: Blocking HTTP implementation of the resource-client seam.
// Purpose: Expose the HTTP client and its configuration.
// Dependencies: crate::http
// ============================================================================

//! ## Overview
//! This crate implements the [`user_conformance_core::ResourceClient`] seam
//! over blocking HTTP. Requests are bounded by a configured timeout and
//! response-size limit, redirects are not followed, and transport failures
//! surface as `TransportError` rather than synthetic envelopes.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod http;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use http::HttpResourceClient;
pub use http::ResourceClientConfig;
