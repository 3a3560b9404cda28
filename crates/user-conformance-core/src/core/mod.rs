// crates/user-conformance-core/src/core/mod.rs
// ============================================================================
// Module: User Conformance Core Types
// Description: Canonical Users resource and wire-shape structures.
// Purpose: Provide stable, serializable types for requests, responses, and errors.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Core types define the Users resource entity, creation and update request
//! shapes, the raw response envelope, and the structured validation-error
//! shape. These types are the canonical source of truth for everything the
//! verifier asserts against.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod envelope;
pub mod identifiers;
pub mod request;
pub mod user;
pub mod validation;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use envelope::Envelope;
pub use identifiers::UserId;
pub use request::CreateUser;
pub use request::PartialUpdate;
pub use request::UserField;
pub use user::Gender;
pub use user::Status;
pub use user::User;
pub use validation::FieldError;
