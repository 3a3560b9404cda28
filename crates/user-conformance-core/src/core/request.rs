// crates/user-conformance-core/src/core/request.rs
// ============================================================================
// Module: Users Resource Request Shapes
// Description: Creation and partial-update request payloads.
// Purpose: Provide typed request bodies plus an explicit field list for updates.
// Dependencies: crate::core::user, serde, serde_json
// ============================================================================

//! ## Overview
//! Creation requests carry all four mutable fields. Partial updates carry an
//! explicit subset built from a field list; fields not named must be absent
//! from the serialized body so the remote leaves them untouched.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::core::user::Gender;
use crate::core::user::Status;

// ============================================================================
// SECTION: Creation Request
// ============================================================================

/// Request body for creating a Users entity.
///
/// # Invariants
/// - All four fields are required by the remote contract; empty or invalid
///   values are an expected 422 failure path, not a defect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name; must be non-empty to be accepted.
    pub name: String,
    /// Email address; must be syntactically valid and unique.
    pub email: String,
    /// Closed-enumeration gender value.
    pub gender: Gender,
    /// Closed-enumeration activation status.
    pub status: Status,
}

// ============================================================================
// SECTION: Partial Update
// ============================================================================

/// Mutable fields of a Users entity, used to name partial-update targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    /// The `name` field.
    Name,
    /// The `email` field.
    Email,
    /// The `gender` field.
    Gender,
    /// The `status` field.
    Status,
}

impl UserField {
    /// All mutable fields, in entity order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Gender, Self::Status];

    /// Returns the JSON member name for the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Gender => "gender",
            Self::Status => "status",
        }
    }
}

/// Request body for a partial update (`PATCH`).
///
/// # Invariants
/// - Contains exactly the fields named at construction; nothing else is
///   serialized, so unnamed fields remain unchanged remotely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartialUpdate(Map<String, Value>);

impl PartialUpdate {
    /// Creates an empty partial update.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Sets the new value for one field, replacing any prior value.
    pub fn set(&mut self, field: UserField, value: Value) {
        self.0.insert(field.as_str().to_string(), value);
    }

    /// Returns the value staged for a field, if the field is named.
    #[must_use]
    pub fn get(&self, field: UserField) -> Option<&Value> {
        self.0.get(field.as_str())
    }

    /// Returns the number of fields named by this update.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when no fields are named.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for PartialUpdate {
    fn default() -> Self {
        Self::new()
    }
}
