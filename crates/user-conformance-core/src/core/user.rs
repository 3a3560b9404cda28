// crates/user-conformance-core/src/core/user.rs
// ============================================================================
// Module: Users Resource Entity
// Description: The Users entity and its closed enumerations.
// Purpose: Provide the typed response shape asserted by read and write scenarios.
// Dependencies: crate::core::identifiers, serde
// ============================================================================

//! ## Overview
//! The entity shape mirrors the remote JSON contract:
//! `{id, name, email, gender, status}`. Gender and status are closed
//! enumerations with lowercase wire forms; a body carrying any other value
//! fails typed decoding and is reported as a decode failure rather than being
//! smuggled through as a string.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::UserId;

// ============================================================================
// SECTION: Closed Enumerations
// ============================================================================

/// Gender values accepted by the Users resource.
///
/// # Invariants
/// - Wire form is lowercase (`male` / `female`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Wire form `male`.
    Male,
    /// Wire form `female`.
    Female,
}

impl Gender {
    /// All members of the enumeration, in wire order.
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    /// Returns the lowercase wire form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Activation status values accepted by the Users resource.
///
/// # Invariants
/// - Wire form is lowercase (`active` / `inactive`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Wire form `active`.
    Active,
    /// Wire form `inactive`.
    Inactive,
}

impl Status {
    /// All members of the enumeration, in wire order.
    pub const ALL: [Self; 2] = [Self::Active, Self::Inactive];

    /// Returns the lowercase wire form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Entity
// ============================================================================

/// A Users resource entity as returned by the remote API.
///
/// # Invariants
/// - `id` is server-assigned and immutable once created.
/// - `email` is unique across all entities; collisions are rejected remotely.
/// - `name` is non-empty for any entity the remote accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned identifier.
    pub id: UserId,
    /// Display name; non-empty.
    pub name: String,
    /// Unique email address.
    pub email: String,
    /// Closed-enumeration gender value.
    pub gender: Gender,
    /// Closed-enumeration activation status.
    pub status: Status,
}
