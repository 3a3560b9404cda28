// crates/user-conformance-core/src/synth.rs
// ============================================================================
// Module: Synthetic Payload Factory
// Description: Contract-valid and deliberately invalid Users payloads.
// Purpose: Generate unique creation payloads and explicit partial updates.
// Dependencies: crate::core, rand, serde_json
// ============================================================================

//! ## Overview
//! Several scenarios depend on email uniqueness, so generated addresses embed
//! a per-process millisecond stamp plus a process-wide sequence number; two
//! calls within one suite run can never collide. Gender and status are drawn
//! pseudo-randomly from their closed enumerations. The factory has no side
//! effects beyond pseudo-random value generation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use rand::Rng;
use rand::thread_rng;
use serde_json::Value;
use serde_json::json;

use crate::core::CreateUser;
use crate::core::Gender;
use crate::core::PartialUpdate;
use crate::core::Status;
use crate::core::UserField;

// ============================================================================
// SECTION: Uniqueness State
// ============================================================================

/// Process-wide sequence shared by all factories.
static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Returns the next process-wide sequence number.
fn next_sequence() -> u64 {
    SEQUENCE.fetch_add(1, Ordering::Relaxed)
}

/// Returns milliseconds since the Unix epoch for stamping generated values.
fn now_millis() -> u128 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis()
}

// ============================================================================
// SECTION: Payload Factory
// ============================================================================

/// Name stems used for generated display names.
const NAME_STEMS: [&str; 4] = ["Asha Verma", "Jonas Pirkl", "Mirela Costa", "Tomas Lindqvist"];

/// Factory for synthetic Users payloads.
///
/// # Invariants
/// - Generated emails never collide within a process lifetime.
/// - Generated enum values are always members of the closed enumerations.
/// - Generated names are never empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayloadFactory;

impl PayloadFactory {
    /// Creates a payload factory.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Produces a contract-valid creation payload with a unique email.
    #[must_use]
    pub fn create_user(&self) -> CreateUser {
        let seq = next_sequence();
        CreateUser {
            name: self.fresh_name(seq),
            email: self.fresh_email(seq),
            gender: self.fresh_gender(),
            status: self.fresh_status(),
        }
    }

    /// Produces a partial update naming exactly the requested fields, each
    /// with a freshly generated valid value.
    #[must_use]
    pub fn partial_update(&self, fields: &[UserField]) -> PartialUpdate {
        let mut update = PartialUpdate::new();
        for field in fields {
            let seq = next_sequence();
            let value = match field {
                UserField::Name => Value::String(self.fresh_name(seq)),
                UserField::Email => Value::String(self.fresh_email(seq)),
                UserField::Gender => Value::String(self.fresh_gender().as_str().to_string()),
                UserField::Status => Value::String(self.fresh_status().as_str().to_string()),
            };
            update.set(*field, value);
        }
        update
    }

    /// Produces a creation payload invalid in every field: empty name,
    /// malformed email, and out-of-enumeration gender and status.
    #[must_use]
    pub fn invalid_user(&self) -> Value {
        json!({
            "name": "",
            "email": "not-an-email",
            "gender": "unspecified",
            "status": "paused",
        })
    }

    /// Returns a non-empty display name carrying the uniquifying sequence.
    fn fresh_name(&self, seq: u64) -> String {
        let stem = NAME_STEMS[thread_rng().gen_range(0..NAME_STEMS.len())];
        format!("{stem} {seq}")
    }

    /// Returns an email unique for the process lifetime.
    fn fresh_email(&self, seq: u64) -> String {
        format!("qa.user.{}.{seq}@example.com", now_millis())
    }

    /// Draws a gender from the closed enumeration.
    fn fresh_gender(&self) -> Gender {
        if thread_rng().gen_bool(0.5) { Gender::Male } else { Gender::Female }
    }

    /// Draws a status from the closed enumeration.
    fn fresh_status(&self) -> Status {
        if thread_rng().gen_bool(0.5) { Status::Active } else { Status::Inactive }
    }
}
