// crates/user-conformance-core/src/verify.rs
// ============================================================================
// Module: Response Verifier
// Description: Envelope decoding and assertion helpers.
// Purpose: Turn raw envelopes into typed values and structured scenario failures.
// Dependencies: crate::{core, interfaces}, serde, serde_json
// ============================================================================

//! ## Overview
//! The verifier owns all response interpretation. Status mismatches, decode
//! failures, and field-level assertion failures are distinct
//! [`ScenarioError`] variants so reports show exactly which layer of the
//! contract broke. Closed-enumeration membership for read scenarios falls out
//! of typed decoding: a body with an out-of-enumeration gender or status
//! fails [`decode_user`] rather than reaching the assertion layer.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::CreateUser;
use crate::core::Envelope;
use crate::core::FieldError;
use crate::core::PartialUpdate;
use crate::core::User;
use crate::core::UserField;
use crate::interfaces::ScenarioError;

// ============================================================================
// SECTION: Contract Constants
// ============================================================================

/// Accepted not-found phrasings; the remote varies its message by operation.
///
/// The match is a case-insensitive substring check on purpose: the remote's
/// error format is not fully stable, and pinning an exact string would turn a
/// wording tweak into a spurious contract failure. A real contract change
/// shows up here as a one-line diff.
pub const NOT_FOUND_PHRASES: [&str; 2] = ["resource not found", "not found"];

/// Message fragment the remote attaches to duplicate-email rejections.
pub const DUPLICATE_EMAIL_FRAGMENT: &str = "has already been taken";

// ============================================================================
// SECTION: Status Assertions
// ============================================================================

/// Asserts the envelope carries the expected status code.
///
/// # Errors
///
/// Returns [`ScenarioError::UnexpectedStatus`] carrying both statuses and the
/// raw body when they differ.
pub fn expect_status(envelope: &Envelope, expected: u16) -> Result<(), ScenarioError> {
    if envelope.status == expected {
        return Ok(());
    }
    Err(ScenarioError::UnexpectedStatus {
        expected,
        actual: envelope.status,
        body: envelope.body.clone(),
    })
}

/// Asserts a 204 deletion response with an empty body.
///
/// # Errors
///
/// Returns [`ScenarioError`] when the status is not 204 or a body is present.
pub fn expect_deleted(envelope: &Envelope) -> Result<(), ScenarioError> {
    expect_status(envelope, 204)?;
    if envelope.body_is_blank() {
        return Ok(());
    }
    Err(ScenarioError::Assertion(format!(
        "delete returned a non-empty body: {}",
        envelope.body
    )))
}

/// Asserts a 404 response whose body matches an accepted not-found phrasing.
///
/// # Errors
///
/// Returns [`ScenarioError`] when the status is not 404 or no phrase matches.
pub fn expect_not_found(envelope: &Envelope) -> Result<(), ScenarioError> {
    expect_status(envelope, 404)?;
    let lowered = envelope.body.to_lowercase();
    if NOT_FOUND_PHRASES.iter().any(|phrase| lowered.contains(phrase)) {
        return Ok(());
    }
    Err(ScenarioError::Assertion(format!(
        "404 body does not contain an accepted not-found phrase: {}",
        envelope.body
    )))
}

// ============================================================================
// SECTION: Decoding
// ============================================================================

/// Decodes an envelope body into a typed value.
fn decode<T: DeserializeOwned>(envelope: &Envelope, detail: &str) -> Result<T, ScenarioError> {
    serde_json::from_str(&envelope.body).map_err(|err| ScenarioError::Decode {
        detail: format!("{detail}: {err}"),
        body: envelope.body.clone(),
    })
}

/// Decodes the body as a single entity.
///
/// # Errors
///
/// Returns [`ScenarioError::Decode`] with the raw body when the shape does
/// not match, including out-of-enumeration gender or status values.
pub fn decode_user(envelope: &Envelope) -> Result<User, ScenarioError> {
    decode(envelope, "user entity")
}

/// Decodes the body as a list of entities.
///
/// # Errors
///
/// Returns [`ScenarioError::Decode`] with the raw body when the shape does
/// not match.
pub fn decode_users(envelope: &Envelope) -> Result<Vec<User>, ScenarioError> {
    decode(envelope, "user list")
}

/// Decodes the body as an ordered validation-error list and asserts it is
/// non-empty.
///
/// # Errors
///
/// Returns [`ScenarioError::Decode`] when the shape does not match and
/// [`ScenarioError::Assertion`] when the list is empty.
pub fn expect_validation_errors(envelope: &Envelope) -> Result<Vec<FieldError>, ScenarioError> {
    let errors: Vec<FieldError> = decode(envelope, "validation error list")?;
    if errors.is_empty() {
        return Err(ScenarioError::Assertion(
            "validation failure carried an empty error list".to_string(),
        ));
    }
    Ok(errors)
}

// ============================================================================
// SECTION: Field Assertions
// ============================================================================

/// Returns the wire-form value of one entity field.
fn field_value(user: &User, field: UserField) -> &str {
    match field {
        UserField::Name => &user.name,
        UserField::Email => &user.email,
        UserField::Gender => user.gender.as_str(),
        UserField::Status => user.status.as_str(),
    }
}

/// Asserts field-level equality between an entity and the creation payload
/// that produced it (also used for full replacements).
///
/// # Errors
///
/// Returns [`ScenarioError::Assertion`] naming the first mismatched field.
pub fn expect_user_matches(user: &User, payload: &CreateUser) -> Result<(), ScenarioError> {
    let expectations = [
        (UserField::Name, payload.name.as_str()),
        (UserField::Email, payload.email.as_str()),
        (UserField::Gender, payload.gender.as_str()),
        (UserField::Status, payload.status.as_str()),
    ];
    for (field, expected) in expectations {
        let actual = field_value(user, field);
        if actual != expected {
            return Err(ScenarioError::Assertion(format!(
                "{} mismatch: expected '{expected}', got '{actual}'",
                field.as_str()
            )));
        }
    }
    Ok(())
}

/// Asserts a partial update took effect: named fields equal the staged
/// values, unnamed fields are non-empty. Unnamed fields are not compared to
/// any prior value because the prior value was itself randomized.
///
/// # Errors
///
/// Returns [`ScenarioError::Assertion`] naming the first failing field.
pub fn expect_partial_applied(user: &User, update: &PartialUpdate) -> Result<(), ScenarioError> {
    for field in UserField::ALL {
        let actual = field_value(user, field);
        match update.get(field) {
            Some(Value::String(expected)) => {
                if actual != expected.as_str() {
                    return Err(ScenarioError::Assertion(format!(
                        "{} mismatch after partial update: expected '{expected}', got '{actual}'",
                        field.as_str()
                    )));
                }
            }
            Some(other) => {
                return Err(ScenarioError::Assertion(format!(
                    "{} staged a non-string value: {other}",
                    field.as_str()
                )));
            }
            None => {
                if actual.is_empty() {
                    return Err(ScenarioError::Assertion(format!(
                        "untouched field {} became empty after partial update",
                        field.as_str()
                    )));
                }
            }
        }
    }
    Ok(())
}

/// Asserts the error list pins the duplicate-email cause: an entry whose
/// field is `email` and whose message contains the known fragment.
///
/// # Errors
///
/// Returns [`ScenarioError::Assertion`] listing the entries when none match.
pub fn expect_duplicate_email(errors: &[FieldError]) -> Result<(), ScenarioError> {
    if errors.iter().any(|entry| entry.matches("email", DUPLICATE_EMAIL_FRAGMENT)) {
        return Ok(());
    }
    let seen = errors.iter().map(ToString::to_string).collect::<Vec<String>>().join("; ");
    Err(ScenarioError::Assertion(format!(
        "no duplicate-email entry in validation errors: {seen}"
    )))
}
