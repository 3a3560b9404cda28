// crates/user-conformance-core/src/runtime/plan.rs
// ============================================================================
// Module: Standard Scenario Plan
// Description: The ordered CRUD conformance scenarios for the Users resource.
// Purpose: Define the fixed total order and each scenario body.
// Dependencies: crate::{core, interfaces, runtime, verify}, serde_json
// ============================================================================

//! ## Overview
//! The standard plan exercises the Users resource end to end: list, create
//! (capturing the identifier into the shared slot), read, replace, partial
//! update, the 404 family against a missing identifier, the 422 family for
//! invalid and duplicate payloads, then delete and read-after-delete. The
//! duplicate-email scenario is self-contained: it creates its own fixtures
//! and deletes them before asserting, so it holds at any plan position.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::num::NonZeroU64;

use serde_json::Value;

use crate::core::CreateUser;
use crate::core::FieldError;
use crate::core::UserField;
use crate::core::UserId;
use crate::interfaces::ScenarioError;
use crate::runtime::runner::Precondition;
use crate::runtime::runner::Scenario;
use crate::runtime::runner::ScenarioContext;
use crate::verify;

// ============================================================================
// SECTION: Plan Constants
// ============================================================================

/// Identifier far outside the remote's assigned range, used by 404 scenarios.
const MISSING_ID: UserId = UserId::new(NonZeroU64::MIN.saturating_add(999_999_998));

/// Serializes a request payload for submission.
fn to_body<T: serde::Serialize>(payload: &T) -> Result<Value, ScenarioError> {
    serde_json::to_value(payload).map_err(|err| ScenarioError::Payload(err.to_string()))
}

// ============================================================================
// SECTION: Plan
// ============================================================================

/// Returns the standard ordered conformance plan.
#[must_use]
pub fn standard_plan() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "list_users",
            precondition: Precondition::None,
            run: list_users,
        },
        Scenario {
            name: "create_user",
            precondition: Precondition::None,
            run: create_user,
        },
        Scenario {
            name: "read_created_user",
            precondition: Precondition::LiveEntity,
            run: read_created_user,
        },
        Scenario {
            name: "replace_user",
            precondition: Precondition::LiveEntity,
            run: replace_user,
        },
        Scenario {
            name: "partially_update_user",
            precondition: Precondition::LiveEntity,
            run: partially_update_user,
        },
        Scenario {
            name: "read_missing_user",
            precondition: Precondition::None,
            run: read_missing_user,
        },
        Scenario {
            name: "replace_missing_user",
            precondition: Precondition::None,
            run: replace_missing_user,
        },
        Scenario {
            name: "delete_missing_user",
            precondition: Precondition::None,
            run: delete_missing_user,
        },
        Scenario {
            name: "create_invalid_user",
            precondition: Precondition::None,
            run: create_invalid_user,
        },
        Scenario {
            name: "create_duplicate_email",
            precondition: Precondition::None,
            run: create_duplicate_email,
        },
        Scenario {
            name: "delete_user",
            precondition: Precondition::LiveEntity,
            run: delete_user,
        },
        Scenario {
            name: "read_deleted_user",
            precondition: Precondition::DeletedEntity,
            run: read_deleted_user,
        },
    ]
}

// ============================================================================
// SECTION: Read Scenarios
// ============================================================================

/// Lists all users and spot-checks the decoded shape.
fn list_users(ctx: &mut ScenarioContext<'_>) -> Result<Vec<String>, ScenarioError> {
    let envelope = ctx.client.list()?;
    verify::expect_status(&envelope, 200)?;
    let users = verify::decode_users(&envelope)?;
    if users.is_empty() {
        return Err(ScenarioError::Assertion("user list is empty".to_string()));
    }
    Ok(vec![format!("listed {} users", users.len())])
}

/// Reads the created entity and checks identifier and shape.
fn read_created_user(ctx: &mut ScenarioContext<'_>) -> Result<Vec<String>, ScenarioError> {
    let id = ctx.live_id()?;
    let envelope = ctx.client.get(id)?;
    verify::expect_status(&envelope, 200)?;
    let user = verify::decode_user(&envelope)?;
    if user.id != id {
        return Err(ScenarioError::Assertion(format!(
            "read returned identifier {} for requested {id}",
            user.id
        )));
    }
    if user.name.is_empty() || user.email.is_empty() {
        return Err(ScenarioError::Assertion("read entity has empty name or email".to_string()));
    }
    Ok(vec![format!("entity {id} readable with well-formed fields")])
}

// ============================================================================
// SECTION: Write Scenarios
// ============================================================================

/// Creates an entity, verifies the echo, and re-reads it immediately.
fn create_user(ctx: &mut ScenarioContext<'_>) -> Result<Vec<String>, ScenarioError> {
    let payload = ctx.factory.create_user();
    let envelope = ctx.client.create(&to_body(&payload)?)?;
    verify::expect_status(&envelope, 201)?;
    let created = verify::decode_user(&envelope)?;
    verify::expect_user_matches(&created, &payload)?;
    ctx.slot.record_created(created.id);

    let reread = ctx.client.get(created.id)?;
    verify::expect_status(&reread, 200)?;
    let fetched = verify::decode_user(&reread)?;
    verify::expect_user_matches(&fetched, &payload)?;
    Ok(vec![
        format!("created entity {}", created.id),
        "immediate re-read matches creation payload".to_string(),
    ])
}

/// Replaces all mutable fields and verifies response and re-read consistency.
fn replace_user(ctx: &mut ScenarioContext<'_>) -> Result<Vec<String>, ScenarioError> {
    let id = ctx.live_id()?;
    let replacement = ctx.factory.create_user();
    let envelope = ctx.client.replace(id, &to_body(&replacement)?)?;
    verify::expect_status(&envelope, 200)?;
    let updated = verify::decode_user(&envelope)?;
    verify::expect_user_matches(&updated, &replacement)?;

    let reread = ctx.client.get(id)?;
    verify::expect_status(&reread, 200)?;
    let fetched = verify::decode_user(&reread)?;
    verify::expect_user_matches(&fetched, &replacement)?;
    Ok(vec![format!("entity {id} fully replaced and consistent on re-read")])
}

/// Updates only name and status; email and gender must survive untouched.
fn partially_update_user(ctx: &mut ScenarioContext<'_>) -> Result<Vec<String>, ScenarioError> {
    let id = ctx.live_id()?;
    let update = ctx.factory.partial_update(&[UserField::Name, UserField::Status]);
    let envelope = ctx.client.modify(id, &to_body(&update)?)?;
    verify::expect_status(&envelope, 200)?;
    let updated = verify::decode_user(&envelope)?;
    verify::expect_partial_applied(&updated, &update)?;
    Ok(vec![format!("entity {id} partially updated on name and status")])
}

/// Deletes the created entity; 204 with an empty body.
fn delete_user(ctx: &mut ScenarioContext<'_>) -> Result<Vec<String>, ScenarioError> {
    let id = ctx.live_id()?;
    let envelope = ctx.client.remove(id)?;
    verify::expect_deleted(&envelope)?;
    ctx.slot.record_deleted();
    Ok(vec![format!("entity {id} deleted with empty 204 body")])
}

// ============================================================================
// SECTION: Not-Found Scenarios
// ============================================================================

/// Reads an identifier that was never assigned.
fn read_missing_user(ctx: &mut ScenarioContext<'_>) -> Result<Vec<String>, ScenarioError> {
    let envelope = ctx.client.get(MISSING_ID)?;
    verify::expect_not_found(&envelope)?;
    Ok(vec![format!("read of {MISSING_ID} rejected as not found")])
}

/// Replaces an identifier that was never assigned.
fn replace_missing_user(ctx: &mut ScenarioContext<'_>) -> Result<Vec<String>, ScenarioError> {
    let payload = ctx.factory.create_user();
    let envelope = ctx.client.replace(MISSING_ID, &to_body(&payload)?)?;
    verify::expect_not_found(&envelope)?;
    Ok(vec![format!("replace of {MISSING_ID} rejected as not found")])
}

/// Deletes an identifier that was never assigned.
fn delete_missing_user(ctx: &mut ScenarioContext<'_>) -> Result<Vec<String>, ScenarioError> {
    let envelope = ctx.client.remove(MISSING_ID)?;
    verify::expect_not_found(&envelope)?;
    Ok(vec![format!("delete of {MISSING_ID} rejected as not found")])
}

/// Reads the deleted entity's identifier; it must be gone.
fn read_deleted_user(ctx: &mut ScenarioContext<'_>) -> Result<Vec<String>, ScenarioError> {
    let id = ctx.deleted_id()?;
    let envelope = ctx.client.get(id)?;
    verify::expect_not_found(&envelope)?;
    Ok(vec![format!("deleted entity {id} is no longer readable")])
}

// ============================================================================
// SECTION: Validation Scenarios
// ============================================================================

/// Submits an all-invalid creation payload and expects a structured 422.
fn create_invalid_user(ctx: &mut ScenarioContext<'_>) -> Result<Vec<String>, ScenarioError> {
    let envelope = ctx.client.create(&ctx.factory.invalid_user())?;
    verify::expect_status(&envelope, 422)?;
    let errors = verify::expect_validation_errors(&envelope)?;
    Ok(vec![format!("invalid creation rejected with {} field errors", errors.len())])
}

/// Creates two entities sharing one email; the second must be rejected with
/// a duplicate-email entry. Self-contained: the fixture entity is deleted
/// before the assertions so no state leaks whatever the outcome.
fn create_duplicate_email(ctx: &mut ScenarioContext<'_>) -> Result<Vec<String>, ScenarioError> {
    let original = ctx.factory.create_user();
    let envelope = ctx.client.create(&to_body(&original)?)?;
    verify::expect_status(&envelope, 201)?;
    let fixture = verify::decode_user(&envelope)?;

    let mut duplicate = ctx.factory.create_user();
    duplicate.email.clone_from(&original.email);
    let duplicate_result = duplicate_create(ctx, &duplicate);

    let cleanup = ctx.client.remove(fixture.id)?;
    verify::expect_deleted(&cleanup)?;

    let errors = duplicate_result?;
    verify::expect_duplicate_email(&errors)?;
    Ok(vec![
        format!("duplicate of {} rejected with email collision entry", original.email),
        format!("fixture entity {} cleaned up", fixture.id),
    ])
}

/// Submits the colliding creation and decodes its validation errors.
fn duplicate_create(
    ctx: &mut ScenarioContext<'_>,
    duplicate: &CreateUser,
) -> Result<Vec<FieldError>, ScenarioError> {
    let envelope = ctx.client.create(&to_body(duplicate)?)?;
    verify::expect_status(&envelope, 422)?;
    verify::expect_validation_errors(&envelope)
}
