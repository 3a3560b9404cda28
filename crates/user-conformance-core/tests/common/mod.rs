// crates/user-conformance-core/tests/common/mod.rs
// ============================================================================
// Module: Runner Test Fakes
// Description: In-memory Users API fake and failing client for runner tests.
// Purpose: Exercise the scenario runtime hermetically, without a network.
// Dependencies: user-conformance-core, serde_json
// ============================================================================

//! ## Overview
//! `FakeUsersApi` implements the remote contract faithfully enough for the
//! full standard plan to pass against it: server-assigned identifiers,
//! email-uniqueness rejection, structured 422 bodies, varied not-found
//! phrasing, and empty 204 deletes. Behavior knobs let tests break the
//! contract on purpose, and per-verb call counts let tests prove that
//! precondition failures never reach the API.

use std::cell::RefCell;
use std::collections::BTreeMap;

use serde_json::Value;
use serde_json::json;
use user_conformance_core::Envelope;
use user_conformance_core::ResourceClient;
use user_conformance_core::TransportError;
use user_conformance_core::UserId;

/// Stored entity; fields stay raw strings to mimic the remote store.
#[derive(Debug, Clone)]
struct StoredUser {
    /// Display name.
    name: String,
    /// Unique email.
    email: String,
    /// Gender wire string.
    gender: String,
    /// Status wire string.
    status: String,
}

impl StoredUser {
    /// Renders the entity as the remote JSON shape.
    fn to_json(&self, id: u64) -> Value {
        json!({
            "id": id,
            "name": self.name,
            "email": self.email,
            "gender": self.gender,
            "status": self.status,
        })
    }
}

/// Mutable fake state behind the shared-reference client seam.
#[derive(Debug, Default)]
struct FakeState {
    /// Stored entities by identifier.
    users: BTreeMap<u64, StoredUser>,
    /// Next identifier to assign.
    next_id: u64,
    /// Per-verb call counts.
    calls: BTreeMap<&'static str, usize>,
}

/// In-memory fake of the remote Users API.
pub struct FakeUsersApi {
    /// Interior-mutable state; the suite is single-threaded by design.
    state: RefCell<FakeState>,
    /// When set, every create is rejected with a 422.
    pub reject_creates: bool,
}

impl FakeUsersApi {
    /// Creates an empty fake preloaded with one unrelated entity so list
    /// scenarios observe a non-empty collection.
    pub fn new() -> Self {
        let mut state = FakeState {
            next_id: 1000,
            ..FakeState::default()
        };
        state.users.insert(
            7,
            StoredUser {
                name: "Seed Resident".to_string(),
                email: "seed.resident@example.com".to_string(),
                gender: "female".to_string(),
                status: "active".to_string(),
            },
        );
        Self {
            state: RefCell::new(state),
            reject_creates: false,
        }
    }

    /// Returns how many times a verb was invoked.
    pub fn calls(&self, verb: &'static str) -> usize {
        *self.state.borrow().calls.get(verb).unwrap_or(&0)
    }

    /// Returns the number of stored entities.
    pub fn stored(&self) -> usize {
        self.state.borrow().users.len()
    }

    /// Records one invocation of a verb.
    fn count(&self, verb: &'static str) {
        *self.state.borrow_mut().calls.entry(verb).or_insert(0) += 1;
    }

    /// Validates a payload the way the remote does, ignoring `skip_email_of`
    /// when the email belongs to the entity being updated.
    fn validate(&self, payload: &Value, skip_email_of: Option<u64>) -> Vec<Value> {
        let mut errors = Vec::new();
        let name = payload.get("name").and_then(Value::as_str).unwrap_or_default();
        if name.is_empty() {
            errors.push(json!({"field": "name", "message": "can't be blank"}));
        }
        let email = payload.get("email").and_then(Value::as_str).unwrap_or_default();
        if !email.contains('@') {
            errors.push(json!({"field": "email", "message": "is invalid"}));
        } else {
            let taken = self.state.borrow().users.iter().any(|(id, user)| {
                user.email == email && skip_email_of != Some(*id)
            });
            if taken {
                errors.push(json!({"field": "email", "message": "has already been taken"}));
            }
        }
        let gender = payload.get("gender").and_then(Value::as_str).unwrap_or_default();
        if gender != "male" && gender != "female" {
            errors.push(json!({"field": "gender", "message": "can't be blank, can be male or female"}));
        }
        let status = payload.get("status").and_then(Value::as_str).unwrap_or_default();
        if status != "active" && status != "inactive" {
            errors.push(json!({"field": "status", "message": "can't be blank"}));
        }
        errors
    }

    /// Renders a 404 envelope with operation-varied phrasing.
    fn not_found(verb: &'static str) -> Envelope {
        let body = if verb == "remove" {
            json!({"message": "not found"})
        } else {
            json!({"message": "Resource not found"})
        };
        Envelope::new(404, body.to_string())
    }

    /// Renders a 422 envelope from an error list.
    fn unprocessable(errors: Vec<Value>) -> Envelope {
        Envelope::new(422, Value::Array(errors).to_string())
    }
}

impl Default for FakeUsersApi {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceClient for FakeUsersApi {
    fn list(&self) -> Result<Envelope, TransportError> {
        self.count("list");
        let state = self.state.borrow();
        let users: Vec<Value> =
            state.users.iter().map(|(id, user)| user.to_json(*id)).collect();
        Ok(Envelope::new(200, Value::Array(users).to_string()))
    }

    fn create(&self, payload: &Value) -> Result<Envelope, TransportError> {
        self.count("create");
        if self.reject_creates {
            return Ok(Self::unprocessable(vec![
                json!({"field": "base", "message": "creation disabled"}),
            ]));
        }
        let errors = self.validate(payload, None);
        if !errors.is_empty() {
            return Ok(Self::unprocessable(errors));
        }
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let id = state.next_id;
        let user = StoredUser {
            name: field(payload, "name"),
            email: field(payload, "email"),
            gender: field(payload, "gender"),
            status: field(payload, "status"),
        };
        let body = user.to_json(id).to_string();
        state.users.insert(id, user);
        Ok(Envelope::new(201, body))
    }

    fn get(&self, id: UserId) -> Result<Envelope, TransportError> {
        self.count("get");
        let state = self.state.borrow();
        state.users.get(&id.get()).map_or_else(
            || Ok(Self::not_found("get")),
            |user| Ok(Envelope::new(200, user.to_json(id.get()).to_string())),
        )
    }

    fn replace(&self, id: UserId, payload: &Value) -> Result<Envelope, TransportError> {
        self.count("replace");
        if !self.state.borrow().users.contains_key(&id.get()) {
            return Ok(Self::not_found("replace"));
        }
        let errors = self.validate(payload, Some(id.get()));
        if !errors.is_empty() {
            return Ok(Self::unprocessable(errors));
        }
        let user = StoredUser {
            name: field(payload, "name"),
            email: field(payload, "email"),
            gender: field(payload, "gender"),
            status: field(payload, "status"),
        };
        let body = user.to_json(id.get()).to_string();
        self.state.borrow_mut().users.insert(id.get(), user);
        Ok(Envelope::new(200, body))
    }

    fn modify(&self, id: UserId, payload: &Value) -> Result<Envelope, TransportError> {
        self.count("modify");
        let Some(mut user) = self.state.borrow().users.get(&id.get()).cloned() else {
            return Ok(Self::not_found("modify"));
        };
        if let Some(name) = payload.get("name").and_then(Value::as_str) {
            user.name = name.to_string();
        }
        if let Some(email) = payload.get("email").and_then(Value::as_str) {
            user.email = email.to_string();
        }
        if let Some(gender) = payload.get("gender").and_then(Value::as_str) {
            user.gender = gender.to_string();
        }
        if let Some(status) = payload.get("status").and_then(Value::as_str) {
            user.status = status.to_string();
        }
        let body = user.to_json(id.get()).to_string();
        self.state.borrow_mut().users.insert(id.get(), user);
        Ok(Envelope::new(200, body))
    }

    fn remove(&self, id: UserId) -> Result<Envelope, TransportError> {
        self.count("remove");
        let removed = self.state.borrow_mut().users.remove(&id.get());
        if removed.is_none() {
            return Ok(Self::not_found("remove"));
        }
        Ok(Envelope::new(204, ""))
    }
}

/// Extracts a string field from a validated payload.
fn field(payload: &Value, name: &str) -> String {
    payload.get(name).and_then(Value::as_str).unwrap_or_default().to_string()
}

/// Client whose every operation fails at the transport layer.
pub struct UnreachableApi;

impl ResourceClient for UnreachableApi {
    fn list(&self) -> Result<Envelope, TransportError> {
        Err(TransportError::Send("connection refused".to_string()))
    }

    fn create(&self, _payload: &Value) -> Result<Envelope, TransportError> {
        Err(TransportError::Send("connection refused".to_string()))
    }

    fn get(&self, _id: UserId) -> Result<Envelope, TransportError> {
        Err(TransportError::Send("connection refused".to_string()))
    }

    fn replace(&self, _id: UserId, _payload: &Value) -> Result<Envelope, TransportError> {
        Err(TransportError::Send("connection refused".to_string()))
    }

    fn modify(&self, _id: UserId, _payload: &Value) -> Result<Envelope, TransportError> {
        Err(TransportError::Send("connection refused".to_string()))
    }

    fn remove(&self, _id: UserId) -> Result<Envelope, TransportError> {
        Err(TransportError::Send("connection refused".to_string()))
    }
}
