// crates/user-conformance-core/src/runtime/state.rs
// ============================================================================
// Module: Scenario State Slot
// Description: Single-slot shared state threading the created entity id.
// Purpose: Make cross-scenario state explicit instead of ambient.
// Dependencies: crate::core::identifiers
// ============================================================================

//! ## Overview
//! The slot holds the identifier of the entity created by the creation
//! scenario. It starts vacant, becomes live after creation, and is marked
//! deleted (not cleared) by the deletion scenario; post-deletion scenarios
//! still read the identifier but must not treat it as referencing a live
//! entity. The slot is owned by the runner and passed into scenario bodies,
//! never global.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::UserId;

// ============================================================================
// SECTION: Phase
// ============================================================================

/// Lifecycle phase of the shared entity slot.
///
/// # Invariants
/// - Phases only advance: `Vacant` to `Live` to `Deleted`.
/// - The identifier survives the transition to `Deleted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntityPhase {
    /// No entity has been created in this run.
    #[default]
    Vacant,
    /// An entity was created and has not been deleted.
    Live(UserId),
    /// The created entity was deleted; the identifier is retained.
    Deleted(UserId),
}

// ============================================================================
// SECTION: Slot
// ============================================================================

/// Single-slot holder for the run's created entity identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntitySlot {
    /// Current phase, including the identifier once one exists.
    phase: EntityPhase,
}

impl EntitySlot {
    /// Creates a vacant slot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: EntityPhase::Vacant,
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> EntityPhase {
        self.phase
    }

    /// Records the identifier assigned by a successful creation.
    pub fn record_created(&mut self, id: UserId) {
        self.phase = EntityPhase::Live(id);
    }

    /// Marks the live entity as deleted, retaining its identifier.
    pub fn record_deleted(&mut self) {
        if let EntityPhase::Live(id) = self.phase {
            self.phase = EntityPhase::Deleted(id);
        }
    }

    /// Returns the identifier while the entity is live.
    #[must_use]
    pub fn live_id(&self) -> Option<UserId> {
        match self.phase() {
            EntityPhase::Live(id) => Some(id),
            EntityPhase::Vacant | EntityPhase::Deleted(_) => None,
        }
    }

    /// Returns the identifier after the entity was deleted.
    #[must_use]
    pub fn deleted_id(&self) -> Option<UserId> {
        match self.phase() {
            EntityPhase::Deleted(id) => Some(id),
            EntityPhase::Vacant | EntityPhase::Live(_) => None,
        }
    }
}
