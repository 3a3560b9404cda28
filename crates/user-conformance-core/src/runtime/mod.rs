// crates/user-conformance-core/src/runtime/mod.rs
// ============================================================================
// Module: Scenario Runtime
// Description: Ordered scenario execution with single-slot shared state.
// Purpose: Sequence scenarios, enforce preconditions, and record outcomes.
// Dependencies: crate::{core, interfaces, synth, verify}
// ============================================================================

//! ## Overview
//! The runtime executes a fixed, ordered scenario plan. One slot of shared
//! state (the created entity identifier) threads from the create scenario
//! into every later scenario that targets "the existing entity". Failures
//! are local: the runner records them and continues, and scenarios whose
//! precondition depends on a failed earlier scenario degrade to precondition
//! failures instead of calling the API with an invalid identifier.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod plan;
pub mod runner;
pub mod state;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use plan::standard_plan;
pub use runner::FailureKind;
pub use runner::Precondition;
pub use runner::Scenario;
pub use runner::ScenarioContext;
pub use runner::ScenarioOutcome;
pub use runner::ScenarioRecord;
pub use runner::ScenarioRunner;
pub use runner::SuiteReport;
pub use state::EntityPhase;
pub use state::EntitySlot;
