// crates/user-conformance-core/src/runtime/runner.rs
// ============================================================================
// Module: Ordered Scenario Runner
// Description: Fixed-total-order scenario execution and outcome recording.
// Purpose: Enforce preconditions, thread shared state, and continue on failure.
// Dependencies: crate::{core, interfaces, runtime::state, synth}, serde
// ============================================================================

//! ## Overview
//! Scenarios execute strictly sequentially in plan order; state produced by
//! scenario *k* is visible to scenarios *k+1..n*. A scenario that requires
//! prior state is checked before its body runs and fails immediately with a
//! precondition error when the state is absent, rather than proceeding into a
//! confusing downstream failure. All outcomes land in a serializable report;
//! nothing aborts the suite and nothing is retried.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Serialize;

use crate::core::UserId;
use crate::interfaces::ResourceClient;
use crate::interfaces::ScenarioError;
use crate::runtime::state::EntityPhase;
use crate::runtime::state::EntitySlot;
use crate::synth::PayloadFactory;

// ============================================================================
// SECTION: Preconditions
// ============================================================================

/// Shared-state requirement checked before a scenario body runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    /// The scenario is self-contained; any slot phase is acceptable.
    None,
    /// The created entity must exist and not have been deleted.
    LiveEntity,
    /// The created entity must have been deleted (identifier retained).
    DeletedEntity,
}

impl Precondition {
    /// Checks the requirement against the current slot phase.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Precondition`] describing the missing state.
    pub fn check(self, slot: &EntitySlot) -> Result<(), ScenarioError> {
        match (self, slot.phase()) {
            (Self::None, _) | (Self::LiveEntity, EntityPhase::Live(_)) => Ok(()),
            (Self::DeletedEntity, EntityPhase::Deleted(_)) => Ok(()),
            (Self::LiveEntity, EntityPhase::Vacant) => Err(ScenarioError::Precondition(
                "no entity has been created in this run".to_string(),
            )),
            (Self::LiveEntity, EntityPhase::Deleted(id)) => Err(ScenarioError::Precondition(
                format!("entity {id} was already deleted"),
            )),
            (Self::DeletedEntity, EntityPhase::Vacant) => Err(ScenarioError::Precondition(
                "no entity was created, so none was deleted".to_string(),
            )),
            (Self::DeletedEntity, EntityPhase::Live(id)) => Err(ScenarioError::Precondition(
                format!("entity {id} is still live"),
            )),
        }
    }
}

// ============================================================================
// SECTION: Scenario Context
// ============================================================================

/// Everything a scenario body may touch: the client, the shared slot, and
/// the payload factory.
pub struct ScenarioContext<'a> {
    /// Resource client for remote calls.
    pub client: &'a dyn ResourceClient,
    /// Shared single-slot scenario state.
    pub slot: &'a mut EntitySlot,
    /// Synthetic payload factory.
    pub factory: PayloadFactory,
}

impl ScenarioContext<'_> {
    /// Returns the live entity identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Precondition`] when no live entity exists,
    /// so bodies reading the slot degrade the same way the runner-level
    /// check does.
    pub fn live_id(&self) -> Result<UserId, ScenarioError> {
        self.slot.live_id().ok_or_else(|| {
            ScenarioError::Precondition("no live entity identifier available".to_string())
        })
    }

    /// Returns the deleted entity identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Precondition`] when no deleted entity exists.
    pub fn deleted_id(&self) -> Result<UserId, ScenarioError> {
        self.slot.deleted_id().ok_or_else(|| {
            ScenarioError::Precondition("no deleted entity identifier available".to_string())
        })
    }
}

/// Scenario body: performs calls and assertions, returns pass notes.
type ScenarioFn = fn(&mut ScenarioContext<'_>) -> Result<Vec<String>, ScenarioError>;

/// One independently named scenario in the ordered plan.
pub struct Scenario {
    /// Stable scenario name used in reports.
    pub name: &'static str,
    /// Shared-state requirement checked before the body runs.
    pub precondition: Precondition,
    /// Scenario body.
    pub run: ScenarioFn,
}

// ============================================================================
// SECTION: Outcomes
// ============================================================================

/// Failure classification mirroring the scenario error taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Required prior state was absent.
    Precondition,
    /// Remote status differed from the expectation.
    UnexpectedStatus,
    /// Response body did not match the expected shape.
    Decode,
    /// A decoded value failed a field-level check.
    Assertion,
    /// The request did not complete.
    Transport,
    /// A payload could not be serialized.
    Payload,
}

impl FailureKind {
    /// Returns the stable label used in reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Precondition => "precondition",
            Self::UnexpectedStatus => "unexpected_status",
            Self::Decode => "decode",
            Self::Assertion => "assertion",
            Self::Transport => "transport",
            Self::Payload => "payload",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&ScenarioError> for FailureKind {
    fn from(error: &ScenarioError) -> Self {
        match error {
            ScenarioError::Precondition(_) => Self::Precondition,
            ScenarioError::UnexpectedStatus { .. } => Self::UnexpectedStatus,
            ScenarioError::Decode { .. } => Self::Decode,
            ScenarioError::Assertion(_) => Self::Assertion,
            ScenarioError::Transport(_) => Self::Transport,
            ScenarioError::Payload(_) => Self::Payload,
        }
    }
}

/// Outcome of one scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ScenarioOutcome {
    /// The scenario passed; notes describe what was observed.
    Pass {
        /// Observations recorded by the scenario body.
        notes: Vec<String>,
    },
    /// The scenario failed; the suite continued.
    Fail {
        /// Failure classification.
        kind: FailureKind,
        /// Rendered failure detail.
        detail: String,
    },
}

/// One scenario's entry in the suite report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioRecord {
    /// Scenario name.
    pub name: String,
    /// Position in the executed plan, starting at 1.
    pub position: usize,
    /// Recorded outcome.
    #[serde(flatten)]
    pub outcome: ScenarioOutcome,
}

/// Aggregated result of one suite run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct SuiteReport {
    /// Per-scenario records in execution order.
    pub scenarios: Vec<ScenarioRecord>,
}

impl SuiteReport {
    /// Returns the number of passed scenarios.
    #[must_use]
    pub fn passed(&self) -> usize {
        self.scenarios
            .iter()
            .filter(|record| matches!(record.outcome, ScenarioOutcome::Pass { .. }))
            .count()
    }

    /// Returns the number of failed scenarios.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.scenarios.len() - self.passed()
    }

    /// Returns true when every scenario passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    /// Returns the record for a named scenario, if it ran.
    #[must_use]
    pub fn record(&self, name: &str) -> Option<&ScenarioRecord> {
        self.scenarios.iter().find(|record| record.name == name)
    }
}

// ============================================================================
// SECTION: Runner
// ============================================================================

/// Executes an ordered scenario plan against one resource client.
pub struct ScenarioRunner {
    /// Ordered plan; order is the total order of execution.
    plan: Vec<Scenario>,
}

impl ScenarioRunner {
    /// Creates a runner for the given ordered plan.
    #[must_use]
    pub fn new(plan: Vec<Scenario>) -> Self {
        Self {
            plan,
        }
    }

    /// Returns the scenario names in execution order.
    #[must_use]
    pub fn scenario_names(&self) -> Vec<&'static str> {
        self.plan.iter().map(|scenario| scenario.name).collect()
    }

    /// Runs every scenario in order, recording outcomes and continuing past
    /// failures. Precondition checks run before scenario bodies; an unmet
    /// precondition records a failure without any remote call.
    #[must_use]
    pub fn run(&self, client: &dyn ResourceClient) -> SuiteReport {
        let mut slot = EntitySlot::new();
        let factory = PayloadFactory::new();
        let mut report = SuiteReport::default();
        for (index, scenario) in self.plan.iter().enumerate() {
            let outcome = Self::execute(scenario, client, &mut slot, factory);
            report.scenarios.push(ScenarioRecord {
                name: scenario.name.to_string(),
                position: index + 1,
                outcome,
            });
        }
        report
    }

    /// Runs one scenario: precondition first, then the body.
    fn execute(
        scenario: &Scenario,
        client: &dyn ResourceClient,
        slot: &mut EntitySlot,
        factory: PayloadFactory,
    ) -> ScenarioOutcome {
        let result = scenario.precondition.check(slot).and_then(|()| {
            let mut ctx = ScenarioContext {
                client,
                slot,
                factory,
            };
            (scenario.run)(&mut ctx)
        });
        match result {
            Ok(notes) => ScenarioOutcome::Pass {
                notes,
            },
            Err(error) => ScenarioOutcome::Fail {
                kind: FailureKind::from(&error),
                detail: error.to_string(),
            },
        }
    }
}
