// upgrade-drill-core/src/runtime/executor.rs
// ============================================================================
// Module: Upgrade Drill Scenario Executor
// Description: Strictly sequential, fail-fast execution of action sequences.
// Purpose: Drive a scenario against a live cluster with precise ordering.
// Dependencies: crate::{core, interfaces, runtime}, thiserror
// ============================================================================

//! ## Overview
//! The executor consumes a scenario's action sequence and a check catalog
//! and applies the actions strictly in order. Upgrade-ordering correctness
//! depends on precise sequencing, so there is no action-level parallelism,
//! no retrying, and no reordering: the first failure aborts the run and is
//! reported with the failing action's identity and ordinal position. The
//! executor assumes exclusive ownership of the cluster's lifecycle for the
//! duration of a run; cleanup of components left running after an abort is
//! the caller's responsibility.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use thiserror::Error;

use crate::core::Action;
use crate::core::ActionKind;
use crate::core::CheckName;
use crate::core::ClusterError;
use crate::core::ClusterState;
use crate::core::KillDisposition;
use crate::core::Phase;
use crate::core::ScenarioName;
use crate::interfaces::BackendError;
use crate::interfaces::Check;
use crate::interfaces::CheckError;
use crate::interfaces::ClusterBackend;
use crate::interfaces::Sleeper;
use crate::runtime::scenario::Scenario;

// ============================================================================
// SECTION: Action Failures
// ============================================================================

/// Check hook identity for failure reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckHook {
    /// Initialize hook.
    Initialize,
    /// Manipulate hook for a phase.
    Manipulate(Phase),
    /// Validate hook.
    Validate,
}

impl fmt::Display for CheckHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initialize => f.write_str("initialize"),
            Self::Manipulate(phase) => write!(f, "manipulate(phase {phase})"),
            Self::Validate => f.write_str("validate"),
        }
    }
}

/// Failure of a single action during a run.
///
/// Any variant aborts the remaining sequence immediately; retries, if any,
/// belong to the execution backend.
#[derive(Debug, Error)]
pub enum ActionFailure {
    /// A lifecycle transition was rejected by cluster state rules.
    #[error("lifecycle transition rejected: {0}")]
    Cluster(#[from] ClusterError),
    /// The execution backend reported a failure.
    #[error("backend failure: {0}")]
    Backend(#[from] BackendError),
    /// A check hook reported a correctness violation.
    #[error("check {check} failed during {hook}: {source}")]
    Check {
        /// Name of the failing check.
        check: CheckName,
        /// Hook that reported the failure.
        hook: CheckHook,
        /// Underlying check error.
        #[source]
        source: CheckError,
    },
}

// ============================================================================
// SECTION: Run Outcomes
// ============================================================================

/// Executor state machine over a scenario's action list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// No action has been applied yet.
    Pending,
    /// The action at the given index is being applied.
    Running {
        /// Index of the action in flight.
        index: usize,
    },
    /// Every action completed without error.
    Completed,
    /// The action at the given index failed; nothing past it was applied.
    Aborted {
        /// Index of the failing action.
        index: usize,
    },
}

/// Terminal outcome of a scenario run.
#[derive(Debug)]
pub enum RunOutcome {
    /// Every action completed without error.
    Completed {
        /// Number of actions applied.
        applied: usize,
    },
    /// An action failed; the remaining sequence was not applied.
    Aborted {
        /// Ordinal position of the failing action.
        index: usize,
        /// Reporting label of the failing action.
        action: ActionKind,
        /// Failure that aborted the run.
        failure: ActionFailure,
    },
}

impl RunOutcome {
    /// Returns true when the run completed without error.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

/// Report for one scenario run, naming the scenario and its outcome.
#[derive(Debug)]
pub struct RunReport {
    /// Scenario that was driven.
    pub scenario: ScenarioName,
    /// Terminal outcome.
    pub outcome: RunOutcome,
}

// ============================================================================
// SECTION: Scenario Executor
// ============================================================================

/// Strictly sequential scenario executor.
///
/// # Invariants
/// - Actions never execute concurrently; the executor blocks on each
///   action's completion before advancing.
/// - Cluster state is mutated only here, in response to lifecycle actions.
pub struct ScenarioExecutor<B, S> {
    /// Execution backend realizing lifecycle transitions.
    backend: B,
    /// Sleeper realizing coexistence windows.
    sleeper: S,
    /// Check catalog driven by check actions, in catalog order.
    checks: Vec<Box<dyn Check>>,
    /// Live cluster state for the current run.
    cluster: ClusterState,
    /// Executor state machine position.
    status: RunStatus,
}

impl<B, S> ScenarioExecutor<B, S>
where
    B: ClusterBackend,
    S: Sleeper,
{
    /// Creates an executor for one scenario run.
    #[must_use]
    pub const fn new(backend: B, sleeper: S, checks: Vec<Box<dyn Check>>) -> Self {
        Self {
            backend,
            sleeper,
            checks,
            cluster: ClusterState::new(),
            status: RunStatus::Pending,
        }
    }

    /// Returns the executor's state machine position.
    #[must_use]
    pub const fn status(&self) -> RunStatus {
        self.status
    }

    /// Returns the live cluster state.
    #[must_use]
    pub const fn cluster(&self) -> &ClusterState {
        &self.cluster
    }

    /// Returns the execution backend.
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Drives the scenario's action sequence to completion or abort.
    ///
    /// Actions apply strictly in sequence order. The first failure transitions
    /// the run to aborted at the failing index; no later action is applied.
    pub fn run(&mut self, scenario: &Scenario) -> RunReport {
        for (index, action) in scenario.actions().iter().enumerate() {
            self.status = RunStatus::Running {
                index,
            };
            if let Err(failure) = self.apply(action) {
                self.status = RunStatus::Aborted {
                    index,
                };
                return RunReport {
                    scenario: scenario.name().clone(),
                    outcome: RunOutcome::Aborted {
                        index,
                        action: action.kind(),
                        failure,
                    },
                };
            }
        }
        self.status = RunStatus::Completed;
        RunReport {
            scenario: scenario.name().clone(),
            outcome: RunOutcome::Completed {
                applied: scenario.actions().len(),
            },
        }
    }

    /// Applies a single action.
    fn apply(&mut self, action: &Action) -> Result<(), ActionFailure> {
        match action {
            Action::StartComponent {
                component,
                version,
                env,
            } => {
                self.cluster.ensure_startable(*component)?;
                self.backend.start_component(*component, version, env)?;
                self.cluster.record_start(*component, version.clone());
                Ok(())
            }
            Action::KillComponent {
                component,
            } => match self.cluster.kill_disposition(*component)? {
                KillDisposition::AlreadyStopped => Ok(()),
                KillDisposition::Stopped => {
                    self.backend.kill_component(*component)?;
                    self.cluster.record_stop(*component);
                    Ok(())
                }
            },
            Action::UseComponent {
                component,
            } => {
                self.cluster.set_active_target(*component)?;
                Ok(())
            }
            Action::Sleep {
                duration,
            } => {
                self.sleeper.sleep(*duration);
                Ok(())
            }
            Action::InitializeChecks => {
                run_hook(&mut self.checks, CheckHook::Initialize, |check| check.initialize())
            }
            Action::ManipulateChecks {
                phase,
            } => {
                let phase = *phase;
                run_hook(&mut self.checks, CheckHook::Manipulate(phase), |check| {
                    check.manipulate(phase)
                })
            }
            Action::ValidateChecks => {
                run_hook(&mut self.checks, CheckHook::Validate, |check| check.validate())
            }
        }
    }
}

// ============================================================================
// SECTION: Check Hook Dispatch
// ============================================================================

/// Runs a hook over every check in catalog order, naming the failing check.
fn run_hook<F>(
    checks: &mut [Box<dyn Check>],
    hook: CheckHook,
    mut invoke: F,
) -> Result<(), ActionFailure>
where
    F: FnMut(&mut dyn Check) -> Result<(), CheckError>,
{
    for check in checks {
        let name = check.name();
        invoke(check.as_mut()).map_err(|source| ActionFailure::Check {
            check: name,
            hook,
            source,
        })?;
    }
    Ok(())
}
