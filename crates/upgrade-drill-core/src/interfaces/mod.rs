// upgrade-drill-core/src/interfaces/mod.rs
// ============================================================================
// Module: Upgrade Drill Interfaces
// Description: Backend-agnostic interfaces for lifecycle, checks, and versions.
// Purpose: Define the contract surfaces used by the Upgrade Drill runtime.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Interfaces define how Upgrade Drill integrates with the deployment
//! substrate, the check catalog, and the release history without embedding
//! backend-specific details. Implementations must be deterministic from the
//! executor's point of view and fail closed on missing or invalid data.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use thiserror::Error;

use crate::core::CheckName;
use crate::core::ComponentKind;
use crate::core::EnvOverrides;
use crate::core::Phase;
use crate::core::ReleasedVersion;
use crate::core::VersionTag;

// ============================================================================
// SECTION: Cluster Backend
// ============================================================================

/// Action execution backend errors.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend failed to bring a component up.
    #[error("failed to start {component}: {reason}")]
    StartFailed {
        /// Component that failed to start.
        component: ComponentKind,
        /// Backend-reported reason.
        reason: String,
    },
    /// The backend failed to stop a component.
    #[error("failed to kill {component}: {reason}")]
    KillFailed {
        /// Component that failed to stop.
        component: ComponentKind,
        /// Backend-reported reason.
        reason: String,
    },
}

/// Deployment substrate that realizes lifecycle actions.
///
/// Implementations perform the actual process or container transitions.
/// Retries, if any, belong here; the executor never retries.
pub trait ClusterBackend {
    /// Brings up a component at the given version with environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] when the component cannot be started.
    fn start_component(
        &mut self,
        component: ComponentKind,
        version: &VersionTag,
        env: &EnvOverrides,
    ) -> Result<(), BackendError>;

    /// Stops a component.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] when the component cannot be stopped.
    fn kill_component(&mut self, component: ComponentKind) -> Result<(), BackendError>;
}

// ============================================================================
// SECTION: Checks
// ============================================================================

/// Check hook errors reporting correctness violations or setup failures.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The check reported an error.
    #[error("check error: {0}")]
    Failed(String),
}

/// Correctness-verification unit with initialize, manipulate, and validate
/// hooks.
///
/// Each hook may run arbitrary cluster-facing operations through whatever
/// handles the check owns. The number of manipulation phases is determined by
/// the scenario, so a check must tolerate any phase index it is asked for.
pub trait Check {
    /// Returns the check's name for failure reporting.
    fn name(&self) -> CheckName;

    /// Establishes baseline data and state before any upgrade step.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError`] when baseline setup fails.
    fn initialize(&mut self) -> Result<(), CheckError>;

    /// Performs workload activity for the given manipulation phase.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError`] when the manipulation reports a violation.
    fn manipulate(&mut self, phase: Phase) -> Result<(), CheckError>;

    /// Asserts end-state correctness after the scripted upgrade steps.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError`] when validation reports a violation.
    fn validate(&mut self) -> Result<(), CheckError>;
}

// ============================================================================
// SECTION: Sleeper
// ============================================================================

/// Wall-clock suspension used for coexistence windows.
///
/// The core never blocks on real time directly; hosts inject a sleeper so
/// tests can observe requested pauses without incurring them.
pub trait Sleeper {
    /// Suspends progression for the given duration.
    fn sleep(&mut self, duration: Duration);
}

// ============================================================================
// SECTION: Version Feed
// ============================================================================

/// Version feed errors.
#[derive(Debug, Error)]
pub enum VersionFeedError {
    /// The feed could not be read.
    #[error("version feed io error: {0}")]
    Io(String),
    /// The feed contents could not be parsed.
    #[error("version feed invalid data: {0}")]
    Invalid(String),
}

/// Read-only source listing released versions in recency order.
///
/// The core consumes only the most recent entry as the old endpoint of an
/// upgrade.
pub trait VersionFeed {
    /// Returns released version identifiers, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`VersionFeedError`] when the feed cannot be read or parsed.
    fn released_versions(&self) -> Result<Vec<ReleasedVersion>, VersionFeedError>;
}
