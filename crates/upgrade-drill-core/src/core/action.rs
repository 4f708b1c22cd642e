// upgrade-drill-core/src/core/action.rs
// ============================================================================
// Module: Upgrade Drill Action Taxonomy
// Description: Closed action variants executed by the scenario executor.
// Purpose: Script lifecycle transitions, timed pauses, and check hooks.
// Dependencies: crate::core::{component, env, version}, serde
// ============================================================================

//! ## Overview
//! Actions are the scripted steps of an upgrade scenario. The taxonomy is a
//! closed tagged enum rather than an open hierarchy: the executor needs a
//! single uniform apply path and the variants are finite and enumerable.
//! Actions are immutable once constructed and own no cluster state.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

use crate::core::component::ComponentKind;
use crate::core::env::EnvOverrides;
use crate::core::version::VersionTag;

// ============================================================================
// SECTION: Manipulation Phases
// ============================================================================

/// Phase tag identifying one stage of check-driven data manipulation.
///
/// # Invariants
/// - The number of phases is scenario-determined; checks must tolerate any
///   phase index a scenario requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phase(u32);

impl Phase {
    /// Creates a new phase tag.
    #[must_use]
    pub const fn new(phase: u32) -> Self {
        Self(phase)
    }

    /// Returns the phase number.
    #[must_use]
    pub const fn number(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// SECTION: Actions
// ============================================================================

/// A single scripted step of an upgrade scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    /// Brings up a component at the given version with environment overrides.
    ///
    /// Fails when a standalone component is already running; composite starts
    /// subsume already-running co-located peers.
    StartComponent {
        /// Component to start.
        component: ComponentKind,
        /// Version tag to start at.
        version: VersionTag,
        /// Environment overrides threaded opaquely to the backend.
        env: EnvOverrides,
    },
    /// Stops a component.
    ///
    /// A no-op with success when already stopped; an error when the component
    /// was never started during the run.
    KillComponent {
        /// Component to stop.
        component: ComponentKind,
    },
    /// Marks a previously-started standalone component as the active target.
    ///
    /// A pure state-pointer update; never triggers a process transition.
    UseComponent {
        /// Component to mark active.
        component: ComponentKind,
    },
    /// Suspends progression for a fixed wall-clock duration.
    ///
    /// Present only to create a coexistence window where two components
    /// intentionally run at different versions; its position in a scenario is
    /// a deliberate design decision, not incidental.
    Sleep {
        /// Pause duration.
        duration: Duration,
    },
    /// Invokes every check's initialize hook to establish baseline state.
    InitializeChecks,
    /// Invokes every check's manipulate hook for the given phase.
    ManipulateChecks {
        /// Manipulation phase to run.
        phase: Phase,
    },
    /// Invokes every check's validate hook to assert end-state correctness.
    ///
    /// Scenarios place this after every lifecycle transition intended to
    /// precede it.
    ValidateChecks,
}

impl Action {
    /// Returns the reporting label for the action.
    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        match self {
            Self::StartComponent { .. } => ActionKind::StartComponent,
            Self::KillComponent { .. } => ActionKind::KillComponent,
            Self::UseComponent { .. } => ActionKind::UseComponent,
            Self::Sleep { .. } => ActionKind::Sleep,
            Self::InitializeChecks => ActionKind::InitializeChecks,
            Self::ManipulateChecks { .. } => ActionKind::ManipulateChecks,
            Self::ValidateChecks => ActionKind::ValidateChecks,
        }
    }

    /// Returns the component targeted by a lifecycle action, when any.
    #[must_use]
    pub const fn target(&self) -> Option<ComponentKind> {
        match self {
            Self::StartComponent { component, .. }
            | Self::KillComponent { component }
            | Self::UseComponent { component } => Some(*component),
            Self::Sleep { .. }
            | Self::InitializeChecks
            | Self::ManipulateChecks { .. }
            | Self::ValidateChecks => None,
        }
    }
}

/// Stable reporting label for an action variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Start-component action.
    StartComponent,
    /// Kill-component action.
    KillComponent,
    /// Use-component action.
    UseComponent,
    /// Sleep action.
    Sleep,
    /// Initialize-checks action.
    InitializeChecks,
    /// Manipulate-checks action.
    ManipulateChecks,
    /// Validate-checks action.
    ValidateChecks,
}

impl ActionKind {
    /// Returns the stable string form of the action kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StartComponent => "start_component",
            Self::KillComponent => "kill_component",
            Self::UseComponent => "use_component",
            Self::Sleep => "sleep",
            Self::InitializeChecks => "initialize_checks",
            Self::ManipulateChecks => "manipulate_checks",
            Self::ValidateChecks => "validate_checks",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
