// upgrade-drill-core/src/core/component.rs
// ============================================================================
// Module: Upgrade Drill Component Model
// Description: Cluster roles, co-location groups, and live component records.
// Purpose: Model the upgradeable units of the cluster and their constraints.
// Dependencies: crate::core::version, serde
// ============================================================================

//! ## Overview
//! The cluster has two classes of component: a coordinator whose co-located
//! control and storage roles share one container and therefore upgrade as a
//! unit, and an independently deployable worker. Co-location is the reason a
//! coordinator start is a composite operation while a worker start is
//! standalone.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::core::version::VersionTag;

// ============================================================================
// SECTION: Component Kinds
// ============================================================================

/// Named cluster role targeted by lifecycle actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    /// Co-located control and storage roles sharing one container.
    Coordinator,
    /// Independently deployable compute role.
    Worker,
}

impl ComponentKind {
    /// Returns the co-location group the component belongs to.
    #[must_use]
    pub const fn colocation_group(self) -> ColocationGroup {
        match self {
            Self::Coordinator => ColocationGroup::Control,
            Self::Worker => ColocationGroup::Compute,
        }
    }

    /// Returns true when starting this component subsumes already-running
    /// peers in its co-location group.
    ///
    /// Composite starts are idempotent-safe; standalone starts fail when the
    /// component is already running.
    #[must_use]
    pub const fn is_composite(self) -> bool {
        matches!(self, Self::Coordinator)
    }

    /// Returns the stable string form of the component kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Coordinator => "coordinator",
            Self::Worker => "worker",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Co-location group for components sharing a container or host.
///
/// # Invariants
/// - Components in the same group cannot be upgraded independently of each
///   other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColocationGroup {
    /// Control-plane container hosting the coordinator roles.
    Control,
    /// Compute host running the worker.
    Compute,
}

// ============================================================================
// SECTION: Live Components
// ============================================================================

/// Live record for a component instantiated during a scenario run.
///
/// # Invariants
/// - `version` is always well-defined; a stopped component keeps the tag it
///   last ran at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Component kind.
    pub kind: ComponentKind,
    /// Effective version tag.
    pub version: VersionTag,
    /// Running state.
    pub running: bool,
}

impl Component {
    /// Returns the co-location group of the component.
    #[must_use]
    pub const fn colocation_group(&self) -> ColocationGroup {
        self.kind.colocation_group()
    }
}
