// upgrade-drill-core/src/core/cluster.rs
// ============================================================================
// Module: Upgrade Drill Cluster State
// Description: Executor-owned live status and effective versions.
// Purpose: Enforce lifecycle transition rules during a scenario run.
// Dependencies: crate::core::{component, version}, serde, thiserror
// ============================================================================

//! ## Overview
//! Cluster state maps each component to its live status and effective
//! version for the duration of a single scenario run. The executor is the
//! single writer; transitions that would leave the cluster in an invalid
//! state fail closed before the backend is invoked.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::component::Component;
use crate::core::component::ComponentKind;
use crate::core::version::VersionTag;

// ============================================================================
// SECTION: Cluster Errors
// ============================================================================

/// Lifecycle transition errors raised by cluster state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClusterError {
    /// A standalone component was started while already running.
    #[error("component {0} is already running")]
    AlreadyRunning(ComponentKind),
    /// A component was used as a target while not running.
    #[error("component {0} is not running")]
    NotRunning(ComponentKind),
    /// A component was killed without ever being started during the run.
    #[error("component {0} was never started during this run")]
    UnknownComponent(ComponentKind),
}

// ============================================================================
// SECTION: Kill Disposition
// ============================================================================

/// Outcome of recording a kill transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KillDisposition {
    /// The component was running; the backend must stop it.
    Stopped,
    /// The component was already stopped; no backend call is needed.
    AlreadyStopped,
}

// ============================================================================
// SECTION: Cluster State
// ============================================================================

/// Live cluster state for one scenario run.
///
/// # Invariants
/// - Only the scenario executor mutates this state, in response to lifecycle
///   actions.
/// - Every recorded component carries a well-defined version tag at every
///   point of the run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterState {
    /// Live component records keyed by kind.
    components: BTreeMap<ComponentKind, Component>,
    /// Component currently marked as the active operation target.
    active_target: Option<ComponentKind>,
}

impl ClusterState {
    /// Creates an empty cluster state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            components: BTreeMap::new(),
            active_target: None,
        }
    }

    /// Returns the live record for a component, when instantiated.
    #[must_use]
    pub fn component(&self, kind: ComponentKind) -> Option<&Component> {
        self.components.get(&kind)
    }

    /// Returns the effective version of a component, when instantiated.
    #[must_use]
    pub fn effective_version(&self, kind: ComponentKind) -> Option<&VersionTag> {
        self.components.get(&kind).map(|component| &component.version)
    }

    /// Returns the component currently marked as the active target.
    #[must_use]
    pub const fn active_target(&self) -> Option<ComponentKind> {
        self.active_target
    }

    /// Validates that a start transition is permitted.
    ///
    /// # Errors
    ///
    /// Returns [`ClusterError::AlreadyRunning`] when a standalone component
    /// is already running.
    pub fn ensure_startable(&self, kind: ComponentKind) -> Result<(), ClusterError> {
        match self.components.get(&kind) {
            Some(component) if component.running && !kind.is_composite() => {
                Err(ClusterError::AlreadyRunning(kind))
            }
            _ => Ok(()),
        }
    }

    /// Records a successful start at the given version.
    pub fn record_start(&mut self, kind: ComponentKind, version: VersionTag) {
        self.components.insert(
            kind,
            Component {
                kind,
                version,
                running: true,
            },
        );
    }

    /// Determines how a kill transition must be handled.
    ///
    /// The state is not mutated; callers record the stop only after the
    /// backend transition succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`ClusterError::UnknownComponent`] when the component was
    /// never started during the run.
    pub fn kill_disposition(&self, kind: ComponentKind) -> Result<KillDisposition, ClusterError> {
        let component = self.components.get(&kind).ok_or(ClusterError::UnknownComponent(kind))?;
        if component.running {
            Ok(KillDisposition::Stopped)
        } else {
            Ok(KillDisposition::AlreadyStopped)
        }
    }

    /// Records a successful stop for a previously instantiated component.
    pub fn record_stop(&mut self, kind: ComponentKind) {
        if let Some(component) = self.components.get_mut(&kind) {
            component.running = false;
        }
    }

    /// Marks a running component as the active operation target.
    ///
    /// # Errors
    ///
    /// Returns [`ClusterError::UnknownComponent`] when the component was
    /// never started, or [`ClusterError::NotRunning`] when it is stopped.
    pub fn set_active_target(&mut self, kind: ComponentKind) -> Result<(), ClusterError> {
        let component = self.components.get(&kind).ok_or(ClusterError::UnknownComponent(kind))?;
        if !component.running {
            return Err(ClusterError::NotRunning(kind));
        }
        self.active_target = Some(kind);
        Ok(())
    }
}
