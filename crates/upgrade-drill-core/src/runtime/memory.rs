// upgrade-drill-core/src/runtime/memory.rs
// ============================================================================
// Module: Upgrade Drill In-Memory Backend
// Description: Deterministic simulated substrate for scenario runs.
// Purpose: Record lifecycle transitions and inject failures for testing.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! The in-memory backend realizes the cluster backend interface without
//! touching any real substrate. It records every lifecycle call in order and
//! can be configured to fail at a specific call ordinal, which lets tests
//! observe fail-fast behavior at exact sequence positions.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::ComponentKind;
use crate::core::EnvOverrides;
use crate::core::VersionTag;
use crate::interfaces::BackendError;
use crate::interfaces::ClusterBackend;

// ============================================================================
// SECTION: Backend Events
// ============================================================================

/// Recorded lifecycle transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BackendEvent {
    /// A component was started.
    Start {
        /// Component that was started.
        component: ComponentKind,
        /// Version the component was started at.
        version: VersionTag,
        /// Environment overrides supplied with the start.
        env: EnvOverrides,
    },
    /// A component was stopped.
    Kill {
        /// Component that was stopped.
        component: ComponentKind,
    },
}

// ============================================================================
// SECTION: In-Memory Backend
// ============================================================================

/// Deterministic in-memory cluster backend.
#[derive(Debug, Default)]
pub struct InMemoryClusterBackend {
    /// Recorded lifecycle transitions in call order.
    events: Vec<BackendEvent>,
    /// Number of lifecycle calls received so far.
    calls: usize,
    /// Call ordinal at which to fail, when set.
    fail_at_call: Option<usize>,
}

impl InMemoryClusterBackend {
    /// Creates a backend that succeeds on every call.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            events: Vec::new(),
            calls: 0,
            fail_at_call: None,
        }
    }

    /// Creates a backend that fails on the zero-based Nth lifecycle call.
    #[must_use]
    pub const fn failing_at_call(ordinal: usize) -> Self {
        Self {
            events: Vec::new(),
            calls: 0,
            fail_at_call: Some(ordinal),
        }
    }

    /// Returns the recorded lifecycle transitions in call order.
    #[must_use]
    pub fn events(&self) -> &[BackendEvent] {
        &self.events
    }

    /// Returns the number of lifecycle calls received.
    #[must_use]
    pub const fn calls(&self) -> usize {
        self.calls
    }

    /// Consumes the current call ordinal and reports whether it must fail.
    fn take_call(&mut self) -> bool {
        let ordinal = self.calls;
        self.calls += 1;
        self.fail_at_call == Some(ordinal)
    }
}

impl ClusterBackend for InMemoryClusterBackend {
    fn start_component(
        &mut self,
        component: ComponentKind,
        version: &VersionTag,
        env: &EnvOverrides,
    ) -> Result<(), BackendError> {
        if self.take_call() {
            return Err(BackendError::StartFailed {
                component,
                reason: "injected failure".to_string(),
            });
        }
        self.events.push(BackendEvent::Start {
            component,
            version: version.clone(),
            env: env.clone(),
        });
        Ok(())
    }

    fn kill_component(&mut self, component: ComponentKind) -> Result<(), BackendError> {
        if self.take_call() {
            return Err(BackendError::KillFailed {
                component,
                reason: "injected failure".to_string(),
            });
        }
        self.events.push(BackendEvent::Kill {
            component,
        });
        Ok(())
    }
}
