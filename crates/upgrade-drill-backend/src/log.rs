// upgrade-drill-backend/src/log.rs
// ============================================================================
// Module: Upgrade Drill Log Backend
// Description: Audit-logging decorator for cluster backends.
// Purpose: Persist one record per lifecycle transition before delegating.
// Dependencies: upgrade-drill-core, serde_json, std
// ============================================================================

//! ## Overview
//! `LogBackend` writes a JSON line for each start and kill, then delegates to
//! the wrapped backend. Records are written before delegation so an aborted
//! run still shows the attempted transition.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::sync::Mutex;

use serde_json::json;
use upgrade_drill_core::BackendError;
use upgrade_drill_core::ClusterBackend;
use upgrade_drill_core::ComponentKind;
use upgrade_drill_core::EnvOverrides;
use upgrade_drill_core::VersionTag;

// ============================================================================
// SECTION: Log Backend
// ============================================================================

/// Audit-logging cluster backend decorator.
pub struct LogBackend<B, W: Write + Send> {
    /// Wrapped backend performing the actual transitions.
    inner: B,
    /// Output writer for audit records.
    writer: Mutex<W>,
}

impl<B, W: Write + Send> LogBackend<B, W> {
    /// Creates a logging decorator around a backend.
    pub const fn new(inner: B, writer: W) -> Self {
        Self {
            inner,
            writer: Mutex::new(writer),
        }
    }

    /// Returns the wrapped backend.
    pub const fn inner(&self) -> &B {
        &self.inner
    }

    /// Writes one audit record as a JSON line.
    fn write_record(&self, record: &serde_json::Value) -> Result<(), String> {
        let mut writer = self.writer.lock().map_err(|err| err.to_string())?;
        serde_json::to_writer(&mut *writer, record).map_err(|err| err.to_string())?;
        writer.write_all(b"\n").map_err(|err| err.to_string())?;
        writer.flush().map_err(|err| err.to_string())
    }
}

impl<B: ClusterBackend, W: Write + Send> ClusterBackend for LogBackend<B, W> {
    fn start_component(
        &mut self,
        component: ComponentKind,
        version: &VersionTag,
        env: &EnvOverrides,
    ) -> Result<(), BackendError> {
        let env_map: serde_json::Map<String, serde_json::Value> = env
            .iter()
            .map(|(key, value)| (key.to_string(), serde_json::Value::from(value)))
            .collect();
        let record = json!({
            "op": "start_component",
            "component": component.as_str(),
            "version": version.to_string(),
            "env": env_map,
        });
        self.write_record(&record).map_err(|reason| BackendError::StartFailed {
            component,
            reason,
        })?;
        self.inner.start_component(component, version, env)
    }

    fn kill_component(&mut self, component: ComponentKind) -> Result<(), BackendError> {
        let record = json!({
            "op": "kill_component",
            "component": component.as_str(),
        });
        self.write_record(&record).map_err(|reason| BackendError::KillFailed {
            component,
            reason,
        })?;
        self.inner.kill_component(component)
    }
}
