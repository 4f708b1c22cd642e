// crates/upgrade-drill-backend/tests/log_backend.rs
// ============================================================================
// Module: Log Backend Tests
// Description: Audit record emission and delegation behavior.
// Purpose: Validate one JSON line per lifecycle transition.
// Dependencies: upgrade-drill-backend, upgrade-drill-core, serde_json
// ============================================================================
//! ## Overview
//! Ensures the logging decorator writes a parseable record for every
//! lifecycle call, delegates to the wrapped backend, and still records a
//! transition the inner backend rejects.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::sync::Arc;
use std::sync::Mutex;

use upgrade_drill_backend::LogBackend;
use upgrade_drill_core::ClusterBackend;
use upgrade_drill_core::ComponentKind;
use upgrade_drill_core::EnvOverrides;
use upgrade_drill_core::InMemoryClusterBackend;
use upgrade_drill_core::ReleasedVersion;
use upgrade_drill_core::VersionTag;

/// Shared writer collecting audit output.
#[derive(Clone, Default)]
struct SharedWriter(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Parses the collected output into JSON records.
fn records(writer: &SharedWriter) -> Vec<serde_json::Value> {
    let bytes = writer.0.lock().unwrap().clone();
    String::from_utf8(bytes)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

/// Verifies one record per transition with the transition's fields.
#[test]
fn log_backend_writes_one_record_per_transition() {
    let writer = SharedWriter::default();
    let mut backend = LogBackend::new(InMemoryClusterBackend::new(), writer.clone());

    let mut env = EnvOverrides::new();
    env.insert("storage_host_sizes", "{\"4\":{\"workers\":4}}");
    backend
        .start_component(
            ComponentKind::Coordinator,
            &VersionTag::Released(ReleasedVersion::new("v0.27.0")),
            &env,
        )
        .unwrap();
    backend.kill_component(ComponentKind::Coordinator).unwrap();

    let records = records(&writer);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["op"], "start_component");
    assert_eq!(records[0]["component"], "coordinator");
    assert_eq!(records[0]["version"], "v0.27.0");
    assert_eq!(records[0]["env"]["storage_host_sizes"], "{\"4\":{\"workers\":4}}");
    assert_eq!(records[1]["op"], "kill_component");
    assert_eq!(records[1]["component"], "coordinator");

    // Both calls were delegated to the wrapped backend.
    assert_eq!(backend.inner().events().len(), 2);
}

/// Verifies a rejected transition is still recorded before the failure
/// propagates.
#[test]
fn log_backend_records_failed_transitions() {
    let writer = SharedWriter::default();
    let mut backend = LogBackend::new(InMemoryClusterBackend::failing_at_call(0), writer.clone());

    let result = backend.start_component(
        ComponentKind::Worker,
        &VersionTag::UnderTest,
        &EnvOverrides::new(),
    );

    assert!(result.is_err());
    let records = records(&writer);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["op"], "start_component");
    assert_eq!(records[0]["version"], "under-test");
    assert!(backend.inner().events().is_empty());
}
