// crates/upgrade-drill-core/tests/common/mod.rs
// ============================================================================
// Module: Common Test Fixtures
// Description: Shared checks, sleepers, and contexts for core tests.
// Purpose: Provide reusable test infrastructure for deterministic testing.
// Dependencies: upgrade-drill-core
// ============================================================================

//! ## Overview
//! This module provides instrumented check implementations, a recording
//! sleeper, and upgrade-context helpers for use across core test files.

#![allow(dead_code, reason = "Shared test helpers may be unused in some cases.")]
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::unwrap_in_result,
    reason = "Test fixtures favor direct unwraps for setup clarity."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use upgrade_drill_core::Check;
use upgrade_drill_core::CheckError;
use upgrade_drill_core::CheckName;
use upgrade_drill_core::EnvOverrides;
use upgrade_drill_core::Phase;
use upgrade_drill_core::ReleasedVersion;
use upgrade_drill_core::Sleeper;
use upgrade_drill_core::UpgradeContext;

// ============================================================================
// SECTION: Check Journals
// ============================================================================

/// One recorded hook invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookEvent {
    /// Initialize hook ran.
    Initialize,
    /// Manipulate hook ran for a phase.
    Manipulate(Phase),
    /// Validate hook ran; records how many manipulations it observed.
    Validate {
        /// Number of manipulate invocations seen so far.
        manipulations_seen: usize,
    },
}

/// Shared journal of hook invocations for one check.
pub type Journal = Arc<Mutex<Vec<HookEvent>>>;

/// Returns the number of manipulate events in a journal.
pub fn manipulation_count(journal: &Journal) -> usize {
    journal
        .lock()
        .unwrap()
        .iter()
        .filter(|event| matches!(event, HookEvent::Manipulate(_)))
        .count()
}

// ============================================================================
// SECTION: Counter Check
// ============================================================================

/// Check that journals every hook invocation and never fails.
pub struct CounterCheck {
    /// Check name.
    name: CheckName,
    /// Shared invocation journal.
    journal: Journal,
}

/// Creates a counter check and a handle to its journal.
pub fn counter_check(name: &str) -> (CounterCheck, Journal) {
    let journal: Journal = Arc::new(Mutex::new(Vec::new()));
    let check = CounterCheck {
        name: CheckName::new(name),
        journal: Arc::clone(&journal),
    };
    (check, journal)
}

impl Check for CounterCheck {
    fn name(&self) -> CheckName {
        self.name.clone()
    }

    fn initialize(&mut self) -> Result<(), CheckError> {
        self.journal.lock().unwrap().push(HookEvent::Initialize);
        Ok(())
    }

    fn manipulate(&mut self, phase: Phase) -> Result<(), CheckError> {
        self.journal.lock().unwrap().push(HookEvent::Manipulate(phase));
        Ok(())
    }

    fn validate(&mut self) -> Result<(), CheckError> {
        let mut journal = self.journal.lock().unwrap();
        let manipulations_seen = journal
            .iter()
            .filter(|event| matches!(event, HookEvent::Manipulate(_)))
            .count();
        journal.push(HookEvent::Validate {
            manipulations_seen,
        });
        Ok(())
    }
}

// ============================================================================
// SECTION: Failing Check
// ============================================================================

/// Hook at which a failing check reports a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailAt {
    /// Fail during initialize.
    Initialize,
    /// Fail during manipulate for the given phase.
    Manipulate(Phase),
    /// Fail during validate.
    Validate,
}

/// Check that fails at one configured hook and succeeds elsewhere.
pub struct FailingCheck {
    /// Check name.
    name: CheckName,
    /// Hook to fail at.
    fail_at: FailAt,
}

impl FailingCheck {
    /// Creates a check failing at the given hook.
    pub fn new(name: &str, fail_at: FailAt) -> Self {
        Self {
            name: CheckName::new(name),
            fail_at,
        }
    }

    fn outcome(&self, hook: FailAt) -> Result<(), CheckError> {
        if self.fail_at == hook {
            Err(CheckError::Failed("intentional violation".to_string()))
        } else {
            Ok(())
        }
    }
}

impl Check for FailingCheck {
    fn name(&self) -> CheckName {
        self.name.clone()
    }

    fn initialize(&mut self) -> Result<(), CheckError> {
        self.outcome(FailAt::Initialize)
    }

    fn manipulate(&mut self, phase: Phase) -> Result<(), CheckError> {
        self.outcome(FailAt::Manipulate(phase))
    }

    fn validate(&mut self) -> Result<(), CheckError> {
        self.outcome(FailAt::Validate)
    }
}

// ============================================================================
// SECTION: Recording Sleeper
// ============================================================================

/// Shared log of requested pauses.
pub type SleepLog = Arc<Mutex<Vec<Duration>>>;

/// Sleeper that records requested pauses without incurring them.
pub struct RecordingSleeper {
    /// Shared pause log.
    log: SleepLog,
}

/// Creates a recording sleeper and a handle to its pause log.
pub fn recording_sleeper() -> (RecordingSleeper, SleepLog) {
    let log: SleepLog = Arc::new(Mutex::new(Vec::new()));
    let sleeper = RecordingSleeper {
        log: Arc::clone(&log),
    };
    (sleeper, log)
}

impl Sleeper for RecordingSleeper {
    fn sleep(&mut self, duration: Duration) {
        self.log.lock().unwrap().push(duration);
    }
}

// ============================================================================
// SECTION: Contexts
// ============================================================================

/// Returns an upgrade context with sizing overrides for the prior version.
pub fn sample_context() -> UpgradeContext {
    let mut env = EnvOverrides::new();
    env.insert("cluster_replica_sizes", "{\"1\":{\"workers\":1,\"scale\":1}}");
    env.insert("storage_host_sizes", "{\"4\":{\"workers\":4}}");
    UpgradeContext::with_env(ReleasedVersion::new("v0.27.0"), env)
}
