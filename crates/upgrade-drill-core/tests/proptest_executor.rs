// crates/upgrade-drill-core/tests/proptest_executor.rs
// ============================================================================
// Module: Executor Property Tests
// Description: Fail-fast abort positions under arbitrary backend failures.
// Purpose: Ensure aborts land at the exact failing ordinal for any scenario.
// Dependencies: upgrade-drill-core, proptest
// ============================================================================
//! ## Overview
//! Property coverage for the fail-fast contract: whichever lifecycle call
//! fails, the run aborts at the action that issued it and nothing past that
//! index is applied.

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

mod common;

use common::counter_check;
use common::recording_sleeper;
use common::sample_context;
use proptest::prelude::*;
use upgrade_drill_core::Action;
use upgrade_drill_core::InMemoryClusterBackend;
use upgrade_drill_core::RunOutcome;
use upgrade_drill_core::Scenario;
use upgrade_drill_core::ScenarioExecutor;
use upgrade_drill_core::builtin_scenarios;

/// Returns true for actions that issue one backend lifecycle call.
const fn is_lifecycle(action: &Action) -> bool {
    matches!(action, Action::StartComponent { .. } | Action::KillComponent { .. })
}

/// Counts the backend lifecycle calls a scenario issues.
///
/// Every kill in the canonical scenarios targets a running component, so
/// each lifecycle action maps to exactly one backend call.
fn lifecycle_calls(scenario: &Scenario) -> usize {
    scenario.actions().iter().filter(|action| is_lifecycle(action)).count()
}

/// Returns the action index that issues the zero-based Nth lifecycle call.
fn action_index_of_call(scenario: &Scenario, call: usize) -> usize {
    scenario
        .actions()
        .iter()
        .enumerate()
        .filter(|(_, action)| is_lifecycle(action))
        .nth(call)
        .map(|(index, _)| index)
        .unwrap_or_else(|| panic!("call ordinal {call} out of range"))
}

proptest! {
    /// Whichever lifecycle call fails, the run aborts at the action that
    /// issued it and no later backend call is made.
    #[test]
    fn abort_lands_on_the_failing_lifecycle_call(
        scenario_index in 0usize..3,
        call in 0usize..6,
    ) {
        let entry = &builtin_scenarios()[scenario_index];
        let scenario = (entry.builder)(&sample_context());
        prop_assume!(call < lifecycle_calls(&scenario));

        let backend = InMemoryClusterBackend::failing_at_call(call);
        let (check, _journal) = counter_check("counter");
        let (sleeper, _sleep_log) = recording_sleeper();
        let mut exec = ScenarioExecutor::new(backend, sleeper, vec![Box::new(check)]);

        let report = exec.run(&scenario);

        let expected = action_index_of_call(&scenario, call);
        let RunOutcome::Aborted { index, .. } = report.outcome else {
            return Err(TestCaseError::fail("expected aborted outcome"));
        };
        prop_assert_eq!(index, expected);
        // The failing call recorded no event; exactly `call` events exist.
        prop_assert_eq!(exec.backend().events().len(), call);
    }
}
