// upgrade-drill-core/src/runtime/mod.rs
// ============================================================================
// Module: Upgrade Drill Runtime
// Description: Scenario definitions, execution engine, and helpers.
// Purpose: Drive upgrade scenarios against a cluster backend and checks.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! Runtime modules implement scenario construction, the strictly sequential
//! scenario executor, version resolution, and an in-memory backend for
//! deterministic testing. All scenario runs go through the same executor
//! logic to preserve ordering invariants.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod executor;
pub mod memory;
pub mod resolver;
pub mod scenario;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use executor::ActionFailure;
pub use executor::CheckHook;
pub use executor::RunOutcome;
pub use executor::RunReport;
pub use executor::RunStatus;
pub use executor::ScenarioExecutor;
pub use memory::BackendEvent;
pub use memory::InMemoryClusterBackend;
pub use resolver::resolve_prior_version;
pub use scenario::COEXISTENCE_WINDOW;
pub use scenario::Scenario;
pub use scenario::ScenarioBuilder;
pub use scenario::ScenarioEntry;
pub use scenario::ScenarioError;
pub use scenario::UpgradeContext;
pub use scenario::builtin_scenarios;
pub use scenario::scenario_by_name;
pub use scenario::upgrade_entire_cluster;
pub use scenario::upgrade_worker_first;
pub use scenario::upgrade_worker_last;
