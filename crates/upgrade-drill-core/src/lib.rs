// upgrade-drill-core/src/lib.rs
// ============================================================================
// Module: Upgrade Drill Core Library
// Description: Public API surface for the Upgrade Drill core.
// Purpose: Expose core types, interfaces, and runtime helpers.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Upgrade Drill core drives a cluster of cooperating service processes
//! through scripted upgrade scenarios and verifies that rolling or partial
//! upgrades preserve correctness. It is substrate-agnostic and integrates
//! through explicit interfaces rather than embedding into a deployment stack.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use interfaces::BackendError;
pub use interfaces::Check;
pub use interfaces::CheckError;
pub use interfaces::ClusterBackend;
pub use interfaces::Sleeper;
pub use interfaces::VersionFeed;
pub use interfaces::VersionFeedError;
pub use runtime::ActionFailure;
pub use runtime::BackendEvent;
pub use runtime::CheckHook;
pub use runtime::COEXISTENCE_WINDOW;
pub use runtime::InMemoryClusterBackend;
pub use runtime::RunOutcome;
pub use runtime::RunReport;
pub use runtime::RunStatus;
pub use runtime::Scenario;
pub use runtime::ScenarioBuilder;
pub use runtime::ScenarioEntry;
pub use runtime::ScenarioError;
pub use runtime::ScenarioExecutor;
pub use runtime::UpgradeContext;
pub use runtime::builtin_scenarios;
pub use runtime::resolve_prior_version;
pub use runtime::scenario_by_name;
pub use runtime::upgrade_entire_cluster;
pub use runtime::upgrade_worker_first;
pub use runtime::upgrade_worker_last;
