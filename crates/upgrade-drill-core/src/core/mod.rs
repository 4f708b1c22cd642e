// upgrade-drill-core/src/core/mod.rs
// ============================================================================
// Module: Upgrade Drill Core Types
// Description: Canonical cluster, version, and action structures.
// Purpose: Provide stable, serializable types for upgrade scenarios.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Upgrade Drill core types define the cluster component model, the version
//! domain, the closed action taxonomy, and the executor-owned cluster state.
//! These types are the canonical source of truth for scenario construction
//! and run reporting.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod action;
pub mod cluster;
pub mod component;
pub mod env;
pub mod identifiers;
pub mod version;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use action::Action;
pub use action::ActionKind;
pub use action::Phase;
pub use cluster::ClusterError;
pub use cluster::ClusterState;
pub use cluster::KillDisposition;
pub use component::ColocationGroup;
pub use component::Component;
pub use component::ComponentKind;
pub use env::EnvOverrides;
pub use identifiers::CheckName;
pub use identifiers::ReleasedVersion;
pub use identifiers::ScenarioName;
pub use version::VersionTag;
