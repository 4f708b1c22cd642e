// upgrade-drill-core/src/runtime/resolver.rs
// ============================================================================
// Module: Upgrade Drill Version Resolver
// Description: Resolution of the prior released version from a feed.
// Purpose: Supply the old endpoint of an upgrade before construction.
// Dependencies: crate::{core, interfaces}, crate::runtime::scenario
// ============================================================================

//! ## Overview
//! The resolver queries the version feed once, before a scenario's actions
//! are constructed, and consumes only the most recent entry. A feed with no
//! releases is fatal: an upgrade scenario needs a prior version to upgrade
//! from.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::ReleasedVersion;
use crate::interfaces::VersionFeed;
use crate::runtime::scenario::ScenarioError;

// ============================================================================
// SECTION: Resolution
// ============================================================================

/// Resolves the most recently released version from a feed.
///
/// # Errors
///
/// Returns [`ScenarioError::NoReleasedVersions`] when the feed lists no
/// releases and [`ScenarioError::Feed`] when the feed cannot be read.
pub fn resolve_prior_version(feed: &impl VersionFeed) -> Result<ReleasedVersion, ScenarioError> {
    let versions = feed.released_versions()?;
    versions.into_iter().next().ok_or(ScenarioError::NoReleasedVersions)
}
