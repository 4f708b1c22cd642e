// upgrade-drill-backend/src/feed/inline.rs
// ============================================================================
// Module: Upgrade Drill Inline Version Feed
// Description: Version feed over an embedded release list.
// Purpose: Supply release history from in-process data.
// Dependencies: upgrade-drill-core
// ============================================================================

//! ## Overview
//! `InlineVersionFeed` serves a release list provided at construction time.
//! Useful for hosts that already know their release history and for tests
//! that need deterministic feeds without touching the filesystem.

// ============================================================================
// SECTION: Imports
// ============================================================================

use upgrade_drill_core::ReleasedVersion;
use upgrade_drill_core::VersionFeed;
use upgrade_drill_core::VersionFeedError;

// ============================================================================
// SECTION: Inline Feed
// ============================================================================

/// Version feed over an embedded release list, most recent first.
#[derive(Debug, Clone, Default)]
pub struct InlineVersionFeed {
    /// Released versions in recency order.
    versions: Vec<ReleasedVersion>,
}

impl InlineVersionFeed {
    /// Creates a feed from a release list in recency order.
    #[must_use]
    pub const fn new(versions: Vec<ReleasedVersion>) -> Self {
        Self {
            versions,
        }
    }

    /// Creates an empty feed with no known releases.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            versions: Vec::new(),
        }
    }
}

impl VersionFeed for InlineVersionFeed {
    fn released_versions(&self) -> Result<Vec<ReleasedVersion>, VersionFeedError> {
        Ok(self.versions.clone())
    }
}
