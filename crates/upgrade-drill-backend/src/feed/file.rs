// upgrade-drill-backend/src/feed/file.rs
// ============================================================================
// Module: Upgrade Drill File Version Feed
// Description: Version feed backed by a local release-list file.
// Purpose: Read release history from the filesystem.
// Dependencies: upgrade-drill-core, std
// ============================================================================

//! ## Overview
//! `FileVersionFeed` reads a plain-text release list: one version identifier
//! per line, most recent first. Blank lines and `#` comments are skipped.
//! The file is read on every query so the feed reflects updates without
//! restarting the host.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;

use upgrade_drill_core::ReleasedVersion;
use upgrade_drill_core::VersionFeed;
use upgrade_drill_core::VersionFeedError;

// ============================================================================
// SECTION: File Feed
// ============================================================================

/// Version feed backed by a release-list file.
#[derive(Debug, Clone)]
pub struct FileVersionFeed {
    /// Path to the release-list file.
    path: PathBuf,
}

impl FileVersionFeed {
    /// Creates a feed reading from the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
        }
    }

    /// Returns the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl VersionFeed for FileVersionFeed {
    fn released_versions(&self) -> Result<Vec<ReleasedVersion>, VersionFeedError> {
        let contents = std::fs::read_to_string(&self.path)
            .map_err(|err| VersionFeedError::Io(err.to_string()))?;
        let versions = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(ReleasedVersion::new)
            .collect();
        Ok(versions)
    }
}
