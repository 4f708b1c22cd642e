// upgrade-drill-core/src/core/version.rs
// ============================================================================
// Module: Upgrade Drill Version Model
// Description: Two-element version domain for upgrade endpoints.
// Purpose: Distinguish released builds from the build under test.
// Dependencies: crate::core::identifiers, serde
// ============================================================================

//! ## Overview
//! A component runs either a concrete released build or the build under test.
//! The domain is deliberately two-element: upgrade ordering never compares
//! version identifiers numerically, it only distinguishes the old endpoint
//! (released) from the new endpoint (under test).

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::ReleasedVersion;

// ============================================================================
// SECTION: Version Tag
// ============================================================================

/// Version tag for a cluster component.
///
/// # Invariants
/// - Every component carries a well-defined tag at every point of a run;
///   there is no unknown or mixed state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum VersionTag {
    /// A concrete released build identifier.
    Released(ReleasedVersion),
    /// The build under test.
    UnderTest,
}

impl VersionTag {
    /// Returns true when the tag names a released build.
    #[must_use]
    pub const fn is_released(&self) -> bool {
        matches!(self, Self::Released(_))
    }

    /// Returns true when the tag is the build under test.
    #[must_use]
    pub const fn is_under_test(&self) -> bool {
        matches!(self, Self::UnderTest)
    }

    /// Returns the released version identifier when available.
    #[must_use]
    pub const fn released(&self) -> Option<&ReleasedVersion> {
        match self {
            Self::Released(version) => Some(version),
            Self::UnderTest => None,
        }
    }
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Released(version) => version.fmt(f),
            Self::UnderTest => f.write_str("under-test"),
        }
    }
}

impl From<ReleasedVersion> for VersionTag {
    fn from(version: ReleasedVersion) -> Self {
        Self::Released(version)
    }
}
