// upgrade-drill-core/src/core/identifiers.rs
// ============================================================================
// Module: Upgrade Drill Identifiers
// Description: Canonical opaque identifiers for scenarios, checks, and versions.
// Purpose: Provide strongly typed, serializable names with stable string forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module defines the canonical string-based identifiers used throughout
//! Upgrade Drill. Identifiers are opaque and serialize as strings. Validation
//! is handled at scenario or runtime boundaries rather than within these
//! simple wrappers.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Scenario name identifying one upgrade strategy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioName(String);

impl ScenarioName {
    /// Creates a new scenario name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScenarioName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ScenarioName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ScenarioName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Check name identifying one correctness-verification unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckName(String);

impl CheckName {
    /// Creates a new check name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CheckName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for CheckName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for CheckName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Identifier of a concrete released build, such as `v0.27.0`.
///
/// # Invariants
/// - Values are opaque; recency ordering comes from the version feed, never
///   from comparing identifier strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReleasedVersion(String);

impl ReleasedVersion {
    /// Creates a new released version identifier.
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    /// Returns the version as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReleasedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ReleasedVersion {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ReleasedVersion {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
