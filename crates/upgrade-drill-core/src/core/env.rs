// upgrade-drill-core/src/core/env.rs
// ============================================================================
// Module: Upgrade Drill Environment Overrides
// Description: Opaque environment override mapping for component starts.
// Purpose: Thread deployment-specific settings through start actions.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Environment overrides carry key/value settings (such as cluster sizing
//! parameters) from scenario construction into the execution backend. The
//! core never interprets their content; the deterministic map order only
//! keeps action sequences reproducible.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Environment Overrides
// ============================================================================

/// Opaque environment override mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvOverrides(BTreeMap<String, String>);

impl EnvOverrides {
    /// Creates an empty override set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Inserts an override, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns the value for a key when present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns true when no overrides are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of overrides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates the overrides in deterministic key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl FromIterator<(String, String)> for EnvOverrides {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
