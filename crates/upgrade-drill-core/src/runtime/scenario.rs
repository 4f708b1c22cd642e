// upgrade-drill-core/src/runtime/scenario.rs
// ============================================================================
// Module: Upgrade Drill Scenarios
// Description: Canonical upgrade orderings and the scenario registry.
// Purpose: Construct fixed action sequences for valid upgrade strategies.
// Dependencies: crate::{core, interfaces}, thiserror
// ============================================================================

//! ## Overview
//! A scenario is a fixed, named sequence of actions describing one upgrade
//! strategy. Construction is pure: building a scenario has no side effects,
//! and the sequence never changes once built. The orderings encoded here
//! reflect a real compatibility constraint between the cluster roles: the
//! worker may only run a different version than the coordinator inside an
//! explicit, bounded coexistence window, which is why worker-last and
//! worker-first are distinct, deliberately ordered scenarios rather than
//! arbitrary permutations.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use thiserror::Error;

use crate::core::Action;
use crate::core::ComponentKind;
use crate::core::EnvOverrides;
use crate::core::Phase;
use crate::core::ReleasedVersion;
use crate::core::ScenarioName;
use crate::core::VersionTag;
use crate::interfaces::VersionFeed;
use crate::interfaces::VersionFeedError;
use crate::runtime::resolver::resolve_prior_version;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Length of the deliberate coexistence window between the two roles'
/// version transitions in the partial-upgrade scenarios.
pub const COEXISTENCE_WINDOW: Duration = Duration::from_secs(10);

// ============================================================================
// SECTION: Scenario Errors
// ============================================================================

/// Scenario construction errors.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The version feed listed no released versions.
    ///
    /// An upgrade scenario is meaningless without a prior version to upgrade
    /// from, so this is fatal to construction.
    #[error("no released versions available to upgrade from")]
    NoReleasedVersions,
    /// The version feed could not be read.
    #[error(transparent)]
    Feed(#[from] VersionFeedError),
    /// No registered scenario carries the requested name.
    #[error("unknown scenario: {0}")]
    UnknownScenario(String),
}

// ============================================================================
// SECTION: Upgrade Context
// ============================================================================

/// Inputs bound into a scenario at construction time.
///
/// The prior released version is injected explicitly rather than read from
/// ambient state, so scenario construction stays pure and testable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeContext {
    /// Most recently released version, the old endpoint of the upgrade.
    pub prior: ReleasedVersion,
    /// Environment overrides for starts at the prior version.
    ///
    /// Older releases need deployment settings spelled out explicitly; the
    /// build under test starts with its own defaults.
    pub env: EnvOverrides,
}

impl UpgradeContext {
    /// Creates a context with no environment overrides.
    #[must_use]
    pub const fn new(prior: ReleasedVersion) -> Self {
        Self {
            prior,
            env: EnvOverrides::new(),
        }
    }

    /// Creates a context with environment overrides for prior-version starts.
    #[must_use]
    pub const fn with_env(prior: ReleasedVersion, env: EnvOverrides) -> Self {
        Self {
            prior,
            env,
        }
    }

    /// Builds a context by resolving the prior version from a feed.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::NoReleasedVersions`] when the feed is empty
    /// and [`ScenarioError::Feed`] when it cannot be read.
    pub fn from_feed(feed: &impl VersionFeed, env: EnvOverrides) -> Result<Self, ScenarioError> {
        let prior = resolve_prior_version(feed)?;
        Ok(Self::with_env(prior, env))
    }
}

// ============================================================================
// SECTION: Scenario
// ============================================================================

/// A fixed, named sequence of actions describing one upgrade strategy.
///
/// # Invariants
/// - The sequence is fixed at construction and never mutated during
///   execution; traversal is read-only.
/// - Builders produce non-empty, deterministic sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    /// Scenario name.
    name: ScenarioName,
    /// Ordered action sequence.
    actions: Vec<Action>,
}

impl Scenario {
    /// Creates a scenario from a name and an ordered action sequence.
    #[must_use]
    pub fn new(name: impl Into<ScenarioName>, actions: Vec<Action>) -> Self {
        Self {
            name: name.into(),
            actions,
        }
    }

    /// Returns the scenario name.
    #[must_use]
    pub const fn name(&self) -> &ScenarioName {
        &self.name
    }

    /// Returns the ordered action sequence.
    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
}

// ============================================================================
// SECTION: Canonical Scenarios
// ============================================================================

/// Upgrades the entire cluster from the prior version all at once.
///
/// The composite coordinator start brings up the whole instance, so no
/// coexistence window exists and no separate worker actions are needed.
#[must_use]
pub fn upgrade_entire_cluster(ctx: &UpgradeContext) -> Scenario {
    Scenario::new(
        "upgrade-entire-cluster",
        vec![
            Action::StartComponent {
                component: ComponentKind::Coordinator,
                version: VersionTag::Released(ctx.prior.clone()),
                env: ctx.env.clone(),
            },
            Action::InitializeChecks,
            Action::ManipulateChecks {
                phase: Phase::new(1),
            },
            Action::KillComponent {
                component: ComponentKind::Coordinator,
            },
            Action::StartComponent {
                component: ComponentKind::Coordinator,
                version: VersionTag::UnderTest,
                env: EnvOverrides::new(),
            },
            Action::ManipulateChecks {
                phase: Phase::new(2),
            },
            Action::ValidateChecks,
        ],
    )
}

/// Upgrades the worker separately, after the coordinator roles.
///
/// No useful work can be done while the worker is old and the coordinator is
/// new, so the scenario proceeds to upgrade the worker as well. The sleep
/// still allows a bounded period of coexistence even though no queries are
/// issued during that time.
#[must_use]
pub fn upgrade_worker_last(ctx: &UpgradeContext) -> Scenario {
    let mut actions = partial_upgrade_prologue(ctx);
    actions.extend(transition_to_under_test(ComponentKind::Coordinator));
    actions.push(Action::Sleep {
        duration: COEXISTENCE_WINDOW,
    });
    actions.extend(transition_to_under_test(ComponentKind::Worker));
    actions.extend(partial_upgrade_epilogue());
    Scenario::new("upgrade-worker-last", actions)
}

/// Upgrades the worker separately, before the coordinator roles.
///
/// The symmetric counterpart of [`upgrade_worker_last`]: the worker briefly
/// runs newer than the coordinator, bounded by the same coexistence window.
#[must_use]
pub fn upgrade_worker_first(ctx: &UpgradeContext) -> Scenario {
    let mut actions = partial_upgrade_prologue(ctx);
    actions.extend(transition_to_under_test(ComponentKind::Worker));
    actions.push(Action::Sleep {
        duration: COEXISTENCE_WINDOW,
    });
    actions.extend(transition_to_under_test(ComponentKind::Coordinator));
    actions.extend(partial_upgrade_epilogue());
    Scenario::new("upgrade-worker-first", actions)
}

/// Shared prologue for the partial-upgrade scenarios: both roles start at the
/// prior version, the standalone worker becomes the active target, and the
/// first manipulation phase runs against the old cluster.
fn partial_upgrade_prologue(ctx: &UpgradeContext) -> Vec<Action> {
    vec![
        Action::StartComponent {
            component: ComponentKind::Coordinator,
            version: VersionTag::Released(ctx.prior.clone()),
            env: ctx.env.clone(),
        },
        Action::StartComponent {
            component: ComponentKind::Worker,
            version: VersionTag::Released(ctx.prior.clone()),
            env: EnvOverrides::new(),
        },
        Action::UseComponent {
            component: ComponentKind::Worker,
        },
        Action::InitializeChecks,
        Action::ManipulateChecks {
            phase: Phase::new(1),
        },
    ]
}

/// Shared epilogue for the partial-upgrade scenarios: the second manipulation
/// phase and validation run only after both roles reach the build under test.
fn partial_upgrade_epilogue() -> Vec<Action> {
    vec![
        Action::ManipulateChecks {
            phase: Phase::new(2),
        },
        Action::ValidateChecks,
    ]
}

/// Kill-then-restart transition moving one component to the build under test.
fn transition_to_under_test(component: ComponentKind) -> Vec<Action> {
    vec![
        Action::KillComponent {
            component,
        },
        Action::StartComponent {
            component,
            version: VersionTag::UnderTest,
            env: EnvOverrides::new(),
        },
    ]
}

// ============================================================================
// SECTION: Scenario Registry
// ============================================================================

/// Scenario constructor function bound to an upgrade context.
pub type ScenarioBuilder = fn(&UpgradeContext) -> Scenario;

/// Registry entry mapping a scenario name to its builder.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioEntry {
    /// Registered scenario name.
    pub name: &'static str,
    /// Builder producing the scenario for a context.
    pub builder: ScenarioBuilder,
}

/// Enumerated table of the canonical scenarios.
///
/// Selection is an explicit lookup rather than dynamic discovery, so the set
/// of valid orderings is auditable in one place.
const BUILTIN_SCENARIOS: &[ScenarioEntry] = &[
    ScenarioEntry {
        name: "upgrade-entire-cluster",
        builder: upgrade_entire_cluster,
    },
    ScenarioEntry {
        name: "upgrade-worker-last",
        builder: upgrade_worker_last,
    },
    ScenarioEntry {
        name: "upgrade-worker-first",
        builder: upgrade_worker_first,
    },
];

/// Returns the registry of canonical scenarios.
#[must_use]
pub const fn builtin_scenarios() -> &'static [ScenarioEntry] {
    BUILTIN_SCENARIOS
}

/// Builds a registered scenario by name.
///
/// # Errors
///
/// Returns [`ScenarioError::UnknownScenario`] when no builder is registered
/// under the name.
pub fn scenario_by_name(name: &str, ctx: &UpgradeContext) -> Result<Scenario, ScenarioError> {
    BUILTIN_SCENARIOS
        .iter()
        .find(|entry| entry.name == name)
        .map(|entry| (entry.builder)(ctx))
        .ok_or_else(|| ScenarioError::UnknownScenario(name.to_string()))
}
