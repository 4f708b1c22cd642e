// upgrade-drill-backend/src/lib.rs
// ============================================================================
// Module: Upgrade Drill Backend Library
// Description: Concrete realizations of the core interface seams.
// Purpose: Provide audit logging, wall-clock sleeping, and version feeds.
// Dependencies: upgrade-drill-core, serde_json
// ============================================================================

//! ## Overview
//! This crate carries the interface realizations that touch the outside
//! world: an audit-logging decorator for cluster backends, a wall-clock
//! sleeper, and version-feed sources. The core stays substrate-agnostic;
//! everything environment-specific lives here.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod feed;
pub mod log;
pub mod sleep;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use feed::FileVersionFeed;
pub use feed::InlineVersionFeed;
pub use log::LogBackend;
pub use sleep::ThreadSleeper;
