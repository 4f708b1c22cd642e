// upgrade-drill-backend/src/feed/mod.rs
// ============================================================================
// Module: Upgrade Drill Version Feeds
// Description: Version-feed sources listing released builds.
// Purpose: Supply release history to scenario construction.
// Dependencies: upgrade-drill-core
// ============================================================================

//! ## Overview
//! Version feeds list released build identifiers in recency order, most
//! recent first. The core consumes only the head entry as the old endpoint
//! of an upgrade; feeds fail closed when their backing data cannot be read.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod file;
pub mod inline;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use file::FileVersionFeed;
pub use inline::InlineVersionFeed;
