// upgrade-drill-backend/src/sleep.rs
// ============================================================================
// Module: Upgrade Drill Wall-Clock Sleeper
// Description: Thread-blocking sleeper for coexistence windows.
// Purpose: Realize scripted pauses against real wall-clock time.
// Dependencies: upgrade-drill-core, std
// ============================================================================

//! ## Overview
//! `ThreadSleeper` blocks the executing thread for the requested duration.
//! Scenario execution is strictly sequential, so blocking the thread is the
//! intended behavior; the pause is a coexistence-window requirement, not a
//! wait-for-event.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::thread;
use std::time::Duration;

use upgrade_drill_core::Sleeper;

// ============================================================================
// SECTION: Thread Sleeper
// ============================================================================

/// Wall-clock sleeper backed by `std::thread::sleep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleeper;

impl ThreadSleeper {
    /// Creates a new thread sleeper.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}
