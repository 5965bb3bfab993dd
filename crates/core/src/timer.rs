// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Single-shot cancellable timers.
//!
//! The engine never sleeps or spawns. A timer is only a deadline; whoever
//! drives the engine asks for the next deadline, waits, and calls
//! [`crate::SelectionEngine::poll`]. Dropping the engine drops its timers,
//! so nothing can fire against a torn-down instance.

use std::time::{Duration, Instant};

/// Longest delay a [`Timer`] accepts: one year.
pub const MAX_DELAY: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Source of the current time.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> Instant;
}

/// Wall-clock time from [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A single-shot timer that is either idle or armed with a deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timer {
    deadline: Option<Instant>,
}

impl Timer {
    /// Creates an idle timer.
    #[must_use]
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Arms the timer to fire `delay` after `now`, replacing any pending
    /// deadline.
    ///
    /// Delays longer than [`MAX_DELAY`] are clamped to it, so the timer is
    /// always armed afterwards.
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        let delay: Duration = delay.min(MAX_DELAY);
        self.deadline = Some(now.checked_add(delay).unwrap_or(now));
    }

    /// Disarms the timer. Returns true if a deadline was pending.
    pub const fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Returns true if a deadline is pending.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// The pending deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Fires the timer if its deadline has passed.
    ///
    /// Returns true exactly once per arming; the timer is idle afterwards.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
