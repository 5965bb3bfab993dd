// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::listener::SelectionListener;
use crate::timer::Timer;
use std::time::{Duration, Instant};
use tracing::debug;

/// Shows validation errors for a fixed period and forwards them to the
/// listener.
///
/// At most one message is visible; a newer message replaces it and
/// restarts the hide timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPresenter {
    display_for: Duration,
    visible: Option<String>,
    hide_timer: Timer,
}

impl ErrorPresenter {
    /// Creates a presenter that hides messages after `display_for`.
    #[must_use]
    pub const fn new(display_for: Duration) -> Self {
        Self {
            display_for,
            visible: None,
            hide_timer: Timer::new(),
        }
    }

    /// Displays `message` and reports it through `listener.on_error`.
    pub fn show<L: SelectionListener>(&mut self, message: String, now: Instant, listener: &mut L) {
        self.hide_timer.arm(now, self.display_for);
        listener.on_error(&message);
        self.visible = Some(message);
    }

    /// Hides the visible message if its display period has elapsed.
    ///
    /// Returns true if a message was hidden.
    pub fn poll<L: SelectionListener>(&mut self, now: Instant, listener: &mut L) -> bool {
        if !self.hide_timer.fire_if_due(now) {
            return false;
        }

        match self.visible.take() {
            Some(message) => {
                debug!(%message, "Error display period elapsed");
                listener.on_error_dismissed(&message);
                true
            }
            None => false,
        }
    }

    /// Hides the visible message immediately and cancels the hide timer.
    pub fn dismiss<L: SelectionListener>(&mut self, listener: &mut L) {
        self.hide_timer.cancel();
        if let Some(message) = self.visible.take() {
            listener.on_error_dismissed(&message);
        }
    }

    /// Drops the visible message and the hide timer without notifying.
    pub fn cancel(&mut self) {
        self.hide_timer.cancel();
        self.visible = None;
    }

    /// The message currently on display.
    #[must_use]
    pub fn visible(&self) -> Option<&str> {
        self.visible.as_deref()
    }

    /// When the visible message will be hidden.
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.hide_timer.deadline()
    }
}
