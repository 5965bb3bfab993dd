// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use weekstay_domain::DayIndex;

/// Transient pointer state, separate from the selection itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    /// A drag is in progress; the selection is the live span.
    pub is_dragging: bool,
    /// Day the current drag started on.
    pub drag_anchor: Option<DayIndex>,
    /// Check-in day waiting for a check-out click.
    pub pending_check_in: Option<DayIndex>,
    /// Day under a press that has not yet become a click or a drag.
    pub pressed: Option<DayIndex>,
}

impl InteractionState {
    /// Creates an idle interaction state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            is_dragging: false,
            drag_anchor: None,
            pending_check_in: None,
            pressed: None,
        }
    }

    /// Enters the dragging state anchored at `anchor`.
    pub(crate) const fn begin_drag(&mut self, anchor: DayIndex) {
        self.is_dragging = true;
        self.drag_anchor = Some(anchor);
        self.pending_check_in = None;
        self.pressed = None;
    }

    /// Leaves the dragging state.
    pub(crate) const fn finish_drag(&mut self) {
        self.is_dragging = false;
        self.drag_anchor = None;
        self.pressed = None;
    }

    /// The anchor of the drag in progress.
    #[must_use]
    pub const fn active_anchor(&self) -> Option<DayIndex> {
        if self.is_dragging {
            self.drag_anchor
        } else {
            None
        }
    }
}
