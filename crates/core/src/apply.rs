// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Gesture;
use crate::engine::SelectionEngine;
use crate::listener::SelectionListener;
use crate::timer::Clock;
use tracing::trace;
use weekstay_domain::DayIndex;

impl<L: SelectionListener, C: Clock> SelectionEngine<L, C> {
    /// Applies a raw pointer gesture.
    ///
    /// A press only records the day. Entering a different day while pressed
    /// turns the press into a drag anchored at the pressed day. Releasing
    /// ends the drag, or, when the press never became a drag, counts as a
    /// click on the pressed day. Leaving the widget ends any drag.
    pub fn apply(&mut self, gesture: Gesture) {
        trace!(?gesture, "Applying gesture");
        match gesture {
            Gesture::Press(day) => {
                self.interaction.pressed = Some(day);
            }
            Gesture::Enter(day) => self.pointer_entered(day),
            Gesture::Release(day) => self.pointer_released(day),
            Gesture::Leave => {
                self.interaction.pressed = None;
                self.end_drag();
            }
            Gesture::Click(day) => self.toggle_day(day),
            Gesture::Reset => self.reset(),
        }
    }

    fn pointer_entered(&mut self, day: DayIndex) {
        if self.interaction.is_dragging {
            self.drag_over(day);
            return;
        }

        match self.interaction.pressed {
            Some(pressed) if pressed != day => {
                self.start_drag(pressed);
                self.drag_over(day);
            }
            _ => {}
        }
    }

    fn pointer_released(&mut self, day: DayIndex) {
        if self.interaction.is_dragging {
            self.drag_over(day);
            self.end_drag();
            return;
        }

        match self.interaction.pressed.take() {
            Some(pressed) if pressed == day => self.toggle_day(day),
            // Released elsewhere without any enter events in between.
            Some(pressed) => {
                self.start_drag(pressed);
                self.drag_over(day);
                self.end_drag();
            }
            None => {}
        }
    }
}
