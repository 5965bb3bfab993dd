// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use weekstay_domain::DayIndex;

/// A pointer gesture reported by the rendering layer.
///
/// Gestures are data only; [`crate::SelectionEngine::apply`] decides what
/// each one means for the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Pointer pressed on a day cell. Becomes a click or the start of a drag.
    Press(DayIndex),
    /// Pointer moved onto a day cell.
    Enter(DayIndex),
    /// Pointer released over a day cell.
    Release(DayIndex),
    /// Pointer left the widget.
    Leave,
    /// A complete click on a day cell.
    Click(DayIndex),
    /// The "clear selection" action.
    Reset,
}
