// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use weekstay_domain::WeekDay;

/// Receives notifications from a selection engine.
///
/// Callbacks run synchronously on the caller's thread, inside the gesture
/// or poll call that caused them.
pub trait SelectionListener {
    /// The selection changed. `days` is ordered by index.
    ///
    /// Fires for transient states too: drag spans, and range fills that are
    /// then rolled back (followed by a second call with the restored set).
    fn on_selection_change(&mut self, days: &[WeekDay]);

    /// A validation error was surfaced.
    fn on_error(&mut self, message: &str);

    /// A surfaced error was hidden again.
    fn on_error_dismissed(&mut self, _message: &str) {}
}

/// Adapts a pair of closures into a [`SelectionListener`].
pub struct FnListener<C, E>
where
    C: FnMut(&[WeekDay]),
    E: FnMut(&str),
{
    on_change: C,
    on_error: E,
}

impl<C, E> FnListener<C, E>
where
    C: FnMut(&[WeekDay]),
    E: FnMut(&str),
{
    /// Creates a listener from a change callback and an error callback.
    pub const fn new(on_change: C, on_error: E) -> Self {
        Self {
            on_change,
            on_error,
        }
    }
}

impl<C, E> SelectionListener for FnListener<C, E>
where
    C: FnMut(&[WeekDay]),
    E: FnMut(&str),
{
    fn on_selection_change(&mut self, days: &[WeekDay]) {
        (self.on_change)(days);
    }

    fn on_error(&mut self, message: &str) {
        (self.on_error)(message);
    }
}

impl<C, E> std::fmt::Debug for FnListener<C, E>
where
    C: FnMut(&[WeekDay]),
    E: FnMut(&str),
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnListener").finish_non_exhaustive()
    }
}
