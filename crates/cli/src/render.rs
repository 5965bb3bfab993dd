// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::io::Write;
use tracing::{debug, warn};
use weekstay::{Clock, SelectionEngine, SelectionListener, SelectionSet, WEEK, WeekDay};

/// Renders the week as a row of cells, selected days in brackets.
///
/// `Sun..Tue` renders as `[S][M][T] W  T  F  S   Sun–Tue (3 nights)`.
#[must_use]
pub fn render_week(selection: &SelectionSet) -> String {
    let row: String = WEEK
        .iter()
        .map(|day| {
            if selection.contains(day.index) {
                format!("[{}]", day.short_label)
            } else {
                format!(" {} ", day.short_label)
            }
        })
        .collect();
    format!("{row}  {}", selection.describe())
}

/// Multi-line description of the engine state, printed by `show`.
#[must_use]
pub fn render_state<L: SelectionListener, C: Clock>(engine: &SelectionEngine<L, C>) -> String {
    let mut lines: Vec<String> = vec![
        render_week(&engine.selection()),
        format!("policy: {}", engine.policy()),
    ];
    if let Some(check_in) = engine.pending_check_in() {
        lines.push(format!("check-in: {}", check_in.week_day()));
    }
    if engine.is_dragging() {
        lines.push(String::from("dragging"));
    }
    if engine.validation_pending() {
        lines.push(String::from("validation pending"));
    }
    if let Some(message) = engine.visible_error() {
        lines.push(format!("error: {message}"));
    }
    lines.join("\n")
}

/// Writes selection changes and errors to a terminal.
#[derive(Debug)]
pub struct TerminalListener<W: Write> {
    out: W,
}

impl<W: Write> TerminalListener<W> {
    /// Creates a listener writing to `out`.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes one line, logging rather than failing on I/O errors.
    pub fn line(&mut self, text: &str) {
        if let Err(err) = writeln!(self.out, "{text}") {
            warn!(error = %err, "Failed to write output");
        }
    }

    /// Consumes the listener and returns its writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SelectionListener for TerminalListener<W> {
    fn on_selection_change(&mut self, days: &[WeekDay]) {
        let selection: SelectionSet = days.iter().map(|day| day.index).collect();
        self.line(&render_week(&selection));
    }

    fn on_error(&mut self, message: &str) {
        self.line(&format!("! {message}"));
    }

    fn on_error_dismissed(&mut self, message: &str) {
        debug!(%message, "Error hidden");
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use weekstay::DayIndex;

    fn set_of(indices: &[u8]) -> SelectionSet {
        indices.iter().map(|i| DayIndex::new(*i).unwrap()).collect()
    }

    #[test]
    fn test_render_week_brackets_selected_days() {
        assert_eq!(
            render_week(&set_of(&[0, 1, 2])),
            "[S][M][T] W  T  F  S   Sun–Tue (3 nights)"
        );
    }

    #[test]
    fn test_render_empty_week() {
        assert_eq!(
            render_week(&SelectionSet::new()),
            " S  M  T  W  T  F  S   no days selected"
        );
    }

    #[test]
    fn test_listener_writes_changes_and_errors() {
        let mut listener: TerminalListener<Vec<u8>> = TerminalListener::new(Vec::new());
        let days: Vec<WeekDay> = set_of(&[5, 6]).days();

        listener.on_selection_change(&days);
        listener.on_error("Please select at least 2 days");

        let text: String = String::from_utf8(listener.into_inner()).unwrap();
        assert_eq!(
            text,
            " S  M  T  W  T [F][S]  Fri–Sat (2 nights)\n! Please select at least 2 days\n"
        );
    }
}
