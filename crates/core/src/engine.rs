// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The selection engine.
//!
//! ## Invariants
//!
//! - Every change to the selection is reported to the listener, including
//!   transient drag spans and range fills that are then rolled back
//! - The selection is never validated while a drag is in progress
//! - At most one debounce timer and one error hide timer are armed
//! - `reset` leaves nothing armed, so no stale error can surface afterwards

use crate::error::CoreError;
use crate::listener::SelectionListener;
use crate::policy::{EngineSettings, GesturePolicy};
use crate::presenter::ErrorPresenter;
use crate::state::InteractionState;
use crate::timer::{Clock, SystemClock, Timer};
use std::time::Instant;
use tracing::{debug, info, warn};
use weekstay_domain::{
    DayIndex, SelectionSet, SelectionViolation, SelectorConfig, WeekDay, circular_run,
    validate_selection,
};

/// Owns one picker's selection and turns gestures into selection changes.
///
/// Each engine exclusively owns its selection, interaction state and timers.
#[derive(Debug)]
pub struct SelectionEngine<L, C = SystemClock> {
    config: SelectorConfig,
    settings: EngineSettings,
    selection: SelectionSet,
    pub(crate) interaction: InteractionState,
    debounce: Timer,
    presenter: ErrorPresenter,
    listener: L,
    clock: C,
}

impl<L: SelectionListener> SelectionEngine<L, SystemClock> {
    /// Creates an engine driven by the system clock.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidConfig` if the configuration breaks a
    /// domain rule (see [`SelectorConfig::validate`]).
    pub fn new(
        config: SelectorConfig,
        settings: EngineSettings,
        listener: L,
    ) -> Result<Self, CoreError> {
        Self::with_clock(config, settings, listener, SystemClock)
    }
}

impl<L: SelectionListener, C: Clock> SelectionEngine<L, C> {
    /// Creates an engine that reads time from `clock`.
    ///
    /// The initial selection from the configuration is installed as-is,
    /// without validation or notification.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidConfig` if the configuration breaks a
    /// domain rule.
    pub fn with_clock(
        config: SelectorConfig,
        settings: EngineSettings,
        listener: L,
        clock: C,
    ) -> Result<Self, CoreError> {
        config.validate()?;

        let selection: SelectionSet = config.initial_set();
        debug!(
            policy = %settings.policy,
            min_days = config.min_days,
            max_days = config.max_days,
            require_contiguous = config.require_contiguous,
            initial = selection.len(),
            "Created selection engine"
        );

        Ok(Self {
            presenter: ErrorPresenter::new(settings.error_display),
            config,
            settings,
            selection,
            interaction: InteractionState::new(),
            debounce: Timer::new(),
            listener,
            clock,
        })
    }

    /// Handles a click on `day`.
    ///
    /// A selected day is removed. An unselected day is interpreted by the
    /// gesture policy: a fresh start, a neighbour extension, a range fill
    /// from the pending check-in, or a plain toggle. A completed range hides
    /// any error still on display.
    pub fn toggle_day(&mut self, day: DayIndex) {
        if self.interaction.is_dragging {
            debug!(day = %day, "Ignoring click while dragging");
            return;
        }

        if self.selection.contains(day) {
            self.selection.remove(day);
            self.interaction.pending_check_in = None;
            debug!(day = %day, "Removed day from selection");
            self.notify_change();
            self.selection_edited();
            return;
        }

        match self.settings.policy {
            GesturePolicy::ToggleWithDebounce => {
                self.selection.insert(day);
                debug!(day = %day, "Added day to selection");
                self.notify_change();
                self.selection_edited();
            }
            GesturePolicy::CheckInCheckOut | GesturePolicy::AdjacencyHybrid => {
                if self.selection.is_empty() {
                    self.selection = SelectionSet::single(day);
                    self.interaction.pending_check_in = Some(day);
                    debug!(day = %day, "Started selection at check-in day");
                    self.notify_change();
                } else if self.settings.policy == GesturePolicy::AdjacencyHybrid
                    && self.extends_selection(day)
                {
                    self.extend(day);
                } else {
                    self.fill_range(day);
                }
            }
        }
    }

    /// Starts a drag on `day`, discarding the previous selection.
    pub fn start_drag(&mut self, day: DayIndex) {
        self.debounce.cancel();
        self.interaction.begin_drag(day);
        self.selection = SelectionSet::single(day);
        debug!(anchor = %day, "Started drag");
        self.notify_change();
    }

    /// Moves an active drag over `day`.
    ///
    /// The selection becomes the circular run from the drag anchor to `day`;
    /// earlier spans are replaced, not accumulated.
    pub fn drag_over(&mut self, day: DayIndex) {
        let Some(anchor) = self.interaction.active_anchor() else {
            return;
        };

        let span: SelectionSet = circular_run(anchor, day);
        if span != self.selection {
            self.selection = span;
            self.notify_change();
        }
    }

    /// Ends an active drag and validates the span.
    ///
    /// An invalid span is discarded entirely; the pre-drag selection is not
    /// restored.
    pub fn end_drag(&mut self) {
        if !self.interaction.is_dragging {
            return;
        }
        self.interaction.finish_drag();

        match validate_selection(&self.selection, &self.config) {
            Ok(()) => {
                self.presenter.dismiss(&mut self.listener);
                info!(selection = %self.selection.describe(), "Drag selection completed");
            }
            Err(violation) => {
                self.selection.clear();
                self.notify_change();
                self.surface(violation);
            }
        }
    }

    /// Clears the selection and all pending interaction state and timers.
    pub fn reset(&mut self) {
        self.debounce.cancel();
        self.interaction = InteractionState::new();
        self.presenter.dismiss(&mut self.listener);
        self.selection.clear();
        debug!("Selection reset");
        self.notify_change();
    }

    /// Fires any timers whose deadline has passed.
    ///
    /// Call this when [`Self::next_deadline`] is reached. Calling it early
    /// is harmless.
    pub fn poll(&mut self) {
        let now: Instant = self.clock.now();

        if self.debounce.fire_if_due(now) {
            debug!(selection = %self.selection.describe(), "Debounce period elapsed");
            match validate_selection(&self.selection, &self.config) {
                Ok(()) if !self.selection.is_empty() => {
                    info!(selection = %self.selection.describe(), "Selection completed");
                }
                Ok(()) => {}
                Err(violation) => self.surface(violation),
            }
        }

        self.presenter.poll(now, &mut self.listener);
    }

    /// The earliest armed timer deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.debounce.deadline(), self.presenter.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Cancels every timer and hands back the listener.
    pub fn teardown(mut self) -> L {
        self.debounce.cancel();
        self.presenter.cancel();
        debug!("Selection engine torn down");
        self.listener
    }

    /// The current selection.
    #[must_use]
    pub const fn selection(&self) -> SelectionSet {
        self.selection
    }

    /// The selected days ordered by index.
    #[must_use]
    pub fn selected_days(&self) -> Vec<WeekDay> {
        self.selection.days()
    }

    /// Number of selected days.
    #[must_use]
    pub const fn night_count(&self) -> usize {
        self.selection.len()
    }

    /// Returns true while a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.interaction.is_dragging
    }

    /// The check-in day waiting for a check-out click.
    #[must_use]
    pub const fn pending_check_in(&self) -> Option<DayIndex> {
        self.interaction.pending_check_in
    }

    /// A copy of the transient pointer state.
    #[must_use]
    pub const fn interaction(&self) -> InteractionState {
        self.interaction
    }

    /// The error message currently on display.
    #[must_use]
    pub fn visible_error(&self) -> Option<&str> {
        self.presenter.visible()
    }

    /// Returns true if a debounced validation is pending.
    #[must_use]
    pub const fn validation_pending(&self) -> bool {
        self.debounce.is_armed()
    }

    /// The selection constraints.
    #[must_use]
    pub const fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// The active gesture policy.
    #[must_use]
    pub const fn policy(&self) -> GesturePolicy {
        self.settings.policy
    }

    /// The listener receiving notifications.
    #[must_use]
    pub const fn listener(&self) -> &L {
        &self.listener
    }

    /// Mutable access to the listener.
    pub const fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    fn extends_selection(&self, day: DayIndex) -> bool {
        match (self.selection.min(), self.selection.max()) {
            (Some(min), Some(max)) => day.is_adjacent_to(min) || day.is_adjacent_to(max),
            _ => false,
        }
    }

    /// Adds a neighbouring day, refusing to grow past the maximum.
    fn extend(&mut self, day: DayIndex) {
        if self.selection.len() >= usize::from(self.config.max_days) {
            debug!(day = %day, "Refused extension past the maximum");
            self.surface(SelectionViolation::TooManyDays {
                max_days: self.config.max_days,
            });
            return;
        }

        self.selection.insert(day);
        debug!(day = %day, "Extended selection by neighbouring day");
        self.notify_change();
    }

    /// Replaces the selection with the run from the check-in to `check_out`
    /// and validates it, restoring the previous selection on failure.
    fn fill_range(&mut self, check_out: DayIndex) {
        let check_in: DayIndex = self
            .interaction
            .pending_check_in
            .or_else(|| self.selection.min())
            .unwrap_or(check_out);

        let previous: SelectionSet = self.selection;
        self.selection = circular_run(check_in, check_out);
        debug!(check_in = %check_in, check_out = %check_out, "Filled range");
        self.notify_change();

        match validate_selection(&self.selection, &self.config) {
            Ok(()) => {
                self.interaction.pending_check_in = None;
                self.presenter.dismiss(&mut self.listener);
                info!(selection = %self.selection.describe(), "Range selection completed");
            }
            Err(violation) => {
                self.selection = previous;
                self.notify_change();
                self.surface(violation);
            }
        }
    }

    /// Follows up a direct edit: re-arms the debounce timer, or validates now
    /// and keeps the selection even when it is invalid.
    fn selection_edited(&mut self) {
        if self.settings.policy.validates_immediately() {
            if let Err(violation) = validate_selection(&self.selection, &self.config) {
                self.surface(violation);
            }
        } else {
            let now: Instant = self.clock.now();
            self.debounce.arm(now, self.settings.debounce_delay);
        }
    }

    fn surface(&mut self, violation: SelectionViolation) {
        let now: Instant = self.clock.now();
        warn!(?violation, selection = %self.selection.describe(), "Selection rejected");
        self.presenter
            .show(violation.to_string(), now, &mut self.listener);
    }

    fn notify_change(&mut self) {
        let days: Vec<WeekDay> = self.selection.days();
        self.listener.on_selection_change(&days);
    }
}
