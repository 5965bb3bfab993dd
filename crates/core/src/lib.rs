// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod engine;
mod error;
mod listener;
mod policy;
mod presenter;
mod state;
mod timer;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use command::Gesture;
pub use engine::SelectionEngine;
pub use error::CoreError;
pub use listener::{FnListener, SelectionListener};
pub use policy::{DEFAULT_DEBOUNCE, DEFAULT_ERROR_DISPLAY, EngineSettings, GesturePolicy};
pub use presenter::ErrorPresenter;
pub use state::InteractionState;
pub use timer::{Clock, MAX_DELAY, SystemClock, Timer};
pub use weekstay_domain::{
    DayIndex, DomainError, SelectionSet, SelectionViolation, SelectorConfig, ValidationResult,
    WEEK, WeekDay, validate,
};
