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

mod config;
mod error;
mod selection;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use config::{DEFAULT_MAX_DAYS, DEFAULT_MIN_DAYS, SelectorConfig};
pub use error::{DomainError, SelectionViolation};
pub use selection::{SelectionSet, circular_run, is_contiguous, run_length};
pub use types::{DAYS_PER_WEEK, DayIndex, WEEK, WeekDay};
pub use validation::{ValidationResult, validate, validate_selection};
