// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::config::SelectorConfig;
use crate::error::SelectionViolation;
use crate::selection::{SelectionSet, is_contiguous};

/// Outcome of validating a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationResult {
    violation: Option<SelectionViolation>,
}

impl ValidationResult {
    /// A passing result.
    #[must_use]
    pub const fn valid() -> Self {
        Self { violation: None }
    }

    /// A failing result.
    #[must_use]
    pub const fn invalid(violation: SelectionViolation) -> Self {
        Self {
            violation: Some(violation),
        }
    }

    /// Returns true if the selection passed.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.violation.is_none()
    }

    /// The rule that failed, if any.
    #[must_use]
    pub const fn violation(&self) -> Option<SelectionViolation> {
        self.violation
    }

    /// The user-facing message for a failing result.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.violation.map(|violation| violation.to_string())
    }
}

impl From<Result<(), SelectionViolation>> for ValidationResult {
    fn from(result: Result<(), SelectionViolation>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(violation) => Self::invalid(violation),
        }
    }
}

/// Validates a selection against the configured constraints.
///
/// This function is pure and has no side effects.
///
/// # Arguments
///
/// * `set` - The candidate selection
/// * `config` - The selector constraints
///
/// # Returns
///
/// * `Ok(())` if the selection is acceptable
/// * `Err(SelectionViolation)` naming the first rule that failed
///
/// # Errors
///
/// Returns an error if the selection is non-empty and:
/// - has fewer than `min_days` days
/// - has more than `max_days` days
/// - is required to be contiguous and is not
pub fn validate_selection(
    set: &SelectionSet,
    config: &SelectorConfig,
) -> Result<(), SelectionViolation> {
    // Rule: nothing selected yet is not an error
    if set.is_empty() {
        return Ok(());
    }

    let count: usize = set.len();

    if count < usize::from(config.min_days) {
        return Err(SelectionViolation::TooFewDays {
            min_days: config.min_days,
        });
    }

    if count > usize::from(config.max_days) {
        return Err(SelectionViolation::TooManyDays {
            max_days: config.max_days,
        });
    }

    if config.require_contiguous && !is_contiguous(set) {
        return Err(SelectionViolation::NonContiguous);
    }

    Ok(())
}

/// Validates a selection and packages the outcome as a [`ValidationResult`].
#[must_use]
pub fn validate(set: &SelectionSet, config: &SelectorConfig) -> ValidationResult {
    ValidationResult::from(validate_selection(set, config))
}
