// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::selection::SelectionSet;
use crate::types::DayIndex;
use serde::{Deserialize, Serialize};

/// Default minimum number of selected days.
pub const DEFAULT_MIN_DAYS: u8 = 2;
/// Default maximum number of selected days.
pub const DEFAULT_MAX_DAYS: u8 = 5;

/// Selection constraints supplied by the embedding application.
///
/// Every field is optional when deserialized; missing fields take the
/// defaults (2 to 5 contiguous days, nothing preselected).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectorConfig {
    /// Fewest days a completed selection may contain.
    pub min_days: u8,
    /// Most days a completed selection may contain.
    pub max_days: u8,
    /// Whether the days must form a single run.
    pub require_contiguous: bool,
    /// Days selected when the selector is created.
    pub initial_selection: Vec<DayIndex>,
}

impl SelectorConfig {
    /// Creates a configuration with the given bounds and the remaining
    /// fields at their defaults.
    #[must_use]
    pub fn with_bounds(min_days: u8, max_days: u8) -> Self {
        Self {
            min_days,
            max_days,
            ..Self::default()
        }
    }

    /// Checks the configuration for contract violations.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `min_days` is 0
    /// - `max_days` is less than `min_days`
    pub const fn validate(&self) -> Result<(), DomainError> {
        if self.min_days < 1 {
            return Err(DomainError::InvalidMinDays {
                min_days: self.min_days,
            });
        }

        if self.max_days < self.min_days {
            return Err(DomainError::MaxBelowMin {
                min_days: self.min_days,
                max_days: self.max_days,
            });
        }

        Ok(())
    }

    /// The initial selection as a set; duplicates collapse.
    #[must_use]
    pub fn initial_set(&self) -> SelectionSet {
        self.initial_selection.iter().copied().collect()
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            min_days: DEFAULT_MIN_DAYS,
            max_days: DEFAULT_MAX_DAYS,
            require_contiguous: true,
            initial_selection: Vec::new(),
        }
    }
}
