// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Gesture interpretation policies.
//!
//! Every policy shares the same run and contiguity arithmetic; they differ
//! only in how a click on an unselected day is interpreted and in what
//! happens when the result is invalid.
//!
//! | policy | click on unselected day | invalid click | removing a day | invalid drag |
//! |---|---|---|---|---|
//! | `CheckInCheckOut` | start, or fill from check-in | previous set restored | kept, error shown | cleared |
//! | `AdjacencyHybrid` | start, extend by neighbour, or fill | previous set restored | kept, error shown | cleared |
//! | `ToggleWithDebounce` | added | kept, error after quiet period | kept, error after quiet period | cleared |

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

/// Quiet period before a toggled selection is validated.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(3000);
/// How long an error message stays visible.
pub const DEFAULT_ERROR_DISPLAY: Duration = Duration::from_millis(3000);

/// How clicks on day cells are turned into selection changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GesturePolicy {
    /// Each click flips one day; validation waits for a quiet period.
    ToggleWithDebounce,
    /// First click is the check-in, a second click fills through check-out.
    #[default]
    CheckInCheckOut,
    /// Like check-in/check-out, but clicking next to either end of the
    /// selection just extends it.
    AdjacencyHybrid,
}

impl GesturePolicy {
    /// All policies, in declaration order.
    pub const ALL: [Self; 3] = [
        Self::ToggleWithDebounce,
        Self::CheckInCheckOut,
        Self::AdjacencyHybrid,
    ];

    /// Converts this policy to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ToggleWithDebounce => "toggle-with-debounce",
            Self::CheckInCheckOut => "check-in-check-out",
            Self::AdjacencyHybrid => "adjacency-hybrid",
        }
    }

    /// Returns whether clicks are validated when they complete, rather than
    /// after the debounce period.
    #[must_use]
    pub const fn validates_immediately(&self) -> bool {
        !matches!(self, Self::ToggleWithDebounce)
    }
}

impl FromStr for GesturePolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|policy| policy.as_str() == s)
            .ok_or_else(|| CoreError::UnknownPolicy(s.to_string()))
    }
}

impl std::fmt::Display for GesturePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Engine behaviour that is not a selection constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineSettings {
    /// How clicks are interpreted.
    pub policy: GesturePolicy,
    /// Quiet period used by [`GesturePolicy::ToggleWithDebounce`].
    pub debounce_delay: Duration,
    /// How long the error presenter keeps a message visible.
    pub error_display: Duration,
}

impl EngineSettings {
    /// Default timings with the given policy.
    #[must_use]
    pub const fn with_policy(policy: GesturePolicy) -> Self {
        Self {
            policy,
            debounce_delay: DEFAULT_DEBOUNCE,
            error_display: DEFAULT_ERROR_DISPLAY,
        }
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self::with_policy(GesturePolicy::default())
    }
}
