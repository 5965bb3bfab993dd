// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors in caller-supplied values: configuration and day identifiers.
///
/// These are contract violations reported before any interaction happens,
/// as opposed to [`SelectionViolation`], which describes a user's selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A day index outside `0..=6`.
    DayIndexOutOfRange(u8),
    /// A day name that matches no week day.
    UnknownDay(String),
    /// The minimum number of days must be at least 1.
    InvalidMinDays {
        /// The rejected minimum.
        min_days: u8,
    },
    /// The maximum number of days is below the minimum.
    MaxBelowMin {
        /// The configured minimum.
        min_days: u8,
        /// The configured maximum.
        max_days: u8,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DayIndexOutOfRange(value) => {
                write!(f, "Day index {value} is out of range. Must be between 0 and 6")
            }
            Self::UnknownDay(name) => write!(f, "Unknown day: '{name}'"),
            Self::InvalidMinDays { min_days } => {
                write!(f, "Invalid minimum days: {min_days}. Must be at least 1")
            }
            Self::MaxBelowMin { min_days, max_days } => {
                write!(
                    f,
                    "Invalid maximum days: {max_days}. Must not be less than the minimum of {min_days}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}

/// Reasons a completed selection fails validation.
///
/// The `Display` output is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionViolation {
    /// Fewer days than the configured minimum.
    TooFewDays {
        /// The configured minimum.
        min_days: u8,
    },
    /// More days than the configured maximum.
    TooManyDays {
        /// The configured maximum.
        max_days: u8,
    },
    /// The days do not form a single run.
    NonContiguous,
}

const fn plural(count: u8) -> &'static str {
    if count == 1 { "day" } else { "days" }
}

impl std::fmt::Display for SelectionViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewDays { min_days } => {
                write!(f, "Please select at least {min_days} {}", plural(*min_days))
            }
            Self::TooManyDays { max_days } => {
                write!(
                    f,
                    "Please select no more than {max_days} {}",
                    plural(*max_days)
                )
            }
            Self::NonContiguous => write!(
                f,
                "Please select contiguous days (for example Mon, Tue, Wed)"
            ),
        }
    }
}

impl std::error::Error for SelectionViolation {}
