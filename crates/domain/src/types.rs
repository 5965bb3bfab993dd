// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of days in the selectable week.
pub const DAYS_PER_WEEK: u8 = 7;

/// A week-day index in `0..=6`, Sunday first.
///
/// The range is enforced at construction, so every `DayIndex` in the system
/// refers to one of the seven [`WEEK`] entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DayIndex(u8);

impl DayIndex {
    /// Sunday.
    pub const SUNDAY: Self = Self(0);
    /// Saturday.
    pub const SATURDAY: Self = Self(6);

    /// Creates a new day index.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DayIndexOutOfRange` if `value` is not in `0..=6`.
    pub const fn new(value: u8) -> Result<Self, DomainError> {
        if value < DAYS_PER_WEEK {
            Ok(Self(value))
        } else {
            Err(DomainError::DayIndexOutOfRange(value))
        }
    }

    /// Wraps an arbitrary integer onto the week (`value mod 7`).
    #[must_use]
    pub const fn wrapping(value: usize) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        Self((value % DAYS_PER_WEEK as usize) as u8)
    }

    /// Returns the raw index value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The following day, Saturday wrapping to Sunday.
    #[must_use]
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % DAYS_PER_WEEK)
    }

    /// The preceding day, Sunday wrapping to Saturday.
    #[must_use]
    pub const fn prev(self) -> Self {
        Self((self.0 + DAYS_PER_WEEK - 1) % DAYS_PER_WEEK)
    }

    /// Returns true if `other` is the day immediately before or after this one,
    /// counting Saturday and Sunday as neighbours.
    #[must_use]
    pub const fn is_adjacent_to(self, other: Self) -> bool {
        self.next().0 == other.0 || self.prev().0 == other.0
    }

    /// The fixed [`WeekDay`] this index refers to.
    #[must_use]
    pub const fn week_day(self) -> WeekDay {
        WEEK[self.0 as usize]
    }
}

impl TryFrom<u8> for DayIndex {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DayIndex> for u8 {
    fn from(index: DayIndex) -> Self {
        index.0
    }
}

impl std::fmt::Display for DayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses either a numeric index (`"3"`) or a day name (`"wed"`, `"Wednesday"`).
impl FromStr for DayIndex {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();
        if let Ok(value) = trimmed.parse::<u8>() {
            return Self::new(value);
        }

        let lowered: String = trimmed.to_ascii_lowercase();
        WEEK.iter()
            .find(|day| {
                let name: String = day.long_name.to_ascii_lowercase();
                lowered.len() >= 2 && name.starts_with(&lowered)
            })
            .map(|day| day.index)
            .ok_or_else(|| DomainError::UnknownDay(trimmed.to_string()))
    }
}

/// One of the seven fixed days of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WeekDay {
    /// Position in the week, Sunday = 0.
    pub index: DayIndex,
    /// Single-character label shown in a day cell.
    pub short_label: char,
    /// Full English name.
    pub long_name: &'static str,
}

impl WeekDay {
    /// Three-letter abbreviation of the day name.
    #[must_use]
    pub fn abbreviation(&self) -> &'static str {
        self.long_name.get(..3).unwrap_or(self.long_name)
    }
}

impl std::fmt::Display for WeekDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.long_name)
    }
}

/// The seven week days, Sunday through Saturday.
pub const WEEK: [WeekDay; DAYS_PER_WEEK as usize] = [
    WeekDay {
        index: DayIndex(0),
        short_label: 'S',
        long_name: "Sunday",
    },
    WeekDay {
        index: DayIndex(1),
        short_label: 'M',
        long_name: "Monday",
    },
    WeekDay {
        index: DayIndex(2),
        short_label: 'T',
        long_name: "Tuesday",
    },
    WeekDay {
        index: DayIndex(3),
        short_label: 'W',
        long_name: "Wednesday",
    },
    WeekDay {
        index: DayIndex(4),
        short_label: 'T',
        long_name: "Thursday",
    },
    WeekDay {
        index: DayIndex(5),
        short_label: 'F',
        long_name: "Friday",
    },
    WeekDay {
        index: DayIndex(6),
        short_label: 'S',
        long_name: "Saturday",
    },
];
