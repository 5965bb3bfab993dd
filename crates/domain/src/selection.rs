// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The set of selected week days and the run arithmetic shared by every
//! gesture mode.
//!
//! ## Invariants
//!
//! - A `SelectionSet` can only hold indices in `0..=6` (it is a 7-bit mask)
//! - Iteration is always ascending by index
//! - A circular run always contains between 1 and 7 days

use crate::types::{DAYS_PER_WEEK, DayIndex, WEEK, WeekDay};

const FULL_WEEK_MASK: u8 = (1 << DAYS_PER_WEEK) - 1;

/// A set of selected week days.
///
/// The number of members is the "night count" of the stay pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SelectionSet {
    mask: u8,
}

impl SelectionSet {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self { mask: 0 }
    }

    /// Creates a selection containing a single day.
    #[must_use]
    pub const fn single(day: DayIndex) -> Self {
        Self {
            mask: 1 << day.value(),
        }
    }

    /// Returns true if `day` is selected.
    #[must_use]
    pub const fn contains(&self, day: DayIndex) -> bool {
        self.mask & (1 << day.value()) != 0
    }

    /// Adds `day`. Returns false if it was already selected.
    pub const fn insert(&mut self, day: DayIndex) -> bool {
        let present: bool = self.contains(day);
        self.mask |= 1 << day.value();
        !present
    }

    /// Removes `day`. Returns false if it was not selected.
    pub const fn remove(&mut self, day: DayIndex) -> bool {
        let present: bool = self.contains(day);
        self.mask &= !(1 << day.value());
        present
    }

    /// Flips membership of `day`. Returns true if the day is now selected.
    pub const fn toggle(&mut self, day: DayIndex) -> bool {
        self.mask ^= 1 << day.value();
        self.contains(day)
    }

    /// Removes every day.
    pub const fn clear(&mut self) {
        self.mask = 0;
    }

    /// Number of selected days.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Number of nights the pattern covers; the same as [`Self::len`].
    #[must_use]
    pub const fn night_count(&self) -> usize {
        self.len()
    }

    /// Returns true if no day is selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Returns true if all seven days are selected.
    #[must_use]
    pub const fn is_full_week(&self) -> bool {
        self.mask == FULL_WEEK_MASK
    }

    /// Lowest selected index.
    #[must_use]
    pub fn min(&self) -> Option<DayIndex> {
        self.iter().next()
    }

    /// Highest selected index.
    #[must_use]
    pub fn max(&self) -> Option<DayIndex> {
        self.iter().next_back()
    }

    /// Selected indices in ascending order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = DayIndex> + '_ {
        WEEK.iter()
            .map(|day| day.index)
            .filter(move |index| self.contains(*index))
    }

    /// Selected days ordered by index, as delivered to change listeners.
    #[must_use]
    pub fn days(&self) -> Vec<WeekDay> {
        self.iter().map(DayIndex::week_day).collect()
    }

    /// Selected indices in the order a stay walks through them.
    ///
    /// A run that wraps the week seam starts at its first day after the gap,
    /// so `{0, 1, 5, 6}` yields Friday, Saturday, Sunday, Monday. For a set
    /// that is not a single run this is plain ascending order.
    #[must_use]
    pub fn run_order(&self) -> Vec<DayIndex> {
        let ascending: Vec<DayIndex> = self.iter().collect();
        if !is_contiguous(self) || self.is_full_week() {
            return ascending;
        }

        let split: usize = ascending
            .windows(2)
            .position(|pair| pair[1].value() - pair[0].value() > 1)
            .map_or(0, |gap| gap + 1);

        let mut ordered: Vec<DayIndex> = ascending[split..].to_vec();
        ordered.extend_from_slice(&ascending[..split]);
        ordered
    }

    /// Short human label such as `Fri–Tue (5 nights)`.
    #[must_use]
    pub fn describe(&self) -> String {
        let ordered: Vec<DayIndex> = self.run_order();
        match (ordered.first(), ordered.last()) {
            (None, _) | (_, None) => String::from("no days selected"),
            (Some(first), Some(last)) if first == last => {
                format!("{} (1 night)", first.week_day().abbreviation())
            }
            (Some(first), Some(last)) => format!(
                "{}–{} ({} nights)",
                first.week_day().abbreviation(),
                last.week_day().abbreviation(),
                ordered.len()
            ),
        }
    }
}

impl FromIterator<DayIndex> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = DayIndex>>(iter: I) -> Self {
        let mut set: Self = Self::new();
        for day in iter {
            set.insert(day);
        }
        set
    }
}

/// Number of days in the circular run from `start` to `end` inclusive.
#[must_use]
pub const fn run_length(start: DayIndex, end: DayIndex) -> usize {
    if end.value() >= start.value() {
        (end.value() - start.value()) as usize + 1
    } else {
        (DAYS_PER_WEEK - start.value()) as usize + end.value() as usize + 1
    }
}

/// The circular run of days from `start` to `end` inclusive.
///
/// When `end` precedes `start` the run wraps through Saturday to Sunday:
/// Friday to Tuesday yields `{5, 6, 0, 1, 2}`.
#[must_use]
pub fn circular_run(start: DayIndex, end: DayIndex) -> SelectionSet {
    let length: usize = run_length(start, end);
    (0..length)
        .map(|offset| DayIndex::wrapping(start.value() as usize + offset))
        .collect()
}

/// Returns true if the selected days form one unbroken run.
///
/// A run may cross the Saturday/Sunday seam, but only that seam: with
/// exactly one gap in ascending order the set counts as contiguous when it
/// contains both Sunday and Saturday.
#[must_use]
pub fn is_contiguous(set: &SelectionSet) -> bool {
    let sorted: Vec<u8> = set.iter().map(DayIndex::value).collect();
    if sorted.is_empty() {
        return true;
    }

    let gaps: usize = sorted
        .windows(2)
        .filter(|pair| pair[1] - pair[0] > 1)
        .count();

    match gaps {
        0 => true,
        1 => set.min() == Some(DayIndex::SUNDAY) && set.max() == Some(DayIndex::SATURDAY),
        _ => false,
    }
}
