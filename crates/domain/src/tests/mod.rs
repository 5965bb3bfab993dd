// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod types;

use crate::{DayIndex, SelectionSet};

/// Builds a set from raw indices, panicking on out-of-range values.
pub fn set_of(indices: &[u8]) -> SelectionSet {
    indices.iter().map(|i| DayIndex::new(*i).unwrap()).collect()
}

/// Shorthand for a valid day index.
pub fn day(index: u8) -> DayIndex {
    DayIndex::new(index).unwrap()
}
