// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    RecordingListener, create_engine, create_engine_with_config, day, set_of,
};
use crate::{
    CoreError, DomainError, EngineSettings, GesturePolicy, SelectionEngine, SelectorConfig,
};

#[test]
fn test_check_in_check_out_end_to_end() {
    let (mut engine, _clock) = create_engine(GesturePolicy::CheckInCheckOut);

    // Monday: below the minimum, but a fresh start is not an error.
    engine.toggle_day(day(1));
    assert_eq!(engine.selection(), set_of(&[1]));
    assert!(engine.listener().errors.is_empty());

    // Thursday: range fill to Monday..Thursday.
    engine.toggle_day(day(4));
    assert_eq!(engine.selection(), set_of(&[1, 2, 3, 4]));
    let names: Vec<&str> = engine
        .selected_days()
        .iter()
        .map(|d| d.long_name)
        .collect();
    assert_eq!(names, vec!["Monday", "Tuesday", "Wednesday", "Thursday"]);
    assert!(engine.listener().errors.is_empty());

    // Wednesday again: removed, leaving a gap.
    engine.toggle_day(day(3));
    assert_eq!(engine.selection(), set_of(&[1, 2, 4]));
    assert_eq!(
        engine.listener().changes,
        vec![vec![1], vec![1, 2, 3, 4], vec![1, 2, 4]]
    );
    assert_eq!(engine.listener().errors.len(), 1);
    assert!(engine.listener().errors[0].starts_with("Please select contiguous days"));
}

#[test]
fn test_toggle_with_debounce_end_to_end() {
    let (mut engine, clock) = create_engine(GesturePolicy::ToggleWithDebounce);

    engine.toggle_day(day(1));
    engine.toggle_day(day(2));
    engine.toggle_day(day(3));
    engine.toggle_day(day(4));
    engine.toggle_day(day(3));
    assert_eq!(engine.selection(), set_of(&[1, 2, 4]));
    assert!(engine.listener().errors.is_empty());

    clock.advance_ms(3_000);
    engine.poll();
    assert_eq!(engine.listener().errors.len(), 1);
    assert!(engine.listener().errors[0].starts_with("Please select contiguous days"));

    // Fixing the gap and waiting again reports nothing new.
    engine.toggle_day(day(3));
    clock.advance_ms(3_000);
    engine.poll();
    assert_eq!(engine.selection(), set_of(&[1, 2, 3, 4]));
    assert_eq!(engine.listener().errors.len(), 1);
}

#[test]
fn test_weekend_wrap_is_a_valid_stay() {
    let (mut engine, _clock) = create_engine(GesturePolicy::AdjacencyHybrid);

    engine.toggle_day(day(5));
    engine.toggle_day(day(6));
    engine.toggle_day(day(0));
    engine.toggle_day(day(1));

    assert_eq!(engine.selection(), set_of(&[5, 6, 0, 1]));
    assert_eq!(engine.selection().describe(), "Fri–Mon (4 nights)");
}

#[test]
fn test_gaps_allowed_when_contiguity_not_required() {
    let config: SelectorConfig = SelectorConfig {
        require_contiguous: false,
        ..SelectorConfig::default()
    };
    let (mut engine, _clock) = create_engine_with_config(GesturePolicy::CheckInCheckOut, config);

    engine.toggle_day(day(1));
    engine.toggle_day(day(4));
    engine.toggle_day(day(3));

    assert_eq!(engine.selection(), set_of(&[1, 2, 4]));
    assert!(engine.listener().errors.is_empty());
}

#[test]
fn test_initial_selection_is_installed_silently() {
    let config: SelectorConfig = SelectorConfig {
        initial_selection: vec![day(2), day(3), day(4)],
        ..SelectorConfig::default()
    };
    let (engine, _clock) = create_engine_with_config(GesturePolicy::CheckInCheckOut, config);

    assert_eq!(engine.selection(), set_of(&[2, 3, 4]));
    assert!(engine.listener().changes.is_empty());
    assert_eq!(engine.pending_check_in(), None);
}

#[test]
fn test_invalid_config_is_rejected_at_construction() {
    let result: Result<SelectionEngine<RecordingListener>, CoreError> = SelectionEngine::new(
        SelectorConfig::with_bounds(3, 2),
        EngineSettings::default(),
        RecordingListener::default(),
    );

    assert_eq!(
        result.err(),
        Some(CoreError::InvalidConfig(DomainError::MaxBelowMin {
            min_days: 3,
            max_days: 2
        }))
    );
}

#[test]
fn test_zero_minimum_is_rejected_at_construction() {
    let result: Result<SelectionEngine<RecordingListener>, CoreError> = SelectionEngine::new(
        SelectorConfig::with_bounds(0, 5),
        EngineSettings::default(),
        RecordingListener::default(),
    );

    assert!(matches!(
        result,
        Err(CoreError::InvalidConfig(DomainError::InvalidMinDays { .. }))
    ));
}
