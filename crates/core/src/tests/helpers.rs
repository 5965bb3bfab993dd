// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Clock, EngineSettings, GesturePolicy, SelectionEngine, SelectionListener};
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};
use weekstay_domain::{DayIndex, SelectionSet, SelectorConfig, WeekDay};

/// Records every notification the engine sends.
#[derive(Debug, Default)]
pub struct RecordingListener {
    pub changes: Vec<Vec<u8>>,
    pub errors: Vec<String>,
    pub dismissed: Vec<String>,
}

impl SelectionListener for RecordingListener {
    fn on_selection_change(&mut self, days: &[WeekDay]) {
        self.changes
            .push(days.iter().map(|d| d.index.value()).collect());
    }

    fn on_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn on_error_dismissed(&mut self, message: &str) {
        self.dismissed.push(message.to_string());
    }
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance_ms(&self, millis: u64) {
        self.now.set(self.now.get() + Duration::from_millis(millis));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

pub type TestEngine = SelectionEngine<RecordingListener, ManualClock>;

pub fn create_engine(policy: GesturePolicy) -> (TestEngine, ManualClock) {
    create_engine_with_config(policy, SelectorConfig::default())
}

pub fn create_engine_with_config(
    policy: GesturePolicy,
    config: SelectorConfig,
) -> (TestEngine, ManualClock) {
    let clock: ManualClock = ManualClock::new();
    let engine: TestEngine = SelectionEngine::with_clock(
        config,
        EngineSettings::with_policy(policy),
        RecordingListener::default(),
        clock.clone(),
    )
    .unwrap();
    (engine, clock)
}

pub fn create_engine_with_settings(settings: EngineSettings) -> (TestEngine, ManualClock) {
    let clock: ManualClock = ManualClock::new();
    let engine: TestEngine = SelectionEngine::with_clock(
        SelectorConfig::default(),
        settings,
        RecordingListener::default(),
        clock.clone(),
    )
    .unwrap();
    (engine, clock)
}

pub fn day(index: u8) -> DayIndex {
    DayIndex::new(index).unwrap()
}

pub fn set_of(indices: &[u8]) -> SelectionSet {
    indices.iter().map(|i| day(*i)).collect()
}

pub fn click_all(engine: &mut TestEngine, indices: &[u8]) {
    for index in indices {
        engine.toggle_day(day(*index));
    }
}
