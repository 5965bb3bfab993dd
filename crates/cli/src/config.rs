// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session configuration: an optional JSON file, overridden by flags.
//!
//! ```json
//! {
//!   "selector": { "minDays": 2, "maxDays": 5, "requireContiguous": true, "initialSelection": [] },
//!   "engine": { "policy": "check-in-check-out", "debounceMs": 3000, "errorDisplayMs": 3000 }
//! }
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use weekstay::{DayIndex, EngineSettings, GesturePolicy, SelectorConfig};

/// Errors loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Read {
        /// The file that was read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The file is not valid configuration JSON.
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        /// The file that was parsed.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },
}

/// Engine timing and policy as written in the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineFileConfig {
    /// Gesture policy name.
    pub policy: Option<GesturePolicy>,
    /// Debounce delay in milliseconds.
    pub debounce_ms: Option<u64>,
    /// Error display period in milliseconds.
    pub error_display_ms: Option<u64>,
}

/// Top-level layout of the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Selection constraints.
    pub selector: SelectorConfig,
    /// Engine behaviour.
    pub engine: EngineFileConfig,
}

/// Values given on the command line; each one overrides the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Minimum number of days.
    pub min_days: Option<u8>,
    /// Maximum number of days.
    pub max_days: Option<u8>,
    /// Accept selections with gaps.
    pub allow_gaps: bool,
    /// Days selected at start.
    pub initial: Vec<DayIndex>,
    /// Gesture policy.
    pub policy: Option<GesturePolicy>,
    /// Debounce delay in milliseconds.
    pub debounce_ms: Option<u64>,
    /// Error display period in milliseconds.
    pub error_display_ms: Option<u64>,
}

impl FileConfig {
    /// Parses configuration JSON.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the text is not valid configuration.
    pub fn from_json(path: &Path, text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text: String = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &text)
    }

    /// Applies command-line overrides and produces the engine inputs.
    #[must_use]
    pub fn resolve(self, overrides: Overrides) -> (SelectorConfig, EngineSettings) {
        let mut selector: SelectorConfig = self.selector;
        if let Some(min_days) = overrides.min_days {
            selector.min_days = min_days;
        }
        if let Some(max_days) = overrides.max_days {
            selector.max_days = max_days;
        }
        if overrides.allow_gaps {
            selector.require_contiguous = false;
        }
        if !overrides.initial.is_empty() {
            selector.initial_selection = overrides.initial;
        }

        let mut settings: EngineSettings =
            EngineSettings::with_policy(overrides.policy.or(self.engine.policy).unwrap_or_default());
        if let Some(millis) = overrides.debounce_ms.or(self.engine.debounce_ms) {
            settings.debounce_delay = Duration::from_millis(millis);
        }
        if let Some(millis) = overrides.error_display_ms.or(self.engine.error_display_ms) {
            settings.error_display = Duration::from_millis(millis);
        }

        (selector, settings)
    }
}
