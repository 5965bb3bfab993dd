// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use weekstay_domain::DomainError;

/// Errors raised while constructing or configuring a selection engine.
///
/// Selection violations are not errors at this level; they are surfaced to
/// the listener and never abort an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The selector configuration breaks a domain rule.
    InvalidConfig(DomainError),
    /// A gesture policy name that matches no known policy.
    UnknownPolicy(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(err) => write!(f, "Invalid configuration: {err}"),
            Self::UnknownPolicy(name) => write!(
                f,
                "Unknown gesture policy '{name}'. Expected one of: toggle-with-debounce, check-in-check-out, adjacency-hybrid"
            ),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::InvalidConfig(err)
    }
}
