//! Naming-strategy selection for column-name generation.
//!
//! A [`NamingStrategy`] picks which snake-casing transform derives a column
//! name from a Rust identifier. Callers can hold a strategy value and apply
//! it directly, or configure the process-wide strategy once at startup and
//! let [`snake_case_active`] dispatch through it.

use std::sync::{OnceLock, RwLock};

use serde::{Deserialize, Serialize};

use crate::case::{snake_string, snake_string_with_acronym};

/// Identifier for the plain snake-casing strategy.
pub const SNAKE_NAME_STRATEGY: &str = "snake";

/// Identifier for the acronym-aware snake-casing strategy.
pub const SNAKE_ACRONYM_NAME_STRATEGY: &str = "snake_acronym";

/// Rule used to derive a column name from a Rust identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingStrategy {
    /// Plain snake-casing: every letter of an uppercase run is separated
    /// (`XxYY` -> `xx_y_y`).
    #[default]
    Snake,
    /// Acronym-aware snake-casing: separators only at acronym boundaries
    /// (`XxYY` -> `xx_yy`, `HTTPServer` -> `http_server`).
    SnakeAcronym,
}

impl NamingStrategy {
    /// Look up a strategy by its registered identifier.
    ///
    /// Unrecognized names select the default strategy; a warning is logged
    /// but no error is signaled.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            SNAKE_NAME_STRATEGY => Self::Snake,
            SNAKE_ACRONYM_NAME_STRATEGY => Self::SnakeAcronym,
            other => {
                tracing::warn!(
                    strategy = other,
                    "Unknown naming strategy, falling back to default"
                );
                Self::default()
            }
        }
    }

    /// The identifier this strategy is registered under.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Snake => SNAKE_NAME_STRATEGY,
            Self::SnakeAcronym => SNAKE_ACRONYM_NAME_STRATEGY,
        }
    }

    /// Snake-case `s` with this strategy.
    #[must_use]
    pub fn snake_case(&self, s: &str) -> String {
        match self {
            Self::Snake => snake_string(s),
            Self::SnakeAcronym => snake_string_with_acronym(s),
        }
    }
}

/// Process-wide active strategy cell, created on first use.
fn strategy_cell() -> &'static RwLock<NamingStrategy> {
    static CELL: OnceLock<RwLock<NamingStrategy>> = OnceLock::new();
    CELL.get_or_init(|| RwLock::new(NamingStrategy::default()))
}

/// Set the process-wide naming strategy by identifier.
///
/// Unrecognized names select the default strategy. Intended to be called
/// once during startup; the cell is lock-guarded, so concurrent readers
/// never observe a torn value.
pub fn set_name_strategy(name: &str) {
    let strategy = NamingStrategy::from_name(name);
    tracing::debug!(strategy = strategy.name(), "Setting naming strategy");
    *strategy_cell().write().unwrap() = strategy;
}

/// The currently active process-wide naming strategy.
#[must_use]
pub fn name_strategy() -> NamingStrategy {
    *strategy_cell().read().unwrap()
}

/// Snake-case `s` with the currently active strategy.
#[must_use]
pub fn snake_case_active(s: &str) -> String {
    name_strategy().snake_case(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    // The process-wide cell is exercised in tests/naming_strategy_global.rs,
    // inside a single test function; unit tests here stay on the pure paths
    // so parallel test threads cannot race it.

    #[test]
    fn test_from_name_recognized() {
        assert_eq!(
            NamingStrategy::from_name(SNAKE_NAME_STRATEGY),
            NamingStrategy::Snake
        );
        assert_eq!(
            NamingStrategy::from_name(SNAKE_ACRONYM_NAME_STRATEGY),
            NamingStrategy::SnakeAcronym
        );
    }

    #[test]
    fn test_from_name_unknown_falls_back_to_default() {
        assert_eq!(
            NamingStrategy::from_name("no_such_strategy"),
            NamingStrategy::Snake
        );
        assert_eq!(NamingStrategy::from_name(""), NamingStrategy::Snake);
    }

    #[test]
    fn test_name_round_trips() {
        for strategy in [NamingStrategy::Snake, NamingStrategy::SnakeAcronym] {
            assert_eq!(NamingStrategy::from_name(strategy.name()), strategy);
        }
    }

    #[test]
    fn test_per_call_dispatch() {
        assert_eq!(NamingStrategy::Snake.snake_case("XxYY"), "xx_y_y");
        assert_eq!(NamingStrategy::SnakeAcronym.snake_case("XxYY"), "xx_yy");
    }

    #[test]
    fn test_serde_representation() {
        let json = serde_json::to_string(&NamingStrategy::SnakeAcronym).unwrap();
        assert_eq!(json, "\"snake_acronym\"");
        let back: NamingStrategy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, NamingStrategy::SnakeAcronym);
    }
}
