//! Per-field clone strategy.

use std::fmt;
use std::str::FromStr;

/// How a single field is reproduced when its owner is cloned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schema", serde(rename_all = "snake_case"))]
pub enum CloneStrategy {
    /// Copy the field as-is. `Rc`/`Arc` pointees stay shared.
    #[default]
    Shallow,
    /// Recurse into the field's own `Clonable` impl.
    Deep,
}

impl CloneStrategy {
    /// Reads a strategy name the way attributes spell it: `deep`, `Deep`,
    /// `shallow` or `Shallow`.
    pub fn from_attr_name(name: &str) -> Option<Self> {
        match name {
            "deep" | "Deep" => Some(CloneStrategy::Deep),
            "shallow" | "Shallow" => Some(CloneStrategy::Shallow),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            CloneStrategy::Shallow => "shallow",
            CloneStrategy::Deep => "deep",
        }
    }
}

impl fmt::Display for CloneStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a strategy name is neither `deep` nor `shallow`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown clone strategy \"{0}\" (expected \"deep\" or \"shallow\")")]
pub struct ParseStrategyError(pub String);

impl FromStr for CloneStrategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "shallow" => Ok(CloneStrategy::Shallow),
            "deep" => Ok(CloneStrategy::Deep),
            other => Err(ParseStrategyError(other.to_string())),
        }
    }
}
