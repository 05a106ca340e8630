//! Configuration errors.

use std::fmt;

/// Constraint a numeric field failed to satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Value must be strictly greater than zero
    Positive,
    /// Value must be zero or greater
    NonNegative,
    /// Free-form constraint between fields
    Custom(&'static str),
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::Positive => f.write_str("> 0"),
            Requirement::NonNegative => f.write_str(">= 0"),
            Requirement::Custom(rule) => f.write_str(rule),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed config document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid configuration: {field} must be {requirement}, got {value}")]
    Invalid {
        field: &'static str,
        value: f64,
        requirement: Requirement,
    },
}

impl ConfigError {
    /// Name of the offending field for validation failures
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ConfigError::Invalid { field, .. } => Some(field),
            ConfigError::Parse(_) => None,
        }
    }
}

/// `value > 0`. NaN fails.
pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            value,
            requirement: Requirement::Positive,
        })
    }
}

/// `value >= 0`. NaN fails.
pub(crate) fn require_non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            value,
            requirement: Requirement::NonNegative,
        })
    }
}
