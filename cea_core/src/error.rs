//! Error types for configuration validation.

use thiserror::Error;

/// Reasons a [`SimParams`](crate::SimParams) is rejected by `validate`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Simulation must run for at least one step
    #[error("step_count must be positive")]
    ZeroSteps,

    /// A rate-like field is negative or not finite
    #[error("{field} must be a finite non-negative number, got {value}")]
    NegativeRate { field: String, value: f64 },

    /// A probability-like field lies outside [0, 1]
    #[error("{field} must lie in [0, 1], got {value}")]
    OutOfUnitInterval { field: String, value: f64 },

    /// Logistic steepness must be strictly positive
    #[error("beta must be strictly positive, got {0}")]
    NonPositiveSteepness(f64),

    /// Logistic threshold must be finite
    #[error("theta must be finite, got {0}")]
    NonFiniteThreshold(f64),

    /// Starting autonomy above its own cap
    #[error("initial_autonomy {initial} exceeds autonomy_max {max}")]
    AutonomyAboveCap { initial: f64, max: f64 },
}

impl ConfigError {
    /// Creates a negative-rate error.
    pub fn negative(field: impl Into<String>, value: f64) -> Self {
        Self::NegativeRate {
            field: field.into(),
            value,
        }
    }

    /// Creates an out-of-range probability error.
    pub fn out_of_unit(field: impl Into<String>, value: f64) -> Self {
        Self::OutOfUnitInterval {
            field: field.into(),
            value,
        }
    }
}
