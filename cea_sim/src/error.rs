//! Error types for the simulation harness.

use cea_core::ConfigError;
use thiserror::Error;

/// Errors surfaced by the harness and CLI.
#[derive(Debug, Error)]
pub enum SimError {
    /// Parameters failed validation
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Reading a config file or writing an export failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encode/decode failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Scenario name not recognised
    #[error("{0}")]
    UnknownScenario(String),
}

pub type Result<T> = std::result::Result<T, SimError>;
