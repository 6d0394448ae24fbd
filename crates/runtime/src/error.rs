//! Error types for scenario loading and session setup.

use thiserror::Error;

/// Result alias for runtime operations.
pub type Result<T> = std::result::Result<T, ScenarioError>;

/// Errors raised while loading or instantiating a scenario.
///
/// The simulation core itself has no fatal errors; everything here happens
/// before the first tick.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse scenario RON: {0}")]
    Parse(String),

    #[error("Invalid scenario: {0}")]
    Invalid(String),
}
