//! Error types for move parsing and predictor configuration

use thiserror::Error;

/// A reported move outside the R/P/S alphabet.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Empty input where a move was required.
    #[error("expected a move (R, P or S), got empty input")]
    Empty,
    /// Anything other than a single `R`, `P` or `S`.
    #[error("unknown move {input:?} (expected R, P or S)")]
    Unknown { input: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Window order must be at least one move.
    #[error("window order must be at least 1")]
    ZeroOrder,
    #[error("invalid predictor config: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}
