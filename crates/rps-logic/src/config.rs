//! Predictor configuration

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::moves::Move;

/// How equal outcome counts for one pattern are resolved
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieBreak {
    /// The outcome first recorded after the pattern wins.
    #[default]
    FirstRecorded,
    /// Rock, then Paper, then Scissors.
    AlphabetOrder,
}

/// Tunable parameters of the Markov predictor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    /// Pattern length N (number of trailing opponent moves used as key)
    pub order: usize,
    /// Predicted opponent move when no pattern applies
    pub default_guess: Move,
    pub tie_break: TieBreak,
}

impl PredictorConfig {
    /// Reference policy: order 5, guess Paper, first-recorded tie-break.
    pub fn reference() -> Self {
        Self {
            order: 5,
            default_guess: Move::Paper,
            tie_break: TieBreak::FirstRecorded,
        }
    }

    pub fn with_order(order: usize) -> Self {
        Self { order, ..Self::reference() }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.order == 0 {
            return Err(ConfigError::ZeroOrder);
        }
        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields take reference values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self::reference()
    }
}
