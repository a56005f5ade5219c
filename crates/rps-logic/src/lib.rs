//! Move logic for iterated Rock/Paper/Scissors
//!
//! A fixed-order Markov predictor that learns the opponent's habits within
//! a game and plays the counter to their most likely next move.
//! This crate is compiled to:
//! - Native (for game servers and bots)
//! - WASM (for the browser arena)

mod config;
mod error;
mod moves;
mod predictor;
mod table;

#[cfg(feature = "wasm")]
mod wasm;

pub use config::{PredictorConfig, TieBreak};
pub use error::{ConfigError, MoveError};
pub use moves::{Move, Outcome};
pub use predictor::{Decision, MarkovPredictor, PredictionSource};
pub use table::{OutcomeCounts, TransitionTable};
