//! Fixed-order Markov predictor
//!
//! Learns, per game, which move the opponent plays after each window of
//! `order` consecutive moves, and answers with the counter to the most
//! frequent follow-up of the current trailing window.

use serde::{Deserialize, Serialize};

use crate::config::PredictorConfig;
use crate::error::{ConfigError, MoveError};
use crate::moves::Move;
use crate::table::TransitionTable;

/// Where a round's prediction came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredictionSource {
    /// The trailing window has recorded follow-ups.
    Learned,
    /// Too little history, or the window was never seen: default guess.
    ColdStart,
}

/// Full result of one step
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Opponent move we expect this round
    pub prediction: Move,
    /// Our move: the counter to `prediction`
    pub response: Move,
    pub source: PredictionSource,
}

/// Markov-chain opponent model for one game at a time
///
/// History and transition table always reset together, either through
/// [`reset`](Self::reset) or by stepping with the `None` sentinel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkovPredictor {
    config: PredictorConfig,
    history: Vec<Move>,
    table: TransitionTable,
}

impl MarkovPredictor {
    /// Create a predictor with the reference configuration
    pub fn new() -> Self {
        Self {
            config: PredictorConfig::reference(),
            history: Vec::new(),
            table: TransitionTable::new(),
        }
    }

    /// Create with a custom configuration
    pub fn with_config(config: PredictorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            history: Vec::new(),
            table: TransitionTable::new(),
        })
    }

    /// Play one round.
    ///
    /// `previous` is the opponent's move from the round just finished, or
    /// `None` at the start of a new game. Returns our move for this round.
    pub fn step(&mut self, previous: Option<Move>) -> Move {
        self.decide(previous).response
    }

    /// Like [`step`](Self::step) but also reports the prediction behind the move.
    pub fn decide(&mut self, previous: Option<Move>) -> Decision {
        match previous {
            None => self.reset(),
            Some(m) => {
                self.history.push(m);
                self.learn();
            }
        }

        let (prediction, source) = match self.predict() {
            Some(m) => (m, PredictionSource::Learned),
            None => (self.config.default_guess, PredictionSource::ColdStart),
        };
        let response = prediction.counter();

        log::trace!(
            "round {}: predict {} ({:?}), respond {}",
            self.history.len(),
            prediction,
            source,
            response
        );

        Decision { prediction, response, source }
    }

    /// Text form of [`step`](Self::step): `""` starts a new game, otherwise
    /// one of `"R"`, `"P"`, `"S"`.
    ///
    /// Invalid input is rejected before any state changes.
    pub fn step_str(&mut self, previous: &str) -> Result<Move, MoveError> {
        let previous = Move::parse_report(previous)?;
        Ok(self.step(previous))
    }

    /// Forget the current game.
    pub fn reset(&mut self) {
        if !self.history.is_empty() {
            log::debug!(
                "new game: dropping {} moves and {} patterns",
                self.history.len(),
                self.table.len()
            );
        }
        self.history.clear();
        self.table.clear();
    }

    /// Record the transition that ended with the newest move.
    fn learn(&mut self) {
        let n = self.config.order;
        let len = self.history.len();
        if len <= n {
            return;
        }
        let pattern = &self.history[len - n - 1..len - 1];
        let outcome = self.history[len - 1];
        self.table.record(pattern, outcome);
        log::debug!("learned {} -> {}", symbols(pattern), outcome);
    }

    /// Most likely follow-up of the current trailing window, if known.
    fn predict(&self) -> Option<Move> {
        let n = self.config.order;
        let len = self.history.len();
        if len < n {
            return None;
        }
        self.table.predict(&self.history[len - n..], self.config.tie_break)
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    pub fn order(&self) -> usize {
        self.config.order
    }
}

impl Default for MarkovPredictor {
    fn default() -> Self {
        Self::new()
    }
}

fn symbols(moves: &[Move]) -> String {
    moves.iter().map(|m| m.symbol()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TieBreak;
    use proptest::prelude::*;
    use Move::*;

    fn parse(seq: &str) -> Vec<Move> {
        seq.chars().map(|c| Move::try_from(c).unwrap()).collect()
    }

    fn feed(predictor: &mut MarkovPredictor, moves: &[Move]) -> Vec<Move> {
        moves.iter().map(|m| predictor.step(Some(*m))).collect()
    }

    #[test]
    fn test_first_move_is_default_response() {
        let mut p = MarkovPredictor::new();
        let d = p.decide(None);
        assert_eq!(d.prediction, Paper);
        assert_eq!(d.response, Scissors);
        assert_eq!(d.source, PredictionSource::ColdStart);
        assert!(p.history().is_empty());
    }

    #[test]
    fn test_concrete_scenario() {
        let mut p = MarkovPredictor::new();
        p.step(None);

        // History never exceeds the order: nothing learned, default every time
        for m in parse("RPSRP") {
            assert_eq!(p.step(Some(m)), Scissors);
        }
        assert!(p.table().is_empty());

        // Sixth move: RPSRP -> S recorded, PSRPS queried and unseen
        assert_eq!(p.step(Some(Scissors)), Scissors);
        assert_eq!(p.table().len(), 1);
        assert_eq!(p.table().get(&parse("RPSRP")).unwrap().count(Scissors), 1);
        assert!(p.table().get(&parse("PSRPS")).is_none());

        // Seventh move: PSRPS -> R recorded, SRPSR queried and unseen
        let d = p.decide(Some(Rock));
        assert_eq!(d.source, PredictionSource::ColdStart);
        assert_eq!(d.response, Scissors);
        assert_eq!(p.table().get(&parse("PSRPS")).unwrap().count(Rock), 1);
        assert_eq!(p.table().len(), 2);
    }

    #[test]
    fn test_learns_cyclic_opponent() {
        let mut p = MarkovPredictor::new();
        p.step(None);
        let cycle: Vec<Move> = (0..40).map(|i| Move::ALL[i % 3]).collect();

        let responses = feed(&mut p, &cycle);

        // From the 8th call the window RPSRP recurs and every answer wins
        for i in 7..cycle.len() - 1 {
            assert_eq!(
                responses[i].versus(cycle[i + 1]),
                crate::Outcome::Win,
                "round {} should beat the cycle",
                i
            );
        }
    }

    #[test]
    fn test_learned_pattern_predicts_outcome() {
        let mut p = MarkovPredictor::new();
        p.step(None);
        // pattern RRRRR followed by S, then RRRRR shows up again
        feed(&mut p, &parse("RRRRRS"));
        feed(&mut p, &parse("RRRR"));
        let d = p.decide(Some(Rock));
        assert_eq!(p.history(), parse("RRRRRSRRRRR").as_slice());
        assert_eq!(d.source, PredictionSource::Learned);
        assert_eq!(d.prediction, Scissors);
        assert_eq!(d.response, Rock);
    }

    #[test]
    fn test_tie_break_first_recorded_is_stable() {
        let mut p = MarkovPredictor::with_config(PredictorConfig::with_order(1)).unwrap();
        p.step(None);
        // after R: S first, then P -> tie at one each
        feed(&mut p, &parse("RSRP"));
        let counts = p.table().get(&[Rock]).unwrap();
        assert_eq!(counts.count(Scissors), 1);
        assert_eq!(counts.count(Paper), 1);

        let d = p.decide(Some(Rock));
        assert_eq!(d.prediction, Scissors);
        assert_eq!(d.response, Rock);
        // No new data about R: repeated queries agree
        for _ in 0..3 {
            assert_eq!(p.predict(), Some(Scissors));
        }
    }

    #[test]
    fn test_tie_break_alphabet_order() {
        let config = PredictorConfig {
            order: 1,
            tie_break: TieBreak::AlphabetOrder,
            ..PredictorConfig::default()
        };
        let mut p = MarkovPredictor::with_config(config).unwrap();
        feed(&mut p, &parse("RSRP"));
        let d = p.decide(Some(Rock));
        assert_eq!(d.prediction, Paper);
        assert_eq!(d.response, Scissors);
    }

    #[test]
    fn test_custom_default_guess() {
        let config = PredictorConfig { default_guess: Rock, ..PredictorConfig::default() };
        let mut p = MarkovPredictor::with_config(config).unwrap();
        assert_eq!(p.step(None), Paper);
    }

    #[test]
    fn test_zero_order_rejected() {
        assert_eq!(
            MarkovPredictor::with_config(PredictorConfig::with_order(0)),
            Err(ConfigError::ZeroOrder)
        );
    }

    #[test]
    fn test_step_str() {
        let mut p = MarkovPredictor::new();
        assert_eq!(p.step_str(""), Ok(Scissors));
        assert_eq!(p.step_str("R"), Ok(Scissors));
        assert_eq!(p.history(), &[Rock]);
    }

    #[test]
    fn test_step_str_rejects_without_mutation() {
        let mut p = MarkovPredictor::new();
        p.step_str("R").unwrap();
        let before = p.clone();
        assert_eq!(
            p.step_str("Lizard"),
            Err(MoveError::Unknown { input: "Lizard".to_string() })
        );
        assert_eq!(p, before);
    }

    #[test]
    fn test_explicit_reset_matches_sentinel() {
        let mut a = MarkovPredictor::new();
        let mut b = MarkovPredictor::new();
        feed(&mut a, &parse("RPSSPRRPSSPR"));
        feed(&mut b, &parse("RPSSPRRPSSPR"));
        a.reset();
        b.step(None);
        assert_eq!(a, b);
        assert_eq!(a, MarkovPredictor::new());
    }

    #[test]
    fn test_decision_serializes() {
        let d = Decision {
            prediction: Rock,
            response: Paper,
            source: PredictionSource::Learned,
        };
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#"{"prediction":"R","response":"P","source":"Learned"}"#);
    }

    fn moves() -> impl Strategy<Value = Vec<Move>> {
        prop::collection::vec(prop::sample::select(Move::ALL.to_vec()), 0..120)
    }

    proptest! {
        #[test]
        fn prop_replay_is_deterministic(seq in moves()) {
            let mut a = MarkovPredictor::new();
            let mut b = MarkovPredictor::new();
            a.step(None);
            b.step(None);
            prop_assert_eq!(feed(&mut a, &seq), feed(&mut b, &seq));
        }

        #[test]
        fn prop_history_mirrors_inputs(seq in moves(), order in 1usize..8) {
            let mut p = MarkovPredictor::with_config(PredictorConfig::with_order(order)).unwrap();
            p.step(None);
            feed(&mut p, &seq);
            prop_assert_eq!(p.history(), seq.as_slice());
            let expected = seq.len().saturating_sub(order) as u32;
            prop_assert_eq!(p.table().total_observations(), expected);
        }

        #[test]
        fn prop_sentinel_resets_to_fresh(prefix in moves(), seq in moves()) {
            let mut used = MarkovPredictor::new();
            feed(&mut used, &prefix);
            prop_assert_eq!(used.step(None), Scissors);
            prop_assert_eq!(&used, &MarkovPredictor::new());

            let mut fresh = MarkovPredictor::new();
            fresh.step(None);
            prop_assert_eq!(feed(&mut used, &seq), feed(&mut fresh, &seq));
        }

        #[test]
        fn prop_response_counters_prediction(seq in moves()) {
            let mut p = MarkovPredictor::new();
            p.step(None);
            for m in seq {
                let d = p.decide(Some(m));
                prop_assert_eq!(d.response.beats(), d.prediction);
                if d.source == PredictionSource::ColdStart {
                    prop_assert_eq!(d.prediction, Paper);
                }
            }
        }
    }
}
