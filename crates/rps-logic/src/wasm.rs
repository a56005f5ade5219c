//! WASM bindings for the browser arena

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;
use crate::{MarkovPredictor, Move, PredictorConfig};

fn parse_move(input: &str) -> Result<Move, JsError> {
    input
        .parse()
        .map_err(|e| JsError::new(&format!("Invalid move: {}", e)))
}

/// One predictor per game session
#[wasm_bindgen]
pub struct WasmPredictor {
    inner: MarkovPredictor,
}

#[wasm_bindgen]
impl WasmPredictor {
    /// Predictor with the reference configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmPredictor {
        WasmPredictor { inner: MarkovPredictor::new() }
    }

    /// Build from a JSON `PredictorConfig`, e.g. `{"order": 3}`
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config_json: &str) -> Result<WasmPredictor, JsError> {
        let config = PredictorConfig::from_json(config_json)
            .map_err(|e| JsError::new(&e.to_string()))?;
        let inner = MarkovPredictor::with_config(config)
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(WasmPredictor { inner })
    }

    /// Play a round. `previous` is `""` at game start, else `"R"`, `"P"` or `"S"`.
    pub fn step(&mut self, previous: &str) -> Result<String, JsError> {
        self.inner
            .step_str(previous)
            .map(|m| m.to_string())
            .map_err(|e| JsError::new(&format!("Invalid move: {}", e)))
    }

    /// Like `step`, returning `{prediction, response, source}`
    pub fn decide(&mut self, previous: &str) -> Result<JsValue, JsError> {
        let previous = Move::parse_report(previous)
            .map_err(|e| JsError::new(&format!("Invalid move: {}", e)))?;
        let decision = self.inner.decide(previous);

        serde_wasm_bindgen::to_value(&decision)
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Opponent moves seen this game, as a string like `"RPS"`
    pub fn history(&self) -> String {
        self.inner.history().iter().map(|m| m.symbol()).collect()
    }

    #[wasm_bindgen(js_name = patternCount)]
    pub fn pattern_count(&self) -> u32 {
        self.inner.table().len() as u32
    }
}

impl Default for WasmPredictor {
    fn default() -> Self {
        Self::new()
    }
}

/// The move that beats `m`
#[wasm_bindgen(js_name = counterMove)]
pub fn counter_move(m: &str) -> Result<String, JsError> {
    Ok(parse_move(m)?.counter().to_string())
}

/// `"Win"`, `"Lose"` or `"Tie"` for `a` played against `b`
#[wasm_bindgen(js_name = describeOutcome)]
pub fn describe_outcome(a: &str, b: &str) -> Result<JsValue, JsError> {
    let outcome = parse_move(a)?.versus(parse_move(b)?);

    serde_wasm_bindgen::to_value(&outcome)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Default configuration as JSON, for display in the setup screen
#[wasm_bindgen(js_name = defaultConfig)]
pub fn default_config() -> Result<String, JsError> {
    serde_json::to_string(&PredictorConfig::default())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
