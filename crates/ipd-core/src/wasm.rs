//! WASM bindings for frontend strategy listings and match replay

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::{play_by_name, MatchConfig, Registry};

#[derive(serde::Serialize)]
struct StrategyInfo {
    name: String,
    description: String,
}

fn parse_config(json: &str) -> Result<MatchConfig, JsError> {
    MatchConfig::from_json(json).map_err(|e| JsError::new(&e.to_string()))
}

/// Names of all registered strategies, in registration order
#[wasm_bindgen]
pub fn get_strategy_names() -> js_sys::Array {
    Registry::global()
        .all_names()
        .into_iter()
        .map(|name| JsValue::from_str(&name))
        .collect()
}

/// Name and one-line description of every registered strategy
#[wasm_bindgen]
pub fn get_strategy_descriptions() -> Result<JsValue, JsError> {
    let infos: Vec<StrategyInfo> = Registry::global()
        .prototypes()
        .map(|(name, p)| StrategyInfo {
            name: name.to_string(),
            description: p.describe().to_string(),
        })
        .collect();

    serde_wasm_bindgen::to_value(&infos)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Replay a match with full turn-by-turn details
///
/// # Arguments
/// * `name_a` - Registered name of player A's strategy
/// * `name_b` - Registered name of player B's strategy
/// * `config_json` - JSON serialized MatchConfig; missing fields take defaults
///
/// # Returns
/// JSON serialized MatchResult
#[wasm_bindgen]
pub fn replay_match(name_a: &str, name_b: &str, config_json: &str) -> Result<JsValue, JsError> {
    let config = parse_config(config_json)?;
    let result = play_by_name(Registry::global(), name_a, name_b, &config)
        .map_err(|e| JsError::new(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Normalize a score against the payoff table in `config_json`
#[wasm_bindgen]
pub fn normalize_score(config_json: &str, score: i64, turns: i64) -> Result<f64, JsError> {
    let config = parse_config(config_json)?;
    config
        .payoffs
        .normalize(score, turns)
        .map_err(|e| JsError::new(&e.to_string()))
}
