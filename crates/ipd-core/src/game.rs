//! Match execution engine
//!
//! Drives two strategies through one match following the lifecycle the
//! strategies expect, and scores every turn against a payoff table.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::action::Action;
use crate::error::{Error, Result};
use crate::payoffs::Payoffs;
use crate::random::SeededRng;
use crate::registry::Registry;
use crate::strategy::Strategy;

/// Turns per match when a config does not say
pub const DEFAULT_TURNS: u32 = 200;

/// Longest match the driver will play; bounds the per-turn record
pub const MAX_TURNS: u32 = 1_000_000;

/// Result of a single turn
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnResult {
    /// 1-based turn number
    pub turn: u32,
    pub action_a: Action,
    pub action_b: Action,
    pub score_a: i32,
    pub score_b: i32,
    pub cumulative_a: i64,
    pub cumulative_b: i64,
}

/// Result of a complete match
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub name_a: String,
    pub name_b: String,
    pub turns: Vec<TurnResult>,
    pub total_a: i64,
    pub total_b: i64,
}

impl MatchResult {
    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    /// Both totals mapped onto `[0, 1]` for comparison across matches
    pub fn normalized(&self, payoffs: &Payoffs) -> Result<(f64, f64)> {
        let turns = self.turns.len() as i64;
        Ok((
            payoffs.normalize(self.total_a, turns)?,
            payoffs.normalize(self.total_b, turns)?,
        ))
    }
}

/// Parameters of a single match
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub payoffs: Payoffs,
    pub turns: u32,
    /// Tournament randomness seed
    pub seed: [u8; 32],
    /// Index of this match within the tournament, mixed into the seed
    pub match_index: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            payoffs: Payoffs::new_default(),
            turns: DEFAULT_TURNS,
            seed: [0u8; 32],
            match_index: 0,
        }
    }
}

impl MatchConfig {
    /// Parse a config from JSON; absent fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs the driver refuses to play
    pub fn validate(&self) -> Result<()> {
        if self.turns > MAX_TURNS {
            return Err(Error::TooManyTurns { turns: self.turns, max: MAX_TURNS });
        }
        Ok(())
    }
}

/// Run a complete match between two strategies
///
/// Each seat gets its own generator derived from the config's seed and
/// match index, so a match is reproducible and the players never share
/// a random stream. Fails before any strategy is touched if the config
/// asks for more than [`MAX_TURNS`] turns.
pub fn run_match<A, B>(a: &mut A, b: &mut B, config: &MatchConfig) -> Result<MatchResult>
where
    A: Strategy + ?Sized,
    B: Strategy + ?Sized,
{
    config.validate()?;

    let payoffs = &config.payoffs;
    let base = SeededRng::new(&config.seed, config.match_index);
    let mut rng_a = base.for_player(0);
    let mut rng_b = base.for_player(1);

    a.begin_match(payoffs, config.turns, &mut rng_a);
    b.begin_match(payoffs, config.turns, &mut rng_b);

    let mut turns = Vec::with_capacity(config.turns as usize);
    let mut total_a = 0i64;
    let mut total_b = 0i64;

    for turn in 1..=config.turns {
        // Moves are chosen before either side sees the other's
        let action_a = a.begin_turn(&mut rng_a);
        let action_b = b.begin_turn(&mut rng_b);

        let score_a = payoffs.score(action_a, action_b);
        let score_b = payoffs.score(action_b, action_a);
        total_a += i64::from(score_a);
        total_b += i64::from(score_b);

        a.end_turn(action_b, &mut rng_a);
        b.end_turn(action_a, &mut rng_b);

        trace!(turn, ?action_a, ?action_b, score_a, score_b);
        turns.push(TurnResult {
            turn,
            action_a,
            action_b,
            score_a,
            score_b,
            cumulative_a: total_a,
            cumulative_b: total_b,
        });
    }

    debug!(
        a = a.name(),
        b = b.name(),
        turns = config.turns,
        total_a,
        total_b,
        "match finished"
    );

    Ok(MatchResult {
        name_a: a.name().to_string(),
        name_b: b.name().to_string(),
        turns,
        total_a,
        total_b,
    })
}

/// Clone two fresh strategies from `registry` by name and play them
pub fn play_by_name(
    registry: &Registry,
    name_a: &str,
    name_b: &str,
    config: &MatchConfig,
) -> Result<MatchResult> {
    let mut a = registry.clone_by_name(name_a)?;
    let mut b = registry.clone_by_name(name_b)?;
    run_match(&mut a, &mut b, config)
}
