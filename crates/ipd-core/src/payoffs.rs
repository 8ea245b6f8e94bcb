//! Payoff table for a single turn and score normalization

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::error::{Error, Result};

/// Points for self cooperating while the opponent cooperates
pub const DEFAULT_CC: i32 = 3;
/// Points for self cooperating while the opponent defects
pub const DEFAULT_CD: i32 = 0;
/// Points for self defecting while the opponent cooperates
pub const DEFAULT_DC: i32 = 5;
/// Points for self defecting while the opponent defects
pub const DEFAULT_DD: i32 = 1;

/// Immutable 2x2 payoff grid, indexed by (self move, opponent move).
///
/// The smallest and largest cell are derived once at construction. No
/// ordering between the cells is enforced; any four integers are accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PayoffCells", into = "PayoffCells")]
pub struct Payoffs {
    cc: i32,
    cd: i32,
    dc: i32,
    dd: i32,
    min: i32,
    max: i32,
}

/// Wire form of [`Payoffs`]: only the four cells, `min`/`max` are re-derived on load.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct PayoffCells {
    cc: i32,
    cd: i32,
    dc: i32,
    dd: i32,
}

impl From<PayoffCells> for Payoffs {
    fn from(c: PayoffCells) -> Self {
        Payoffs::new(c.cc, c.cd, c.dc, c.dd)
    }
}

impl From<Payoffs> for PayoffCells {
    fn from(p: Payoffs) -> Self {
        PayoffCells { cc: p.cc, cd: p.cd, dc: p.dc, dd: p.dd }
    }
}

impl Payoffs {
    pub fn new(cc: i32, cd: i32, dc: i32, dd: i32) -> Self {
        let cells = [cc, cd, dc, dd];
        let min = cells.iter().copied().fold(cc, i32::min);
        let max = cells.iter().copied().fold(cc, i32::max);
        Self { cc, cd, dc, dd, min, max }
    }

    /// The classic 3/0/5/1 table
    pub fn new_default() -> Self {
        Self::new(DEFAULT_CC, DEFAULT_CD, DEFAULT_DC, DEFAULT_DD)
    }

    pub fn get_cc(&self) -> i32 {
        self.cc
    }

    pub fn get_cd(&self) -> i32 {
        self.cd
    }

    pub fn get_dc(&self) -> i32 {
        self.dc
    }

    pub fn get_dd(&self) -> i32 {
        self.dd
    }

    /// Smallest of the four cells
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Largest of the four cells
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Points awarded to a player who plays `mine` against `theirs`
    pub fn score(&self, mine: Action, theirs: Action) -> i32 {
        match (mine, theirs) {
            (Action::Cooperate, Action::Cooperate) => self.cc,
            (Action::Cooperate, Action::Defect) => self.cd,
            (Action::Defect, Action::Cooperate) => self.dc,
            (Action::Defect, Action::Defect) => self.dd,
        }
    }

    /// Map a cumulative score over `turns` turns onto `[0.0, 1.0]`.
    ///
    /// Checks run in a fixed order: negative `turns` first, then the score
    /// range `[min * turns, max * turns]`, and only then the degenerate
    /// cases (`turns == 0` or a flat table), which yield `1.0`. A zero-turn
    /// call with a non-zero score is therefore an error, not `1.0`.
    pub fn normalize(&self, score: i64, turns: i64) -> Result<f64> {
        if turns < 0 {
            return Err(Error::NegativeTurns { turns });
        }

        // i128 keeps `max * turns` exact for any i32 cell and i64 turn count
        let low = i128::from(self.min) * i128::from(turns);
        let high = i128::from(self.max) * i128::from(turns);
        let score_wide = i128::from(score);
        if score_wide < low || score_wide > high {
            return Err(Error::ScoreOutOfRange { score, turns, low, high });
        }

        if turns == 0 || self.max == self.min {
            return Ok(1.0);
        }
        Ok((score_wide - low) as f64 / (high - low) as f64)
    }
}

impl Default for Payoffs {
    fn default() -> Self {
        Self::new_default()
    }
}
