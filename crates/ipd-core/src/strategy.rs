//! Strategy contract and the closed set of bundled players

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::copycat::Copycat;
use crate::payoffs::Payoffs;
use crate::two_face::TwoFace;

/// A per-match player.
///
/// A driver calls [`begin_match`](Strategy::begin_match) exactly once, then
/// alternates [`begin_turn`](Strategy::begin_turn) and
/// [`end_turn`](Strategy::end_turn) once per turn. Calling out of that order
/// is undefined and never detected.
///
/// The generator passed to each call is the only entropy source a strategy
/// may consult. The driver owns it for the whole match and passes the same
/// one to every call, so a strategy can draw from it at any point.
pub trait Strategy {
    /// Constructor-supplied name; never changes.
    fn name(&self) -> &str;

    /// Reset per-match state. `num_turns` is a hint only: the driver decides
    /// how many turns are actually played.
    fn begin_match(&mut self, _payoffs: &Payoffs, _num_turns: u32, _rng: &mut dyn RngCore) {}

    /// This strategy's move for the current turn.
    fn begin_turn(&mut self, rng: &mut dyn RngCore) -> Action;

    /// The opponent's move for the turn just played. Our own move is not
    /// repeated here.
    fn end_turn(&mut self, _opponent: Action, _rng: &mut dyn RngCore) {}
}

/// Variant tag of a [`Player`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    /// Tit-for-tat: cooperate first, then mirror the opponent.
    Copycat,
    /// Cooperate until a defection trigger latches, then always defect.
    TwoFace,
}

/// One of the bundled strategies, with its per-match state
#[derive(Clone, Debug)]
pub enum Player {
    Copycat(Copycat),
    TwoFace(TwoFace),
}

impl Player {
    pub fn kind(&self) -> PlayerKind {
        match self {
            Player::Copycat(_) => PlayerKind::Copycat,
            Player::TwoFace(_) => PlayerKind::TwoFace,
        }
    }

    /// One-line summary for strategy listings
    pub fn describe(&self) -> &'static str {
        match self.kind() {
            PlayerKind::Copycat => "Cooperates first, then copies the opponent's previous move.",
            PlayerKind::TwoFace => {
                "Cooperates until the opponent defects on turn 1 or twice in total, \
                 or 80 turns pass since its first defection; then defects for good."
            }
        }
    }
}

impl Strategy for Player {
    fn name(&self) -> &str {
        match self {
            Player::Copycat(s) => s.name(),
            Player::TwoFace(s) => s.name(),
        }
    }

    fn begin_match(&mut self, payoffs: &Payoffs, num_turns: u32, rng: &mut dyn RngCore) {
        match self {
            Player::Copycat(s) => s.begin_match(payoffs, num_turns, rng),
            Player::TwoFace(s) => s.begin_match(payoffs, num_turns, rng),
        }
    }

    fn begin_turn(&mut self, rng: &mut dyn RngCore) -> Action {
        match self {
            Player::Copycat(s) => s.begin_turn(rng),
            Player::TwoFace(s) => s.begin_turn(rng),
        }
    }

    fn end_turn(&mut self, opponent: Action, rng: &mut dyn RngCore) {
        match self {
            Player::Copycat(s) => s.end_turn(opponent, rng),
            Player::TwoFace(s) => s.end_turn(opponent, rng),
        }
    }
}

impl From<Copycat> for Player {
    fn from(s: Copycat) -> Self {
        Player::Copycat(s)
    }
}

impl From<TwoFace> for Player {
    fn from(s: TwoFace) -> Self {
        Player::TwoFace(s)
    }
}
