//! TwoFace: a trigger strategy that turns into a permanent defector

use rand::RngCore;

use crate::action::Action;
use crate::payoffs::Payoffs;
use crate::strategy::Strategy;

/// Quiet rounds after which TwoFace defects even without provocation
pub const PATIENCE: u32 = 80;

/// Cooperates until one of its triggers fires, then defects for the rest
/// of the match.
///
/// Triggers, checked at the end of each turn:
/// 1. the opponent defects on the opening turn;
/// 2. the opponent defects a second time;
/// 3. the opponent cooperates on the turn [`PATIENCE`] rounds after its
///    first defection, or on turn [`PATIENCE`] if it never defected.
#[derive(Clone, Debug)]
pub struct TwoFace {
    /// 1-based number of the turn being played
    rounds_so_far: u32,
    /// Turn of the opponent's first defection
    first_defection: Option<u32>,
    /// Latches; never cleared within a match
    should_defect: bool,
}

impl TwoFace {
    pub const NAME: &'static str = "TwoFace";

    pub fn new() -> Self {
        Self {
            rounds_so_far: 1,
            first_defection: None,
            should_defect: false,
        }
    }

    /// Whether a trigger has fired this match
    pub fn is_triggered(&self) -> bool {
        self.should_defect
    }
}

impl Default for TwoFace {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for TwoFace {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn begin_match(&mut self, _payoffs: &Payoffs, _num_turns: u32, _rng: &mut dyn RngCore) {
        *self = Self::new();
    }

    fn begin_turn(&mut self, _rng: &mut dyn RngCore) -> Action {
        if self.should_defect {
            Action::Defect
        } else {
            Action::Cooperate
        }
    }

    fn end_turn(&mut self, opponent: Action, _rng: &mut dyn RngCore) {
        if !self.should_defect {
            match opponent {
                Action::Defect => {
                    if self.rounds_so_far == 1 {
                        self.should_defect = true;
                    }
                    // Not an else-if: an opening defection both latches above
                    // and is recorded as the first defection below. Only the
                    // latch is observable, so the record is harmless, but the
                    // two checks were probably meant to be exclusive.
                    if self.first_defection.is_some() {
                        self.should_defect = true;
                    } else {
                        self.first_defection = Some(self.rounds_so_far);
                    }
                }
                Action::Cooperate => {
                    // "never defected" counts as a defection on turn 0
                    let anchor = self.first_defection.unwrap_or(0);
                    if anchor.saturating_add(PATIENCE) == self.rounds_so_far {
                        self.should_defect = true;
                    }
                }
            }
        }
        self.rounds_so_far = self.rounds_so_far.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action::{Cooperate as C, Defect as D};
    use crate::random::SeededRng;
    use proptest::prelude::{prop, prop_assert_eq, proptest};

    fn play(s: &mut TwoFace, opponent: &[Action]) -> Vec<Action> {
        let mut rng = SeededRng::new(&[42u8; 32], 0);
        s.begin_match(&Payoffs::new_default(), opponent.len() as u32, &mut rng);
        opponent
            .iter()
            .map(|&theirs| {
                let mine = s.begin_turn(&mut rng);
                s.end_turn(theirs, &mut rng);
                mine
            })
            .collect()
    }

    fn first_defect(moves: &[Action]) -> Option<usize> {
        moves.iter().position(|m| *m == D).map(|i| i + 1)
    }

    #[test]
    fn test_patience_runs_out_against_cooperator() {
        let moves = play(&mut TwoFace::new(), &[C; 100]);
        // trigger fires in end_turn of turn 80, visible from turn 81
        assert!(moves[..80].iter().all(|m| *m == C));
        assert!(moves[80..].iter().all(|m| *m == D));
    }

    #[test]
    fn test_opening_defection_latches() {
        let mut opponent = vec![C; 20];
        opponent[0] = D;
        let mut s = TwoFace::new();
        let moves = play(&mut s, &opponent);
        assert_eq!(moves[0], C);
        assert!(moves[1..].iter().all(|m| *m == D));
        assert!(s.is_triggered());
        // both branches ran: the opening defection was also recorded
        assert_eq!(s.first_defection, Some(1));
    }

    #[test]
    fn test_second_defection_latches() {
        let mut opponent = vec![C; 30];
        opponent[4] = D;
        opponent[9] = D;
        let moves = play(&mut TwoFace::new(), &opponent);
        assert_eq!(first_defect(&moves), Some(11));
    }

    #[test]
    fn test_patience_counts_from_first_defection() {
        let mut opponent = vec![C; 120];
        opponent[4] = D;
        let moves = play(&mut TwoFace::new(), &opponent);
        // first defection on turn 5, quiet until turn 85
        assert_eq!(first_defect(&moves), Some(86));
    }

    #[test]
    fn test_late_first_defection_restarts_patience() {
        let mut opponent = vec![C; 100];
        opponent[79] = D;
        let moves = play(&mut TwoFace::new(), &opponent);
        // turn 80 is the first defection, so patience now runs to turn 160
        assert_eq!(first_defect(&moves), None);
    }

    #[test]
    fn test_begin_match_resets_state() {
        let mut s = TwoFace::new();
        let mut opponent = vec![C; 5];
        opponent[0] = D;
        play(&mut s, &opponent);
        assert!(s.is_triggered());

        let moves = play(&mut s, &[C; 10]);
        assert!(moves.iter().all(|m| *m == C));
        assert!(!s.is_triggered());
    }

    proptest! {
        #[test]
        fn prop_defection_is_permanent(opponent in prop::collection::vec(prop::bool::ANY, 1..300)) {
            let opponent: Vec<Action> =
                opponent.into_iter().map(|d| if d { D } else { C }).collect();
            let moves = play(&mut TwoFace::new(), &opponent);
            if let Some(first) = moves.iter().position(|m| *m == D) {
                for m in &moves[first..] {
                    prop_assert_eq!(*m, D);
                }
            }
        }
    }
}
