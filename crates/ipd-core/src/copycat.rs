//! Copycat, also known as Tit-for-Tat

use rand::RngCore;

use crate::action::Action;
use crate::payoffs::Payoffs;
use crate::strategy::Strategy;

/// Cooperates on the first turn, then plays whatever the opponent played
/// on the previous turn.
#[derive(Clone, Debug)]
pub struct Copycat {
    next_move: Action,
}

impl Copycat {
    pub const NAME: &'static str = "Copycat";

    pub fn new() -> Self {
        Self { next_move: Action::Cooperate }
    }
}

impl Default for Copycat {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for Copycat {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn begin_match(&mut self, _payoffs: &Payoffs, _num_turns: u32, _rng: &mut dyn RngCore) {
        self.next_move = Action::Cooperate;
    }

    fn begin_turn(&mut self, _rng: &mut dyn RngCore) -> Action {
        self.next_move
    }

    fn end_turn(&mut self, opponent: Action, _rng: &mut dyn RngCore) {
        self.next_move = opponent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action::{Cooperate as C, Defect as D};
    use crate::random::SeededRng;
    use proptest::prelude::{prop, prop_assert_eq, proptest};

    /// Moves Copycat plays against a fixed opponent script
    fn play(opponent: &[Action]) -> Vec<Action> {
        let mut rng = SeededRng::new(&[42u8; 32], 0);
        let mut s = Copycat::new();
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

    #[test]
    fn test_mirrors_previous_move() {
        assert_eq!(play(&[D, C, D, D, C]), vec![C, D, C, D, D]);
    }

    #[test]
    fn test_begin_match_resets() {
        let mut rng = SeededRng::new(&[42u8; 32], 0);
        let mut s = Copycat::new();
        s.begin_match(&Payoffs::new_default(), 2, &mut rng);
        s.begin_turn(&mut rng);
        s.end_turn(D, &mut rng);

        s.begin_match(&Payoffs::new_default(), 2, &mut rng);
        assert_eq!(s.begin_turn(&mut rng), C);
    }

    proptest! {
        #[test]
        fn prop_plays_opponents_last_move(
            opponent in prop::collection::vec(prop::bool::ANY, 1..200)
        ) {
            let opponent: Vec<Action> =
                opponent.into_iter().map(|d| if d { D } else { C }).collect();
            let moves = play(&opponent);
            prop_assert_eq!(moves[0], C);
            for k in 1..moves.len() {
                prop_assert_eq!(moves[k], opponent[k - 1]);
            }
        }
    }
}
