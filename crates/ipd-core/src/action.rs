//! The two moves of the Prisoner's Dilemma

use serde::{Deserialize, Serialize};

/// A single player's move in one turn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Cooperate,
    Defect,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Action::Cooperate).unwrap(), "\"Cooperate\"");
        let a: Action = serde_json::from_str("\"Defect\"").unwrap();
        assert_eq!(a, Action::Defect);
    }
}
