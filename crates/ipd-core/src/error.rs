//! Error types for the IPD core.

/// Errors surfaced by payoff normalization, the registry and match configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `normalize` was given a negative turn count.
    #[error("negative turns: {turns}")]
    NegativeTurns {
        /// Offending turn count.
        turns: i64,
    },

    /// `normalize` was given a score the payoff table cannot produce in `turns` turns.
    #[error("score out of range: {score} not in [{low}, {high}] over {turns} turns")]
    ScoreOutOfRange {
        /// Offending score.
        score: i64,
        /// Turn count the score was accumulated over.
        turns: i64,
        /// Smallest reachable score (`min * turns`).
        low: i128,
        /// Largest reachable score (`max * turns`).
        high: i128,
    },

    /// No registered strategy carries this name.
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),

    /// The registry has no constructor for the template's variant.
    #[error("cannot duplicate strategy: {0}")]
    CannotDuplicate(String),

    /// Two constructors handed to a registry produced the same name.
    #[error("duplicate strategy name: {0}")]
    DuplicateStrategy(String),

    /// A match was configured longer than the driver will play.
    #[error("too many turns: {turns} exceeds the limit of {max}")]
    TooManyTurns {
        /// Requested turn count.
        turns: u32,
        /// Largest accepted turn count.
        max: u32,
    },

    /// Match configuration could not be parsed.
    #[error("invalid match config: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    /// True for the argument-validation failures of `Payoffs::normalize`.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::NegativeTurns { .. } | Error::ScoreOutOfRange { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_context() {
        let e = Error::ScoreOutOfRange { score: -1, turns: 10, low: 0, high: 50 };
        assert_eq!(e.to_string(), "score out of range: -1 not in [0, 50] over 10 turns");
        assert!(e.is_invalid_argument());

        let e = Error::UnknownStrategy("Grudger".to_string());
        assert_eq!(e.to_string(), "unknown strategy: Grudger");
        assert!(!e.is_invalid_argument());
    }

    #[test]
    fn test_negative_turns_is_invalid_argument() {
        assert!(Error::NegativeTurns { turns: -3 }.is_invalid_argument());
        assert!(!Error::CannotDuplicate("TwoFace".into()).is_invalid_argument());
    }
}
