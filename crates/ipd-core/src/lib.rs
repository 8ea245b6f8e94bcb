//! Iterated Prisoner's Dilemma core
//!
//! Payoff tables with score normalization, the per-match strategy
//! contract, the bundled reference strategies and a registry that hands
//! out fresh instances by name. A reference match driver sits on top for
//! tournament runners and UIs.
//!
//! This crate is compiled to:
//! - Native (for tournament drivers)
//! - WASM (for frontend match replay, feature `wasm`)

mod action;
mod copycat;
mod error;
mod game;
mod payoffs;
mod random;
mod registry;
mod strategy;
mod two_face;

#[cfg(feature = "wasm")]
mod wasm;

pub use action::Action;
pub use copycat::Copycat;
pub use error::{Error, Result};
pub use game::{
    play_by_name, run_match, MatchConfig, MatchResult, TurnResult, DEFAULT_TURNS, MAX_TURNS,
};
pub use payoffs::{Payoffs, DEFAULT_CC, DEFAULT_CD, DEFAULT_DC, DEFAULT_DD};
pub use random::SeededRng;
pub use registry::{Constructor, Registry};
pub use strategy::{Player, PlayerKind, Strategy};
pub use two_face::{TwoFace, PATIENCE};

/// Re-export so drivers and strategies name the same generator trait
pub use rand::RngCore;
