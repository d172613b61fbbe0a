//! Bonus mini-game collaborator.
//!
//! Session timing, answer scoring, and the claim contract that feeds the
//! progress engine's bonus points.

#![warn(missing_docs)]

pub mod session;

pub use session::{
    GameError, GameSession, GameStatus, POINTS_PER_CORRECT, SESSION_SECONDS,
};
