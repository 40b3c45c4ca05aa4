//! Game rules: capture resolution, scoring, and the round state machine.

pub mod capture;
pub mod round;
pub mod scoring;

pub use capture::Captures;
pub use round::{Game, GameBuilder, GameResult, Phase, RoundRecord};
pub use scoring::payoff;
