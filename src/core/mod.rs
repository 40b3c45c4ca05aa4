//! Core engine types: geometry, kings, RNG, and errors.

pub mod coord;
pub mod error;
pub mod king;
pub mod rng;

pub use coord::{Coordinate, Direction};
pub use error::EngineError;
pub use king::{King, KingColor, KingMap, INITIAL_TOKENS};
pub use rng::GameRng;
