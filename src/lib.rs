//! # toncc-engine
//!
//! Rules engine for Toncc, a three-player simultaneous-move abstract board
//! game on a fixed 18-cell hex ring surrounding a neutral center ("the
//! Mind"). Kings move every round; landing rules plus a cyclic color
//! dominance decide which king captures a contested cell. Captured cells
//! accumulate into kingdoms and score points from a fixed payoff table.
//! The game ends when every king has spent its token budget; a
//! deterministic tie-break, itself built on the dominance relation,
//! decides the winner.
//!
//! ## Design Principles
//!
//! 1. **Engine owns the state**: the presentation layer submits move
//!    intents and reads immutable snapshots back; nothing in the data
//!    model references the outside world.
//!
//! 2. **Closed enumerations**: kings, directions, and cell codes are
//!    exhaustively matched enums. Medium/weak colors, movement deltas,
//!    and base-color tiers are pure total functions over them.
//!
//! 3. **Deterministic**: the only randomness is the seeded board shuffle
//!    at construction; identical seeds replay identical games.
//!
//! ## Modules
//!
//! - `core`: geometry (directions, coordinates), kings and color
//!   dominance, seeded RNG, error types
//! - `board`: the 18 typed cells, ownership, kingdom geometry
//! - `rules`: capture resolution, scoring, the round state machine

pub mod board;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Coordinate, Direction, EngineError, GameRng, King, KingColor, KingMap, INITIAL_TOKENS,
};

pub use crate::board::{Board, Cell, CellCode, CellState, CELL_COUNT};

pub use crate::rules::{payoff, Captures, Game, GameBuilder, GameResult, Phase, RoundRecord};
