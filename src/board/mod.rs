//! The Toncc board: typed cells, ownership, and kingdom geometry.

pub mod cell;
pub mod table;

pub use cell::{Cell, CellCode, CellState};
pub use table::{Board, CELL_COUNT};
