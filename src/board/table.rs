//! The Toncc table: 18 typed cells around the neutral Mind.
//!
//! Cells live in an array ordered by physical position, reading the
//! 3-4-5-4-3 rhombus row by row. The Mind sits in the middle of the center
//! row but owns no slot: coordinate indices above 9 shift down by one when
//! mapped onto the array.
//!
//! Kingdom detection works on the canonical Mind-ring ordering of the type
//! codes, not on physical positions, so it is unaffected by a shuffled
//! layout.

use serde::{Deserialize, Serialize};

use super::cell::{Cell, CellCode};
use crate::core::{EngineError, GameRng, KingColor};

/// Number of playable cells.
pub const CELL_COUNT: usize = 18;

/// The Toncc table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// The canonical Mind-ring ordering of the 18 cell codes, starting from
    /// `YI` and proceeding counter-clockwise. Kingdoms are consecutive
    /// triplets of this sequence.
    pub const MIND_RING: [CellCode; CELL_COUNT] = [
        CellCode::YI,
        CellCode::Yd,
        CellCode::Ycd,
        CellCode::Bcd,
        CellCode::BcII,
        CellCode::BII,
        CellCode::RII,
        CellCode::Rdd,
        CellCode::Rsdd,
        CellCode::Ysdd,
        CellCode::YsIII,
        CellCode::YIII,
        CellCode::BIII,
        CellCode::Bddd,
        CellCode::Btddd,
        CellCode::Rtddd,
        CellCode::RtI,
        CellCode::RI,
    ];

    /// Ring start indices that do not form kingdoms: these three triplets
    /// straddle tier boundaries.
    const NON_KINGDOM_STARTS: [usize; 3] = [5, 11, 17];

    /// Create a board with the canonical (unshuffled) layout.
    #[must_use]
    pub fn canonical() -> Self {
        Self {
            cells: Self::MIND_RING.map(Cell::new),
        }
    }

    /// Create a board with a randomly shuffled layout.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut codes = Self::MIND_RING;
        rng.shuffle(&mut codes);
        Self {
            cells: codes.map(Cell::new),
        }
    }

    /// Create a board from an explicit scheme in physical slot order.
    ///
    /// Fails fast with [`EngineError::InvalidScheme`] unless the scheme is
    /// a permutation of the 18 cell codes.
    pub fn from_scheme(scheme: [CellCode; CELL_COUNT]) -> Result<Self, EngineError> {
        for code in Self::MIND_RING {
            if !scheme.contains(&code) {
                return Err(EngineError::InvalidScheme);
            }
        }
        Ok(Self {
            cells: scheme.map(Cell::new),
        })
    }

    /// All cells in physical slot order.
    #[must_use]
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// The cell at a physical slot (0..18).
    #[must_use]
    pub fn cell(&self, slot: usize) -> &Cell {
        &self.cells[slot]
    }

    /// Map a rhombus reading-order index (0..=18, as produced by
    /// [`Coordinate::as_cell_index`](crate::core::Coordinate::as_cell_index))
    /// onto a physical slot. Index 9 is the Mind and maps to no slot.
    #[must_use]
    pub fn slot_at_index(index: usize) -> Option<usize> {
        match index {
            9 => None,
            i if i < 9 => Some(i),
            i if i <= 18 => Some(i - 1),
            _ => None,
        }
    }

    /// Find the cell carrying `code`, wherever the shuffle placed it.
    /// `None` for the Mind sentinel.
    #[must_use]
    pub fn cell_by_code(&self, code: CellCode) -> Option<&Cell> {
        self.cells.iter().find(|c| c.code() == code)
    }

    /// The physical slot of `code`, or `None` for the Mind sentinel.
    #[must_use]
    pub fn slot_of(&self, code: CellCode) -> Option<usize> {
        self.cells.iter().position(|c| c.code() == code)
    }

    /// The current owner of the cell carrying `code`.
    #[must_use]
    pub fn owner_of(&self, code: CellCode) -> Option<KingColor> {
        self.cell_by_code(code).and_then(Cell::owner)
    }

    /// Set or clear ownership of the cell at a physical slot. The derived
    /// Free/Captured state follows the owner.
    pub fn set_owner(&mut self, slot: usize, owner: Option<KingColor>) {
        self.cells[slot].set_owner(owner);
    }

    /// How many cells a king currently owns.
    #[must_use]
    pub fn owned_count(&self, king: KingColor) -> usize {
        self.cells
            .iter()
            .filter(|c| c.owner() == Some(king))
            .count()
    }

    /// Codes of all cells still free, in physical slot order.
    pub fn free_codes(&self) -> impl Iterator<Item = CellCode> + '_ {
        self.cells.iter().filter(|c| c.is_free()).map(Cell::code)
    }

    /// The 15 valid kingdom triplets, in canonical ring order.
    pub fn kingdom_triplets() -> impl Iterator<Item = [CellCode; 3]> {
        (0..CELL_COUNT)
            .filter(|i| !Self::NON_KINGDOM_STARTS.contains(i))
            .map(|i| {
                [
                    Self::MIND_RING[i],
                    Self::MIND_RING[(i + 1) % CELL_COUNT],
                    Self::MIND_RING[(i + 2) % CELL_COUNT],
                ]
            })
    }

    /// All kingdoms completely owned by `king`.
    #[must_use]
    pub fn kingdoms(&self, king: KingColor) -> Vec<[CellCode; 3]> {
        Self::kingdom_triplets()
            .filter(|triplet| {
                triplet
                    .iter()
                    .all(|&code| self.owner_of(code) == Some(king))
            })
            .collect()
    }
}
