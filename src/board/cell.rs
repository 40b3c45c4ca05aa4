//! Individual board cells: type codes, ownership, and state.
//!
//! Every playable cell carries one of 18 fixed type codes. The code's first
//! letter is the cell's base color tier (R, B or Y), fixed at construction
//! and independent of who later owns the cell. The neutral Mind has its own
//! sentinel code and can never be owned.

use serde::{Deserialize, Serialize};

use crate::core::KingColor;

/// One of the 18 fixed cell type codes, plus the Mind sentinel.
///
/// Declared in canonical Mind-ring order (the order kingdoms are read in),
/// starting from `YI` and proceeding counter-clockwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellCode {
    YI,
    Yd,
    Ycd,
    Bcd,
    BcII,
    BII,
    RII,
    Rdd,
    Rsdd,
    Ysdd,
    YsIII,
    YIII,
    BIII,
    Bddd,
    Btddd,
    Rtddd,
    RtI,
    RI,
    /// The neutral center cell; never owned, never part of a kingdom.
    Mind,
}

impl CellCode {
    /// The base color tier encoded in the code's first letter, or `None`
    /// for the Mind.
    #[must_use]
    pub const fn base_color(self) -> Option<KingColor> {
        match self {
            CellCode::RII
            | CellCode::Rdd
            | CellCode::Rsdd
            | CellCode::Rtddd
            | CellCode::RtI
            | CellCode::RI => Some(KingColor::Red),
            CellCode::Bcd
            | CellCode::BcII
            | CellCode::BII
            | CellCode::BIII
            | CellCode::Bddd
            | CellCode::Btddd => Some(KingColor::Blue),
            CellCode::YI
            | CellCode::Yd
            | CellCode::Ycd
            | CellCode::Ysdd
            | CellCode::YsIII
            | CellCode::YIII => Some(KingColor::Yellow),
            CellCode::Mind => None,
        }
    }

    /// The symbolic code string.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            CellCode::YI => "YI",
            CellCode::Yd => "Yd",
            CellCode::Ycd => "Ycd",
            CellCode::Bcd => "Bcd",
            CellCode::BcII => "BcII",
            CellCode::BII => "BII",
            CellCode::RII => "RII",
            CellCode::Rdd => "Rdd",
            CellCode::Rsdd => "Rsdd",
            CellCode::Ysdd => "Ysdd",
            CellCode::YsIII => "YsIII",
            CellCode::YIII => "YIII",
            CellCode::BIII => "BIII",
            CellCode::Bddd => "Bddd",
            CellCode::Btddd => "Btddd",
            CellCode::Rtddd => "Rtddd",
            CellCode::RtI => "RtI",
            CellCode::RI => "RI",
            CellCode::Mind => "MIND",
        }
    }
}

impl std::fmt::Display for CellCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Derived occupancy state of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Free,
    Captured,
}

/// A single board cell: a fixed type code plus mutable ownership.
///
/// `state` is derived from `owner`: a cell is `Captured` iff an owner is
/// set. Ownership changes go through [`Cell::set_owner`] so the two can
/// never disagree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    code: CellCode,
    owner: Option<KingColor>,
}

impl Cell {
    /// Create a free cell with the given type code.
    #[must_use]
    pub const fn new(code: CellCode) -> Self {
        Self { code, owner: None }
    }

    #[must_use]
    pub const fn code(&self) -> CellCode {
        self.code
    }

    #[must_use]
    pub const fn owner(&self) -> Option<KingColor> {
        self.owner
    }

    /// The derived Free/Captured state.
    #[must_use]
    pub const fn state(&self) -> CellState {
        match self.owner {
            Some(_) => CellState::Captured,
            None => CellState::Free,
        }
    }

    #[must_use]
    pub const fn is_free(&self) -> bool {
        self.owner.is_none()
    }

    /// Set or clear the owner. Clearing resets the cell to `Free`.
    pub fn set_owner(&mut self, owner: Option<KingColor>) {
        self.owner = owner;
    }
}
