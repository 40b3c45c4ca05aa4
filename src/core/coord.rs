//! Hex-grid geometry: movement directions and the Toncc coordinate system.
//!
//! A Toncc coordinate is a triple `(x, y, z)` with `z = y - x` and
//! `|x|, |y|, |z| <= 2`. The Mind sits at `(0, 0, 0)`; the 18 playable
//! cells fill the rest of the rhombus. Moving past the board boundary does
//! not wrap: a direction-specific reflection folds the step back onto the
//! opposite edge using the pre-move coordinates. A king that has left the
//! Mind can never step back onto it, so `step` followed by the opposite
//! `step` need not return to the start.

use serde::{Deserialize, Serialize};

/// A movement direction on the hexagonal grid.
///
/// Only six directions correspond to actual movement; `Top` and `Bottom`
/// exist for input-mapping completeness and carry no delta. Callers must
/// reject them before they reach the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    TopLeft,
    Top,
    TopRight,
    Left,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Direction {
    /// All eight directions, in declaration order.
    pub const ALL: [Direction; 8] = [
        Direction::TopLeft,
        Direction::Top,
        Direction::TopRight,
        Direction::Left,
        Direction::Right,
        Direction::BottomLeft,
        Direction::Bottom,
        Direction::BottomRight,
    ];

    /// The `(dx, dy)` unit delta for this direction, or `None` for the
    /// two non-movement directions.
    #[must_use]
    pub const fn delta(self) -> Option<(i32, i32)> {
        match self {
            Direction::TopLeft => Some((-1, -1)),
            Direction::TopRight => Some((-1, 0)),
            Direction::Left => Some((0, -1)),
            Direction::Right => Some((0, 1)),
            Direction::BottomLeft => Some((1, 0)),
            Direction::BottomRight => Some((1, 1)),
            Direction::Top | Direction::Bottom => None,
        }
    }

    /// Whether this direction moves a king at all.
    #[must_use]
    pub const fn is_movement(self) -> bool {
        self.delta().is_some()
    }

    /// The direction pointing the opposite way.
    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::TopLeft => Direction::BottomRight,
            Direction::Top => Direction::Bottom,
            Direction::TopRight => Direction::BottomLeft,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::BottomLeft => Direction::TopRight,
            Direction::Bottom => Direction::Top,
            Direction::BottomRight => Direction::TopLeft,
        }
    }
}

/// An axial position on the Toncc board.
///
/// Stores `(x, y)`; `z` is always derived as `y - x`. After every completed
/// [`step`](Coordinate::step) the coordinate satisfies
/// `|x|, |y|, |z| <= 2`; the bound is violated only transiently inside the
/// reflection computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    x: i32,
    y: i32,
}

impl Coordinate {
    /// Create a coordinate at the given axial position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The Mind's position, `(0, 0)`.
    #[must_use]
    pub const fn mind() -> Self {
        Self::new(0, 0)
    }

    #[must_use]
    pub const fn x(self) -> i32 {
        self.x
    }

    #[must_use]
    pub const fn y(self) -> i32 {
        self.y
    }

    /// The derived third axis, `z = y - x`.
    #[must_use]
    pub const fn z(self) -> i32 {
        self.y - self.x
    }

    /// Whether this is the Mind's position.
    #[must_use]
    pub const fn is_mind(self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Move one step in `dir`, applying the Mind re-entry guard and the
    /// boundary reflection.
    ///
    /// A king that has left the Mind may never step back onto it: a step
    /// landing on `(0, 0)` is applied a second time, carrying the king to
    /// the opposite neighbor. A step past the board boundary is folded
    /// back using the pre-move coordinates: for TopLeft/BottomRight the
    /// original `x` and `y` swap with flipped signs, for TopRight/BottomLeft
    /// `x` becomes the original `z`, and for Left/Right `y` becomes the
    /// negated original `z`.
    ///
    /// The two non-movement directions are ignored.
    pub fn step(&mut self, dir: Direction) {
        let Some((dx, dy)) = dir.delta() else {
            return;
        };

        let (orig_x, orig_y) = (self.x, self.y);
        let orig_z = orig_y - orig_x;
        let started_at_mind = self.is_mind();

        self.x += dx;
        self.y += dy;

        // A king cannot step back onto the Mind after exiting it. One more
        // step lands on the opposite neighbor, always in bounds.
        if self.is_mind() && !started_at_mind {
            self.x += dx;
            self.y += dy;
        }

        if self.z().abs() > 2 || self.x.abs() > 2 || self.y.abs() > 2 {
            match dir {
                Direction::TopLeft | Direction::BottomRight => {
                    self.x = -orig_y;
                    self.y = -orig_x;
                }
                Direction::TopRight | Direction::BottomLeft => {
                    self.x = orig_z;
                }
                _ => {
                    self.y = -orig_z;
                }
            }
        }
    }

    /// Linearize this position into the rhombus reading-order index.
    ///
    /// The index runs 0..=18 across the 3-4-5-4-3 rows, with 9 being the
    /// Mind. [`Board::slot_at_index`](crate::board::Board::slot_at_index)
    /// maps it onto the 18 physical slots.
    #[must_use]
    pub const fn as_cell_index(self) -> usize {
        let row_offset = if self.x.abs() == 1 {
            4 * self.x
        } else {
            // 3.5 * x, exact for even x in -2..=2
            7 * self.x / 2
        };
        (9 + self.y + row_offset) as usize
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}; idx = {})",
            self.x,
            self.y,
            self.z(),
            self.as_cell_index()
        )
    }
}
