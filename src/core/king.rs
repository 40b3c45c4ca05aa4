//! King identity, color dominance, and per-king storage.
//!
//! ## KingColor
//!
//! The closed set of three kings. Each color carries a fixed "medium" and
//! "weak" relation to the other two, forming a rock-paper-scissors cycle
//! that drives both capture conflicts ([`KingColor::prevails_on`]) and the
//! end-of-game tie-break ([`KingColor::dominates`]).
//!
//! ## KingMap
//!
//! Per-king data storage backed by a fixed array for O(1) access, indexable
//! by `KingColor`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::coord::Coordinate;

/// Number of tokens each king starts with in a standard game.
pub const INITIAL_TOKENS: u32 = 6;

/// One of the three kings (also the three cell base-color tiers).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KingColor {
    Red,
    Blue,
    Yellow,
}

impl KingColor {
    /// All three colors, in the fixed processing order.
    pub const ALL: [KingColor; 3] = [KingColor::Red, KingColor::Blue, KingColor::Yellow];

    /// Get the 0-based storage index for this color.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            KingColor::Red => 0,
            KingColor::Blue => 1,
            KingColor::Yellow => 2,
        }
    }

    /// The color this king holds a medium claim on.
    ///
    /// Fixed 3-cycle: Red -> Yellow, Blue -> Red, Yellow -> Blue.
    #[must_use]
    pub const fn medium_color(self) -> KingColor {
        match self {
            KingColor::Red => KingColor::Yellow,
            KingColor::Blue => KingColor::Red,
            KingColor::Yellow => KingColor::Blue,
        }
    }

    /// The color this king is weakest on (the inverse cycle).
    #[must_use]
    pub const fn weak_color(self) -> KingColor {
        match self {
            KingColor::Red => KingColor::Blue,
            KingColor::Blue => KingColor::Yellow,
            KingColor::Yellow => KingColor::Red,
        }
    }

    /// Does this king win a contested cell of `base` color against `other`?
    ///
    /// A king always wins cells of its own tier, and wins cells of its
    /// medium tier unless the opponent owns that tier outright. For any two
    /// distinct kings and any base color, exactly one of the two prevails.
    #[must_use]
    pub fn prevails_on(self, other: KingColor, base: KingColor) -> bool {
        self == base || (self.medium_color() == base && other != base)
    }

    /// Strict 2-of-3 majority dominance over `other` across the three
    /// color tiers. Used only for the end-of-game tie-break.
    #[must_use]
    pub fn dominates(self, other: KingColor) -> bool {
        let wins = KingColor::ALL
            .iter()
            .filter(|&&base| self.prevails_on(other, base))
            .count();
        wins == 2
    }
}

impl std::fmt::Display for KingColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            KingColor::Red => "Red",
            KingColor::Blue => "Blue",
            KingColor::Yellow => "Yellow",
        };
        write!(f, "{name}")
    }
}

/// Per-player mutable game state for one king.
///
/// Mutated only by the round engine during resolution; the presentation
/// layer reads it back between rounds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct King {
    /// This king's color identity.
    pub color: KingColor,
    /// Current board position; starts at the Mind.
    pub position: Coordinate,
    /// Remaining capture budget; reaching zero eliminates the king.
    pub tokens: u32,
    /// Accumulated score.
    pub score: i32,
    /// Set once the king has spent its last token.
    pub eliminated: bool,
}

impl King {
    /// Create a king at the Mind with a full token budget.
    #[must_use]
    pub fn new(color: KingColor, tokens: u32) -> Self {
        Self {
            color,
            position: Coordinate::mind(),
            tokens,
            score: 0,
            eliminated: false,
        }
    }

    /// A king is active while it has not been eliminated.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.eliminated
    }
}

/// Per-king data storage with O(1) access, indexed by [`KingColor`].
///
/// ## Example
///
/// ```
/// use toncc_engine::core::{KingColor, KingMap};
///
/// let mut tokens: KingMap<u32> = KingMap::with_value(6);
/// tokens[KingColor::Blue] -= 1;
/// assert_eq!(tokens[KingColor::Blue], 5);
/// assert_eq!(tokens[KingColor::Red], 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KingMap<T> {
    data: [T; 3],
}

impl<T> KingMap<T> {
    /// Create a new map with values from a factory function.
    pub fn new(factory: impl Fn(KingColor) -> T) -> Self {
        Self {
            data: [
                factory(KingColor::Red),
                factory(KingColor::Blue),
                factory(KingColor::Yellow),
            ],
        }
    }

    /// Create a new map with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new map with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a king's entry.
    #[must_use]
    pub fn get(&self, color: KingColor) -> &T {
        &self.data[color.index()]
    }

    /// Get a mutable reference to a king's entry.
    pub fn get_mut(&mut self, color: KingColor) -> &mut T {
        &mut self.data[color.index()]
    }

    /// Iterate over `(KingColor, &T)` pairs in fixed color order.
    pub fn iter(&self) -> impl Iterator<Item = (KingColor, &T)> {
        KingColor::ALL.iter().map(|&c| (c, self.get(c)))
    }

    /// Iterate over `(KingColor, &mut T)` pairs in fixed color order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (KingColor, &mut T)> {
        KingColor::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<KingColor> for KingMap<T> {
    type Output = T;

    fn index(&self, color: KingColor) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<KingColor> for KingMap<T> {
    fn index_mut(&mut self, color: KingColor) -> &mut Self::Output {
        self.get_mut(color)
    }
}
