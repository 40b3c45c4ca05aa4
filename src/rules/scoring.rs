//! Scoring: the cyclic dominance payoff table and full rescoring.
//!
//! A king's score is the sum, over every cell it owns, of a payoff keyed by
//! the cell's base color tier: 1 on its own tier, 2 on its medium tier,
//! 3 on its weak tier. Kingdom completeness is reported to the presentation
//! layer but does not gate scoring.

use crate::board::Board;
use crate::core::king::{King, KingMap};
use crate::core::KingColor;

/// Points `owner` earns for one owned cell of `base` color.
#[must_use]
pub fn payoff(base: KingColor, owner: KingColor) -> i32 {
    if owner == base {
        1
    } else if owner == base.medium_color() {
        2
    } else {
        3
    }
}

/// Recompute every non-eliminated king's score from current ownership.
///
/// Eliminated kings keep their final scores (including elimination
/// bonuses) untouched.
pub(crate) fn recompute_scores(board: &Board, kings: &mut KingMap<King>) {
    for (_, king) in kings.iter_mut() {
        if king.eliminated {
            continue;
        }
        king.score = board
            .cells()
            .iter()
            .filter(|cell| cell.owner() == Some(king.color))
            .filter_map(|cell| cell.code().base_color())
            .map(|base| payoff(base, king.color))
            .sum();
    }
}
