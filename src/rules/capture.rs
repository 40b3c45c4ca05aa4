//! Per-round capture resolution.
//!
//! After all kings have moved, each non-eliminated king off the Mind claims
//! the free cell it stands on. When two kings land on the same free cell
//! the claim goes to whichever prevails on the cell's base color; the
//! relation is antisymmetric, so there is always exactly one winner. A cell
//! already captured in an earlier round is never recaptured, and standing
//! on one costs nothing.
//!
//! Every cell newly captured this round costs its claimant exactly one
//! token. The cost is per captured cell, never per move.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::board::{Board, CellCode};
use crate::core::king::{King, KingMap};
use crate::core::KingColor;

/// Cells captured in one round, at most one per king.
pub type Captures = SmallVec<[(CellCode, KingColor); 3]>;

/// Resolve all claims for the round, updating ownership and spending
/// tokens. Returns the captures in physical slot order.
pub(crate) fn resolve_captures(board: &mut Board, kings: &mut KingMap<King>) -> Captures {
    let mut claims: FxHashMap<usize, KingColor> = FxHashMap::default();

    for color in KingColor::ALL {
        let king = &kings[color];
        if king.eliminated || king.position.is_mind() {
            continue;
        }
        let Some(slot) = Board::slot_at_index(king.position.as_cell_index()) else {
            continue;
        };
        let cell = board.cell(slot);
        if !cell.is_free() {
            continue;
        }
        let Some(base) = cell.code().base_color() else {
            continue;
        };

        claims
            .entry(slot)
            .and_modify(|incumbent| {
                if !incumbent.prevails_on(color, base) {
                    *incumbent = color;
                }
            })
            .or_insert(color);
    }

    let mut claimed: Vec<(usize, KingColor)> = claims.into_iter().collect();
    claimed.sort_unstable_by_key(|&(slot, _)| slot);

    let mut captures = Captures::new();
    for (slot, claimant) in claimed {
        board.set_owner(slot, Some(claimant));
        kings[claimant].tokens = kings[claimant].tokens.saturating_sub(1);
        captures.push((board.cell(slot).code(), claimant));
    }
    captures
}
