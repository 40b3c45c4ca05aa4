//! The round lifecycle: move collection, simultaneous resolution,
//! elimination, and the end-of-game tie-break.
//!
//! ## Round protocol
//!
//! The engine buffers one move intent per living king. Submissions may
//! arrive in any order; the round resolves the moment the last living king
//! has submitted, synchronously within that `submit_move` call. Exclusive
//! access through `&mut Game` makes the buffer-and-check step atomic, so a
//! partial move set can never be applied.
//!
//! ## Phases
//!
//! `CollectingMoves -> Resolving -> Scoring -> CheckingGameOver`, then back
//! to `CollectingMoves` or on to `Finished`. The three middle phases run to
//! completion inside one call; between calls the observable phase is always
//! `CollectingMoves` or `Finished`.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::capture::{self, Captures};
use super::scoring;
use crate::board::{Board, CellCode, CELL_COUNT};
use crate::core::king::{King, KingMap};
use crate::core::{Direction, EngineError, GameRng, KingColor, INITIAL_TOKENS};

/// The round state machine's phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Accepting one direction per living king.
    CollectingMoves,
    /// Applying all buffered moves and resolving captures.
    Resolving,
    /// Recomputing scores from ownership.
    Scoring,
    /// Evaluating elimination, auto-finish, and the winner.
    CheckingGameOver,
    /// The game is over; no further moves are accepted.
    Finished,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(KingColor),
    /// All three kings tied at the top score.
    Draw,
}

impl GameResult {
    /// The winning king, or `None` for a draw.
    #[must_use]
    pub fn winner(self) -> Option<KingColor> {
        match self {
            GameResult::Winner(king) => Some(king),
            GameResult::Draw => None,
        }
    }
}

/// One resolved round, kept in the game history for observers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number, starting at 1.
    pub round: u32,
    /// The moves applied, in fixed king order.
    pub moves: SmallVec<[(KingColor, Direction); 3]>,
    /// Cells newly captured this round.
    pub captures: Captures,
}

/// Builder for a [`Game`].
///
/// By default the board layout is shuffled from the seed and every king
/// starts with [`INITIAL_TOKENS`] tokens.
pub struct GameBuilder {
    seed: u64,
    scheme: Option<[CellCode; CELL_COUNT]>,
    initial_tokens: u32,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            seed: 0,
            scheme: None,
            initial_tokens: INITIAL_TOKENS,
        }
    }
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed for the board shuffle. Ignored when an explicit scheme is set.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Use an explicit board layout instead of shuffling.
    #[must_use]
    pub fn scheme(mut self, scheme: [CellCode; CELL_COUNT]) -> Self {
        self.scheme = Some(scheme);
        self
    }

    /// Override the per-king token budget.
    #[must_use]
    pub fn initial_tokens(mut self, tokens: u32) -> Self {
        assert!(tokens > 0, "Kings need at least 1 token");
        self.initial_tokens = tokens;
        self
    }

    /// Build the game. Fails fast if an explicit scheme is not a
    /// permutation of the 18 cell codes.
    pub fn build(self) -> Result<Game, EngineError> {
        let board = match self.scheme {
            Some(scheme) => Board::from_scheme(scheme)?,
            None => Board::shuffled(&mut GameRng::new(self.seed)),
        };
        Ok(Game {
            board,
            kings: KingMap::new(|c| King::new(c, self.initial_tokens)),
            pending: KingMap::with_default(),
            phase: Phase::CollectingMoves,
            round: 0,
            history: Vector::new(),
            result: None,
        })
    }
}

/// The Toncc game engine.
///
/// Owns all mutable game state; the presentation layer submits move
/// intents and reads immutable snapshots back. All state transitions
/// happen inside [`submit_move`](Game::submit_move) (gameplay) or
/// [`set_cell_owner`](Game::set_cell_owner) (sandbox overrides).
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    kings: KingMap<King>,
    /// Buffered intents; only living kings ever hold an entry.
    pending: KingMap<Option<Direction>>,
    phase: Phase,
    round: u32,
    history: Vector<RoundRecord>,
    result: Option<GameResult>,
}

impl Game {
    /// Create a standard game with a shuffled board.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        match GameBuilder::new().seed(seed).build() {
            Ok(game) => game,
            // No scheme was supplied, so construction cannot fail.
            Err(_) => unreachable!("shuffled construction is infallible"),
        }
    }

    // === Queries ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn king(&self, color: KingColor) -> &King {
        &self.kings[color]
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of rounds resolved so far.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// The terminal result, once the game has finished.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Whether `color` has already submitted a move this round.
    #[must_use]
    pub fn has_submitted(&self, color: KingColor) -> bool {
        self.pending[color].is_some()
    }

    /// Kings still in play, in fixed color order.
    pub fn active_kings(&self) -> impl Iterator<Item = KingColor> + '_ {
        KingColor::ALL
            .into_iter()
            .filter(|&c| self.kings[c].is_active())
    }

    /// Completed kingdoms for one king.
    #[must_use]
    pub fn kingdoms(&self, color: KingColor) -> Vec<[CellCode; 3]> {
        self.board.kingdoms(color)
    }

    /// Completed kingdoms for every king.
    #[must_use]
    pub fn all_kingdoms(&self) -> KingMap<Vec<[CellCode; 3]>> {
        KingMap::new(|c| self.board.kingdoms(c))
    }

    /// All resolved rounds, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundRecord> {
        &self.history
    }

    // === Gameplay ===

    /// Submit a move intent for one king.
    ///
    /// The round resolves synchronously once every living king has
    /// submitted. A second submission from the same king in the same round
    /// is rejected rather than overwritten.
    pub fn submit_move(&mut self, color: KingColor, dir: Direction) -> Result<(), EngineError> {
        if self.phase == Phase::Finished {
            return Err(EngineError::GameFinished);
        }
        if !dir.is_movement() {
            return Err(EngineError::InvalidDirection(dir));
        }
        if self.kings[color].eliminated {
            return Err(EngineError::EliminatedKing(color));
        }
        if self.pending[color].is_some() {
            return Err(EngineError::DuplicateSubmission(color));
        }

        self.pending[color] = Some(dir);

        let all_submitted = KingColor::ALL
            .iter()
            .all(|&c| self.kings[c].eliminated || self.pending[c].is_some());
        if all_submitted {
            self.resolve_round();
        }
        Ok(())
    }

    /// Manually set or clear a cell's owner (sandbox mode).
    ///
    /// Bypasses capture resolution and token accounting, but still
    /// triggers a rescoring. Assigning an owner to a cell that is already
    /// captured is rejected; free the cell first.
    pub fn set_cell_owner(
        &mut self,
        code: CellCode,
        owner: Option<KingColor>,
    ) -> Result<(), EngineError> {
        let Some(slot) = self.board.slot_of(code) else {
            return Err(EngineError::MindCell);
        };
        if owner.is_some() && !self.board.cell(slot).is_free() {
            return Err(EngineError::AlreadyCaptured(code));
        }
        self.board.set_owner(slot, owner);
        scoring::recompute_scores(&self.board, &mut self.kings);
        Ok(())
    }

    // === Round resolution ===

    fn resolve_round(&mut self) {
        self.phase = Phase::Resolving;
        self.round += 1;

        let mut moves: SmallVec<[(KingColor, Direction); 3]> = SmallVec::new();
        for color in KingColor::ALL {
            if let Some(dir) = self.pending[color].take() {
                self.kings[color].position.step(dir);
                moves.push((color, dir));
            }
        }

        let captures = capture::resolve_captures(&mut self.board, &mut self.kings);

        self.phase = Phase::Scoring;
        scoring::recompute_scores(&self.board, &mut self.kings);

        self.history.push_back(RoundRecord {
            round: self.round,
            moves,
            captures,
        });

        self.check_game_over();
    }

    /// Elimination, auto-finish, and winner evaluation.
    ///
    /// Auto-finish re-enters the check after handing the board to a sole
    /// survivor; only one re-entry can ever happen, so this is a bounded
    /// loop rather than recursion.
    fn check_game_over(&mut self) {
        self.phase = Phase::CheckingGameOver;

        loop {
            for color in KingColor::ALL {
                if self.kings[color].eliminated || self.kings[color].tokens > 0 {
                    continue;
                }
                // Bonus counts the still-active kings at this instant,
                // including the one being eliminated.
                let bonus = self.active_kings().count() as i32;
                let king = &mut self.kings[color];
                king.score += bonus;
                king.eliminated = true;
            }

            let survivors: SmallVec<[KingColor; 3]> = self.active_kings().collect();
            match survivors.as_slice() {
                [] => {
                    self.result = Some(Self::decide_winner(&self.kings));
                    self.phase = Phase::Finished;
                    return;
                }
                [sole] => {
                    let sole = *sole;
                    for slot in 0..CELL_COUNT {
                        if self.board.cell(slot).is_free() {
                            self.board.set_owner(slot, Some(sole));
                        }
                    }
                    self.kings[sole].tokens = 0;
                    scoring::recompute_scores(&self.board, &mut self.kings);
                    // Loop: the survivor now has zero tokens and is
                    // eliminated on the next pass.
                }
                _ => {
                    self.phase = Phase::CollectingMoves;
                    return;
                }
            }
        }
    }

    /// Final winner computation over the three kings' scores.
    fn decide_winner(kings: &KingMap<King>) -> GameResult {
        let max = KingColor::ALL
            .iter()
            .map(|&c| kings[c].score)
            .max()
            .unwrap_or(0);
        let leaders: SmallVec<[KingColor; 3]> = KingColor::ALL
            .into_iter()
            .filter(|&c| kings[c].score == max)
            .collect();

        match leaders.as_slice() {
            [sole] => GameResult::Winner(*sole),
            // Two-way tie: the structurally weaker king wins, i.e. the one
            // dominated by the other.
            [a, b] => {
                if a.dominates(*b) {
                    GameResult::Winner(*b)
                } else {
                    GameResult::Winner(*a)
                }
            }
            _ => GameResult::Draw,
        }
    }
}
