//! End-to-end game scenarios.
//!
//! These tests drive full rounds through the public API on the canonical
//! (unshuffled) board layout, where coordinate-to-cell mappings are known:
//! e.g. one step Right of the Mind is Ysdd, one step Left is Rsdd, and one
//! step TopRight is BII.

use toncc_engine::{
    Board, CellCode, Direction, EngineError, Game, GameBuilder, GameResult, KingColor, Phase,
    INITIAL_TOKENS,
};

fn canonical_game(tokens: u32) -> Game {
    GameBuilder::new()
        .scheme(Board::MIND_RING)
        .initial_tokens(tokens)
        .build()
        .unwrap()
}

/// Submit one move per living king; the round resolves on the last one.
fn play_round(game: &mut Game, moves: &[(KingColor, Direction)]) {
    for &(king, dir) in moves {
        game.submit_move(king, dir).unwrap();
    }
}

#[test]
fn test_opening_round_flow() {
    let mut game = canonical_game(INITIAL_TOKENS);

    play_round(
        &mut game,
        &[
            (KingColor::Red, Direction::Right),
            (KingColor::Blue, Direction::Left),
            (KingColor::Yellow, Direction::TopRight),
        ],
    );

    assert_eq!(game.round(), 1);
    assert_eq!(game.phase(), Phase::CollectingMoves);

    // Each king captured the free cell it landed on and spent one token.
    assert_eq!(game.board().owner_of(CellCode::Ysdd), Some(KingColor::Red));
    assert_eq!(game.board().owner_of(CellCode::Rsdd), Some(KingColor::Blue));
    assert_eq!(game.board().owner_of(CellCode::BII), Some(KingColor::Yellow));
    for color in KingColor::ALL {
        assert_eq!(game.king(color).tokens, INITIAL_TOKENS - 1);
    }

    // Payoffs: Red on a Y cell = 3, Blue on an R cell = 3, Yellow on a
    // B cell = 3.
    assert_eq!(game.king(KingColor::Red).score, 3);
    assert_eq!(game.king(KingColor::Blue).score, 3);
    assert_eq!(game.king(KingColor::Yellow).score, 3);

    assert_eq!(game.history().len(), 1);
    assert_eq!(game.history()[0].captures.len(), 3);
}

#[test]
fn test_moving_onto_an_owned_cell_costs_no_token() {
    let mut game = canonical_game(INITIAL_TOKENS);

    play_round(
        &mut game,
        &[
            (KingColor::Red, Direction::Right),
            (KingColor::Blue, Direction::Left),
            (KingColor::Yellow, Direction::TopRight),
        ],
    );

    // Round 2: Blue steps Right from (0,-1); the Mind guard carries it to
    // (0,1), Red's captured Ysdd cell. Yellow lands on the same owned
    // cell from (-1,0). Neither captures anything.
    play_round(
        &mut game,
        &[
            (KingColor::Red, Direction::Right),
            (KingColor::Blue, Direction::Right),
            (KingColor::Yellow, Direction::BottomRight),
        ],
    );

    assert_eq!(game.board().owner_of(CellCode::Ysdd), Some(KingColor::Red));
    assert_eq!(game.king(KingColor::Blue).tokens, INITIAL_TOKENS - 1);
    assert_eq!(game.king(KingColor::Yellow).tokens, INITIAL_TOKENS - 1);
    // Red kept capturing: YsIII at (0,2).
    assert_eq!(game.board().owner_of(CellCode::YsIII), Some(KingColor::Red));
    assert_eq!(game.king(KingColor::Red).tokens, INITIAL_TOKENS - 2);
    assert_eq!(game.history()[1].captures.len(), 1);
}

#[test]
fn test_simultaneous_exhaustion_awards_ordered_bonuses() {
    // One token each: the first round eliminates everyone. Bonuses count
    // the still-active kings at each instant, in Red, Blue, Yellow order.
    let mut game = canonical_game(1);

    play_round(
        &mut game,
        &[
            (KingColor::Red, Direction::Right),
            (KingColor::Blue, Direction::Left),
            (KingColor::Yellow, Direction::TopRight),
        ],
    );

    assert_eq!(game.phase(), Phase::Finished);
    for color in KingColor::ALL {
        assert!(game.king(color).eliminated);
        assert_eq!(game.king(color).tokens, 0);
    }

    // Red: 3 (Ysdd) + bonus 3; Blue: 3 (Rsdd) + bonus 2;
    // Yellow: 3 (BII) + bonus 1.
    assert_eq!(game.king(KingColor::Red).score, 6);
    assert_eq!(game.king(KingColor::Blue).score, 5);
    assert_eq!(game.king(KingColor::Yellow).score, 4);

    assert_eq!(game.result(), Some(GameResult::Winner(KingColor::Red)));
    assert_eq!(
        game.submit_move(KingColor::Red, Direction::Right),
        Err(EngineError::GameFinished)
    );
}

#[test]
fn test_contested_capture_and_auto_finish() {
    let mut game = canonical_game(1);

    // Red and Blue contest Ysdd; Red holds the medium claim on Yellow and
    // prevails, spending its last token. Blue spends nothing. Yellow
    // captures Rsdd and is exhausted too.
    play_round(
        &mut game,
        &[
            (KingColor::Red, Direction::Right),
            (KingColor::Blue, Direction::Right),
            (KingColor::Yellow, Direction::Left),
        ],
    );

    assert_eq!(game.phase(), Phase::Finished);

    // Red went out with 3 kings active (bonus 3), Yellow with 2.
    assert_eq!(game.king(KingColor::Red).score, 3 + 3);
    assert_eq!(game.king(KingColor::Yellow).score, 2 + 2);

    // Blue survived alone: auto-finish handed it the 16 remaining cells
    // (5 R * 3 + 6 B * 1 + 5 Y * 2 = 31), then eliminated it with bonus 1.
    assert_eq!(game.board().owned_count(KingColor::Blue), 16);
    assert!(game.board().free_codes().next().is_none());
    assert_eq!(game.king(KingColor::Blue).score, 31 + 1);
    assert!(game.king(KingColor::Blue).eliminated);

    assert_eq!(game.result(), Some(GameResult::Winner(KingColor::Blue)));
}

#[test]
fn test_rounds_continue_without_an_eliminated_king() {
    let mut game = canonical_game(2);

    play_round(
        &mut game,
        &[
            (KingColor::Red, Direction::Right),
            (KingColor::Blue, Direction::Left),
            (KingColor::Yellow, Direction::TopRight),
        ],
    );
    // Round 2: only Red captures (YsIII); Blue and Yellow cross onto
    // owned cells and keep their last token.
    play_round(
        &mut game,
        &[
            (KingColor::Red, Direction::Right),
            (KingColor::Blue, Direction::Right),
            (KingColor::Yellow, Direction::BottomRight),
        ],
    );

    assert!(game.king(KingColor::Red).eliminated);
    // Ysdd + YsIII (3 each) plus a bonus of 3 with everyone still active.
    assert_eq!(game.king(KingColor::Red).score, 9);
    assert_eq!(game.phase(), Phase::CollectingMoves);

    assert_eq!(
        game.submit_move(KingColor::Red, Direction::Left),
        Err(EngineError::EliminatedKing(KingColor::Red))
    );

    // The round now resolves after just the two survivors submit.
    play_round(
        &mut game,
        &[
            (KingColor::Blue, Direction::Left),
            (KingColor::Yellow, Direction::TopLeft),
        ],
    );
    assert_eq!(game.round(), 3);
    assert_eq!(game.history()[2].moves.len(), 2);
}

#[test]
fn test_full_game_to_natural_exhaustion() {
    let mut game = canonical_game(INITIAL_TOKENS);

    // Six scripted rounds; Red and Blue capture a fresh cell every round,
    // Yellow captures in rounds 1-5 and wastes round 6, after which it is
    // the sole survivor and auto-finish collects the last free cell.
    let rounds: [[Direction; 3]; 6] = [
        [Direction::Right, Direction::TopLeft, Direction::BottomLeft],
        [Direction::Right, Direction::Left, Direction::BottomRight],
        [Direction::Right, Direction::TopRight, Direction::Right],
        [Direction::Right, Direction::Right, Direction::TopRight],
        [Direction::BottomLeft, Direction::BottomRight, Direction::Left],
        [Direction::BottomRight, Direction::Right, Direction::Left],
    ];
    for [red, blue, yellow] in rounds {
        play_round(
            &mut game,
            &[
                (KingColor::Red, red),
                (KingColor::Blue, blue),
                (KingColor::Yellow, yellow),
            ],
        );
    }

    assert_eq!(game.round(), 6);
    assert_eq!(game.phase(), Phase::Finished);
    for color in KingColor::ALL {
        assert!(game.king(color).eliminated);
        assert_eq!(game.board().owned_count(color), 6);
    }
    assert!(game.board().free_codes().next().is_none());

    // Red: Ysdd + YsIII + YIII (3 each) + Rdd + Rsdd + Rtddd (1 each)
    // = 12, + bonus 3.
    assert_eq!(game.king(KingColor::Red).score, 15);
    // Blue: BcII + Bcd + BII (1 each) + YI + Yd (2 each) + RII (3)
    // = 10, + bonus 2.
    assert_eq!(game.king(KingColor::Blue).score, 12);
    // Yellow: BIII + Btddd + Bddd (3 each) + RtI + RI (2 each) = 13,
    // + Ycd (1) from auto-finish, + bonus 1.
    assert_eq!(game.king(KingColor::Yellow).score, 15);

    // Red and Yellow tie at 15; Yellow dominates Red, so the tie goes to
    // the dominated king.
    assert_eq!(game.result(), Some(GameResult::Winner(KingColor::Red)));

    // Round 6 recorded only the two real captures.
    assert_eq!(game.history()[5].captures.len(), 2);
}

#[test]
fn test_kingdom_queries_through_the_engine() {
    let mut game = canonical_game(INITIAL_TOKENS);

    for code in [CellCode::RII, CellCode::Rdd, CellCode::Rsdd] {
        game.set_cell_owner(code, Some(KingColor::Red)).unwrap();
    }
    for code in [CellCode::Ysdd, CellCode::YsIII, CellCode::YIII] {
        game.set_cell_owner(code, Some(KingColor::Yellow)).unwrap();
    }

    assert_eq!(
        game.kingdoms(KingColor::Red),
        vec![[CellCode::RII, CellCode::Rdd, CellCode::Rsdd]]
    );
    assert_eq!(
        game.kingdoms(KingColor::Yellow),
        vec![[CellCode::Ysdd, CellCode::YsIII, CellCode::YIII]]
    );
    assert!(game.kingdoms(KingColor::Blue).is_empty());

    let all = game.all_kingdoms();
    assert_eq!(all[KingColor::Red].len(), 1);
    assert_eq!(all[KingColor::Yellow].len(), 1);
    assert!(all[KingColor::Blue].is_empty());

    // Scores follow ownership, one point per own-tier cell.
    assert_eq!(game.king(KingColor::Red).score, 3);
    assert_eq!(game.king(KingColor::Yellow).score, 3);
}
