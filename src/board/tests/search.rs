use super::{board_from, sq};
use crate::board::eval::CHECKMATE_SCORE;
use crate::board::search::{find_best_move, find_best_move_threaded, random_move, DEFAULT_DEPTH};
use crate::board::{Board, Move};

/// Plain negamax without pruning, for cross-checking the pruned search.
/// Uses the same first-strict-maximum move adoption as the real search.
fn negamax_reference(board: &mut Board, depth: u32, sign: i32) -> (i32, Option<Move>) {
    let moves = board.legal_moves();
    if depth == 0 || board.is_checkmate() || board.is_stalemate() {
        return (sign * board.evaluate(), None);
    }
    let mut best = -CHECKMATE_SCORE;
    let mut best_move = None;
    for mv in moves {
        board.make_move(mv);
        let _ = board.legal_moves();
        let (reply, _) = negamax_reference(board, depth - 1, -sign);
        let score = -reply;
        board.undo_move();
        if score > best || best_move.is_none() {
            best = score;
            best_move = Some(mv);
        }
    }
    (best, best_move)
}

#[test]
fn finds_mate_in_one() {
    // Depth 1 so only the immediate mate carries the mate score; deeper
    // searches may prefer an equally-scored slower mate, since mate
    // scores carry no distance component.
    let mut board = board_from("7k/6pp/8/8/8/8/8/R6K w - - 0 1");
    let outcome = find_best_move(&mut board, 1, None);

    let best = outcome.best_move.expect("position is not terminal");
    assert_eq!(best.from, sq("a1"));
    assert_eq!(best.to, sq("a8"));
    assert_eq!(outcome.score, CHECKMATE_SCORE);

    let deeper = find_best_move(&mut board, DEFAULT_DEPTH, None);
    assert_eq!(deeper.score, CHECKMATE_SCORE);
}

#[test]
fn finds_mate_in_one_as_black() {
    let mut board = board_from("k6r/8/8/8/8/8/PP6/K7 b - - 0 1");
    let outcome = find_best_move(&mut board, 1, None);

    let best = outcome.best_move.expect("position is not terminal");
    assert_eq!(best.to, sq("h1"));
    assert_eq!(outcome.score, CHECKMATE_SCORE);
}

#[test]
fn terminal_position_yields_no_move() {
    let mut stalemate = board_from("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    let outcome = find_best_move(&mut stalemate, DEFAULT_DEPTH, None);
    assert!(outcome.best_move.is_none());
    assert_eq!(outcome.score, 0);
}

#[test]
fn search_leaves_the_board_untouched() {
    let mut board = Board::new();
    let before = board.fingerprint();
    let _ = find_best_move(&mut board, DEFAULT_DEPTH, None);
    assert_eq!(board.fingerprint(), before);
    assert_eq!(board.ply(), 0);
}

#[test]
fn search_restores_the_check_flag() {
    // The rook on e5 checks the e1 king; the flag must still say so
    // after the search's deep generations are unwound.
    let mut board = board_from("k7/8/8/4r3/8/8/3R4/4K3 w - - 0 1");
    let _ = board.legal_moves();
    assert!(board.in_check());
    let _ = find_best_move(&mut board, 2, None);
    assert!(board.in_check());

    let mut quiet = Board::new();
    let _ = find_best_move(&mut quiet, 2, None);
    assert!(!quiet.in_check());
}

#[test]
fn pruning_does_not_change_the_score() {
    let fens = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 0 1",
        "8/2k5/8/3p4/3P4/3K4/8/8 b - - 0 1",
    ];
    for fen in fens {
        let mut pruned = board_from(fen);
        let outcome = find_best_move(&mut pruned, 2, None);

        let mut reference = board_from(fen);
        let _ = reference.legal_moves();
        let sign = reference.side_to_move().sign();
        let (expected_score, expected_move) = negamax_reference(&mut reference, 2, sign);

        assert_eq!(outcome.score, expected_score, "score diverged on {fen}");
        assert_eq!(
            outcome.best_move.map(|m| (m.from, m.to)),
            expected_move.map(|m| (m.from, m.to)),
            "move diverged on {fen}"
        );
    }
}

#[test]
fn avoids_hanging_the_queen() {
    // The white queen on h5 is attacked by the g6 pawn; depth 2 is enough
    // to see the recapture.
    let mut board = board_from("rnbqkbnr/pppp1p1p/6p1/4p2Q/4P3/8/PPPP1PPP/RNB1KBNR w KQkq - 0 1");
    let outcome = find_best_move(&mut board, 2, None);
    let best = outcome.best_move.unwrap();
    assert!(
        !(best.from == sq("h5") && best.to == sq("g6")),
        "took a defended pawn with the queen"
    );
}

#[test]
fn threaded_search_matches_sequential() {
    let board = board_from("r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 0 1");
    let handle = find_best_move_threaded(&board, 2, None);

    let mut sequential = board.clone();
    let expected = find_best_move(&mut sequential, 2, None);

    let outcome = handle.join().unwrap();
    assert_eq!(outcome.score, expected.score);
    assert_eq!(
        outcome.best_move.map(|m| (m.from, m.to)),
        expected.best_move.map(|m| (m.from, m.to))
    );
}

#[test]
fn random_move_draws_from_the_legal_set() {
    let mut board = Board::new();
    let moves = board.legal_moves();
    for _ in 0..20 {
        let mv = random_move(&moves).unwrap();
        assert!(moves.contains(&mv));
    }
    assert!(random_move(&[]).is_none());
}
