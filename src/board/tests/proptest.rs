use proptest::prelude::*;

use crate::board::{Board, Color};

/// Drive a playout from the start, picking each move by index into the
/// current legal set. Stops early at terminal positions.
fn playout(choices: &[usize]) -> Board {
    let mut board = Board::new();
    for &choice in choices {
        let moves = board.legal_moves();
        if moves.is_empty() {
            break;
        }
        board.make_move(moves[choice % moves.len()]);
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fingerprints_round_trip_through_fen(
        choices in proptest::collection::vec(0usize..512, 0..40),
    ) {
        let board = playout(&choices);
        let fingerprint = board.fingerprint();
        let mut parsed = Board::from_fen(&fingerprint).unwrap();
        prop_assert_eq!(parsed.fingerprint(), fingerprint.clone());

        let mut original = board;
        prop_assert_eq!(
            original.legal_moves().len(),
            parsed.legal_moves().len(),
            "legal sets diverge after round trip of {}",
            fingerprint
        );
    }

    #[test]
    fn every_legal_move_round_trips(
        choices in proptest::collection::vec(0usize..512, 0..30),
    ) {
        let mut board = playout(&choices);
        let before = board.fingerprint();
        let kings = [
            board.king_square(Color::White),
            board.king_square(Color::Black),
        ];
        for mv in board.legal_moves() {
            board.make_move(mv);
            board.undo_move();
            prop_assert_eq!(board.fingerprint(), before.clone(), "round trip broke on {}", mv);
            prop_assert_eq!(board.king_square(Color::White), kings[0]);
            prop_assert_eq!(board.king_square(Color::Black), kings[1]);
        }
    }

    #[test]
    fn no_legal_move_leaves_the_king_attacked(
        choices in proptest::collection::vec(0usize..512, 0..30),
    ) {
        let mut board = playout(&choices);
        let us = board.side_to_move();
        for mv in board.legal_moves() {
            board.make_move(mv);
            prop_assert!(
                !board.is_square_attacked(board.king_square(us), us.opponent()),
                "{} leaves the king attacked",
                mv
            );
            board.undo_move();
        }
    }
}
