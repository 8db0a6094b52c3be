//! Board-level tests: attack detection, move generation, make/undo,
//! evaluation, search, and notation.

mod proptest;
mod search;

use super::{Board, Move, Square};

/// Look up a legal move by origin and destination.
pub(crate) fn find_move(moves: &[Move], from: Square, to: Square) -> Move {
    moves
        .iter()
        .copied()
        .find(|m| m.from == from && m.to == to)
        .unwrap_or_else(|| panic!("no move {from}->{to} in the legal set"))
}

pub(crate) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

pub(crate) fn board_from(fen: &str) -> Board {
    Board::from_fen(fen).unwrap()
}
