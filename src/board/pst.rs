//! Piece-square tables.
//!
//! All tables are written from White's point of view, indexed
//! `[rank][file]` with rank 0 = White's home rank. Black's tables are the
//! vertical mirror, built once at first use.

use once_cell::sync::Lazy;

use super::{Color, Piece, Square};

pub(crate) type Table = [[i32; 8]; 8];

const PAWN: Table = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [5, 10, 10, -20, -20, 10, 10, 5],
    [5, -5, -10, 0, 0, -10, -5, 5],
    [0, 0, 0, 20, 20, 0, 0, 0],
    [5, 5, 10, 25, 25, 10, 5, 5],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [60, 60, 60, 60, 60, 60, 60, 60],
];

const KNIGHT: Table = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20, 0, 0, 0, 0, -20, -40],
    [-30, 0, 10, 15, 15, 10, 0, -30],
    [-30, 5, 15, 20, 20, 15, 5, -30],
    [-30, 10, 15, 20, 20, 15, 10, -30],
    [-30, 5, 10, 15, 15, 10, 5, -30],
    [-40, -20, 0, 5, 5, 0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

const BISHOP: Table = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 10, 10, 5, 0, -10],
    [-10, 5, 5, 10, 10, 5, 5, -10],
    [-10, 0, 10, 10, 10, 10, 0, -10],
    [-10, 10, 10, 10, 10, 10, 10, -10],
    [-10, 5, 0, 0, 0, 0, 5, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

const ROOK: Table = [
    [0, 0, 0, 25, 25, 0, 0, 0],
    [5, 20, 20, 20, 20, 20, 20, 5],
    [5, 0, 0, 20, 20, 20, 20, 5],
    [5, 0, 0, 20, 20, 20, 0, 5],
    [5, 0, 0, 20, 20, 20, 0, 5],
    [5, 0, 20, 20, 20, 20, 0, 5],
    [20, 20, 20, 20, 20, 20, 20, 20],
    [0, 0, 0, 5, 5, 0, 0, 0],
];

const QUEEN: Table = [
    [-20, -10, -10, -5, -5, -10, -10, -20],
    [-10, 0, 5, 0, 0, 0, 0, -10],
    [-10, 5, 5, 5, 5, 5, 0, -10],
    [0, 0, 5, 5, 5, 5, 0, -5],
    [-5, 0, 5, 5, 5, 5, 0, -5],
    [-10, 0, 5, 5, 5, 5, 0, -10],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-20, -10, -10, -5, -5, -10, -10, -20],
];

const KING_MID: Table = [
    [20, 30, 10, 0, 0, 10, 30, 20],
    [20, 20, 0, 0, 0, 0, 20, 20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
];

const KING_END: Table = [
    [-50, -40, -30, -20, -20, -30, -40, -50],
    [-30, -30, 0, 0, 0, 0, -30, -30],
    [-30, -10, 20, 30, 30, 20, -10, -30],
    [-30, -10, 30, 40, 40, 30, -10, -30],
    [-30, -10, 30, 40, 40, 30, -10, -30],
    [-30, -10, 20, 30, 30, 20, -10, -30],
    [-30, -20, -10, 0, 0, -10, -20, -30],
    [-50, -40, -30, -20, -20, -30, -40, -50],
];

fn mirror(table: &Table) -> Table {
    let mut out = *table;
    out.reverse();
    out
}

static BLACK_PAWN: Lazy<Table> = Lazy::new(|| mirror(&PAWN));
static BLACK_KNIGHT: Lazy<Table> = Lazy::new(|| mirror(&KNIGHT));
static BLACK_BISHOP: Lazy<Table> = Lazy::new(|| mirror(&BISHOP));
static BLACK_ROOK: Lazy<Table> = Lazy::new(|| mirror(&ROOK));
static BLACK_QUEEN: Lazy<Table> = Lazy::new(|| mirror(&QUEEN));
static BLACK_KING_MID: Lazy<Table> = Lazy::new(|| mirror(&KING_MID));
static BLACK_KING_END: Lazy<Table> = Lazy::new(|| mirror(&KING_END));

/// Positional bonus for a piece of `color` standing on `sq`. The king
/// switches tables between middlegame and endgame.
pub(crate) fn positional(piece: Piece, color: Color, sq: Square, endgame: bool) -> i32 {
    let table: &Table = match (piece, color) {
        (Piece::Pawn, Color::White) => &PAWN,
        (Piece::Pawn, Color::Black) => &BLACK_PAWN,
        (Piece::Knight, Color::White) => &KNIGHT,
        (Piece::Knight, Color::Black) => &BLACK_KNIGHT,
        (Piece::Bishop, Color::White) => &BISHOP,
        (Piece::Bishop, Color::Black) => &BLACK_BISHOP,
        (Piece::Rook, Color::White) => &ROOK,
        (Piece::Rook, Color::Black) => &BLACK_ROOK,
        (Piece::Queen, Color::White) => &QUEEN,
        (Piece::Queen, Color::Black) => &BLACK_QUEEN,
        (Piece::King, Color::White) if endgame => &KING_END,
        (Piece::King, Color::White) => &KING_MID,
        (Piece::King, Color::Black) if endgame => &BLACK_KING_END,
        (Piece::King, Color::Black) => &BLACK_KING_MID,
    };
    table[sq.0][sq.1]
}
