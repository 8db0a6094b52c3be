//! Attack detection and the pin/check scan.
//!
//! The scan walks the eight rays out of a king plus the knight offsets in a
//! single pass, producing the check flag, the pinned-piece table, and the
//! list of checking pieces. The move generator consumes the result
//! read-only; nothing here mutates the board.

use super::{Board, Color, Piece, Square};

/// Four orthogonal rays followed by four diagonal rays. Ray indices 4 and 5
/// point toward White's home rank, 6 and 7 away from it; the pawn contact
/// checks below depend on that ordering.
pub(crate) const RAYS: [(isize, isize); 8] = [
    (-1, 0),
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Absolutely-pinned pieces of the side to move, keyed by square. Each entry
/// holds the ray direction from the king through the pinned piece; a pinned
/// piece may only move along that line.
#[derive(Debug, Default)]
pub(crate) struct PinTable {
    dirs: [[Option<(isize, isize)>; 8]; 8],
}

impl PinTable {
    fn insert(&mut self, sq: Square, dir: (isize, isize)) {
        self.dirs[sq.0][sq.1] = Some(dir);
    }

    pub(crate) fn get(&self, sq: Square) -> Option<(isize, isize)> {
        self.dirs[sq.0][sq.1]
    }
}

/// One piece currently giving check.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CheckInfo {
    pub square: Square,
    /// Ray from the king toward the checker; `(0, 0)` for a knight.
    pub dir: (isize, isize),
    pub piece: Piece,
}

impl Board {
    /// Whether `sq` is attacked by any piece of `by`. Scans outward from
    /// `sq`, so it stays correct for a king hypothetically placed there.
    pub(crate) fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        for (i, &(dr, df)) in RAYS.iter().enumerate() {
            let mut dist = 1;
            while let Some(probe) = sq.offset(dr * dist, df * dist) {
                match self.piece_at(probe) {
                    None => {}
                    Some((color, piece)) => {
                        if color == by && ray_attacks(i, dist, by, piece) {
                            return true;
                        }
                        break;
                    }
                }
                dist += 1;
            }
        }
        for &(dr, df) in &KNIGHT_OFFSETS {
            if let Some(probe) = sq.offset(dr, df) {
                if self.piece_at(probe) == Some((by, Piece::Knight)) {
                    return true;
                }
            }
        }
        false
    }

    /// Scan outward from the side-to-move's king. Returns the check flag,
    /// the pin table, and every checking piece (at most two).
    pub(crate) fn scan_pins_and_checks(&self) -> (bool, PinTable, Vec<CheckInfo>) {
        let us = self.side_to_move();
        let them = us.opponent();
        let king = self.king_square(us);

        let mut in_check = false;
        let mut pins = PinTable::default();
        let mut checks = Vec::new();

        for (i, &(dr, df)) in RAYS.iter().enumerate() {
            let mut possible_pin: Option<Square> = None;
            let mut dist = 1;
            while let Some(probe) = king.offset(dr * dist, df * dist) {
                match self.piece_at(probe) {
                    None => {}
                    Some((color, _)) if color == us => {
                        if possible_pin.is_none() {
                            possible_pin = Some(probe);
                        } else {
                            // Two friendly pieces shield this ray.
                            break;
                        }
                    }
                    Some((_, piece)) => {
                        if ray_attacks(i, dist, them, piece) {
                            match possible_pin {
                                None => {
                                    in_check = true;
                                    checks.push(CheckInfo {
                                        square: probe,
                                        dir: (dr, df),
                                        piece,
                                    });
                                }
                                Some(pinned) => pins.insert(pinned, (dr, df)),
                            }
                        }
                        break;
                    }
                }
                dist += 1;
            }
        }

        for &(dr, df) in &KNIGHT_OFFSETS {
            if let Some(probe) = king.offset(dr, df) {
                if self.piece_at(probe) == Some((them, Piece::Knight)) {
                    in_check = true;
                    checks.push(CheckInfo {
                        square: probe,
                        dir: (0, 0),
                        piece: Piece::Knight,
                    });
                }
            }
        }

        (in_check, pins, checks)
    }
}

/// Whether a piece of `color` standing `dist` steps along ray `i` attacks
/// the ray's origin.
fn ray_attacks(i: usize, dist: isize, color: Color, piece: Piece) -> bool {
    match piece {
        Piece::Rook => i <= 3,
        Piece::Bishop => i >= 4,
        Piece::Queen => true,
        Piece::King => dist == 1,
        Piece::Pawn => {
            dist == 1
                && match color {
                    // A White pawn attacks toward higher ranks, so it sits
                    // on a ray pointing back down toward rank 0 from its
                    // target.
                    Color::White => i == 4 || i == 5,
                    Color::Black => i == 6 || i == 7,
                }
        }
        Piece::Knight => false,
    }
}
