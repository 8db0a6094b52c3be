//! Legal move generation.
//!
//! Pseudo-legal moves are generated with pin constraints applied inline,
//! then filtered by the current check state: under a single check only king
//! moves and moves that capture or interpose against the checker survive,
//! and under a double check only king moves are generated at all. King
//! steps and en passant captures are validated by briefly lifting pieces
//! off the grid and probing for attacks.

use super::attacks::{CheckInfo, PinTable, KNIGHT_OFFSETS, RAYS};
use super::{Board, Color, Move, Piece, Square};

/// A pinned piece may only move along the pin ray, in either direction.
/// Collinearity is tested with a cross product so one helper covers
/// sliders, pawns, and knights (no knight offset is collinear with a ray).
fn pin_allows(pin: Option<(isize, isize)>, from: Square, to: Square) -> bool {
    match pin {
        None => true,
        Some((dr, df)) => {
            let mr = to.0 as isize - from.0 as isize;
            let mf = to.1 as isize - from.1 as isize;
            mr * df == mf * dr
        }
    }
}

impl Board {
    /// Generate every legal move for the side to move.
    ///
    /// Also refreshes the `in_check` flag and, when the returned set is
    /// empty, sets exactly one of `checkmate` or `stalemate`.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let (in_check, pins, checks) = self.scan_pins_and_checks();
        self.in_check = in_check;
        let us = self.side_to_move();

        let moves = if checks.len() >= 2 {
            // Double check: nothing but a king step can help.
            let mut out = Vec::new();
            self.king_moves(self.king_square(us), us, &mut out);
            out
        } else {
            let mut out = self.pseudo_moves(us, &pins);
            if in_check {
                let check = checks[0];
                let targets = self.check_interpositions(us, check);
                out.retain(|m| {
                    m.piece == Piece::King
                        || targets.contains(&m.to)
                        || (m.is_en_passant && Square(m.from.0, m.to.1) == check.square)
                });
            } else {
                self.castle_moves(us, &mut out);
            }
            out
        };

        if moves.is_empty() {
            self.checkmate = in_check;
            self.stalemate = !in_check;
        } else {
            self.checkmate = false;
            self.stalemate = false;
        }
        moves
    }

    fn pseudo_moves(&mut self, us: Color, pins: &PinTable) -> Vec<Move> {
        let mut out = Vec::new();
        for rank in 0..8 {
            for file in 0..8 {
                let sq = Square(rank, file);
                let Some((color, piece)) = self.piece_at(sq) else {
                    continue;
                };
                if color != us {
                    continue;
                }
                let pin = pins.get(sq);
                match piece {
                    Piece::Pawn => self.pawn_moves(sq, us, pin, &mut out),
                    Piece::Knight => self.knight_moves(sq, us, pin, &mut out),
                    Piece::Bishop => self.slider_moves(sq, us, piece, &RAYS[4..], pin, &mut out),
                    Piece::Rook => self.slider_moves(sq, us, piece, &RAYS[..4], pin, &mut out),
                    Piece::Queen => self.slider_moves(sq, us, piece, &RAYS, pin, &mut out),
                    Piece::King => self.king_moves(sq, us, &mut out),
                }
            }
        }
        out
    }

    fn pawn_moves(
        &mut self,
        from: Square,
        us: Color,
        pin: Option<(isize, isize)>,
        out: &mut Vec<Move>,
    ) {
        let dir = us.pawn_direction();

        if let Some(to) = from.offset(dir, 0) {
            if self.is_empty(to) && pin_allows(pin, from, to) {
                out.push(Move::new(from, to, us, Piece::Pawn, None));
                if from.0 == us.pawn_start_rank() {
                    if let Some(two) = from.offset(2 * dir, 0) {
                        if self.is_empty(two) {
                            out.push(Move::new(from, two, us, Piece::Pawn, None));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(to) = from.offset(dir, df) else {
                continue;
            };
            if !pin_allows(pin, from, to) {
                continue;
            }
            match self.piece_at(to) {
                Some((c, captured)) if c != us => {
                    out.push(Move::new(from, to, us, Piece::Pawn, Some(captured)));
                }
                None if self.en_passant_target == Some(to) => {
                    if self.en_passant_is_safe(from, to, us) {
                        out.push(Move::en_passant(from, to, us));
                    }
                }
                _ => {}
            }
        }
    }

    pub(crate) fn knight_moves(
        &self,
        from: Square,
        us: Color,
        pin: Option<(isize, isize)>,
        out: &mut Vec<Move>,
    ) {
        for &(dr, df) in &KNIGHT_OFFSETS {
            let Some(to) = from.offset(dr, df) else {
                continue;
            };
            if !pin_allows(pin, from, to) {
                continue;
            }
            match self.piece_at(to) {
                None => out.push(Move::new(from, to, us, Piece::Knight, None)),
                Some((c, captured)) if c != us => {
                    out.push(Move::new(from, to, us, Piece::Knight, Some(captured)));
                }
                _ => {}
            }
        }
    }

    pub(crate) fn slider_moves(
        &self,
        from: Square,
        us: Color,
        piece: Piece,
        rays: &[(isize, isize)],
        pin: Option<(isize, isize)>,
        out: &mut Vec<Move>,
    ) {
        for &(dr, df) in rays {
            let mut dist = 1;
            while let Some(to) = from.offset(dr * dist, df * dist) {
                if !pin_allows(pin, from, to) {
                    break;
                }
                match self.piece_at(to) {
                    None => out.push(Move::new(from, to, us, piece, None)),
                    Some((c, captured)) => {
                        if c != us {
                            out.push(Move::new(from, to, us, piece, Some(captured)));
                        }
                        break;
                    }
                }
                dist += 1;
            }
        }
    }

    fn king_moves(&mut self, from: Square, us: Color, out: &mut Vec<Move>) {
        let them = us.opponent();
        for &(dr, df) in &RAYS {
            let Some(to) = from.offset(dr, df) else {
                continue;
            };
            let captured = match self.piece_at(to) {
                Some((c, _)) if c == us => continue,
                Some((_, p)) => Some(p),
                None => None,
            };
            // Lift the king so it cannot shield the target square from a
            // slider on the same ray.
            let saved = self.grid[from.0][from.1].take();
            let attacked = self.is_square_attacked(to, them);
            self.grid[from.0][from.1] = saved;
            if !attacked {
                out.push(Move::new(from, to, us, Piece::King, captured));
            }
        }
    }

    /// Castling is generated only when not in check. The rook must still
    /// stand on its corner (rights can outlive it in hand-built
    /// positions), the king's path must be empty and unattacked, and
    /// queenside additionally needs the b-file square empty, though the
    /// rook may pass through an attacked square.
    fn castle_moves(&self, us: Color, out: &mut Vec<Move>) {
        let them = us.opponent();
        let home = us.back_rank();
        let king = self.king_square(us);

        if self.castling_rights.has(us, true)
            && self.piece_at(Square(home, 7)) == Some((us, Piece::Rook))
            && self.is_empty(Square(home, 5))
            && self.is_empty(Square(home, 6))
            && !self.is_square_attacked(Square(home, 5), them)
            && !self.is_square_attacked(Square(home, 6), them)
        {
            out.push(Move::castle(king, Square(home, 6), us));
        }
        if self.castling_rights.has(us, false)
            && self.piece_at(Square(home, 0)) == Some((us, Piece::Rook))
            && self.is_empty(Square(home, 1))
            && self.is_empty(Square(home, 2))
            && self.is_empty(Square(home, 3))
            && !self.is_square_attacked(Square(home, 2), them)
            && !self.is_square_attacked(Square(home, 3), them)
        {
            out.push(Move::castle(king, Square(home, 2), us));
        }
    }

    /// Play the en passant capture on the raw grid and probe for check,
    /// then put everything back. Catches the horizontal discovered check
    /// where the two pawns leave the king's rank together.
    fn en_passant_is_safe(&mut self, from: Square, to: Square, us: Color) -> bool {
        let victim = Square(from.0, to.1);
        let saved_victim = self.grid[victim.0][victim.1].take();
        self.grid[from.0][from.1] = None;
        self.grid[to.0][to.1] = Some((us, Piece::Pawn));

        let safe = !self.is_square_attacked(self.king_square(us), us.opponent());

        self.grid[to.0][to.1] = None;
        self.grid[from.0][from.1] = Some((us, Piece::Pawn));
        self.grid[victim.0][victim.1] = saved_victim;
        safe
    }

    /// Squares that resolve a single check by block or capture: the ray
    /// from the king up to and including the checker, or just the
    /// checker's square for a knight.
    fn check_interpositions(&self, us: Color, check: CheckInfo) -> Vec<Square> {
        if check.piece == Piece::Knight {
            return vec![check.square];
        }
        let king = self.king_square(us);
        let (dr, df) = check.dir;
        let mut squares = Vec::new();
        let mut dist = 1;
        while let Some(sq) = king.offset(dr * dist, df * dist) {
            squares.push(sq);
            if sq == check.square {
                break;
            }
            dist += 1;
        }
        squares
    }
}
