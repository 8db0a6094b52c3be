//! Static evaluation.
//!
//! Scores are in centipawns from White's point of view. The score is a
//! signed sum of material, piece-square bonuses, and per-piece heuristic
//! terms; terminal positions short-circuit to the checkmate/stalemate
//! constants before any piece is examined.

use super::attacks::RAYS;
use super::{pst, Board, Color, Piece, Square};

/// Score of a checkmated position, from the winner's point of view.
pub const CHECKMATE_SCORE: i32 = 100_000;
/// Score of a stalemated position.
pub const STALEMATE_SCORE: i32 = 0;

/// Total non-king material at or below this switches the king to its
/// endgame table.
const ENDGAME_MATERIAL: i32 = 1400;

const CENTER: [(isize, isize); 4] = [(3, 3), (3, 4), (4, 3), (4, 4)];

impl Board {
    /// Evaluate the position. Positive favors White.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        if self.checkmate {
            // The side to move is the one who got mated.
            return if self.white_to_move {
                -CHECKMATE_SCORE
            } else {
                CHECKMATE_SCORE
            };
        }
        if self.stalemate {
            return STALEMATE_SCORE;
        }

        let endgame = self.non_king_material() <= ENDGAME_MATERIAL;

        let mut score = 0;
        for rank in 0..8 {
            for file in 0..8 {
                let sq = Square(rank, file);
                let Some((color, piece)) = self.piece_at(sq) else {
                    continue;
                };
                let mut piece_score = piece.value() + pst::positional(piece, color, sq, endgame);
                piece_score += match piece {
                    Piece::Knight => self.knight_term(sq, color),
                    Piece::Bishop => self.bishop_term(sq, color),
                    Piece::Rook => self.rook_term(sq, color),
                    Piece::Queen => self.queen_term(sq, color),
                    Piece::Pawn | Piece::King => 0,
                };
                score += color.sign() * piece_score;
            }
        }
        score
    }

    fn non_king_material(&self) -> i32 {
        let mut total = 0;
        for rank in 0..8 {
            for file in 0..8 {
                if let Some((_, piece)) = self.piece_at(Square(rank, file)) {
                    if piece != Piece::King {
                        total += piece.value();
                    }
                }
            }
        }
        total
    }

    /// Centralization, mobility, threatened material, and an outpost bonus.
    fn knight_term(&self, sq: Square, color: Color) -> i32 {
        let mut score = 0;

        let to_center = CENTER
            .iter()
            .map(|&(r, f)| (sq.0 as isize - r).abs() + (sq.1 as isize - f).abs())
            .min()
            .unwrap_or(0) as i32;
        score += (4 - to_center) * 3;

        let mut moves = Vec::new();
        self.knight_moves(sq, color, None, &mut moves);
        score += moves.len() as i32 * 5;
        for m in &moves {
            if let Some(captured) = m.captured {
                score += captured.value() / 10;
            }
        }

        if self.is_outpost(sq, color) {
            score += 15;
        }
        score
    }

    /// A knight sits on an outpost when a friendly pawn guards it and no
    /// enemy piece attacks it.
    fn is_outpost(&self, sq: Square, color: Color) -> bool {
        let behind = -color.pawn_direction();
        let guarded = [-1, 1].into_iter().any(|df| {
            sq.offset(behind, df)
                .map_or(false, |s| self.piece_at(s) == Some((color, Piece::Pawn)))
        });
        guarded && !self.is_square_attacked(sq, color.opponent())
    }

    fn bishop_term(&self, sq: Square, color: Color) -> i32 {
        self.line_piece_term(sq, color, Piece::Bishop, &RAYS[4..])
    }

    fn queen_term(&self, sq: Square, color: Color) -> i32 {
        self.line_piece_term(sq, color, Piece::Queen, &RAYS)
    }

    /// Shared bishop/queen scoring: mobility, ray control, threatened
    /// material, and centralization.
    fn line_piece_term(
        &self,
        sq: Square,
        color: Color,
        piece: Piece,
        rays: &[(isize, isize)],
    ) -> i32 {
        let mut moves = Vec::new();
        self.slider_moves(sq, color, piece, rays, None, &mut moves);

        let mut score = moves.len() as i32 * 5;
        score += self.ray_control(sq, color, rays);
        for m in &moves {
            if let Some(captured) = m.captured {
                score += captured.value() * 2;
            }
        }
        score + center_bonus(sq)
    }

    /// Empty squares seen along each ray score small; the first enemy
    /// piece on a ray scores large and ends it.
    fn ray_control(&self, sq: Square, color: Color, rays: &[(isize, isize)]) -> i32 {
        let mut score = 0;
        for &(dr, df) in rays {
            let mut dist = 1;
            while let Some(probe) = sq.offset(dr * dist, df * dist) {
                match self.piece_at(probe) {
                    None => score += 2,
                    Some((c, _)) if c == color => break,
                    Some(_) => {
                        score += 30;
                        break;
                    }
                }
                dist += 1;
            }
        }
        score
    }

    /// Mobility, file state, seventh-rank presence, connected-rook
    /// synergy, and threatened material.
    fn rook_term(&self, sq: Square, color: Color) -> i32 {
        let mut moves = Vec::new();
        self.slider_moves(sq, color, Piece::Rook, &RAYS[..4], None, &mut moves);
        let mut score = moves.len() as i32 * 5;

        let mut any_piece = false;
        let mut any_friendly = false;
        for rank in 0..8 {
            if rank == sq.0 {
                continue;
            }
            if let Some((c, _)) = self.piece_at(Square(rank, sq.1)) {
                any_piece = true;
                if c == color {
                    any_friendly = true;
                }
            }
        }
        if !any_piece {
            score += 30;
        } else if !any_friendly {
            score += 15;
        }

        if sq.0 == color.seventh_rank() {
            score += 20;
        }

        for rank in 0..8 {
            for file in 0..8 {
                let other = Square(rank, file);
                if other == sq || (rank != sq.0 && file != sq.1) {
                    continue;
                }
                if self.piece_at(other) == Some((color, Piece::Rook)) {
                    score += 15;
                }
            }
        }

        for m in &moves {
            if let Some(captured) = m.captured {
                score += captured.value() * 2;
            }
        }
        score
    }
}

/// Peaks at 10 in the middle of the board, falling off by Manhattan
/// distance from the central four squares.
fn center_bonus(sq: Square) -> i32 {
    let r = sq.0 as i32;
    let f = sq.1 as i32;
    (20 - (2 * r - 7).abs() - (2 * f - 7).abs()) / 2
}
