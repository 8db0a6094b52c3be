//! Move application and its exact inverse.
//!
//! `make_move` and `undo_move` are the only mutations of a position. They
//! do not verify legality and do not recompute check state; the legal move
//! generator is the single source of truth for which moves may be applied.

use super::{Board, CastlingRights, Move, Piece, Square};

impl Board {
    /// Apply a move drawn from the current legal set.
    ///
    /// Moves the piece, flips the turn, maintains the king-location cache,
    /// sets or clears the en-passant target, auto-promotes to a queen,
    /// relocates the castling rook, removes the en-passant victim, and
    /// re-derives castling rights under the monotonic-loss rule. Appends to
    /// all three history stacks.
    pub fn make_move(&mut self, mv: Move) {
        let color = mv.color;

        self.clear_square(mv.from);
        self.set_piece(mv.to, color, mv.piece);

        if mv.piece == Piece::King {
            self.king_squares[color.index()] = mv.to;
        }

        // Promotion is always to a queen; there is no under-promotion.
        if mv.is_promotion {
            self.set_piece(mv.to, color, Piece::Queen);
        }

        // The en-passant victim stands beside the destination, on the
        // origin rank.
        if mv.is_en_passant {
            self.clear_square(Square(mv.from.0, mv.to.1));
        }

        // En-passant target exists only immediately after a double push.
        if mv.piece == Piece::Pawn && mv.from.0.abs_diff(mv.to.0) == 2 {
            let skipped = (mv.from.0 + mv.to.0) / 2;
            self.en_passant_target = Some(Square(skipped, mv.to.1));
        } else {
            self.en_passant_target = None;
        }
        self.ep_log.push(self.en_passant_target);

        // The rook jumps over the square the king just crossed.
        if mv.is_castle {
            let rank = mv.to.0;
            if mv.to.1 > mv.from.1 {
                self.clear_square(Square(rank, 7));
                self.set_piece(Square(rank, 5), color, Piece::Rook);
            } else {
                self.clear_square(Square(rank, 0));
                self.set_piece(Square(rank, 3), color, Piece::Rook);
            }
        }

        self.update_castling_rights(&mv);
        self.rights_log.push(self.castling_rights);

        self.white_to_move = !self.white_to_move;
        self.move_log.push(mv);
        self.repetition = self.shuffle_repetition();
    }

    /// Undo the most recently applied move, restoring board, turn,
    /// castling rights, en-passant target, and king locations exactly.
    ///
    /// A no-op when the history is empty. Clears the checkmate/stalemate
    /// flags: an undone position cannot be a previously-detected terminal
    /// state.
    pub fn undo_move(&mut self) {
        let Some(mv) = self.move_log.pop() else {
            return;
        };
        let color = mv.color;

        // A promoted pawn reverts to a pawn: `mv.piece` is what left the
        // origin square.
        self.set_piece(mv.from, color, mv.piece);

        if mv.is_en_passant {
            self.clear_square(mv.to);
            self.set_piece(Square(mv.from.0, mv.to.1), color.opponent(), Piece::Pawn);
        } else {
            self.grid[mv.to.0][mv.to.1] = mv.captured.map(|p| (color.opponent(), p));
        }

        if mv.piece == Piece::King {
            self.king_squares[color.index()] = mv.from;
        }

        if mv.is_castle {
            let rank = mv.to.0;
            if mv.to.1 > mv.from.1 {
                self.clear_square(Square(rank, 5));
                self.set_piece(Square(rank, 7), color, Piece::Rook);
            } else {
                self.clear_square(Square(rank, 3));
                self.set_piece(Square(rank, 0), color, Piece::Rook);
            }
        }

        self.ep_log.pop();
        self.en_passant_target = self.ep_log.last().copied().flatten();

        self.rights_log.pop();
        self.castling_rights = self
            .rights_log
            .last()
            .copied()
            .unwrap_or_else(CastlingRights::all);

        self.white_to_move = !self.white_to_move;
        self.checkmate = false;
        self.stalemate = false;
        self.repetition = self.shuffle_repetition();
    }

    /// Castling rights are monotonically lost: a king move clears both
    /// rights for that color; a rook moving from, or being captured on,
    /// its original corner clears the matching right.
    fn update_castling_rights(&mut self, mv: &Move) {
        let color = mv.color;

        if mv.piece == Piece::King {
            self.castling_rights.remove_both(color);
        } else if mv.piece == Piece::Rook {
            let home = color.back_rank();
            if mv.from == Square(home, 0) {
                self.castling_rights.remove(color, false);
            } else if mv.from == Square(home, 7) {
                self.castling_rights.remove(color, true);
            }
        }

        if mv.captured == Some(Piece::Rook) && !mv.is_en_passant {
            let opp = color.opponent();
            let home = opp.back_rank();
            if mv.to == Square(home, 0) {
                self.castling_rights.remove(opp, false);
            } else if mv.to == Square(home, 7) {
                self.castling_rights.remove(opp, true);
            }
        }
    }
}
