//! Algebraic notation output.
//!
//! Output only; moves are never parsed from notation. Disambiguation
//! consults the current legal set, and the check/mate suffix is found by
//! playing the move, regenerating, and undoing.

use super::{Board, Move, Piece};

impl Board {
    /// Render a move from the current legal set in standard algebraic
    /// notation, e.g. `Nf3`, `exd5`, `Rad1`, `e8=Q+`, `O-O-O#`.
    pub fn move_notation(&mut self, mv: &Move) -> String {
        if mv.is_castle {
            let base = if mv.is_castle_kingside() {
                "O-O"
            } else {
                "O-O-O"
            };
            return format!("{base}{}", self.check_suffix(mv));
        }

        let mut out = String::new();
        if mv.piece != Piece::Pawn {
            out.push(mv.piece.to_char().to_ascii_uppercase());
            out.push_str(&self.disambiguation(mv));
        }
        if mv.is_capture() {
            if mv.piece == Piece::Pawn {
                out.push((b'a' + mv.from.1 as u8) as char);
            }
            out.push('x');
        }
        out.push_str(&mv.to.to_string());
        if mv.is_promotion {
            out.push_str("=Q");
        }
        out.push_str(self.check_suffix(mv));
        out
    }

    /// File, rank, or both, when another piece of the same type can reach
    /// the same destination.
    fn disambiguation(&mut self, mv: &Move) -> String {
        let rivals: Vec<Move> = self
            .legal_moves()
            .into_iter()
            .filter(|m| m.piece == mv.piece && m.to == mv.to && m.from != mv.from)
            .collect();
        if rivals.is_empty() {
            return String::new();
        }

        let file = (b'a' + mv.from.1 as u8) as char;
        let rank = (b'1' + mv.from.0 as u8) as char;
        let shares_file = rivals.iter().any(|m| m.from.1 == mv.from.1);
        let shares_rank = rivals.iter().any(|m| m.from.0 == mv.from.0);

        let mut out = String::new();
        if !shares_file {
            out.push(file);
        } else if !shares_rank {
            out.push(rank);
        } else {
            out.push(file);
            out.push(rank);
        }
        out
    }

    fn check_suffix(&mut self, mv: &Move) -> &'static str {
        self.make_move(*mv);
        let _ = self.legal_moves();
        let suffix = if self.checkmate {
            "#"
        } else if self.in_check {
            "+"
        } else {
            ""
        };
        self.undo_move();
        // legal_moves above left the flags describing the child position
        self.in_check = self.scan_pins_and_checks().0;
        suffix
    }
}
