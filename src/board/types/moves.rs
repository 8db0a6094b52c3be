//! Move representation.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;

/// A board transition: origin, destination, the piece moved, what it
/// captured (if anything), and the special-move flags.
///
/// Moves are only constructed by the legal move generator; applying a move
/// that did not come from the current legal set is undefined behavior by
/// contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub color: Color,
    pub piece: Piece,
    /// The captured piece type; always the opponent's color. For en
    /// passant this is the pawn removed from beside the destination.
    pub captured: Option<Piece>,
    pub is_en_passant: bool,
    pub is_castle: bool,
    pub is_promotion: bool,
}

impl Move {
    /// Create a quiet move or plain capture.
    #[must_use]
    pub(crate) fn new(
        from: Square,
        to: Square,
        color: Color,
        piece: Piece,
        captured: Option<Piece>,
    ) -> Self {
        let is_promotion = piece == Piece::Pawn && to.rank() == color.pawn_promotion_rank();
        Move {
            from,
            to,
            color,
            piece,
            captured,
            is_en_passant: false,
            is_castle: false,
            is_promotion,
        }
    }

    /// Create an en passant capture; the captured pawn stands beside the
    /// destination square.
    #[must_use]
    pub(crate) fn en_passant(from: Square, to: Square, color: Color) -> Self {
        Move {
            from,
            to,
            color,
            piece: Piece::Pawn,
            captured: Some(Piece::Pawn),
            is_en_passant: true,
            is_castle: false,
            is_promotion: false,
        }
    }

    /// Create a castling move (king two files toward the rook).
    #[must_use]
    pub(crate) fn castle(from: Square, to: Square, color: Color) -> Self {
        Move {
            from,
            to,
            color,
            piece: Piece::King,
            captured: None,
            is_en_passant: false,
            is_castle: true,
            is_promotion: false,
        }
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    /// Kingside castling moves the king two files toward the h-file.
    #[inline]
    #[must_use]
    pub fn is_castle_kingside(self) -> bool {
        self.is_castle && self.to.file() > self.from.file()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if self.is_promotion {
            write!(f, "q")?;
        }
        Ok(())
    }
}
