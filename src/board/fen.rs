//! FEN-style fingerprints and position parsing.
//!
//! The fingerprint is the cache key for a position: standard FEN piece
//! placement, side to move, castling rights, and en-passant target, with
//! the half-move and full-move counters fixed at `0 1` since the cache
//! does not distinguish positions by clock.

use std::str::FromStr;

use super::error::FenError;
use super::{Board, CastlingRights, Color, Piece, Square};

impl Board {
    /// FEN-like fingerprint of the position.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let mut out = String::new();
        for rank in (0..8).rev() {
            let mut empties = 0u8;
            for file in 0..8 {
                match self.piece_at(Square(rank, file)) {
                    None => empties += 1,
                    Some((color, piece)) => {
                        if empties > 0 {
                            out.push((b'0' + empties) as char);
                            empties = 0;
                        }
                        out.push(piece.to_fen_char(color));
                    }
                }
            }
            if empties > 0 {
                out.push((b'0' + empties) as char);
            }
            if rank > 0 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(self.side_to_move().to_char());

        out.push(' ');
        if self.castling_rights == CastlingRights::none() {
            out.push('-');
        } else {
            for (color, kingside, c) in [
                (Color::White, true, 'K'),
                (Color::White, false, 'Q'),
                (Color::Black, true, 'k'),
                (Color::Black, false, 'q'),
            ] {
                if self.castling_rights.has(color, kingside) {
                    out.push(c);
                }
            }
        }

        out.push(' ');
        match self.en_passant_target {
            Some(sq) => out.push_str(&sq.to_string()),
            None => out.push('-'),
        }

        out.push_str(" 0 1");
        out
    }

    /// Parse a position from a FEN string. The move counters, if present,
    /// are ignored; the history stacks are seeded so that undoing back to
    /// this position restores it exactly.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let mut board = Board::empty();

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRank { rank: ranks.len() });
        }
        let mut kings = [0usize; 2];
        for (i, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - i;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if file >= 8 {
                    return Err(FenError::BadFileCount {
                        rank,
                        files: file + 1,
                    });
                }
                let sq = Square(rank, file);
                board.set_piece(sq, color, piece);
                if piece == Piece::King {
                    kings[color.index()] += 1;
                    board.king_squares[color.index()] = sq;
                }
                file += 1;
            }
            if file != 8 {
                return Err(FenError::BadFileCount { rank, files: file });
            }
        }
        for color in Color::BOTH {
            let found = kings[color.index()];
            if found != 1 {
                return Err(FenError::BadKingCount {
                    color: match color {
                        Color::White => "White",
                        Color::Black => "Black",
                    },
                    found,
                });
            }
        }

        board.white_to_move = match parts[1] {
            "w" => true,
            "b" => false,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => board.castling_rights.set(Color::White, true),
                    'Q' => board.castling_rights.set(Color::White, false),
                    'k' => board.castling_rights.set(Color::Black, true),
                    'q' => board.castling_rights.set(Color::Black, false),
                    _ => return Err(FenError::InvalidCastling { char: c }),
                }
            }
        }

        if parts[3] != "-" {
            let sq = Square::from_str(parts[3]).map_err(|_| FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            })?;
            board.en_passant_target = Some(sq);
        }

        board.rights_log = vec![board.castling_rights];
        board.ep_log = vec![board.en_passant_target];

        let (in_check, _, _) = board.scan_pins_and_checks();
        board.in_check = in_check;

        Ok(board)
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn initial_fingerprint() {
        assert_eq!(Board::new().fingerprint(), START);
    }

    #[test]
    fn fen_round_trip() {
        let board = Board::from_fen(START).unwrap();
        assert_eq!(board.fingerprint(), START);

        let sparse = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1";
        let board = Board::from_fen(sparse).unwrap();
        assert_eq!(board.fingerprint(), sparse);
        assert_eq!(board.en_passant_target(), Some(Square(5, 3)));
    }

    #[test]
    fn fingerprint_after_double_push_includes_target() {
        let mut board = Board::new();
        let mv = board
            .legal_moves()
            .into_iter()
            .find(|m| m.from == Square(1, 4) && m.to == Square(3, 4))
            .unwrap();
        board.make_move(mv);
        assert_eq!(
            board.fingerprint(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );
    }

    #[test]
    fn rejects_missing_king() {
        let err = Board::from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1").unwrap_err();
        assert_eq!(
            err,
            FenError::BadKingCount {
                color: "Black",
                found: 0
            }
        );
    }

    #[test]
    fn rejects_wrong_rank_width() {
        // A short rank used to parse into a board that fingerprints
        // differently than its input.
        let err = Board::from_fen("4k3/7/8/8/8/8/8/4K3 w - - 0 1").unwrap_err();
        assert_eq!(err, FenError::BadFileCount { rank: 6, files: 7 });

        let err = Board::from_fen("4k4/8/8/8/8/8/8/4K3 w - - 0 1").unwrap_err();
        assert_eq!(err, FenError::BadFileCount { rank: 7, files: 9 });
    }

    #[test]
    fn rejects_garbage() {
        assert!(Board::from_fen("not a fen").is_err());
        assert!(Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w").is_err());
        assert!(Board::from_fen(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq - 0 1"
        )
        .is_err());
    }
}
