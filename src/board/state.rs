use super::{CastlingRights, Color, Move, Piece, Square};

/// The mutable game position.
///
/// One `Board` is created per game and mutated in place by
/// [`make_move`](Board::make_move) and [`undo_move`](Board::undo_move),
/// both during real play and during search. A search exploring hypothetical
/// futures must own the board exclusively for the duration of the top-level
/// call; concurrent searches operate on independent clones.
#[derive(Clone, Debug)]
pub struct Board {
    /// 8x8 mailbox indexed `[rank][file]`, rank 0 = White's home rank.
    pub(crate) grid: [[Option<(Color, Piece)>; 8]; 8],
    pub(crate) white_to_move: bool,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    /// Cached king locations, indexed by `Color::index()`.
    pub(crate) king_squares: [Square; 2],
    /// Played moves, newest last.
    pub(crate) move_log: Vec<Move>,
    /// Castling rights after each played move, seeded with the initial rights.
    pub(crate) rights_log: Vec<CastlingRights>,
    /// En-passant target after each played move, seeded with the initial target.
    pub(crate) ep_log: Vec<Option<Square>>,
    pub(crate) in_check: bool,
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
    /// Informational two-ply shuffle-repetition flag; see
    /// [`shuffle_repetition`](Board::shuffle_repetition).
    pub(crate) repetition: bool,
}

impl Board {
    /// Set up the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            board.set_piece(Square(0, file), Color::White, *piece);
            board.set_piece(Square(1, file), Color::White, Piece::Pawn);
            board.set_piece(Square(6, file), Color::Black, Piece::Pawn);
            board.set_piece(Square(7, file), Color::Black, *piece);
        }

        board.castling_rights = CastlingRights::all();
        board.rights_log = vec![board.castling_rights];
        board.king_squares = [Square(0, 4), Square(7, 4)];
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
            white_to_move: true,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            king_squares: [Square(0, 4), Square(7, 4)],
            move_log: Vec::new(),
            rights_log: vec![CastlingRights::none()],
            ep_log: vec![None],
            in_check: false,
            checkmate: false,
            stalemate: false,
            repetition: false,
        }
    }

    /// The piece on a square, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.grid[sq.0][sq.1]
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.grid[sq.0][sq.1] = Some((color, piece));
    }

    #[inline]
    pub(crate) fn clear_square(&mut self, sq: Square) {
        self.grid[sq.0][sq.1] = None;
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.grid[sq.0][sq.1].is_none()
    }

    /// The side to move.
    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    /// The current castling rights.
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// The en-passant target square, set only immediately after a
    /// two-square pawn advance.
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Location of the given side's king.
    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    /// Whether the side to move was in check at the last generation call.
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    /// Whether the last generation call found the side to move checkmated.
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    /// Whether the last generation call found the side to move stalemated.
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    /// The most recently played move.
    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.move_log.last()
    }

    /// Number of half-moves played on this board.
    #[must_use]
    pub fn ply(&self) -> usize {
        self.move_log.len()
    }

    /// Narrow shuffle detector: true when the last two played moves exactly
    /// repeat the two moves immediately preceding them.
    ///
    /// This is not a true position-occurrence counter; it only catches both
    /// sides moving the same pieces back and forth.
    #[must_use]
    pub fn shuffle_repetition(&self) -> bool {
        let n = self.move_log.len();
        if n < 6 {
            return false;
        }
        self.move_log[n - 1] == self.move_log[n - 5] && self.move_log[n - 2] == self.move_log[n - 6]
    }

    /// The informational repetition flag, refreshed after every
    /// make/undo.
    #[must_use]
    pub fn is_repetition(&self) -> bool {
        self.repetition
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
