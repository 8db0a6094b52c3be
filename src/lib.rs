//! A chess engine library: full-legality move generation on a mailbox
//! board, exactly-reversible make/undo, a heuristic evaluator, negamax
//! search with alpha-beta pruning, and a durable best-move cache.
//!
//! ```
//! use woodpusher::{find_best_move, Board, DEFAULT_DEPTH};
//!
//! let mut board = Board::new();
//! let outcome = find_best_move(&mut board, DEFAULT_DEPTH, None);
//! assert!(outcome.best_move.is_some());
//! ```

pub mod board;
pub mod cache;

pub use board::eval::{CHECKMATE_SCORE, STALEMATE_SCORE};
pub use board::search::{
    find_best_move, find_best_move_threaded, random_move, SearchOutcome, DEFAULT_DEPTH,
};
pub use board::{Board, CastlingRights, Color, Move, Piece, Square};
pub use cache::MoveStore;
