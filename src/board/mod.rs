//! The chess core: board state, make/undo, legality, evaluation, search.
//!
//! [`Board`] is the single mutable position; [`Board::legal_moves`] is the
//! source of truth for what may be played on it, and the search in
//! [`search`] explores futures by applying and exactly undoing moves on it.

pub mod error;
pub mod eval;
pub mod search;
pub mod types;

mod attacks;
mod fen;
mod make_unmake;
mod movegen;
mod pst;
mod san;
mod state;

pub use state::Board;
pub use types::{CastlingRights, Color, Move, Piece, Square};

#[cfg(test)]
mod tests;
