//! Core chess types.
//!
//! - `Piece` and `Color` - piece types and colors
//! - `Square` - (rank, file) board square
//! - `Move` - move representation with capture and special-move flags
//! - `CastlingRights` - the four castling rights

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::Move;
pub use piece::{Color, Piece};
pub use square::Square;
