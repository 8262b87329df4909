//! The grammar stages, one rule per file, in cascade order.

pub mod any_square;
pub mod castling;
pub mod explicit_source;
pub mod notation;
pub mod pawn_capture;
pub mod piece_captures;
pub mod piece_to_square;
pub mod promotion;
pub mod simple_square;
