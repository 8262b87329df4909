//! Chess data shared with the voice resolver.
//!
//! `legal_move` holds the plain records the resolver filters; `position` turns a
//! shakmaty position into those records so callers never hand-build them.

pub mod error;
pub mod legal_move;
pub mod position;

pub use error::ChessCoreError;
pub use legal_move::{LegalMove, PieceKind, SquareToken};
pub use position::{legal_moves, legal_moves_from_fen, position_from_fen, STANDARD_START_FEN};
