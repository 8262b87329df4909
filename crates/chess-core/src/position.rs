//! Bridge from a shakmaty position to the `LegalMove` list the voice resolver consumes.

use shakmaty::fen::Fen;
use shakmaty::san::San;
use shakmaty::{CastlingMode, Chess, File, Move, Position, Square};

use crate::error::ChessCoreError;
use crate::legal_move::{LegalMove, PieceKind, SquareToken};

pub const STANDARD_START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Parse a FEN string into a standard-chess position.
pub fn position_from_fen(fen: &str) -> Result<Chess, ChessCoreError> {
    let setup: Fen = fen
        .trim()
        .parse()
        .map_err(|e| ChessCoreError::InvalidFen(format!("{fen}: {e}")))?;
    setup
        .into_position(CastlingMode::Standard)
        .map_err(|e| ChessCoreError::IllegalPosition(e.to_string()))
}

/// Legal moves for a FEN, in shakmaty's generation order.
pub fn legal_moves_from_fen(fen: &str) -> Result<Vec<LegalMove>, ChessCoreError> {
    let pos = position_from_fen(fen)?;
    Ok(legal_moves(&pos))
}

/// Convert every legal move of `pos` into a `LegalMove` record.
pub fn legal_moves(pos: &Chess) -> Vec<LegalMove> {
    pos.legal_moves()
        .iter()
        .filter_map(|mv| to_legal_move(pos, mv))
        .collect()
}

fn to_legal_move(pos: &Chess, mv: &Move) -> Option<LegalMove> {
    let from = mv.from()?;
    let to = destination(mv);

    // SAN plus check/mate suffix
    let mut notation = San::from_move(pos, mv.clone()).to_string();
    let mut after = pos.clone();
    after.play_unchecked(mv.clone());
    if after.is_checkmate() {
        notation.push('#');
    } else if after.is_check() {
        notation.push('+');
    }

    Some(LegalMove {
        from: SquareToken::from(from),
        to: SquareToken::from(to),
        piece: PieceKind::from(mv.role()),
        is_capture: mv.is_capture(),
        promotion: mv.promotion().map(PieceKind::from),
        notation,
    })
}

/// Where the moving piece lands. shakmaty encodes castling as king-takes-rook,
/// so the king's real destination is the g- or c-file.
fn destination(mv: &Move) -> Square {
    match mv {
        Move::Castle { king, rook } => {
            let file = if rook.file() > king.file() { File::G } else { File::C };
            Square::from_coords(file, king.rank())
        }
        _ => mv.to(),
    }
}
