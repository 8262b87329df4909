#![allow(dead_code)]

use voice_parser::{legal_moves_from_fen, LegalMove, VoiceParser};

pub const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// White can castle on both sides.
pub const CASTLES: &str = "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1";

/// Knights on g1 and h4 both reach f3; the g1 knight is generated first.
pub const TWO_KNIGHTS: &str = "4k3/8/8/8/7N/8/8/4K1N1 w - - 0 1";

/// Pawns on c4 and e4 can both take on d5.
pub const TWO_PAWN_CAPTURES: &str = "4k3/8/8/3p4/2P1P3/8/8/4K3 w - - 0 1";

/// Pawn on a7, a8 empty.
pub const PROMOTION: &str = "4k3/P7/8/8/8/8/8/4K3 w - - 0 1";

pub fn parser() -> &'static VoiceParser {
    VoiceParser::builtin().expect("built-in tables are valid")
}

pub fn moves(fen: &str) -> Vec<LegalMove> {
    legal_moves_from_fen(fen).expect("test FEN is valid")
}

/// Parse `text` against the position and return the move's notation.
pub fn spoken_move(fen: &str, text: &str) -> Option<String> {
    let moves = moves(fen);
    let parsed = parser().parse(text, Some(&moves))?;
    parsed.chess_move_ref().map(|m| m.notation.clone())
}
