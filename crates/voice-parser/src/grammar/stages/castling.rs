use chess_core::{LegalMove, PieceKind};

use crate::grammar::stage_trait::{unique, GrammarStage, StageContext};
use crate::grammar::utterance::Utterance;

const CASTLE_WORDS: &[&str] = &["castle", "castles", "castling"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    King,
    Queen,
}

/// "castle king side", "castle long", or a bare "castle" when only one side is legal.
pub struct CastlingStage;

impl GrammarStage for CastlingStage {
    fn name(&self) -> &'static str {
        "castling"
    }

    fn resolve<'m>(&self, ctx: &StageContext<'_, 'm>) -> Option<&'m LegalMove> {
        let u = ctx.utterance;
        if !CASTLE_WORDS.iter().any(|w| u.contains(w)) {
            return None;
        }

        match requested_side(u) {
            Some(side) => ctx
                .legal_moves
                .iter()
                .find(|m| castle_side(m) == Some(side)),
            None => unique(ctx.legal_moves.iter().filter(|m| castle_side(m).is_some())),
        }
    }
}

fn requested_side(u: &Utterance) -> Option<Side> {
    // "king side", "kings side", "queen side"
    let qualifier = u
        .tokens()
        .windows(2)
        .find_map(|w| if w[1] == "side" { PieceKind::from_word(w[0]) } else { None });
    match qualifier {
        Some(PieceKind::King) => return Some(Side::King),
        Some(PieceKind::Queen) => return Some(Side::Queen),
        _ => {}
    }

    if u.contains("kingside") || u.contains("short") {
        Some(Side::King)
    } else if u.contains("queenside") || u.contains("long") {
        Some(Side::Queen)
    } else {
        None
    }
}

fn castle_side(m: &LegalMove) -> Option<Side> {
    match m.bare_notation() {
        "O-O" | "0-0" => return Some(Side::King),
        "O-O-O" | "0-0-0" => return Some(Side::Queen),
        _ => {}
    }
    // King moving two files along its rank
    if m.piece != PieceKind::King || m.from.rank() != m.to.rank() {
        return None;
    }
    match m.to.file() as i32 - m.from.file() as i32 {
        2 => Some(Side::King),
        -2 => Some(Side::Queen),
        _ => None,
    }
}
