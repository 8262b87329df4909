use chess_core::{LegalMove, PieceKind};

use crate::grammar::stage_trait::{unique, GrammarStage, StageContext};

/// A lone square with no piece named: "e4".
pub struct SimpleSquareStage;

impl GrammarStage for SimpleSquareStage {
    fn name(&self) -> &'static str {
        "simple_square"
    }

    fn resolve<'m>(&self, ctx: &StageContext<'_, 'm>) -> Option<&'m LegalMove> {
        let u = ctx.utterance;
        let squares = u.squares();
        let &[(_, square)] = squares.as_slice() else {
            return None;
        };
        // "e takes d5" names its pawn by file and belongs to the pawn-capture stage
        if u.piece().is_some() || u.source_file().is_some() {
            return None;
        }

        let to_square = || ctx.legal_moves.iter().filter(move |m| m.to == square);
        unique(to_square().filter(|m| m.piece == PieceKind::Pawn)).or_else(|| unique(to_square()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::stages::test_support::*;

    #[test]
    fn test_unique_pawn_push() {
        assert_eq!(run(&SimpleSquareStage, START, "e4").as_deref(), Some("e4"));
        assert_eq!(run(&SimpleSquareStage, START, "play e3").as_deref(), Some("e3"));
    }

    #[test]
    fn test_unique_piece_move() {
        // the pawn push wins over the b1 knight
        assert_eq!(run(&SimpleSquareStage, START, "a3").as_deref(), Some("a3"));
        assert_eq!(run(&SimpleSquareStage, START, "c3").as_deref(), Some("c3"));
        assert_eq!(run(&SimpleSquareStage, TWO_KNIGHTS, "g6").as_deref(), Some("Ng6"));
    }

    #[test]
    fn test_passes() {
        // two knights reach f3
        assert_eq!(run(&SimpleSquareStage, TWO_KNIGHTS, "f3"), None);
        // piece named
        assert_eq!(run(&SimpleSquareStage, START, "knight f3"), None);
        // two squares
        assert_eq!(run(&SimpleSquareStage, START, "e2 e4"), None);
        // nothing reaches e5
        assert_eq!(run(&SimpleSquareStage, START, "e5"), None);
        assert_eq!(run(&SimpleSquareStage, CENTER_CAPTURE, "e takes d5"), None);
    }
}
