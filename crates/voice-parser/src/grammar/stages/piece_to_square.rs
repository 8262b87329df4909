use chess_core::{LegalMove, PieceKind};

use crate::grammar::stage_trait::{narrow_promotion, pick, GrammarStage, StageContext};

/// "knight to f3", "knight from g1 to f3".
pub struct PieceToSquareStage;

impl GrammarStage for PieceToSquareStage {
    fn name(&self) -> &'static str {
        "piece_to_square"
    }

    fn resolve<'m>(&self, ctx: &StageContext<'_, 'm>) -> Option<&'m LegalMove> {
        let u = ctx.utterance;
        if u.has_capture() {
            return None;
        }
        let (piece_idx, piece) = u.piece()?;
        let (dest_idx, dest) = u.destination()?;
        if piece_idx > dest_idx {
            return None;
        }

        let candidates: Vec<&LegalMove> = ctx
            .legal_moves
            .iter()
            .filter(|m| m.to == dest && m.piece == piece)
            .collect();
        let promote_to = u.promotion_piece_after(dest_idx).unwrap_or(PieceKind::Queen);

        pick(narrow_promotion(candidates, promote_to), u.source(), ctx.policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AmbiguityPolicy;
    use crate::grammar::stages::test_support::*;
    use chess_core::legal_moves_from_fen;

    #[test]
    fn test_single_candidate() {
        assert_eq!(run(&PieceToSquareStage, START, "knight to f3").as_deref(), Some("Nf3"));
        assert_eq!(run(&PieceToSquareStage, START, "pawn to e4").as_deref(), Some("e4"));
    }

    #[test]
    fn test_source_clause_disambiguates() {
        assert_eq!(
            run(&PieceToSquareStage, TWO_KNIGHTS, "knight from h4 to f3").as_deref(),
            Some("Nhf3")
        );
        assert_eq!(
            run(&PieceToSquareStage, TWO_KNIGHTS, "knight g1 f3").as_deref(),
            Some("Ngf3")
        );
    }

    #[test]
    fn test_ambiguity_policy() {
        let first = legal_moves_from_fen(TWO_KNIGHTS)
            .unwrap()
            .into_iter()
            .find(|m| m.to.to_string() == "f3")
            .unwrap();
        assert_eq!(
            run(&PieceToSquareStage, TWO_KNIGHTS, "knight to f3"),
            Some(first.notation)
        );
        assert_eq!(
            run_with(&PieceToSquareStage, TWO_KNIGHTS, "knight to f3", AmbiguityPolicy::Reject),
            None
        );
    }

    #[test]
    fn test_pawn_promotion_defaults_to_queen() {
        assert_eq!(run(&PieceToSquareStage, PROMOTION, "pawn to a8").as_deref(), Some("a8=Q+"));
        assert_eq!(
            run(&PieceToSquareStage, PROMOTION, "pawn to a8 rook").as_deref(),
            Some("a8=R+")
        );
    }

    #[test]
    fn test_passes() {
        assert_eq!(run(&PieceToSquareStage, START, "bishop to c4"), None);
        assert_eq!(run(&PieceToSquareStage, CENTER_CAPTURE, "pawn takes d5"), None);
        assert_eq!(run(&PieceToSquareStage, START, "e4"), None);
    }
}
