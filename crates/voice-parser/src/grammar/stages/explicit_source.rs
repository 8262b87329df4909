use chess_core::{LegalMove, PieceKind};

use crate::grammar::stage_trait::{narrow_promotion, pick, GrammarStage, StageContext};

/// "g1 f3", "from e2 to e4", "knight from g1 to f3".
pub struct ExplicitSourceStage;

impl GrammarStage for ExplicitSourceStage {
    fn name(&self) -> &'static str {
        "explicit_source"
    }

    fn resolve<'m>(&self, ctx: &StageContext<'_, 'm>) -> Option<&'m LegalMove> {
        let u = ctx.utterance;
        if u.squares().len() < 2 {
            return None;
        }
        let from = u.source()?;
        let (dest_idx, to) = u.destination()?;
        if from == to {
            return None;
        }
        // A piece word after the destination names the promotion, not the mover
        let piece = u.piece().filter(|&(i, _)| i < dest_idx).map(|(_, p)| p);

        let candidates: Vec<&LegalMove> = ctx
            .legal_moves
            .iter()
            .filter(|m| m.from == from && m.to == to)
            .filter(|m| piece.map_or(true, |p| m.piece == p))
            .collect();
        let promote_to = u.promotion_piece_after(dest_idx).unwrap_or(PieceKind::Queen);

        pick(narrow_promotion(candidates, promote_to), None, ctx.policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::stages::test_support::*;

    #[test]
    fn test_from_to() {
        assert_eq!(run(&ExplicitSourceStage, START, "g1 f3").as_deref(), Some("Nf3"));
        assert_eq!(run(&ExplicitSourceStage, START, "from e2 to e4").as_deref(), Some("e4"));
        assert_eq!(run(&ExplicitSourceStage, START, "knight from g1 to f3").as_deref(), Some("Nf3"));
        assert_eq!(run(&ExplicitSourceStage, TWO_KNIGHTS, "h4 f3").as_deref(), Some("Nhf3"));
    }

    #[test]
    fn test_piece_must_match() {
        assert_eq!(run(&ExplicitSourceStage, START, "bishop from g1 to f3"), None);
    }

    #[test]
    fn test_promotion_push() {
        assert_eq!(run(&ExplicitSourceStage, PROMOTION, "a7 a8").as_deref(), Some("a8=Q+"));
        assert_eq!(run(&ExplicitSourceStage, PROMOTION, "a7 a8 knight").as_deref(), Some("a8=N"));
        assert_eq!(
            run(&ExplicitSourceStage, PROMOTION, "pawn from a7 to a8 rook").as_deref(),
            Some("a8=R+")
        );
    }

    #[test]
    fn test_passes() {
        assert_eq!(run(&ExplicitSourceStage, START, "e4"), None);
        assert_eq!(run(&ExplicitSourceStage, START, "e2 e5"), None);
        assert_eq!(run(&ExplicitSourceStage, START, "e4 e4"), None);
    }
}
