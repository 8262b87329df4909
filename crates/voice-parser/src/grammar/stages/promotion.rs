use chess_core::{LegalMove, PieceKind};

use crate::grammar::stage_trait::{pick, GrammarStage, StageContext};

/// "e8 queen", "e8 promote to knight", or a bare "e8" onto the last rank (queen).
pub struct PromotionStage;

impl GrammarStage for PromotionStage {
    fn name(&self) -> &'static str {
        "promotion"
    }

    fn resolve<'m>(&self, ctx: &StageContext<'_, 'm>) -> Option<&'m LegalMove> {
        let u = ctx.utterance;
        let &(dest_idx, dest) = u.squares().last()?;
        let kind = u
            .promotion_piece_after(dest_idx)
            .or_else(|| {
                u.tokens()
                    .iter()
                    .filter_map(|t| PieceKind::from_word(t))
                    .find(|p| p.is_promotion_target())
            })
            .unwrap_or(PieceKind::Queen);

        let from_file = u.source_file();
        let candidates: Vec<&LegalMove> = ctx
            .legal_moves
            .iter()
            .filter(|m| m.to == dest && m.promotion == Some(kind))
            .filter(|m| from_file.map_or(true, |f| m.from.file() == f))
            .collect();

        pick(candidates, u.source(), ctx.policy)
    }
}
