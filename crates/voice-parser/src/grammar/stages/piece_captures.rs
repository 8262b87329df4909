use chess_core::{LegalMove, PieceKind};

use crate::grammar::stage_trait::{narrow_promotion, pick, GrammarStage, StageContext};

/// "knight takes e5", "e pawn takes d5".
pub struct PieceCapturesStage;

impl GrammarStage for PieceCapturesStage {
    fn name(&self) -> &'static str {
        "piece_captures"
    }

    fn resolve<'m>(&self, ctx: &StageContext<'_, 'm>) -> Option<&'m LegalMove> {
        let u = ctx.utterance;
        u.capture_index()?;
        let (piece_idx, piece) = u.piece()?;
        let (dest_idx, dest) = u.destination()?;
        if piece_idx > dest_idx {
            return None;
        }

        let from_file = u.source_file();
        let candidates: Vec<&LegalMove> = ctx
            .legal_moves
            .iter()
            .filter(|m| m.to == dest && m.piece == piece && m.is_capture)
            .filter(|m| from_file.map_or(true, |f| m.from.file() == f))
            .collect();
        let promote_to = u.promotion_piece_after(dest_idx).unwrap_or(PieceKind::Queen);

        pick(narrow_promotion(candidates, promote_to), u.source(), ctx.policy)
    }
}
