use chess_core::{LegalMove, PieceKind};

use crate::grammar::stage_trait::{narrow_promotion, pick, GrammarStage, StageContext};

/// "e takes d5", "e takes on d5", also "e takes d" when only one such capture exists.
pub struct PawnCaptureStage;

impl GrammarStage for PawnCaptureStage {
    fn name(&self) -> &'static str {
        "pawn_capture"
    }

    fn resolve<'m>(&self, ctx: &StageContext<'_, 'm>) -> Option<&'m LegalMove> {
        let u = ctx.utterance;
        let from_file = u.source_file()?;
        let capture_idx = u.capture_index()?;

        let pawn_captures = ctx
            .legal_moves
            .iter()
            .filter(|m| m.piece == PieceKind::Pawn && m.is_capture && m.from.file() == from_file);

        // "takes d5", "takes on d5"
        if let Some((dest_idx, dest)) = u.destination().filter(|&(i, _)| i > capture_idx) {
            let candidates: Vec<&LegalMove> = pawn_captures.filter(|m| m.to == dest).collect();
            let promote_to = u.promotion_piece_after(dest_idx).unwrap_or(PieceKind::Queen);
            return pick(narrow_promotion(candidates, promote_to), None, ctx.policy);
        }

        // File-to-file shorthand only counts when it names a single capture
        let target_idx = capture_idx + 1;
        let to_file = match u.tokens().get(target_idx)?.as_bytes() {
            [f @ b'a'..=b'h'] => *f as char,
            _ => return None,
        };
        let candidates: Vec<&LegalMove> = pawn_captures.filter(|m| m.to.file() == to_file).collect();
        let promote_to = u.promotion_piece_after(target_idx).unwrap_or(PieceKind::Queen);
        let candidates = narrow_promotion(candidates, promote_to);
        if candidates.len() > 1 {
            return None;
        }
        pick(candidates, None, ctx.policy)
    }
}
