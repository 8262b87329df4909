use chess_core::LegalMove;

use crate::grammar::stage_trait::{unique, GrammarStage, StageContext};

/// Last resort: the first mentioned square that exactly one legal move lands on.
pub struct AnySquareStage;

impl GrammarStage for AnySquareStage {
    fn name(&self) -> &'static str {
        "any_square"
    }

    fn resolve<'m>(&self, ctx: &StageContext<'_, 'm>) -> Option<&'m LegalMove> {
        ctx.utterance
            .squares()
            .into_iter()
            .find_map(|(_, sq)| unique(ctx.legal_moves.iter().filter(|m| m.to == sq)))
    }
}
