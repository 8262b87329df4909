use chess_core::LegalMove;

use crate::grammar::stage_trait::{GrammarStage, StageContext};
use crate::grammar::utterance::compact;

/// Notation spoken or typed as-is: "nf3", "exd5", "n f3".
pub struct NotationStage;

impl GrammarStage for NotationStage {
    fn name(&self) -> &'static str {
        "notation"
    }

    fn resolve<'m>(&self, ctx: &StageContext<'_, 'm>) -> Option<&'m LegalMove> {
        let text = ctx.utterance.compact();
        if text.is_empty() {
            return None;
        }
        // Longest match first: "nf3" also contains the pawn move "f3".
        // "oo" occurs inside ordinary words; castling has its own stage.
        let mut best: Option<(&'m LegalMove, usize)> = None;
        for m in ctx.legal_moves.iter().filter(|m| !m.is_castle()) {
            let notation = compact(m.bare_notation());
            if notation.is_empty() || !text.contains(&notation) {
                continue;
            }
            if best.map_or(true, |(_, len)| notation.len() > len) {
                best = Some((m, notation.len()));
            }
        }
        best.map(|(m, _)| m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::stages::test_support::*;

    #[test]
    fn test_compact_notation() {
        assert_eq!(run(&NotationStage, START, "nf3").as_deref(), Some("Nf3"));
        assert_eq!(run(&NotationStage, START, "n f3").as_deref(), Some("Nf3"));
        assert_eq!(run(&NotationStage, START, "f3").as_deref(), Some("f3"));
        assert_eq!(run(&NotationStage, CENTER_CAPTURE, "exd5").as_deref(), Some("exd5"));
    }

    #[test]
    fn test_castling_not_matched_in_words() {
        assert_eq!(run(&NotationStage, CASTLES, "good book"), None);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(run(&NotationStage, START, "banana sandwich"), None);
        assert_eq!(run(&NotationStage, START, ""), None);
    }
}
