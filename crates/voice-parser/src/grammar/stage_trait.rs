//! Base trait and shared helpers for move grammar stages.

use chess_core::{LegalMove, PieceKind, SquareToken};

use crate::config::AmbiguityPolicy;
use crate::grammar::utterance::Utterance;

/// Context available to every stage for one utterance.
pub struct StageContext<'u, 'm> {
    pub utterance: &'u Utterance<'u>,
    pub legal_moves: &'m [LegalMove],
    pub policy: AmbiguityPolicy,
}

/// One rule of the move grammar. Stages are tried in order; the first one
/// that returns a move wins.
pub trait GrammarStage: Send + Sync {
    /// Name reported in resolution metadata and logs.
    fn name(&self) -> &'static str;

    /// Resolve the utterance to one of `ctx.legal_moves`, or pass.
    fn resolve<'m>(&self, ctx: &StageContext<'_, 'm>) -> Option<&'m LegalMove>;
}

/// Pick one move out of the candidates. A single candidate is taken as is;
/// among several an explicit source square decides, then the ambiguity policy.
pub fn pick<'m>(
    candidates: Vec<&'m LegalMove>,
    source: Option<SquareToken>,
    policy: AmbiguityPolicy,
) -> Option<&'m LegalMove> {
    match candidates.as_slice() {
        [] => None,
        [only] => Some(*only),
        [first, ..] => match (source, policy) {
            (Some(from), _) => candidates.iter().copied().find(|m| m.from == from),
            (None, AmbiguityPolicy::FirstCandidate) => Some(*first),
            (None, AmbiguityPolicy::Reject) => None,
        },
    }
}

/// Exactly one candidate, else nothing.
pub fn unique<'m>(mut candidates: impl Iterator<Item = &'m LegalMove>) -> Option<&'m LegalMove> {
    let first = candidates.next()?;
    candidates.next().is_none().then_some(first)
}

/// Among promotion moves, keep only those promoting to `kind`. Non-promotions pass through.
pub fn narrow_promotion(candidates: Vec<&LegalMove>, kind: PieceKind) -> Vec<&LegalMove> {
    candidates
        .into_iter()
        .filter(|m| m.promotion.map_or(true, |p| p == kind))
        .collect()
}
