//! Move grammar: an ordered cascade of stages mapping normalized speech to
//! one legal move.
//!
//! Stages run in a fixed order and the first one that commits wins, so the
//! more specific phrasings ("castle king side", "knight from h4 to f3") are
//! tried before the loose ones (notation substrings, any unique square).

pub mod stage_trait;
pub mod stages;
pub mod utterance;

use std::fmt;

use chess_core::LegalMove;

use crate::config::AmbiguityPolicy;
use stage_trait::{GrammarStage, StageContext};
use stages::{
    any_square::AnySquareStage, castling::CastlingStage, explicit_source::ExplicitSourceStage,
    notation::NotationStage, pawn_capture::PawnCaptureStage, piece_captures::PieceCapturesStage,
    piece_to_square::PieceToSquareStage, promotion::PromotionStage,
    simple_square::SimpleSquareStage,
};
use utterance::Utterance;

/// A resolved move and the stage that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'m> {
    pub stage: &'static str,
    pub chess_move: &'m LegalMove,
}

/// All stages in cascade order.
pub fn create_all_stages() -> Vec<Box<dyn GrammarStage>> {
    vec![
        Box::new(CastlingStage),
        Box::new(SimpleSquareStage),
        Box::new(PieceToSquareStage),
        Box::new(PieceCapturesStage),
        Box::new(PawnCaptureStage),
        Box::new(PromotionStage),
        Box::new(ExplicitSourceStage),
        Box::new(NotationStage),
        Box::new(AnySquareStage),
    ]
}

pub struct MoveGrammar {
    stages: Vec<Box<dyn GrammarStage>>,
    policy: AmbiguityPolicy,
}

impl MoveGrammar {
    pub fn new(policy: AmbiguityPolicy) -> Self {
        Self {
            stages: create_all_stages(),
            policy,
        }
    }

    pub fn policy(&self) -> AmbiguityPolicy {
        self.policy
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Resolve normalized text against the legal moves of the current position.
    /// `None` is the normal outcome for speech that names no legal move.
    pub fn resolve<'m>(&self, normalized: &str, legal_moves: &'m [LegalMove]) -> Option<Resolution<'m>> {
        if legal_moves.is_empty() || normalized.trim().is_empty() {
            return None;
        }

        let utterance = Utterance::new(normalized);
        let ctx = StageContext {
            utterance: &utterance,
            legal_moves,
            policy: self.policy,
        };

        let resolution = self.stages.iter().find_map(|stage| {
            stage.resolve(&ctx).map(|chess_move| Resolution {
                stage: stage.name(),
                chess_move,
            })
        });

        match &resolution {
            Some(r) => tracing::debug!("'{}' resolved to {} by {}", normalized, r.chess_move.notation, r.stage),
            None => tracing::debug!("'{}' matched no legal move", normalized),
        }
        resolution
    }
}

impl Default for MoveGrammar {
    fn default() -> Self {
        Self::new(AmbiguityPolicy::default())
    }
}

impl fmt::Debug for MoveGrammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MoveGrammar")
            .field("stages", &self.stage_names())
            .field("policy", &self.policy)
            .finish()
    }
}
