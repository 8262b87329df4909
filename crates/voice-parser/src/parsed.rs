//! Parse results and transcript input types.

use chess_core::LegalMove;
use serde::{Deserialize, Serialize};

use crate::intent::{Intent, TimeControl};

/// A speech-to-text transcript with the recognizer's confidence, if it gave one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

impl Transcript {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            confidence: None,
        }
    }

    pub fn with_confidence(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            text: text.into(),
            confidence: Some(confidence),
        }
    }
}

/// Extra detail attached to a parse result.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandMetadata {
    /// The resolved legal move, for `CHESS_MOVE`.
    #[serde(rename = "move", default, skip_serializing_if = "Option::is_none")]
    pub chess_move: Option<LegalMove>,

    /// Grammar stage that resolved the move.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_control: Option<TimeControl>,
}

/// The outcome of parsing one transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedCommand {
    pub intent: Intent,
    pub confidence: f32,
    pub original_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<CommandMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stt_confidence: Option<f32>,
}

impl ParsedCommand {
    /// Rule-based matches are certain; confidence is always 1.0.
    pub fn command(intent: Intent, original_text: &str) -> Self {
        let metadata = intent.time_control().map(|tc| CommandMetadata {
            time_control: Some(tc),
            ..Default::default()
        });
        Self {
            intent,
            confidence: 1.0,
            original_text: original_text.to_string(),
            metadata,
            stt_confidence: None,
        }
    }

    pub fn chess_move(chess_move: &LegalMove, stage: &str, original_text: &str) -> Self {
        Self {
            intent: Intent::ChessMove,
            confidence: 1.0,
            original_text: original_text.to_string(),
            metadata: Some(CommandMetadata {
                chess_move: Some(chess_move.clone()),
                stage: Some(stage.to_string()),
                time_control: None,
            }),
            stt_confidence: None,
        }
    }

    /// The resolved move, when the intent is `CHESS_MOVE`.
    pub fn chess_move_ref(&self) -> Option<&LegalMove> {
        self.metadata.as_ref()?.chess_move.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::legal_moves_from_fen;
    use chess_core::STANDARD_START_FEN;

    #[test]
    fn test_command_json_shape() {
        let parsed = ParsedCommand::command(Intent::Resign, "I resign");
        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "intent": "RESIGN",
                "confidence": 1.0,
                "originalText": "I resign",
            })
        );
    }

    #[test]
    fn test_time_control_metadata() {
        let parsed = ParsedCommand::command(Intent::SelectBlitz5_3, "five plus three");
        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(json["intent"], "SELECT_BLITZ_5_3");
        assert_eq!(json["metadata"]["timeControl"]["baseMinutes"], 5);
        assert_eq!(json["metadata"]["timeControl"]["incrementSeconds"], 3);
    }

    #[test]
    fn test_move_metadata() {
        let moves = legal_moves_from_fen(STANDARD_START_FEN).unwrap();
        let nf3 = moves.iter().find(|m| m.notation == "Nf3").unwrap();
        let parsed = ParsedCommand::chess_move(nf3, "piece_to_square", "knight to f3");
        assert_eq!(parsed.chess_move_ref(), Some(nf3));

        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(json["intent"], "CHESS_MOVE");
        assert_eq!(json["metadata"]["move"]["from"], "g1");
        assert_eq!(json["metadata"]["move"]["to"], "f3");
        assert_eq!(json["metadata"]["stage"], "piece_to_square");

        let back: ParsedCommand = serde_json::from_value(json).unwrap();
        assert_eq!(back, parsed);
    }

    #[test]
    fn test_transcript_confidence_optional() {
        let t: Transcript = serde_json::from_str(r#"{"text":"e4"}"#).unwrap();
        assert_eq!(t, Transcript::new("e4"));
        let t: Transcript = serde_json::from_str(r#"{"text":"e4","confidence":0.5}"#).unwrap();
        assert_eq!(t.confidence, Some(0.5));
    }
}
