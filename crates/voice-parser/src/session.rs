//! Per-player voice state on top of the stateless parser.

use chess_core::LegalMove;
use tracing::info;

use crate::intent::Intent;
use crate::parsed::{ParsedCommand, Transcript};
use crate::parser::VoiceParser;

/// Owns the "voice enabled" flag. Voice-control intents always get through,
/// so a player who turned voice off can turn it back on; everything else is
/// dropped while disabled.
#[derive(Debug, Clone)]
pub struct VoiceSession {
    enabled: bool,
}

impl Default for VoiceSession {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl VoiceSession {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn handle(
        &mut self,
        parser: &VoiceParser,
        transcript: &str,
        legal_moves: Option<&[LegalMove]>,
    ) -> Option<ParsedCommand> {
        let parsed = parser.parse(transcript, legal_moves)?;
        self.apply(parsed)
    }

    pub fn handle_transcript(
        &mut self,
        parser: &VoiceParser,
        transcript: &Transcript,
        legal_moves: Option<&[LegalMove]>,
    ) -> Option<ParsedCommand> {
        let parsed = parser.parse_transcript(transcript, legal_moves)?;
        self.apply(parsed)
    }

    fn apply(&mut self, parsed: ParsedCommand) -> Option<ParsedCommand> {
        match parsed.intent {
            Intent::VoiceOn if !self.enabled => {
                self.enabled = true;
                info!("Voice input enabled");
            }
            Intent::VoiceOff if self.enabled => {
                self.enabled = false;
                info!("Voice input disabled");
            }
            _ => {}
        }

        if parsed.intent.is_voice_control() || self.enabled {
            Some(parsed)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{legal_moves_from_fen, STANDARD_START_FEN};

    #[test]
    fn test_disabled_session_only_hears_voice_controls() {
        let parser = VoiceParser::builtin().unwrap();
        let moves = legal_moves_from_fen(STANDARD_START_FEN).unwrap();
        let mut session = VoiceSession::default();

        let off = session.handle(parser, "voice off", Some(&moves)).unwrap();
        assert_eq!(off.intent, Intent::VoiceOff);
        assert!(!session.is_enabled());

        assert!(session.handle(parser, "e4", Some(&moves)).is_none());
        assert!(session.handle(parser, "resign", Some(&moves)).is_none());
        assert_eq!(
            session.handle(parser, "repeat", None).map(|p| p.intent),
            Some(Intent::VoiceRepeat)
        );

        let on = session.handle(parser, "voice on", None).unwrap();
        assert_eq!(on.intent, Intent::VoiceOn);
        assert!(session.is_enabled());
        assert_eq!(
            session.handle(parser, "e4", Some(&moves)).map(|p| p.intent),
            Some(Intent::ChessMove)
        );
    }

    #[test]
    fn test_repeated_toggle_is_harmless() {
        let parser = VoiceParser::builtin().unwrap();
        let mut session = VoiceSession::new(false);
        assert!(session.handle(parser, "voice off", None).is_some());
        assert!(!session.is_enabled());
        assert!(session
            .handle_transcript(parser, &Transcript::new("turn on voice"), None)
            .is_some());
        assert!(session.is_enabled());
    }
}
