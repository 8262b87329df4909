//! Command matcher: ordered (intent, trigger phrases) table over normalized text.

use regex::Regex;

use crate::error::ParserError;
use crate::intent::{Intent, IntentCategory};
use crate::normalizer::Normalizer;

/// One row of the command table. Triggers are written in normalized form.
#[derive(Debug, Clone, Copy)]
pub struct CommandPattern {
    pub intent: Intent,
    pub triggers: &'static [&'static str],
}

/// Built-in command table. Declaration order is match priority: specific
/// phrases sit above the shorter phrases they contain.
pub const COMMAND_PATTERNS: &[CommandPattern] = &[
    CommandPattern {
        intent: Intent::VoiceOn,
        triggers: &[
            "voice on",
            "turn on voice",
            "turn voice on",
            "enable voice",
            "start listening",
            "unmute",
        ],
    },
    CommandPattern {
        intent: Intent::VoiceOff,
        triggers: &[
            "voice off",
            "turn off voice",
            "turn voice off",
            "disable voice",
            "stop listening",
            "mute",
        ],
    },
    CommandPattern {
        intent: Intent::VoiceRepeat,
        triggers: &[
            "repeat",
            "say again",
            "say that again",
            "come again",
            "what did you say",
        ],
    },
    CommandPattern {
        intent: Intent::VoiceStop,
        triggers: &[
            "stop talking",
            "stop speaking",
            "be quiet",
            "quiet",
            "silence",
            "shut up",
            "stop",
        ],
    },
    CommandPattern {
        intent: Intent::Resign,
        triggers: &["resign", "i give up", "give up", "forfeit"],
    },
    CommandPattern {
        intent: Intent::AcceptDraw,
        triggers: &["accept draw", "accept the draw", "accept a draw", "i accept"],
    },
    CommandPattern {
        intent: Intent::DeclineDraw,
        triggers: &["decline draw", "decline the draw", "reject draw", "no draw"],
    },
    CommandPattern {
        intent: Intent::OfferDraw,
        triggers: &[
            "offer draw",
            "offer a draw",
            "offer the draw",
            "propose draw",
            "propose a draw",
            "draw offer",
            "lets draw",
        ],
    },
    CommandPattern {
        intent: Intent::UndoMove,
        triggers: &["undo", "undo move", "takeback"],
    },
    CommandPattern {
        intent: Intent::FlipBoard,
        triggers: &["flip board", "flip the board", "rotate board", "rotate the board"],
    },
    CommandPattern {
        intent: Intent::NewGame,
        triggers: &["new game", "start new game", "start a new game", "play again", "rematch"],
    },
    // Increment variants come before the plain "<n> minute" forms.
    CommandPattern {
        intent: Intent::SelectBullet2_1,
        triggers: &["2 plus 1", "2 and 1", "2 by 1"],
    },
    CommandPattern {
        intent: Intent::SelectBullet1_0,
        triggers: &["1 plus 0", "1 minute", "1 minutes"],
    },
    CommandPattern {
        intent: Intent::SelectBlitz3_2,
        triggers: &["3 plus 2", "3 and 2", "3 by 2"],
    },
    CommandPattern {
        intent: Intent::SelectBlitz3_0,
        triggers: &["3 plus 0", "3 minute", "3 minutes"],
    },
    CommandPattern {
        intent: Intent::SelectBlitz5_3,
        triggers: &["5 plus 3", "5 and 3", "5 by 3"],
    },
    CommandPattern {
        intent: Intent::SelectBlitz5_0,
        triggers: &["5 plus 0", "5 minute", "5 minutes"],
    },
    CommandPattern {
        intent: Intent::SelectRapid10_5,
        triggers: &["10 plus 5", "10 and 5", "10 by 5"],
    },
    CommandPattern {
        intent: Intent::SelectRapid10_0,
        triggers: &["10 plus 0", "10 minute", "10 minutes"],
    },
    CommandPattern {
        intent: Intent::SelectRapid15_10,
        triggers: &["15 plus 10", "15 and 10", "15 by 10"],
    },
    CommandPattern {
        intent: Intent::SelectClassical30_0,
        triggers: &["30 plus 0", "30 minute", "30 minutes"],
    },
    CommandPattern {
        intent: Intent::SelectBullet,
        triggers: &["bullet"],
    },
    CommandPattern {
        intent: Intent::SelectBlitz,
        triggers: &["blitz"],
    },
    CommandPattern {
        intent: Intent::SelectRapid,
        triggers: &["rapid"],
    },
    CommandPattern {
        intent: Intent::SelectClassical,
        triggers: &["classical"],
    },
    CommandPattern {
        intent: Intent::GoHome,
        triggers: &["go home", "go to home", "home page", "home screen", "main menu"],
    },
    CommandPattern {
        intent: Intent::GoBack,
        triggers: &["go back", "previous page", "previous screen"],
    },
    CommandPattern {
        intent: Intent::OpenSettings,
        triggers: &["open settings", "settings", "preferences"],
    },
    CommandPattern {
        intent: Intent::OpenProfile,
        triggers: &["open profile", "my profile", "profile"],
    },
    CommandPattern {
        intent: Intent::OpenHistory,
        triggers: &["game history", "my games", "past games", "history"],
    },
    CommandPattern {
        intent: Intent::OpenAnalysis,
        triggers: &["game analysis", "review game", "analysis", "analyze", "analyse"],
    },
    CommandPattern {
        intent: Intent::PlayComputer,
        triggers: &[
            "play computer",
            "play the computer",
            "play against computer",
            "play against the computer",
            "play vs computer",
            "play versus computer",
            "play ai",
            "play bot",
        ],
    },
    CommandPattern {
        intent: Intent::PlayOnline,
        triggers: &["play online", "find opponent", "find an opponent", "find a match", "multiplayer"],
    },
    CommandPattern {
        intent: Intent::Help,
        triggers: &["help", "what can i say", "list commands"],
    },
    CommandPattern {
        intent: Intent::Logout,
        triggers: &["log out", "logout", "sign out"],
    },
];

/// Compiled command table. Stateless: the same text always yields the same intent.
#[derive(Debug, Clone)]
pub struct CommandMatcher {
    entries: Vec<(Intent, Regex)>,
}

impl CommandMatcher {
    /// Compile the built-in table. Every trigger must already be normalized.
    pub fn builtin(normalizer: &Normalizer) -> Result<Self, ParserError> {
        let rows = COMMAND_PATTERNS
            .iter()
            .map(|p| (p.intent, p.triggers.iter().map(|t| t.to_string()).collect()))
            .collect();
        Self::new(rows, normalizer)
    }

    /// Compile rows of (intent, triggers) in priority order. Rows for the same
    /// intent may repeat; each keeps its own position.
    pub fn new(rows: Vec<(Intent, Vec<String>)>, normalizer: &Normalizer) -> Result<Self, ParserError> {
        let mut entries = Vec::with_capacity(rows.len());

        for (intent, triggers) in rows {
            if intent.category() == IntentCategory::Move {
                return Err(ParserError::NonCommandIntent(intent.to_string()));
            }
            if triggers.is_empty() {
                return Err(ParserError::EmptyEntry { table: "command" });
            }

            let mut escaped = Vec::with_capacity(triggers.len());
            for trigger in &triggers {
                let normalized = normalizer.normalize(trigger);
                if normalized.is_empty() {
                    return Err(ParserError::EmptyEntry { table: "command" });
                }
                if normalized != *trigger {
                    return Err(ParserError::UnnormalizedTrigger {
                        intent: intent.to_string(),
                        trigger: trigger.clone(),
                        normalized,
                    });
                }
                escaped.push(regex::escape(trigger));
            }

            let re = Regex::new(&format!(r"\b(?:{})\b", escaped.join("|")))?;
            entries.push((intent, re));
        }

        Ok(Self { entries })
    }

    /// First intent (in table order) with a trigger present at word boundaries.
    pub fn match_command(&self, normalized: &str) -> Option<Intent> {
        if normalized.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|(_, re)| re.is_match(normalized))
            .map(|(intent, _)| *intent)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;

    fn setup() -> (Normalizer, CommandMatcher) {
        let normalizer = Normalizer::new(Lexicon::builtin().unwrap()).unwrap();
        let matcher = CommandMatcher::builtin(&normalizer).unwrap();
        (normalizer, matcher)
    }

    fn intent_of(text: &str) -> Option<Intent> {
        let (normalizer, matcher) = setup();
        matcher.match_command(&normalizer.normalize(text))
    }

    #[test]
    fn test_builtin_table_compiles() {
        let (_, matcher) = setup();
        assert_eq!(matcher.len(), COMMAND_PATTERNS.len());
    }

    #[test]
    fn test_voice_controls() {
        assert_eq!(intent_of("voice off"), Some(Intent::VoiceOff));
        assert_eq!(intent_of("Voice on please"), Some(Intent::VoiceOn));
        assert_eq!(intent_of("stop listening"), Some(Intent::VoiceOff));
        assert_eq!(intent_of("stop"), Some(Intent::VoiceStop));
        assert_eq!(intent_of("can you repeat that"), Some(Intent::VoiceRepeat));
    }

    #[test]
    fn test_word_boundaries() {
        // "repeat" inside "repeatedly" and "stop" inside "stopwatch" are not triggers
        assert_eq!(intent_of("repeatedly"), None);
        assert_eq!(intent_of("stopwatch"), None);
        assert_eq!(intent_of("historyless"), None);
    }

    #[test]
    fn test_time_controls() {
        assert_eq!(intent_of("five plus three"), Some(Intent::SelectBlitz5_3));
        assert_eq!(intent_of("5+3"), Some(Intent::SelectBlitz5_3));
        assert_eq!(intent_of("blitz five plus three"), Some(Intent::SelectBlitz5_3));
        assert_eq!(intent_of("play a five minute game"), Some(Intent::SelectBlitz5_0));
        assert_eq!(intent_of("fifteen plus ten"), Some(Intent::SelectRapid15_10));
        assert_eq!(intent_of("three and two"), Some(Intent::SelectBlitz3_2));
        assert_eq!(intent_of("blitz"), Some(Intent::SelectBlitz));
        assert_eq!(intent_of("bullit"), Some(Intent::SelectBullet));
        // "15 plus 10" must not be read as "5 plus 1"
        assert_ne!(intent_of("15 plus 10"), Some(Intent::SelectBullet1_0));
    }

    #[test]
    fn test_game_controls_priority() {
        assert_eq!(intent_of("I accept the draw"), Some(Intent::AcceptDraw));
        assert_eq!(intent_of("offer a draw"), Some(Intent::OfferDraw));
        assert_eq!(intent_of("i resign"), Some(Intent::Resign));
        assert_eq!(intent_of("undo"), Some(Intent::UndoMove));
    }

    #[test]
    fn test_moves_are_not_commands() {
        for text in ["knight to f3", "castle king side", "e takes d5", "e8 queen", "e4"] {
            assert_eq!(intent_of(text), None, "{text} matched a command");
        }
    }

    #[test]
    fn test_no_match() {
        assert_eq!(intent_of("banana sandwich"), None);
        assert_eq!(intent_of(""), None);
    }

    #[test]
    fn test_rejects_unnormalized_trigger() {
        let normalizer = Normalizer::new(Lexicon::builtin().unwrap()).unwrap();
        let err = CommandMatcher::new(
            vec![(Intent::UndoMove, vec!["take back".to_string()])],
            &normalizer,
        )
        .unwrap_err();
        assert!(matches!(err, ParserError::UnnormalizedTrigger { .. }));
    }

    #[test]
    fn test_rejects_move_intent() {
        let normalizer = Normalizer::new(Lexicon::builtin().unwrap()).unwrap();
        let err = CommandMatcher::new(vec![(Intent::ChessMove, vec!["move".to_string()])], &normalizer)
            .unwrap_err();
        assert_eq!(err, ParserError::NonCommandIntent("CHESS_MOVE".to_string()));
    }
}
