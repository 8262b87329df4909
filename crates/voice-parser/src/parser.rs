//! Top-level parser: normalize, try commands, then try moves.

use std::sync::LazyLock;

use chess_core::LegalMove;

use crate::catalog::CommandCatalog;
use crate::command::{CommandMatcher, COMMAND_PATTERNS};
use crate::config::ParserConfig;
use crate::error::ParserError;
use crate::grammar::{MoveGrammar, Resolution};
use crate::intent::Intent;
use crate::lexicon::LexiconBuilder;
use crate::normalizer::Normalizer;
use crate::parsed::{ParsedCommand, Transcript};

/// Parser over the built-in tables with the default configuration. Built
/// once on first use and shared read-only.
static BUILTIN: LazyLock<Result<VoiceParser, ParserError>> =
    LazyLock::new(|| VoiceParser::new(&ParserConfig::default()));

/// Immutable once built; safe to share across threads.
#[derive(Debug)]
pub struct VoiceParser {
    normalizer: Normalizer,
    commands: CommandMatcher,
    grammar: MoveGrammar,
}

impl VoiceParser {
    /// The shared built-in parser.
    pub fn builtin() -> Result<&'static VoiceParser, ParserError> {
        BUILTIN.as_ref().map_err(Clone::clone)
    }

    /// Built-in tables only.
    pub fn new(config: &ParserConfig) -> Result<Self, ParserError> {
        Self::build(config, LexiconBuilder::builtin(), Vec::new())
    }

    /// Built-in tables extended with the active entries of `catalog`.
    pub fn with_catalog(config: &ParserConfig, catalog: &CommandCatalog) -> Result<Self, ParserError> {
        let ext = catalog.extensions();
        let lexicon = ext
            .phonetic
            .iter()
            .fold(LexiconBuilder::builtin(), |builder, (variant, canonical)| {
                builder.phonetic(variant, canonical)
            });
        Self::build(config, lexicon, ext.triggers)
    }

    /// Built-in tables, plus the catalog file named by the config if any.
    pub fn from_config(config: &ParserConfig) -> Result<Self, ParserError> {
        match &config.commands_file {
            Some(path) => {
                let catalog =
                    CommandCatalog::load(path).map_err(|e| ParserError::Catalog(e.to_string()))?;
                Self::with_catalog(config, &catalog)
            }
            None => Self::new(config),
        }
    }

    fn build(
        config: &ParserConfig,
        lexicon: LexiconBuilder,
        extra_triggers: Vec<(Intent, Vec<String>)>,
    ) -> Result<Self, ParserError> {
        let normalizer = Normalizer::new(lexicon.build()?)?;

        let mut rows: Vec<(Intent, Vec<String>)> = COMMAND_PATTERNS
            .iter()
            .map(|p| (p.intent, p.triggers.iter().map(|t| t.to_string()).collect()))
            .collect();

        // Extra phrases join their intent's row, keeping its priority
        for (intent, phrases) in extra_triggers {
            let phrases: Vec<String> = phrases
                .iter()
                .map(|p| normalizer.normalize(p))
                .filter(|p| !p.is_empty())
                .collect();
            if phrases.is_empty() {
                continue;
            }
            match rows.iter_mut().find(|(i, _)| *i == intent) {
                Some((_, triggers)) => {
                    for phrase in phrases {
                        if !triggers.contains(&phrase) {
                            triggers.push(phrase);
                        }
                    }
                }
                None => rows.push((intent, phrases)),
            }
        }

        let commands = CommandMatcher::new(rows, &normalizer)?;
        let grammar = MoveGrammar::new(config.ambiguity_policy);

        tracing::info!(
            "Voice parser ready: {} phonetic variants, {} number phrases, {} command entries, {} grammar stages, ambiguity policy {}",
            normalizer.lexicon().phonetic_len(),
            normalizer.lexicon().numbers().len(),
            commands.len(),
            grammar.stage_names().len(),
            grammar.policy()
        );

        Ok(Self {
            normalizer,
            commands,
            grammar,
        })
    }

    pub fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    /// Command intent for already-normalized text.
    pub fn match_command(&self, normalized: &str) -> Option<Intent> {
        self.commands.match_command(normalized)
    }

    /// Legal move named by already-normalized text.
    pub fn resolve_move<'m>(&self, normalized: &str, legal_moves: &'m [LegalMove]) -> Option<&'m LegalMove> {
        self.grammar.resolve(normalized, legal_moves).map(|r| r.chess_move)
    }

    /// Like `resolve_move`, also reporting the grammar stage that matched.
    pub fn resolve_move_with_stage<'m>(
        &self,
        normalized: &str,
        legal_moves: &'m [LegalMove],
    ) -> Option<Resolution<'m>> {
        self.grammar.resolve(normalized, legal_moves)
    }

    /// Commands take priority over moves. Moves are only tried when the
    /// caller supplies the legal moves of the current position.
    pub fn parse(&self, transcript: &str, legal_moves: Option<&[LegalMove]>) -> Option<ParsedCommand> {
        let normalized = self.normalize(transcript);
        if normalized.is_empty() {
            return None;
        }

        if let Some(intent) = self.match_command(&normalized) {
            tracing::debug!("'{}' matched command {}", transcript, intent);
            return Some(ParsedCommand::command(intent, transcript));
        }

        let resolution = self.grammar.resolve(&normalized, legal_moves?)?;
        Some(ParsedCommand::chess_move(
            resolution.chess_move,
            resolution.stage,
            transcript,
        ))
    }

    /// `parse` for a recognizer transcript, carrying its confidence through.
    pub fn parse_transcript(
        &self,
        transcript: &Transcript,
        legal_moves: Option<&[LegalMove]>,
    ) -> Option<ParsedCommand> {
        let mut parsed = self.parse(&transcript.text, legal_moves)?;
        parsed.stt_confidence = transcript.confidence;
        Some(parsed)
    }

    pub fn grammar(&self) -> &MoveGrammar {
        &self.grammar
    }

    pub fn commands(&self) -> &CommandMatcher {
        &self.commands
    }
}
