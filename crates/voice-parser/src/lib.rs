//! Voice command parsing for chess play.
//!
//! Turns a speech-to-text transcript into either an app command (navigation,
//! voice toggles, time-control selection, game controls) or one concrete move
//! from the legal moves of the current position. Everything is rule-based and
//! deterministic: the same transcript and position always give the same result.
//! The main entry point is `VoiceParser::parse()`.

pub mod catalog;
pub mod command;
pub mod config;
pub mod error;
pub mod grammar;
pub mod intent;
pub mod lexicon;
pub mod normalizer;
pub mod parsed;
pub mod parser;
pub mod session;

pub use catalog::{CommandCatalog, CommandCategory, VoiceCommandDef, VoiceCommandRequest};
pub use config::{AmbiguityPolicy, ParserConfig};
pub use error::{CatalogError, ParserError};
pub use intent::{GameModeKind, Intent, IntentCategory, TimeControl};
pub use parsed::{CommandMetadata, ParsedCommand, Transcript};
pub use parser::VoiceParser;
pub use session::VoiceSession;

pub use chess_core::{legal_moves_from_fen, LegalMove, PieceKind, SquareToken, STANDARD_START_FEN};
