//! The closed set of intents a transcript can resolve to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Every recognised intent. `ChessMove` is produced by the move grammar, all
/// others by the command table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    // voice control
    VoiceOn,
    VoiceOff,
    VoiceStop,
    VoiceRepeat,

    // game control
    Resign,
    OfferDraw,
    AcceptDraw,
    DeclineDraw,
    UndoMove,
    FlipBoard,
    NewGame,

    // time control
    #[serde(rename = "SELECT_BULLET_1_0")]
    SelectBullet1_0,
    #[serde(rename = "SELECT_BULLET_2_1")]
    SelectBullet2_1,
    #[serde(rename = "SELECT_BLITZ_3_0")]
    SelectBlitz3_0,
    #[serde(rename = "SELECT_BLITZ_3_2")]
    SelectBlitz3_2,
    #[serde(rename = "SELECT_BLITZ_5_0")]
    SelectBlitz5_0,
    #[serde(rename = "SELECT_BLITZ_5_3")]
    SelectBlitz5_3,
    #[serde(rename = "SELECT_RAPID_10_0")]
    SelectRapid10_0,
    #[serde(rename = "SELECT_RAPID_10_5")]
    SelectRapid10_5,
    #[serde(rename = "SELECT_RAPID_15_10")]
    SelectRapid15_10,
    #[serde(rename = "SELECT_CLASSICAL_30_0")]
    SelectClassical30_0,
    SelectBullet,
    SelectBlitz,
    SelectRapid,
    SelectClassical,

    // navigation
    GoHome,
    GoBack,
    OpenSettings,
    OpenProfile,
    OpenHistory,
    OpenAnalysis,
    PlayComputer,
    PlayOnline,
    Help,
    Logout,

    ChessMove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntentCategory {
    Voice,
    GameControl,
    TimeControl,
    Navigation,
    Move,
}

/// Game speed classes, bucketed by estimated game duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameModeKind {
    Bullet,
    Blitz,
    Rapid,
    Classical,
}

/// Base time plus per-move increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeControl {
    pub base_minutes: u32,
    pub increment_seconds: u32,
}

impl TimeControl {
    pub const fn new(base_minutes: u32, increment_seconds: u32) -> Self {
        Self {
            base_minutes,
            increment_seconds,
        }
    }

    /// Estimated duration in seconds for a 40-move game.
    pub fn estimated_seconds(self) -> u32 {
        self.base_minutes * 60 + self.increment_seconds * 40
    }

    pub fn mode(self) -> GameModeKind {
        match self.estimated_seconds() {
            0..=179 => GameModeKind::Bullet,
            180..=479 => GameModeKind::Blitz,
            480..=1499 => GameModeKind::Rapid,
            _ => GameModeKind::Classical,
        }
    }
}

impl fmt::Display for TimeControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.base_minutes, self.increment_seconds)
    }
}

impl Intent {
    pub const ALL: [Intent; 36] = [
        Intent::VoiceOn,
        Intent::VoiceOff,
        Intent::VoiceStop,
        Intent::VoiceRepeat,
        Intent::Resign,
        Intent::OfferDraw,
        Intent::AcceptDraw,
        Intent::DeclineDraw,
        Intent::UndoMove,
        Intent::FlipBoard,
        Intent::NewGame,
        Intent::SelectBullet1_0,
        Intent::SelectBullet2_1,
        Intent::SelectBlitz3_0,
        Intent::SelectBlitz3_2,
        Intent::SelectBlitz5_0,
        Intent::SelectBlitz5_3,
        Intent::SelectRapid10_0,
        Intent::SelectRapid10_5,
        Intent::SelectRapid15_10,
        Intent::SelectClassical30_0,
        Intent::SelectBullet,
        Intent::SelectBlitz,
        Intent::SelectRapid,
        Intent::SelectClassical,
        Intent::GoHome,
        Intent::GoBack,
        Intent::OpenSettings,
        Intent::OpenProfile,
        Intent::OpenHistory,
        Intent::OpenAnalysis,
        Intent::PlayComputer,
        Intent::PlayOnline,
        Intent::Help,
        Intent::Logout,
        Intent::ChessMove,
    ];

    /// Wire name, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Intent::VoiceOn => "VOICE_ON",
            Intent::VoiceOff => "VOICE_OFF",
            Intent::VoiceStop => "VOICE_STOP",
            Intent::VoiceRepeat => "VOICE_REPEAT",
            Intent::Resign => "RESIGN",
            Intent::OfferDraw => "OFFER_DRAW",
            Intent::AcceptDraw => "ACCEPT_DRAW",
            Intent::DeclineDraw => "DECLINE_DRAW",
            Intent::UndoMove => "UNDO_MOVE",
            Intent::FlipBoard => "FLIP_BOARD",
            Intent::NewGame => "NEW_GAME",
            Intent::SelectBullet1_0 => "SELECT_BULLET_1_0",
            Intent::SelectBullet2_1 => "SELECT_BULLET_2_1",
            Intent::SelectBlitz3_0 => "SELECT_BLITZ_3_0",
            Intent::SelectBlitz3_2 => "SELECT_BLITZ_3_2",
            Intent::SelectBlitz5_0 => "SELECT_BLITZ_5_0",
            Intent::SelectBlitz5_3 => "SELECT_BLITZ_5_3",
            Intent::SelectRapid10_0 => "SELECT_RAPID_10_0",
            Intent::SelectRapid10_5 => "SELECT_RAPID_10_5",
            Intent::SelectRapid15_10 => "SELECT_RAPID_15_10",
            Intent::SelectClassical30_0 => "SELECT_CLASSICAL_30_0",
            Intent::SelectBullet => "SELECT_BULLET",
            Intent::SelectBlitz => "SELECT_BLITZ",
            Intent::SelectRapid => "SELECT_RAPID",
            Intent::SelectClassical => "SELECT_CLASSICAL",
            Intent::GoHome => "GO_HOME",
            Intent::GoBack => "GO_BACK",
            Intent::OpenSettings => "OPEN_SETTINGS",
            Intent::OpenProfile => "OPEN_PROFILE",
            Intent::OpenHistory => "OPEN_HISTORY",
            Intent::OpenAnalysis => "OPEN_ANALYSIS",
            Intent::PlayComputer => "PLAY_COMPUTER",
            Intent::PlayOnline => "PLAY_ONLINE",
            Intent::Help => "HELP",
            Intent::Logout => "LOGOUT",
            Intent::ChessMove => "CHESS_MOVE",
        }
    }

    pub fn category(self) -> IntentCategory {
        match self {
            Intent::VoiceOn | Intent::VoiceOff | Intent::VoiceStop | Intent::VoiceRepeat => {
                IntentCategory::Voice
            }
            Intent::Resign
            | Intent::OfferDraw
            | Intent::AcceptDraw
            | Intent::DeclineDraw
            | Intent::UndoMove
            | Intent::FlipBoard
            | Intent::NewGame => IntentCategory::GameControl,
            Intent::SelectBullet1_0
            | Intent::SelectBullet2_1
            | Intent::SelectBlitz3_0
            | Intent::SelectBlitz3_2
            | Intent::SelectBlitz5_0
            | Intent::SelectBlitz5_3
            | Intent::SelectRapid10_0
            | Intent::SelectRapid10_5
            | Intent::SelectRapid15_10
            | Intent::SelectClassical30_0
            | Intent::SelectBullet
            | Intent::SelectBlitz
            | Intent::SelectRapid
            | Intent::SelectClassical => IntentCategory::TimeControl,
            Intent::GoHome
            | Intent::GoBack
            | Intent::OpenSettings
            | Intent::OpenProfile
            | Intent::OpenHistory
            | Intent::OpenAnalysis
            | Intent::PlayComputer
            | Intent::PlayOnline
            | Intent::Help
            | Intent::Logout => IntentCategory::Navigation,
            Intent::ChessMove => IntentCategory::Move,
        }
    }

    /// Control-plane intents that stay actionable while voice input is disabled.
    pub fn is_voice_control(self) -> bool {
        self.category() == IntentCategory::Voice
    }

    /// Concrete clock for the specific time-control intents.
    pub fn time_control(self) -> Option<TimeControl> {
        match self {
            Intent::SelectBullet1_0 => Some(TimeControl::new(1, 0)),
            Intent::SelectBullet2_1 => Some(TimeControl::new(2, 1)),
            Intent::SelectBlitz3_0 => Some(TimeControl::new(3, 0)),
            Intent::SelectBlitz3_2 => Some(TimeControl::new(3, 2)),
            Intent::SelectBlitz5_0 => Some(TimeControl::new(5, 0)),
            Intent::SelectBlitz5_3 => Some(TimeControl::new(5, 3)),
            Intent::SelectRapid10_0 => Some(TimeControl::new(10, 0)),
            Intent::SelectRapid10_5 => Some(TimeControl::new(10, 5)),
            Intent::SelectRapid15_10 => Some(TimeControl::new(15, 10)),
            Intent::SelectClassical30_0 => Some(TimeControl::new(30, 0)),
            _ => None,
        }
    }

    /// Speed class for any time-control intent, specific or bare.
    pub fn game_mode(self) -> Option<GameModeKind> {
        match self {
            Intent::SelectBullet => Some(GameModeKind::Bullet),
            Intent::SelectBlitz => Some(GameModeKind::Blitz),
            Intent::SelectRapid => Some(GameModeKind::Rapid),
            Intent::SelectClassical => Some(GameModeKind::Classical),
            other => other.time_control().map(TimeControl::mode),
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intent {
    type Err = String;

    /// Case-insensitive; spaces and hyphens are read as underscores ("voice off").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase().replace([' ', '-'], "_");
        Intent::ALL
            .into_iter()
            .find(|i| i.as_str() == wanted)
            .ok_or_else(|| format!("Unknown intent: {s}"))
    }
}
