//! Legal-move records handed to the voice resolver by the rules engine.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use shakmaty::{Role, Square};

use crate::error::ChessCoreError;

static SQUARE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-h][1-8]$").expect("static square regex"));

/// A board square written as file letter + rank digit ("e4").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SquareToken {
    file: u8, // b'a'..=b'h'
    rank: u8, // b'1'..=b'8'
}

impl SquareToken {
    /// Build from a file letter and rank digit, rejecting anything off the board.
    pub fn new(file: char, rank: char) -> Option<Self> {
        if ('a'..='h').contains(&file) && ('1'..='8').contains(&rank) {
            Some(Self {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    pub fn file(self) -> char {
        self.file as char
    }

    pub fn rank(self) -> char {
        self.rank as char
    }
}

impl FromStr for SquareToken {
    type Err = ChessCoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !SQUARE_RE.is_match(s) {
            return Err(ChessCoreError::InvalidSquare(s.to_string()));
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(file), Some(rank)) => {
                Self::new(file, rank).ok_or_else(|| ChessCoreError::InvalidSquare(s.to_string()))
            }
            _ => Err(ChessCoreError::InvalidSquare(s.to_string())),
        }
    }
}

impl TryFrom<String> for SquareToken {
    type Error = ChessCoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SquareToken> for String {
    fn from(sq: SquareToken) -> Self {
        sq.to_string()
    }
}

impl fmt::Display for SquareToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl From<Square> for SquareToken {
    fn from(sq: Square) -> Self {
        // shakmaty files/ranks are 0-indexed (a..h, 1..8)
        Self {
            file: b'a' + sq.file() as u8,
            rank: b'1' + sq.rank() as u8,
        }
    }
}

/// Kind of chess piece, independent of colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];

    /// Canonical spoken name ("knight").
    pub fn name(self) -> &'static str {
        match self {
            PieceKind::King => "king",
            PieceKind::Queen => "queen",
            PieceKind::Rook => "rook",
            PieceKind::Bishop => "bishop",
            PieceKind::Knight => "knight",
            PieceKind::Pawn => "pawn",
        }
    }

    /// Parse a canonical piece word. Plurals are accepted ("knights").
    pub fn from_word(word: &str) -> Option<Self> {
        let word = word.strip_suffix('s').unwrap_or(word);
        Self::ALL.into_iter().find(|p| p.name() == word)
    }

    /// Pieces a pawn may promote to.
    pub fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Role> for PieceKind {
    fn from(role: Role) -> Self {
        match role {
            Role::King => PieceKind::King,
            Role::Queen => PieceKind::Queen,
            Role::Rook => PieceKind::Rook,
            Role::Bishop => PieceKind::Bishop,
            Role::Knight => PieceKind::Knight,
            Role::Pawn => PieceKind::Pawn,
        }
    }
}

/// One move the rules engine currently permits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalMove {
    pub from: SquareToken,
    pub to: SquareToken,
    pub piece: PieceKind,
    pub is_capture: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<PieceKind>,
    pub notation: String, // SAN, e.g. "Nf3", "exd5", "e8=Q+", "O-O"
}

impl LegalMove {
    /// Notation with check/mate decoration removed ("Qh5+" -> "Qh5").
    pub fn bare_notation(&self) -> &str {
        self.notation.trim_end_matches(['+', '#'])
    }

    /// True when this is a castling move ("O-O" / "O-O-O", either spelling).
    pub fn is_castle(&self) -> bool {
        matches!(
            self.bare_notation(),
            "O-O" | "O-O-O" | "0-0" | "0-0-0"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_token_parse() {
        let sq: SquareToken = "e4".parse().unwrap();
        assert_eq!(sq.file(), 'e');
        assert_eq!(sq.rank(), '4');
        assert_eq!(sq.to_string(), "e4");

        assert!("i4".parse::<SquareToken>().is_err());
        assert!("e9".parse::<SquareToken>().is_err());
        assert!("e44".parse::<SquareToken>().is_err());
        assert!("".parse::<SquareToken>().is_err());
    }

    #[test]
    fn test_square_from_shakmaty() {
        assert_eq!(SquareToken::from(Square::A1).to_string(), "a1");
        assert_eq!(SquareToken::from(Square::H8).to_string(), "h8");
        assert_eq!(SquareToken::from(Square::F3).to_string(), "f3");
    }

    #[test]
    fn test_piece_from_word() {
        assert_eq!(PieceKind::from_word("knight"), Some(PieceKind::Knight));
        assert_eq!(PieceKind::from_word("rooks"), Some(PieceKind::Rook));
        assert_eq!(PieceKind::from_word("castle"), None);
    }

    #[test]
    fn test_bare_notation() {
        let mv = LegalMove {
            from: "d1".parse().unwrap(),
            to: "h5".parse().unwrap(),
            piece: PieceKind::Queen,
            is_capture: false,
            promotion: None,
            notation: "Qh5+".to_string(),
        };
        assert_eq!(mv.bare_notation(), "Qh5");
        assert!(!mv.is_castle());
    }

    #[test]
    fn test_legal_move_json_shape() {
        let json = r#"{"from":"e7","to":"e8","piece":"pawn","isCapture":false,"promotion":"queen","notation":"e8=Q"}"#;
        let mv: LegalMove = serde_json::from_str(json).unwrap();
        assert_eq!(mv.promotion, Some(PieceKind::Queen));
        assert_eq!(mv.to.to_string(), "e8");
        assert!(serde_json::from_str::<LegalMove>(&json.replace("e8\",\"piece", "z9\",\"piece")).is_err());
    }
}
