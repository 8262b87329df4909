//! Token-level view of a normalized utterance used by the grammar stages.

use chess_core::{PieceKind, SquareToken};

/// Canonical capture word after normalization ("captures", "x", "tech" -> "takes").
pub const CAPTURE_WORD: &str = "takes";

pub struct Utterance<'a> {
    text: &'a str,
    tokens: Vec<&'a str>,
}

impl<'a> Utterance<'a> {
    pub fn new(normalized: &'a str) -> Self {
        Self {
            text: normalized,
            tokens: normalized.split_whitespace().collect(),
        }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }

    pub fn contains(&self, word: &str) -> bool {
        self.tokens.contains(&word)
    }

    /// Index of the first occurrence of `word`.
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.tokens.iter().position(|t| *t == word)
    }

    /// Every square token in text order, with its token index.
    pub fn squares(&self) -> Vec<(usize, SquareToken)> {
        self.tokens
            .iter()
            .enumerate()
            .filter_map(|(i, t)| t.parse::<SquareToken>().ok().map(|sq| (i, sq)))
            .collect()
    }

    pub fn square_at(&self, index: usize) -> Option<SquareToken> {
        self.tokens.get(index)?.parse().ok()
    }

    /// Square directly after the first occurrence of `word` ("to f3").
    pub fn square_after(&self, word: &str) -> Option<(usize, SquareToken)> {
        let i = self.index_of(word)?;
        self.square_at(i + 1).map(|sq| (i + 1, sq))
    }

    pub fn capture_index(&self) -> Option<usize> {
        self.index_of(CAPTURE_WORD)
    }

    pub fn has_capture(&self) -> bool {
        self.capture_index().is_some()
    }

    /// First piece word that is not a castling side qualifier ("king side").
    pub fn piece(&self) -> Option<(usize, PieceKind)> {
        self.tokens.iter().enumerate().find_map(|(i, t)| {
            let kind = PieceKind::from_word(t)?;
            let side_qualifier = matches!(kind, PieceKind::King | PieceKind::Queen)
                && self.tokens.get(i + 1) == Some(&"side");
            (!side_qualifier).then_some((i, kind))
        })
    }

    /// First promotion piece named after token `index`.
    pub fn promotion_piece_after(&self, index: usize) -> Option<PieceKind> {
        self.tokens
            .iter()
            .skip(index + 1)
            .filter_map(|t| PieceKind::from_word(t))
            .find(|p| p.is_promotion_target())
    }

    /// Where the piece is going: after "to", else after "takes", else the last square.
    pub fn destination(&self) -> Option<(usize, SquareToken)> {
        self.square_after("to")
            .or_else(|| self.square_after(CAPTURE_WORD))
            .or_else(|| self.squares().last().copied())
    }

    /// Where the piece comes from: after "from", else the leading square of a
    /// "<square> ... <square>" utterance.
    pub fn source(&self) -> Option<SquareToken> {
        if let Some((_, sq)) = self.square_after("from") {
            return Some(sq);
        }
        let squares = self.squares();
        let (dest_idx, _) = self.destination()?;
        match squares.first() {
            Some(&(idx, sq)) if squares.len() >= 2 && idx < dest_idx => Some(sq),
            _ => None,
        }
    }

    /// File letter spoken before "takes" ("e takes d5", "e pawn takes d5").
    pub fn source_file(&self) -> Option<char> {
        let i = self.capture_index()?;
        let before = |n: usize| i.checked_sub(n).and_then(|j| self.tokens.get(j)).copied();
        let token = match before(1) {
            Some("pawn") => before(2)?,
            Some(t) => t,
            None => return None,
        };
        match token.as_bytes() {
            [c @ b'a'..=b'h'] => Some(*c as char),
            _ => None,
        }
    }

    /// Lowercase alphanumerics only, for notation containment checks.
    pub fn compact(&self) -> String {
        compact(self.text)
    }
}

/// Lowercase alphanumerics of `s` ("Nf3+" -> "nf3", "O-O" -> "oo").
pub fn compact(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> SquareToken {
        s.parse().unwrap()
    }

    #[test]
    fn test_squares_and_destination() {
        let u = Utterance::new("knight from g1 to f3");
        assert_eq!(u.squares(), vec![(2, sq("g1")), (4, sq("f3"))]);
        assert_eq!(u.destination(), Some((4, sq("f3"))));
        assert_eq!(u.source(), Some(sq("g1")));
    }

    #[test]
    fn test_implicit_source() {
        let u = Utterance::new("knight g1 f3");
        assert_eq!(u.destination(), Some((2, sq("f3"))));
        assert_eq!(u.source(), Some(sq("g1")));

        let u = Utterance::new("knight to f3");
        assert_eq!(u.source(), None);
    }

    #[test]
    fn test_piece_skips_side_qualifier() {
        let u = Utterance::new("castle queen side");
        assert_eq!(u.piece(), None);

        let u = Utterance::new("queen takes e5");
        assert_eq!(u.piece(), Some((0, PieceKind::Queen)));
        assert!(u.has_capture());
        assert_eq!(u.destination(), Some((2, sq("e5"))));
    }

    #[test]
    fn test_source_file() {
        assert_eq!(Utterance::new("e takes d5").source_file(), Some('e'));
        assert_eq!(Utterance::new("e pawn takes d5").source_file(), Some('e'));
        assert_eq!(Utterance::new("knight takes d5").source_file(), None);
        assert_eq!(Utterance::new("takes d5").source_file(), None);
    }

    #[test]
    fn test_promotion_piece_after() {
        let u = Utterance::new("e8 promote to knight");
        assert_eq!(u.promotion_piece_after(0), Some(PieceKind::Knight));
        let u = Utterance::new("e8 king");
        assert_eq!(u.promotion_piece_after(0), None);
    }

    #[test]
    fn test_compact() {
        assert_eq!(compact("O-O-O"), "ooo");
        assert_eq!(compact("e8=Q+"), "e8q");
        assert_eq!(Utterance::new("n f3").compact(), "nf3");
    }
}
