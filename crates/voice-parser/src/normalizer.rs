//! Transcript normalization: raw speech text -> canonical token stream.

use regex::{Captures, Regex};

use crate::error::ParserError;
use crate::lexicon::Lexicon;

/// Words that mark a preceding number as a duration ("a 5 minute game"), not a rank.
const DURATION_WORDS: &[&str] = &["minute", "minutes", "second", "seconds", "increment"];

/// Joiners of a base/increment pair ("3 plus 2", "5 and 3", "2 by 1").
const CLOCK_JOINERS: &[&str] = &["plus", "and", "by"];

/// Pure, idempotent text normalizer built over a validated `Lexicon`.
#[derive(Debug, Clone)]
pub struct Normalizer {
    lexicon: Lexicon,
    filler_re: Option<Regex>,
    number_re: Option<Regex>,
}

impl Normalizer {
    pub fn new(lexicon: Lexicon) -> Result<Self, ParserError> {
        let filler_re = alternation(lexicon.fillers().iter().map(String::as_str))?;
        // Alternation is leftmost-first, so the longest-first order decides "twenty five" vs "five".
        let number_re = alternation(lexicon.numbers().iter().map(|(p, _)| p.as_str()))?;
        Ok(Self {
            lexicon,
            filler_re,
            number_re,
        })
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Normalize a transcript. Unknown tokens pass through; blank input yields "".
    pub fn normalize(&self, text: &str) -> String {
        let cleaned = clean(text);
        let without_fillers = self.strip_fillers(cleaned);
        let phonetic = self.apply_phonetic(&without_fillers);
        let numbered = self.apply_numbers(phonetic);
        self.assemble_squares(&numbered)
    }

    fn strip_fillers(&self, mut text: String) -> String {
        let Some(re) = &self.filler_re else {
            return text;
        };
        // Removing one filler can join the words of another ("you um know")
        loop {
            let next = collapse(&re.replace_all(&text, " "));
            if next == text {
                return text;
            }
            text = next;
        }
    }

    fn apply_phonetic(&self, text: &str) -> String {
        text.split(' ')
            .filter(|t| !t.is_empty())
            .map(|t| self.lexicon.phonetic(t).unwrap_or(t))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn apply_numbers(&self, text: String) -> String {
        let Some(re) = &self.number_re else {
            return text;
        };
        re.replace_all(&text, |caps: &Captures| {
            let phrase = &caps[0];
            self.lexicon.number(phrase).unwrap_or(phrase).to_string()
        })
        .into_owned()
    }

    /// Merge "<file> <rank>" into a square token and canonicalize "<file> takes".
    fn assemble_squares(&self, text: &str) -> String {
        let tokens: Vec<&str> = text.split(' ').filter(|t| !t.is_empty()).collect();
        let mut out: Vec<String> = Vec::with_capacity(tokens.len());
        let mut i = 0;

        while i < tokens.len() {
            let token = tokens[i];
            let next = tokens.get(i + 1).copied();

            if let (Some(file), Some(next)) = (self.lexicon.file(token), next) {
                let is_clock = is_clock_context(&tokens[i + 2..]);
                if let Some(rank) = self.lexicon.rank(next).filter(|_| !is_clock) {
                    out.push(format!("{file}{rank}"));
                    i += 2;
                    continue;
                }
                if next == "takes" {
                    out.push(file.to_string());
                    i += 1;
                    continue;
                }
            }

            out.push(token.to_string());
            i += 1;
        }

        out.join(" ")
    }
}

/// Whether the tokens after a "<file> <number>" pair make the number part of
/// a time control: a duration word, or a joiner followed by another number.
fn is_clock_context(rest: &[&str]) -> bool {
    match rest {
        [w, ..] if DURATION_WORDS.contains(w) => true,
        [joiner, n, ..] if CLOCK_JOINERS.contains(joiner) => is_digits(n),
        _ => false,
    }
}

fn is_digits(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Step 1: lowercase, expand separators, drop punctuation, collapse whitespace.
fn clean(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars().flat_map(char::to_lowercase) {
        match c {
            '+' => out.push_str(" plus "),
            '&' => out.push_str(" and "),
            '\'' | '\u{2019}' => {}
            c if c.is_alphanumeric() => out.push(c),
            _ => out.push(' '), // hyphens, punctuation, whitespace
        }
    }
    collapse(&out)
}

fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `\b(?:p1|p2|...)\b` over escaped phrases, or `None` for an empty table.
fn alternation<'a>(phrases: impl Iterator<Item = &'a str>) -> Result<Option<Regex>, ParserError> {
    let escaped: Vec<String> = phrases.map(regex::escape).collect();
    if escaped.is_empty() {
        return Ok(None);
    }
    let re = Regex::new(&format!(r"\b(?:{})\b", escaped.join("|")))?;
    Ok(Some(re))
}
