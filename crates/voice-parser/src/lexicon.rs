//! Lexical tables: phonetic variants, number words, file and rank variants, fillers.
//!
//! The built-in tables are plain static data. `LexiconBuilder` assembles them
//! (plus any catalog additions) into a `Lexicon` and refuses to build one whose
//! entries would make normalization order-dependent or non-idempotent.

use std::collections::{HashMap, HashSet};

use crate::error::ParserError;

/// Mis-heard or accented spellings mapped to the canonical word.
pub const PHONETIC_VARIANTS: &[(&str, &str)] = &[
    // pieces
    ("night", "knight"),
    ("nite", "knight"),
    ("knite", "knight"),
    ("nait", "knight"),
    ("naight", "knight"),
    ("kinight", "knight"),
    ("nights", "knights"),
    ("bishup", "bishop"),
    ("bisop", "bishop"),
    ("bisshop", "bishop"),
    ("bishap", "bishop"),
    ("bichop", "bishop"),
    ("rock", "rook"),
    ("ruk", "rook"),
    ("rukh", "rook"),
    ("rok", "rook"),
    ("brook", "rook"),
    ("rocks", "rooks"),
    ("kween", "queen"),
    ("qween", "queen"),
    ("quin", "queen"),
    ("quinn", "queen"),
    ("queene", "queen"),
    ("keeng", "king"),
    ("kinng", "king"),
    ("pond", "pawn"),
    ("pon", "pawn"),
    ("paun", "pawn"),
    ("pown", "pawn"),
    ("prawn", "pawn"),
    ("porn", "pawn"),
    // actions
    ("take", "takes"),
    ("tech", "takes"),
    ("tek", "takes"),
    ("tex", "takes"),
    ("tax", "takes"),
    ("taks", "takes"),
    ("capture", "takes"),
    ("captures", "takes"),
    ("captured", "takes"),
    ("x", "takes"),
    ("cassel", "castle"),
    ("castel", "castle"),
    ("kastle", "castle"),
    ("cassle", "castle"),
    ("casting", "castling"),
    ("sight", "side"),
    ("site", "side"),
    ("sayed", "side"),
    ("promotes", "promote"),
    ("promoted", "promote"),
    ("promoting", "promote"),
    ("promotion", "promote"),
    ("equals", "promote"),
    ("form", "from"),
    ("frum", "from"),
    ("fro", "from"),
    // commands
    ("voise", "voice"),
    ("voys", "voice"),
    ("bulet", "bullet"),
    ("bullit", "bullet"),
    ("blits", "blitz"),
    ("blids", "blitz"),
    ("rabid", "rapid"),
    ("resigned", "resign"),
    ("rezign", "resign"),
    ("undue", "undo"),
    ("setting", "settings"),
    ("minits", "minutes"),
    ("mins", "minutes"),
    ("min", "minute"),
];

/// Base number words. Compounds ("twenty five") are generated from `TENS` and units.
pub const NUMBER_WORDS: &[(&str, &str)] = &[
    ("zero", "0"),
    ("one", "1"),
    ("two", "2"),
    ("three", "3"),
    ("four", "4"),
    ("five", "5"),
    ("six", "6"),
    ("seven", "7"),
    ("eight", "8"),
    ("nine", "9"),
    ("ten", "10"),
    ("eleven", "11"),
    ("twelve", "12"),
    ("thirteen", "13"),
    ("fourteen", "14"),
    ("fifteen", "15"),
    ("sixteen", "16"),
    ("seventeen", "17"),
    ("eighteen", "18"),
    ("nineteen", "19"),
];

pub const TENS: &[(&str, u32)] = &[
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
];

/// Spoken forms of board files. Only applied in front of a rank or "takes".
pub const FILE_VARIANTS: &[(&str, char)] = &[
    ("alpha", 'a'),
    ("ay", 'a'),
    ("bee", 'b'),
    ("be", 'b'),
    ("bea", 'b'),
    ("bravo", 'b'),
    ("see", 'c'),
    ("sea", 'c'),
    ("cee", 'c'),
    ("charlie", 'c'),
    ("dee", 'd'),
    ("delta", 'd'),
    ("ee", 'e'),
    ("echo", 'e'),
    ("ef", 'f'),
    ("eff", 'f'),
    ("foxtrot", 'f'),
    ("gee", 'g'),
    ("ji", 'g'),
    ("golf", 'g'),
    ("aitch", 'h'),
    ("age", 'h'),
    ("etch", 'h'),
    ("hotel", 'h'),
];

/// Spoken forms of ranks that survive number normalization. Only applied after a file.
pub const RANK_VARIANTS: &[(&str, char)] = &[
    ("won", '1'),
    ("juan", '1'),
    ("too", '2'),
    ("tu", '2'),
    ("tree", '3'),
    ("free", '3'),
    ("for", '4'),
    ("fore", '4'),
    ("fife", '5'),
    ("hive", '5'),
    ("sicks", '6'),
    ("sevin", '7'),
    ("ate", '8'),
    ("ait", '8'),
];

/// Hesitations and padding removed before matching.
pub const FILLER_WORDS: &[&str] = &[
    "um", "umm", "uh", "uhh", "er", "erm", "hmm", "like", "you know", "i mean", "please",
];

/// Immutable lookup tables used by the normalizer.
#[derive(Debug, Clone)]
pub struct Lexicon {
    phonetic: HashMap<String, String>,
    numbers: Vec<(String, String)>, // longest phrase first
    files: HashMap<String, char>,
    ranks: HashMap<String, char>,
    fillers: Vec<String>, // longest phrase first
}

impl Lexicon {
    /// The built-in tables, validated.
    pub fn builtin() -> Result<Self, ParserError> {
        LexiconBuilder::builtin().build()
    }

    pub fn phonetic(&self, token: &str) -> Option<&str> {
        self.phonetic.get(token).map(String::as_str)
    }

    /// Number phrases ordered longest-first.
    pub fn numbers(&self) -> &[(String, String)] {
        &self.numbers
    }

    pub fn number(&self, phrase: &str) -> Option<&str> {
        self.numbers
            .iter()
            .find(|(p, _)| p == phrase)
            .map(|(_, d)| d.as_str())
    }

    /// Canonical file letter for a token ("echo" -> 'e', "e" -> 'e').
    pub fn file(&self, token: &str) -> Option<char> {
        match token.as_bytes() {
            [c @ b'a'..=b'h'] => Some(*c as char),
            _ => self.files.get(token).copied(),
        }
    }

    /// Canonical rank digit for a token ("4" -> '4', "for" -> '4').
    pub fn rank(&self, token: &str) -> Option<char> {
        match token.as_bytes() {
            [c @ b'1'..=b'8'] => Some(*c as char),
            _ => self.ranks.get(token).copied(),
        }
    }

    /// Filler phrases ordered longest-first.
    pub fn fillers(&self) -> &[String] {
        &self.fillers
    }

    pub fn phonetic_len(&self) -> usize {
        self.phonetic.len()
    }
}

/// Collects table entries and validates them into a `Lexicon`.
#[derive(Debug, Clone, Default)]
pub struct LexiconBuilder {
    phonetic: Vec<(String, String)>,
    numbers: Vec<(String, String)>,
    files: Vec<(String, char)>,
    ranks: Vec<(String, char)>,
    fillers: Vec<String>,
}

impl LexiconBuilder {
    /// Builder preloaded with the built-in tables.
    pub fn builtin() -> Self {
        let mut numbers: Vec<(String, String)> = NUMBER_WORDS
            .iter()
            .map(|(w, d)| (w.to_string(), d.to_string()))
            .collect();
        for (tens, value) in TENS {
            numbers.push((tens.to_string(), value.to_string()));
            // "twenty one" .. "twenty nine"
            for (unit, digit) in &NUMBER_WORDS[1..10] {
                let unit_value: u32 = digit.parse().unwrap_or(0);
                numbers.push((format!("{tens} {unit}"), (value + unit_value).to_string()));
            }
        }

        Self {
            phonetic: PHONETIC_VARIANTS
                .iter()
                .map(|(v, c)| (v.to_string(), c.to_string()))
                .collect(),
            numbers,
            files: FILE_VARIANTS.iter().map(|(v, f)| (v.to_string(), *f)).collect(),
            ranks: RANK_VARIANTS.iter().map(|(v, r)| (v.to_string(), *r)).collect(),
            fillers: FILLER_WORDS.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Add a phonetic variant for a canonical token.
    pub fn phonetic(mut self, variant: &str, canonical: &str) -> Self {
        self.phonetic
            .push((variant.trim().to_lowercase(), canonical.trim().to_lowercase()));
        self
    }

    pub fn number(mut self, phrase: &str, digits: &str) -> Self {
        self.numbers
            .push((phrase.trim().to_lowercase(), digits.trim().to_string()));
        self
    }

    pub fn filler(mut self, phrase: &str) -> Self {
        self.fillers.push(phrase.trim().to_lowercase());
        self
    }

    pub fn build(self) -> Result<Lexicon, ParserError> {
        let phonetic = collect_unique("phonetic", self.phonetic)?;
        let numbers = collect_unique("number", self.numbers)?;
        let files = collect_unique("file", self.files)?;
        let ranks = collect_unique("rank", self.ranks)?;

        let mut fillers: Vec<String> = Vec::new();
        for filler in self.fillers {
            if filler.is_empty() {
                return Err(ParserError::EmptyEntry { table: "filler" });
            }
            if !fillers.contains(&filler) {
                fillers.push(filler);
            }
        }

        let filler_set: HashSet<&str> = fillers.iter().map(String::as_str).collect();

        // Phonetic substitution must be a one-shot mapping onto plain words.
        for (variant, canonical) in &phonetic {
            if phonetic.contains_key(canonical) {
                return Err(ParserError::UnstableCanonical {
                    table: "phonetic",
                    token: canonical.clone(),
                });
            }
            if variant.contains(char::is_whitespace) {
                return Err(ParserError::ReservedToken {
                    table: "phonetic",
                    token: variant.clone(),
                    reason: "multi-word phrases (matching is per token)",
                });
            }
            if !variant.chars().all(|c| c.is_alphabetic()) {
                return Err(ParserError::ReservedToken {
                    table: "phonetic",
                    token: variant.clone(),
                    reason: "digits or punctuation",
                });
            }
            if matches!(variant.as_bytes(), [b'a'..=b'h']) {
                return Err(ParserError::ReservedToken {
                    table: "phonetic",
                    token: variant.clone(),
                    reason: "a board file letter",
                });
            }
            if filler_set.contains(canonical.as_str()) {
                return Err(ParserError::ReservedToken {
                    table: "phonetic",
                    token: canonical.clone(),
                    reason: "a filler word",
                });
            }
        }

        for (phrase, digits) in &numbers {
            if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
                return Err(ParserError::InvalidDigits {
                    phrase: phrase.clone(),
                    value: digits.clone(),
                });
            }
            if phrase.chars().any(|c| c.is_ascii_digit()) {
                return Err(ParserError::ReservedToken {
                    table: "number",
                    token: phrase.clone(),
                    reason: "digits",
                });
            }
            // A phonetic variant inside a number phrase would be rewritten before it could match.
            if let Some(word) = phrase.split(' ').find(|w| phonetic.contains_key(*w)) {
                return Err(ParserError::ReservedToken {
                    table: "number",
                    token: word.to_string(),
                    reason: "a phonetic variant",
                });
            }
        }

        for variant in files.keys().chain(ranks.keys()) {
            if phonetic.contains_key(variant) {
                return Err(ParserError::ReservedToken {
                    table: "file/rank",
                    token: variant.clone(),
                    reason: "a phonetic variant",
                });
            }
            if numbers.contains_key(variant) {
                return Err(ParserError::ReservedToken {
                    table: "file/rank",
                    token: variant.clone(),
                    reason: "a number word",
                });
            }
            if filler_set.contains(variant.as_str()) {
                return Err(ParserError::ReservedToken {
                    table: "file/rank",
                    token: variant.clone(),
                    reason: "a filler word",
                });
            }
        }
        if let Some(both) = files.keys().find(|k| ranks.contains_key(*k)) {
            return Err(ParserError::ReservedToken {
                table: "file",
                token: both.clone(),
                reason: "a rank variant",
            });
        }

        let mut numbers: Vec<(String, String)> = numbers.into_iter().collect();
        numbers.sort_by(|a, b| longest_first(&a.0, &b.0));
        fillers.sort_by(|a, b| longest_first(a, b));

        Ok(Lexicon {
            phonetic,
            numbers,
            files,
            ranks,
            fillers,
        })
    }
}

/// Longer phrases first (by word count, then length), ties alphabetical for determinism.
fn longest_first(a: &str, b: &str) -> std::cmp::Ordering {
    let words = |s: &str| s.split(' ').count();
    words(b)
        .cmp(&words(a))
        .then(b.len().cmp(&a.len()))
        .then(a.cmp(b))
}

fn collect_unique<V>(
    table: &'static str,
    entries: Vec<(String, V)>,
) -> Result<HashMap<String, V>, ParserError>
where
    V: PartialEq + ToString,
{
    let mut map: HashMap<String, V> = HashMap::with_capacity(entries.len());
    for (key, value) in entries {
        if key.is_empty() || value.to_string().is_empty() {
            return Err(ParserError::EmptyEntry { table });
        }
        match map.get(&key) {
            Some(existing) if *existing != value => {
                return Err(ParserError::DuplicateEntry {
                    table,
                    first: existing.to_string(),
                    second: value.to_string(),
                    key,
                });
            }
            Some(_) => {}
            None => {
                map.insert(key, value);
            }
        }
    }
    Ok(map)
}
