//! Integration tests for transcript normalization properties.

mod common;

use common::parser;

#[test]
fn test_idempotence() {
    let corpus = [
        "",
        "   ",
        "Um, NITE to F three!",
        "twenty five minutes",
        "like you know castle queen-side",
        "echo takes delta five",
        "five+three blitz",
        "play a five minute game",
        "rock & roll",
        "a eight queen",
        "I'd like to offer a draw, please.",
        "e e e four four",
        "ninety nine bottles",
        "bishop to be five",
        "x x x",
    ];
    for t in corpus {
        let once = parser().normalize(t);
        assert_eq!(parser().normalize(&once), once, "not idempotent for {t:?}");
    }
}

#[test]
fn test_phonetic_round_trip() {
    let normalized = parser().normalize("nite to f3");
    assert!(normalized.split(' ').any(|t| t == "knight"), "{normalized}");
}

#[test]
fn test_multi_word_number_precedence() {
    let normalized = parser().normalize("twenty five minutes");
    assert!(normalized.split(' ').any(|t| t == "25"), "{normalized}");
    assert!(!normalized.contains("20"));
    assert!(!normalized.contains("twenty"));
}

#[test]
fn test_unknown_tokens_pass_through() {
    assert_eq!(parser().normalize("Banana Sandwich"), "banana sandwich");
}
