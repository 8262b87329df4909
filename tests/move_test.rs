//! Integration tests: spoken moves resolved against real positions.

mod common;

use common::{moves, parser, spoken_move, CASTLES, PROMOTION, START, TWO_KNIGHTS, TWO_PAWN_CAPTURES};
use shakmaty::san::San;
use shakmaty::{Chess, Position};
use voice_parser::{AmbiguityPolicy, Intent, ParserConfig, VoiceParser};

#[test]
fn test_castling() {
    assert_eq!(spoken_move(CASTLES, "castle king side").as_deref(), Some("O-O"));
    assert_eq!(spoken_move(CASTLES, "Cassel, queen-side!").as_deref(), Some("O-O-O"));
    assert_eq!(spoken_move(START, "castle king side"), None);
    assert_eq!(spoken_move(CASTLES, "castle on the king's side").as_deref(), Some("O-O"));
}

#[test]
fn test_square_followed_by_conjunction() {
    assert_eq!(spoken_move(START, "knight c 3 and then").as_deref(), Some("Nc3"));
    assert_eq!(spoken_move(START, "e four and").as_deref(), Some("e4"));
}

#[test]
fn test_pawn_capture_with_on() {
    assert_eq!(spoken_move(TWO_PAWN_CAPTURES, "e takes d5").as_deref(), Some("exd5"));
    assert_eq!(spoken_move(TWO_PAWN_CAPTURES, "e takes on d5").as_deref(), Some("exd5"));
    assert_eq!(spoken_move(TWO_PAWN_CAPTURES, "charlie takes on delta five").as_deref(), Some("cxd5"));
}

#[test]
fn test_unique_pawn_move() {
    assert_eq!(spoken_move(START, "e4").as_deref(), Some("e4"));
    assert_eq!(spoken_move(START, "echo four").as_deref(), Some("e4"));
}

#[test]
fn test_disambiguation() {
    let moves = moves(TWO_KNIGHTS);
    let from_h4 = parser().parse("knight from h4 to f3", Some(&moves)).unwrap();
    assert_eq!(from_h4.chess_move_ref().unwrap().from.to_string(), "h4");

    // No clause: the first candidate in list order
    let first = moves
        .iter()
        .find(|m| m.to.to_string() == "f3")
        .unwrap();
    let default = parser().parse("knight to f3", Some(&moves)).unwrap();
    assert_eq!(default.chess_move_ref(), Some(first));
}

#[test]
fn test_reject_policy() {
    let strict = VoiceParser::new(&ParserConfig {
        ambiguity_policy: AmbiguityPolicy::Reject,
        ..ParserConfig::default()
    })
    .unwrap();
    let moves = moves(TWO_KNIGHTS);
    assert!(strict.parse("knight to f3", Some(&moves)).is_none());
    assert!(strict.parse("knight h4 f3", Some(&moves)).is_some());
}

#[test]
fn test_promotion() {
    assert_eq!(spoken_move(PROMOTION, "a eight queen").as_deref(), Some("a8=Q+"));
    assert_eq!(spoken_move(PROMOTION, "a8 promote to a knight").as_deref(), Some("a8=N"));
    assert_eq!(spoken_move(PROMOTION, "pawn to a8").as_deref(), Some("a8=Q+"));
    assert_eq!(spoken_move(PROMOTION, "a7 a8 knight").as_deref(), Some("a8=N"));
}

#[test]
fn test_no_match() {
    assert_eq!(spoken_move(START, "banana sandwich"), None);
    assert!(parser().parse("banana sandwich", Some(&moves(START))).is_none());
}

#[test]
fn test_empty_legal_moves() {
    assert!(parser().parse("e4", Some(&[])).is_none());
    assert!(parser().resolve_move("e4", &[]).is_none());
}

#[test]
fn test_spoken_game() {
    let mut pos = Chess::default();
    let script = [
        ("e four", "e4"),
        ("echo five", "e5"),
        ("night to f three", "Nf3"),
        ("knight to c six", "Nc6"),
        ("bishop to be five", "Bb5"),
        ("ay six", "a6"),
        ("bishop takes c six", "Bxc6"),
        ("delta takes c six", "dxc6"),
        ("castle short", "O-O"),
    ];

    for (spoken, expected) in script {
        let legal = chess_core::legal_moves(&pos);
        let parsed = parser()
            .parse(spoken, Some(&legal))
            .unwrap_or_else(|| panic!("no move for {spoken:?}"));
        assert_eq!(parsed.intent, Intent::ChessMove);
        let chosen = parsed.chess_move_ref().unwrap();
        assert_eq!(chosen.bare_notation(), expected, "for {spoken:?}");

        let mv = San::from_ascii(chosen.bare_notation().as_bytes())
            .unwrap()
            .to_move(&pos)
            .unwrap();
        pos.play_unchecked(mv);
    }
}
