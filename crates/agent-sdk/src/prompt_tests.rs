use super::*;

use std::str::FromStr;

#[test]
fn test_prompt_embeds_legal_moves_and_fen() {
    let board = Board::default();
    let prompt = build_turn_prompt("ChatGPT", "Gemini", &board, None);

    // All twenty opening moves are offered
    assert!(prompt.user.contains("e2e4"));
    assert!(prompt.user.contains("g1f3"));
    assert_eq!(legal_move_list(&board).split(", ").count(), 20);

    assert!(prompt
        .user
        .contains("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"));
    assert!(prompt.user.contains("Gemini's last move was: None"));
    assert!(prompt.system.contains("You are ChatGPT"));
}

#[test]
fn test_prompt_reports_opponent_last_move() {
    let board =
        Board::from_str("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1").unwrap();
    let last = ChessMove::new(chess::Square::E2, chess::Square::E4, None);
    let prompt = build_turn_prompt("Gemini", "ChatGPT", &board, Some(last));
    assert!(prompt.user.contains("ChatGPT's last move was: e2e4"));
}

#[test]
fn test_flattened_contains_both_halves() {
    let prompt = TurnPrompt {
        system: "sys".into(),
        user: "usr".into(),
    };
    assert_eq!(prompt.flattened(), "sys\nusr");
}
