use super::*;

use std::str::FromStr;

#[tokio::test]
async fn test_first_legal_agent_answers_with_a_legal_move() {
    let agent = FirstLegalAgent::new("stub");
    let board = Board::default();
    let text = agent.request_move(&board, None).await.unwrap();
    let mv = ChessMove::from_str(&text).unwrap();
    assert!(board.legal(mv));
}

#[tokio::test]
async fn test_scripted_agent_replays_then_fails() {
    let agent = ScriptedAgent::new("stub", ["e2e4".to_string(), "garbage".to_string()]);
    let board = Board::default();
    assert_eq!(agent.request_move(&board, None).await.unwrap(), "e2e4");
    assert_eq!(agent.request_move(&board, None).await.unwrap(), "garbage");
    assert!(agent.request_move(&board, None).await.is_err());
}

#[tokio::test]
async fn test_failing_agent_always_fails() {
    let agent = FailingAgent::new("down");
    for _ in 0..3 {
        let err = agent.request_move(&Board::default(), None).await.unwrap_err();
        assert!(matches!(err, ProviderError::Status(503)));
    }
}
