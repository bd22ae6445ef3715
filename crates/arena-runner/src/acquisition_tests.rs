use super::*;

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use agent_sdk::stub::{FailingAgent, ScriptedAgent};
use agent_sdk::ProviderError;
use async_trait::async_trait;
use chess::{Square, MoveGen};

/// Counts calls made to an inner client.
struct Counting<C> {
    inner: C,
    calls: Arc<AtomicU32>,
}

#[async_trait]
impl<C: AgentClient> AgentClient for Counting<C> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn request_move(
        &self,
        board: &Board,
        opponent_last_move: Option<ChessMove>,
    ) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.request_move(board, opponent_last_move).await
    }
}

#[tokio::test]
async fn test_always_failing_client_exhausts_after_exact_attempt_count() {
    let calls = Arc::new(AtomicU32::new(0));
    let client = Counting {
        inner: FailingAgent::new("down"),
        calls: calls.clone(),
    };

    let err = acquire_move(&client, &Board::default(), None, 7)
        .await
        .unwrap_err();
    assert_eq!(err.attempts, 7);
    assert_eq!(err.agent, "down");
    assert_eq!(calls.load(Ordering::SeqCst), 7);
}

#[tokio::test]
async fn test_success_short_circuits_remaining_attempts() {
    let calls = Arc::new(AtomicU32::new(0));
    let client = Counting {
        inner: ScriptedAgent::new("stub", ["My move: e2e4".to_string()]),
        calls: calls.clone(),
    };

    let mv = acquire_move(&client, &Board::default(), None, 100)
        .await
        .unwrap();
    assert_eq!(mv, ChessMove::new(Square::E2, Square::E4, None));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_illegal_and_garbage_responses_consume_attempts() {
    let calls = Arc::new(AtomicU32::new(0));
    // Illegal coordinate move, then unparseable text, then a SAN reply
    let client = Counting {
        inner: ScriptedAgent::new(
            "stub",
            [
                "e2e5".to_string(),
                "I resign-ish".to_string(),
                "Nf3!".to_string(),
            ],
        ),
        calls: calls.clone(),
    };

    let mv = acquire_move(&client, &Board::default(), None, 10)
        .await
        .unwrap();
    assert_eq!(mv, ChessMove::new(Square::G1, Square::F3, None));
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_returned_move_is_always_in_the_legal_set() {
    let board = Board::default();
    let client = ScriptedAgent::new("stub", ["d2d4".to_string()]);
    let mv = acquire_move(&client, &board, None, 10).await.unwrap();
    assert!(MoveGen::new_legal(&board).any(|legal| legal == mv));
}
