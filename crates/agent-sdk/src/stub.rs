//! Deterministic stub agents.
//!
//! Useful for wiring tests and offline batch runs before pointing the
//! arena at real providers: any real agent should at least survive a
//! match against these.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chess::{Board, ChessMove, MoveGen};
use rand::Rng;
use tokio::time::sleep;

use crate::client::AgentClient;
use crate::error::ProviderError;

/// Always answers with the first legal move, in UCI.
pub struct FirstLegalAgent {
    name: String,
}

impl FirstLegalAgent {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait]
impl AgentClient for FirstLegalAgent {
    fn name(&self) -> &str {
        &self.name
    }

    async fn request_move(
        &self,
        board: &Board,
        _opponent_last_move: Option<ChessMove>,
    ) -> Result<String, ProviderError> {
        MoveGen::new_legal(board)
            .next()
            .map(|mv| mv.to_string())
            .ok_or_else(|| ProviderError::Malformed("no legal moves".to_string()))
    }
}

/// Replays a fixed sequence of canned responses, then fails.
pub struct ScriptedAgent {
    name: String,
    responses: Mutex<VecDeque<String>>,
}

impl ScriptedAgent {
    pub fn new(name: impl Into<String>, responses: impl IntoIterator<Item = String>) -> Self {
        Self {
            name: name.into(),
            responses: Mutex::new(responses.into_iter().collect()),
        }
    }
}

#[async_trait]
impl AgentClient for ScriptedAgent {
    fn name(&self) -> &str {
        &self.name
    }

    async fn request_move(
        &self,
        _board: &Board,
        _opponent_last_move: Option<ChessMove>,
    ) -> Result<String, ProviderError> {
        let mut responses = self.responses.lock().unwrap_or_else(|e| e.into_inner());
        responses
            .pop_front()
            .ok_or_else(|| ProviderError::Malformed("script exhausted".to_string()))
    }
}

/// Every call fails as if the provider were unreachable.
pub struct FailingAgent {
    name: String,
}

impl FailingAgent {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait]
impl AgentClient for FailingAgent {
    fn name(&self) -> &str {
        &self.name
    }

    async fn request_move(
        &self,
        _board: &Board,
        _opponent_last_move: Option<ChessMove>,
    ) -> Result<String, ProviderError> {
        Err(ProviderError::Status(503))
    }
}

/// First legal move after a random short delay; exercises concurrent
/// batches without a fixed completion order.
pub struct SleepyAgent {
    inner: FirstLegalAgent,
    max_delay: Duration,
}

impl SleepyAgent {
    pub fn new(name: impl Into<String>, max_delay: Duration) -> Self {
        Self {
            inner: FirstLegalAgent::new(name),
            max_delay,
        }
    }
}

#[async_trait]
impl AgentClient for SleepyAgent {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn request_move(
        &self,
        board: &Board,
        opponent_last_move: Option<ChessMove>,
    ) -> Result<String, ProviderError> {
        let delay_ms = {
            let mut rng = rand::thread_rng();
            rng.gen_range(0..=self.max_delay.as_millis() as u64)
        };
        sleep(Duration::from_millis(delay_ms)).await;
        self.inner.request_move(board, opponent_last_move).await
    }
}

#[cfg(test)]
#[path = "stub_tests.rs"]
mod stub_tests;
