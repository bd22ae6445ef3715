//! The agent client: prompt building, provider calls, and backoff.

use std::time::Duration;

use async_trait::async_trait;
use chess::{Board, ChessMove};
use tokio::time::sleep;

use crate::error::ProviderError;
use crate::prompt::{build_turn_prompt, TurnPrompt};

/// A remote text-completion provider, reduced to `text <- complete(prompt)`.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Provider display name for logs.
    fn provider_name(&self) -> &str;

    async fn complete(&self, prompt: &TurnPrompt) -> Result<String, ProviderError>;
}

/// Delays the client applies around provider calls.
///
/// `request_delay` is a fixed minimum wait before every request (some
/// providers enforce a requests-per-minute budget); `rate_limit_cooldown`
/// is slept after an HTTP 429 before the failure is reported.
#[derive(Debug, Clone, Copy)]
pub struct BackoffPolicy {
    pub request_delay: Duration,
    pub rate_limit_cooldown: Duration,
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self {
            request_delay: Duration::ZERO,
            rate_limit_cooldown: Duration::from_secs(60),
        }
    }
}

impl BackoffPolicy {
    /// No delays at all; for stubs and tests.
    pub fn none() -> Self {
        Self {
            request_delay: Duration::ZERO,
            rate_limit_cooldown: Duration::ZERO,
        }
    }

    pub fn openai() -> Self {
        Self::default()
    }

    /// The free-tier generateContent budget is tight: a small fixed
    /// delay before every call, a long cooldown after a 429.
    pub fn gemini() -> Self {
        Self {
            request_delay: Duration::from_secs(4),
            rate_limit_cooldown: Duration::from_secs(60),
        }
    }
}

/// What the acquisition loop talks to: one call per attempt, raw text or
/// a classified failure back.
#[async_trait]
pub trait AgentClient: Send + Sync {
    fn name(&self) -> &str;

    async fn request_move(
        &self,
        board: &Board,
        opponent_last_move: Option<ChessMove>,
    ) -> Result<String, ProviderError>;
}

/// An agent backed by a real remote provider.
pub struct ProviderAgent {
    name: String,
    opponent_name: String,
    provider: Box<dyn CompletionProvider>,
    backoff: BackoffPolicy,
}

impl ProviderAgent {
    pub fn new(
        name: impl Into<String>,
        opponent_name: impl Into<String>,
        provider: Box<dyn CompletionProvider>,
        backoff: BackoffPolicy,
    ) -> Self {
        Self {
            name: name.into(),
            opponent_name: opponent_name.into(),
            provider,
            backoff,
        }
    }
}

#[async_trait]
impl AgentClient for ProviderAgent {
    fn name(&self) -> &str {
        &self.name
    }

    async fn request_move(
        &self,
        board: &Board,
        opponent_last_move: Option<ChessMove>,
    ) -> Result<String, ProviderError> {
        if self.backoff.request_delay > Duration::ZERO {
            sleep(self.backoff.request_delay).await;
        }

        let prompt = build_turn_prompt(&self.name, &self.opponent_name, board, opponent_last_move);
        match self.provider.complete(&prompt).await {
            Ok(text) => {
                tracing::debug!(agent = %self.name, response = %text.trim(), "raw completion");
                Ok(text)
            }
            Err(ProviderError::RateLimited) => {
                // The "thinking" signal: observable, then cool down and
                // report the failure so the caller re-invokes.
                tracing::warn!(
                    agent = %self.name,
                    provider = %self.provider.provider_name(),
                    cooldown_secs = self.backoff.rate_limit_cooldown.as_secs(),
                    "rate limited; cooling down"
                );
                sleep(self.backoff.rate_limit_cooldown).await;
                Err(ProviderError::RateLimited)
            }
            Err(err) => {
                tracing::debug!(agent = %self.name, error = %err, "completion failed");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
