//! Bounded-retry move acquisition.
//!
//! One loop absorbs every per-attempt unreliability source: transport
//! failures, rate limiting (already cooled down inside the client),
//! unparseable text, and illegal proposals. The first extracted move
//! that is legal in the current position wins; the board never changes
//! while the loop runs, so the legal-move check is always against the
//! same position the prompt advertised.

use agent_sdk::AgentClient;
use arena_core::extract_move;
use chess::{Board, ChessMove};
use thiserror::Error;

/// Attempt budget matching the historical retry ceiling.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

/// All attempts consumed without a legal move. The only acquisition
/// failure that terminates a game.
#[derive(Debug, Clone, Error)]
#[error("agent {agent} produced no legal move in {attempts} attempts")]
pub struct AcquisitionExhausted {
    pub agent: String,
    pub attempts: u32,
}

/// Obtains a validated move from `client`, consuming one attempt per
/// provider call regardless of how the attempt failed.
pub async fn acquire_move(
    client: &dyn AgentClient,
    board: &Board,
    opponent_last_move: Option<ChessMove>,
    max_attempts: u32,
) -> Result<ChessMove, AcquisitionExhausted> {
    for attempt in 1..=max_attempts {
        let text = match client.request_move(board, opponent_last_move).await {
            Ok(text) => text,
            Err(err) => {
                tracing::debug!(
                    agent = %client.name(),
                    attempt,
                    max_attempts,
                    error = %err,
                    "provider call failed"
                );
                continue;
            }
        };

        let Some(mv) = extract_move(&text, board) else {
            tracing::debug!(agent = %client.name(), attempt, "no move extracted from response");
            continue;
        };

        // Re-check against the authoritative legal-move set; the strict
        // extraction pass trusts syntax only and agents are untrusted.
        if board.legal(mv) {
            tracing::debug!(agent = %client.name(), attempt, %mv, "valid move found");
            return Ok(mv);
        }
        tracing::debug!(agent = %client.name(), attempt, %mv, "illegal move proposed");
    }

    tracing::warn!(agent = %client.name(), max_attempts, "gave up after max attempts");
    Err(AcquisitionExhausted {
        agent: client.name().to_string(),
        attempts: max_attempts,
    })
}

#[cfg(test)]
#[path = "acquisition_tests.rs"]
mod acquisition_tests;
