//! Optional per-ply presentation hook.
//!
//! Headless batch runs use [`NullObserver`]; anything that wants to
//! render the board (a UI, a logger) implements [`GameObserver`] and is
//! called after every applied ply.

use arena_core::{AgentId, Roster};
use chess::{Board, ChessMove};
use uuid::Uuid;

pub trait GameObserver: Send + Sync {
    fn on_ply(&self, _game_id: Uuid, _board: &Board, _mover: AgentId, _mv: ChessMove, _ply: u32) {}
}

/// Does nothing; for headless runs.
pub struct NullObserver;

impl GameObserver for NullObserver {}

/// Logs each ply with the mover's display name and the running material
/// balance.
pub struct TracingObserver {
    roster: Roster,
}

impl TracingObserver {
    pub fn new(roster: Roster) -> Self {
        Self { roster }
    }
}

impl GameObserver for TracingObserver {
    fn on_ply(&self, game_id: Uuid, board: &Board, mover: AgentId, mv: ChessMove, ply: u32) {
        tracing::info!(
            game = %game_id,
            ply,
            agent = %self.roster.name(mover),
            %mv,
            material = %arena_core::balance_summary(board),
            "ply applied"
        );
    }
}
