//! Single-game orchestration.
//!
//! One orchestrator owns one game: the board, the color assignment, the
//! per-agent last-move memory, and the move counter. Play alternates
//! strictly between the two agents; the board is only ever mutated with
//! a move the acquisition loop validated. Each orchestrator produces
//! exactly one [`GameOutcome`].

use std::sync::Arc;
use std::time::Instant;

use arena_core::{
    winner_by_material, AgentId, ColorAssignment, GameOutcome, Side, TerminationReason,
};
use agent_sdk::AgentClient;
use chess::{Board, ChessMove, Game};
use chrono::Utc;
use uuid::Uuid;

use crate::acquisition::{acquire_move, DEFAULT_MAX_ATTEMPTS};
use crate::observer::{GameObserver, NullObserver};

/// Per-game knobs.
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    /// Acquisition attempts per turn before the mover forfeits.
    pub max_attempts: u32,
    /// Plies before the game is stopped and scored as it stands.
    pub max_moves: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            max_moves: 200,
        }
    }
}

/// The two clients of a batch, addressed by agent id.
pub struct Matchup {
    a: Arc<dyn AgentClient>,
    b: Arc<dyn AgentClient>,
}

impl Matchup {
    pub fn new(a: Arc<dyn AgentClient>, b: Arc<dyn AgentClient>) -> Self {
        Self { a, b }
    }

    pub fn client_for(&self, id: AgentId) -> &dyn AgentClient {
        match id {
            AgentId::A => self.a.as_ref(),
            AgentId::B => self.b.as_ref(),
        }
    }
}

/// State machine for one game: `InProgress` until the rules engine
/// reports a terminal state, the move cap is hit, or the agent on move
/// exhausts its acquisition attempts.
pub struct GameOrchestrator {
    id: Uuid,
    game: Game,
    assignment: ColorAssignment,
    last_move_a: Option<ChessMove>,
    last_move_b: Option<ChessMove>,
    config: GameConfig,
    observer: Arc<dyn GameObserver>,
}

impl GameOrchestrator {
    /// Fresh board, random color assignment.
    pub fn new(config: GameConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            game: Game::new(),
            assignment: ColorAssignment::random(),
            last_move_a: None,
            last_move_b: None,
            config,
            observer: Arc::new(NullObserver),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn GameObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Fixes the color mapping; tests need determinism here.
    pub fn with_assignment(mut self, assignment: ColorAssignment) -> Self {
        self.assignment = assignment;
        self
    }

    /// Starts from a custom position instead of the initial one.
    pub fn with_board(mut self, board: Board) -> Self {
        self.game = Game::new_with_board(board);
        self
    }

    pub fn assignment(&self) -> ColorAssignment {
        self.assignment
    }

    fn last_move_of(&self, id: AgentId) -> Option<ChessMove> {
        match id {
            AgentId::A => self.last_move_a,
            AgentId::B => self.last_move_b,
        }
    }

    fn record_move(&mut self, id: AgentId, mv: ChessMove) {
        match id {
            AgentId::A => self.last_move_a = Some(mv),
            AgentId::B => self.last_move_b = Some(mv),
        }
    }

    /// Plays the game to completion and emits its single outcome.
    pub async fn play(mut self, matchup: &Matchup) -> GameOutcome {
        let started = Instant::now();
        let mut plies = 0u32;

        let termination = loop {
            if self.game.result().is_some() {
                break TerminationReason::NaturalEnd;
            }
            if self.game.can_declare_draw() {
                self.game.declare_draw();
                break TerminationReason::NaturalEnd;
            }
            if plies >= self.config.max_moves {
                break TerminationReason::MoveLimit;
            }

            let board = self.game.current_position();
            let mover = self.assignment.agent_on(Side::from(board.side_to_move()));
            let client = matchup.client_for(mover);
            let opponent_last = self.last_move_of(mover.opponent());

            match acquire_move(client, &board, opponent_last, self.config.max_attempts).await {
                Ok(mv) => {
                    if !self.game.make_move(mv) {
                        // Unreachable for a validated move; bail rather
                        // than loop on an unchanged board.
                        tracing::error!(game = %self.id, %mv, "rules engine rejected a validated move");
                        break TerminationReason::NaturalEnd;
                    }
                    self.record_move(mover, mv);
                    plies += 1;
                    self.observer
                        .on_ply(self.id, &self.game.current_position(), mover, mv, plies);
                }
                Err(exhausted) => {
                    tracing::warn!(game = %self.id, error = %exhausted, "game forfeited by omission");
                    break TerminationReason::AcquisitionExhausted(mover);
                }
            }
        };

        let final_board = self.game.current_position();
        // Winner by remaining material only; how the game ended does not
        // enter into it. Exhausted games stay inconclusive.
        let (winner, winner_side) = match termination {
            TerminationReason::AcquisitionExhausted(_) => (None, None),
            _ => match winner_by_material(&final_board) {
                Some(side) => (Some(self.assignment.agent_on(side)), Some(side)),
                None => (None, None),
            },
        };

        GameOutcome {
            id: self.id,
            winner,
            winner_side,
            final_fen: final_board.to_string(),
            moves: plies,
            elapsed_secs: started.elapsed().as_secs_f64(),
            termination,
            completed_at: Utc::now(),
        }
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
