//! Turn prompt construction.
//!
//! The prompt embeds the full legal-move list as the authoritative
//! constraint (so the agent cannot claim ambiguity), the position FEN,
//! and the opponent's last move for context.

use chess::{Board, ChessMove, MoveGen};

/// A prompt split into system and user halves. Providers that take a
/// single text blob can use [`TurnPrompt::flattened`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnPrompt {
    pub system: String,
    pub user: String,
}

impl TurnPrompt {
    pub fn flattened(&self) -> String {
        format!("{}\n{}", self.system, self.user)
    }
}

/// Comma-separated UCI list of every legal move in the position.
pub fn legal_move_list(board: &Board) -> String {
    MoveGen::new_legal(board)
        .map(|mv| mv.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Builds the prompt for the agent on move. Pure function of its inputs.
pub fn build_turn_prompt(
    agent_name: &str,
    opponent_name: &str,
    board: &Board,
    opponent_last_move: Option<ChessMove>,
) -> TurnPrompt {
    let system = format!(
        "You are {agent_name}, playing chess against {opponent_name}. \
         Reply ONLY with your next move in valid UCI notation (e.g., e2e4) \
         or standard algebraic notation (e.g., Nf6). No extra text. \
         You may not repeat moves!"
    );

    let last_move = match opponent_last_move {
        Some(mv) => mv.to_string(),
        None => "None".to_string(),
    };
    let user = format!(
        "You must pick exactly one legal move from this list:\n{moves}\n\n\
         The current board state (FEN) is:\n{fen}\n\
         {opponent_name}'s last move was: {last_move}\n\
         If you propose a move not in the list above, it is illegal. \
         Return your next move now.",
        moves = legal_move_list(board),
        fen = board,
    );

    TurnPrompt { system, user }
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod prompt_tests;
