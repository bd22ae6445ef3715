//! Material-based scoring.
//!
//! The arena declares winners by remaining material at the end of a
//! game, not by checkmate/stalemate semantics: whoever is ahead on
//! material when the game stops wins, equal material is a tie. Kings
//! carry no value.

use chess::{Board, Color, Piece};

use crate::agent::Side;

const PIECE_VALUES: [(Piece, i32); 5] = [
    (Piece::Pawn, 1),
    (Piece::Knight, 3),
    (Piece::Bishop, 3),
    (Piece::Rook, 5),
    (Piece::Queen, 9),
];

/// Conventional value of a piece (king excluded from scoring).
pub fn piece_value(piece: Piece) -> i32 {
    PIECE_VALUES
        .iter()
        .find(|(p, _)| *p == piece)
        .map(|(_, v)| *v)
        .unwrap_or(0)
}

/// Material balance: positive if White is ahead, negative if Black is.
pub fn material_balance(board: &Board) -> i32 {
    let mut score = 0;
    for (piece, value) in PIECE_VALUES {
        let owned = *board.pieces(piece);
        score += (owned & *board.color_combined(Color::White)).popcnt() as i32 * value;
        score -= (owned & *board.color_combined(Color::Black)).popcnt() as i32 * value;
    }
    score
}

/// The side ahead on material, or `None` for exact equality.
pub fn winner_by_material(board: &Board) -> Option<Side> {
    match material_balance(board) {
        score if score > 0 => Some(Side::White),
        score if score < 0 => Some(Side::Black),
        _ => None,
    }
}

/// Human-readable balance, e.g. "White leads by 3".
pub fn balance_summary(board: &Board) -> String {
    let score = material_balance(board);
    if score > 0 {
        format!("White leads by {}", score)
    } else if score < 0 {
        format!("Black leads by {}", -score)
    } else {
        "Scores are even".to_string()
    }
}

#[cfg(test)]
#[path = "material_tests.rs"]
mod material_tests;
