//! Move extraction from free-form provider text.
//!
//! Agents are asked for bare UCI or SAN but routinely wrap the move in
//! prose. Extraction is a two-stage tokenizer: a strict coordinate pass
//! that trusts its own syntax, then a loose algebraic pass whose
//! candidate is resolved against the current position. Legality of the
//! strict token is deliberately NOT checked here; that belongs to the
//! acquisition loop.

use std::str::FromStr;
use std::sync::OnceLock;

use chess::{Board, ChessMove};
use regex::Regex;

/// Coordinate move: origin square, destination square, optional promotion.
fn coordinate_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b([a-h][1-8])([a-h][1-8])([qrbnQRBN])?\b").expect("coordinate pattern")
    })
}

/// Loose SAN: piece letter, optional disambiguation, optional capture,
/// destination, optional promotion, optional check/mate marker.
fn algebraic_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b([KQRNB]?[a-h]?[1-8]?x?[a-h][1-8](=[QRNB])?[+#]?)").expect("san pattern")
    })
}

/// Extracts a candidate move from `text`.
///
/// First match wins: a strict coordinate token is returned as-is
/// (syntactically valid, semantically unchecked), otherwise a SAN-like
/// token is resolved against `board`'s legal-move set. Returns `None`
/// when neither pass produces a move.
pub fn extract_move(text: &str, board: &Board) -> Option<ChessMove> {
    if let Some(mv) = strict_coordinate(text) {
        return Some(mv);
    }
    loose_algebraic(text, board)
}

fn strict_coordinate(text: &str) -> Option<ChessMove> {
    let caps = coordinate_re().captures(text)?;
    let mut uci = String::with_capacity(5);
    uci.push_str(&caps[1]);
    uci.push_str(&caps[2]);
    if let Some(promo) = caps.get(3) {
        // The move parser only accepts lowercase promotion pieces.
        uci.push_str(&promo.as_str().to_ascii_lowercase());
    }
    ChessMove::from_str(&uci).ok()
}

fn loose_algebraic(text: &str, board: &Board) -> Option<ChessMove> {
    let caps = algebraic_re().captures(text)?;
    let san = caps[1].trim_end_matches(['+', '#']);
    ChessMove::from_san(board, san).ok()
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod extract_tests;
