//! Per-game results and their textual summaries.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::agent::{AgentId, Roster, Side};

/// Why a game stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminationReason {
    /// The rules engine reported a terminal state (mate, stalemate,
    /// claimable draw).
    NaturalEnd,
    /// The configured move cap was reached.
    MoveLimit,
    /// The named agent ran out of acquisition attempts; it forfeits by
    /// omission and no winner is declared.
    AcquisitionExhausted(AgentId),
}

/// Immutable outcome of a single game, produced exactly once by the
/// orchestrator and handed to the batch aggregator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameOutcome {
    pub id: Uuid,
    pub winner: Option<AgentId>,
    pub winner_side: Option<Side>,
    pub final_fen: String,
    pub moves: u32,
    pub elapsed_secs: f64,
    pub termination: TerminationReason,
    pub completed_at: DateTime<Utc>,
}

impl GameOutcome {
    /// One-line textual summary, fixed form so it can be re-parsed.
    pub fn summary_line(&self, roster: &Roster) -> String {
        let verdict = match (self.winner, self.winner_side, self.termination) {
            (Some(id), Some(side), _) => {
                format!("{} wins ({})", side, roster.name(id))
            }
            (_, _, TerminationReason::AcquisitionExhausted(id)) => {
                format!("inconclusive ({} stalled)", roster.name(id))
            }
            _ => "It's a tie".to_string(),
        };
        format!(
            "Result: {} | Elapsed Time: {:.2} seconds",
            verdict, self.elapsed_secs
        )
    }
}

/// The (winner, color, time) tuple recovered from a summary line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedSummary {
    pub winner: AgentId,
    pub side: Side,
    pub elapsed_secs: f64,
}

fn summary_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"Result: (White|Black) wins \(([^)]+)\) \| Elapsed Time: ([\d.]+) seconds")
            .expect("summary pattern")
    })
}

/// Recovers the decisive-game tuple from a summary line.
///
/// Only explicit win announcements match; ties and inconclusive games
/// return `None`, mirroring the pattern the batch layer historically
/// aggregated with.
pub fn parse_summary(line: &str, roster: &Roster) -> Option<ParsedSummary> {
    let caps = summary_re().captures(line)?;
    let side = match &caps[1] {
        "White" => Side::White,
        _ => Side::Black,
    };
    let winner = roster.id_of(&caps[2])?;
    let elapsed_secs = caps[3].parse().ok()?;
    Some(ParsedSummary {
        winner,
        side,
        elapsed_secs,
    })
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod result_tests;
