//! Batch statistics aggregation.
//!
//! `BatchStats` is owned by the single aggregation consumer; one call to
//! [`BatchStats::record`] applies a whole game's increments (win + color
//! split) together, so results can never interleave. Derived figures
//! (percentages, averages) are computed only at report time.

use serde::{Deserialize, Serialize};

use crate::agent::{AgentId, Roster, Side};
use crate::result::{GameOutcome, TerminationReason};

/// Win counts for one agent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentTally {
    pub wins: u32,
    pub wins_as_white: u32,
    pub wins_as_black: u32,
}

/// Aggregate statistics over a batch of games.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchStats {
    pub agent_a: AgentTally,
    pub agent_b: AgentTally,
    pub games_completed: u32,
    pub ties: u32,
    pub inconclusive: u32,
    pub total_elapsed_secs: f64,
}

impl BatchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tally(&self, id: AgentId) -> &AgentTally {
        match id {
            AgentId::A => &self.agent_a,
            AgentId::B => &self.agent_b,
        }
    }

    fn tally_mut(&mut self, id: AgentId) -> &mut AgentTally {
        match id {
            AgentId::A => &mut self.agent_a,
            AgentId::B => &mut self.agent_b,
        }
    }

    /// Folds one finished game into the totals.
    pub fn record(&mut self, outcome: &GameOutcome) {
        self.games_completed += 1;
        self.total_elapsed_secs += outcome.elapsed_secs;

        match (outcome.winner, outcome.winner_side) {
            (Some(id), Some(side)) => {
                let tally = self.tally_mut(id);
                tally.wins += 1;
                match side {
                    Side::White => tally.wins_as_white += 1,
                    Side::Black => tally.wins_as_black += 1,
                }
            }
            _ => match outcome.termination {
                TerminationReason::AcquisitionExhausted(_) => self.inconclusive += 1,
                _ => self.ties += 1,
            },
        }
    }

    /// Win percentage over all completed games; `None` before any game
    /// finishes (never divides by zero).
    pub fn win_percentage(&self, id: AgentId) -> Option<f64> {
        if self.games_completed == 0 {
            return None;
        }
        Some(self.tally(id).wins as f64 / self.games_completed as f64 * 100.0)
    }

    pub fn average_duration_secs(&self) -> Option<f64> {
        if self.games_completed == 0 {
            return None;
        }
        Some(self.total_elapsed_secs / self.games_completed as f64)
    }

    /// Generate a text report
    pub fn generate_report(&self, roster: &Roster) -> String {
        let mut report = String::new();
        report.push_str("=== Arena Statistics ===\n\n");
        report.push_str(&format!(
            "Total Games: {} (ties: {}, inconclusive: {})\n",
            self.games_completed, self.ties, self.inconclusive
        ));

        for id in [AgentId::A, AgentId::B] {
            let tally = self.tally(id);
            let pct = self.win_percentage(id).unwrap_or(0.0);
            report.push_str(&format!(
                "{}: {} wins ({:.2}%) - {} as White, {} as Black\n",
                roster.name(id),
                tally.wins,
                pct,
                tally.wins_as_white,
                tally.wins_as_black
            ));
        }

        match self.average_duration_secs() {
            Some(avg) => {
                report.push_str(&format!("Average Time per Game: {:.2} seconds\n", avg))
            }
            None => report.push_str("Average Time per Game: n/a\n"),
        }

        report
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod stats_tests;
