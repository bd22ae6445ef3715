use super::*;

use chrono::Utc;
use uuid::Uuid;

fn won(winner: AgentId, side: Side, elapsed: f64) -> GameOutcome {
    GameOutcome {
        id: Uuid::new_v4(),
        winner: Some(winner),
        winner_side: Some(side),
        final_fen: String::new(),
        moves: 40,
        elapsed_secs: elapsed,
        termination: TerminationReason::NaturalEnd,
        completed_at: Utc::now(),
    }
}

fn unresolved(termination: TerminationReason) -> GameOutcome {
    GameOutcome {
        winner: None,
        winner_side: None,
        termination,
        ..won(AgentId::A, Side::White, 5.0)
    }
}

#[test]
fn test_empty_stats_have_no_derived_figures() {
    let stats = BatchStats::new();
    assert_eq!(stats.win_percentage(AgentId::A), None);
    assert_eq!(stats.average_duration_secs(), None);
    // Report still renders without dividing by zero
    let report = stats.generate_report(&Roster::new("ChatGPT", "Gemini"));
    assert!(report.contains("Total Games: 0"));
}

#[test]
fn test_record_applies_win_and_color_together() {
    let mut stats = BatchStats::new();
    stats.record(&won(AgentId::A, Side::White, 10.0));
    stats.record(&won(AgentId::A, Side::Black, 20.0));
    stats.record(&won(AgentId::B, Side::Black, 30.0));

    assert_eq!(stats.games_completed, 3);
    assert_eq!(stats.tally(AgentId::A).wins, 2);
    assert_eq!(stats.tally(AgentId::A).wins_as_white, 1);
    assert_eq!(stats.tally(AgentId::A).wins_as_black, 1);
    assert_eq!(stats.tally(AgentId::B).wins, 1);
    assert_eq!(stats.tally(AgentId::B).wins_as_white, 0);

    // A win is never double-counted across agents
    assert_eq!(
        stats.tally(AgentId::A).wins + stats.tally(AgentId::B).wins,
        3
    );
}

#[test]
fn test_ties_and_inconclusive_are_separated() {
    let mut stats = BatchStats::new();
    stats.record(&unresolved(TerminationReason::MoveLimit));
    stats.record(&unresolved(TerminationReason::NaturalEnd));
    stats.record(&unresolved(TerminationReason::AcquisitionExhausted(
        AgentId::B,
    )));

    assert_eq!(stats.games_completed, 3);
    assert_eq!(stats.ties, 2);
    assert_eq!(stats.inconclusive, 1);
    assert_eq!(stats.tally(AgentId::A).wins, 0);
    assert_eq!(stats.tally(AgentId::B).wins, 0);
}

#[test]
fn test_percentages_and_average() {
    let mut stats = BatchStats::new();
    stats.record(&won(AgentId::A, Side::White, 10.0));
    stats.record(&won(AgentId::B, Side::White, 30.0));
    stats.record(&unresolved(TerminationReason::MoveLimit));
    stats.record(&won(AgentId::A, Side::Black, 20.0));

    assert_eq!(stats.win_percentage(AgentId::A), Some(50.0));
    assert_eq!(stats.win_percentage(AgentId::B), Some(25.0));
    assert_eq!(stats.average_duration_secs(), Some(16.25));
}

#[test]
fn test_report_mentions_both_agents() {
    let mut stats = BatchStats::new();
    stats.record(&won(AgentId::A, Side::White, 12.0));
    let report = stats.generate_report(&Roster::new("ChatGPT", "Gemini"));
    assert!(report.contains("ChatGPT: 1 wins (100.00%)"));
    assert!(report.contains("Gemini: 0 wins (0.00%)"));
    assert!(report.contains("Average Time per Game: 12.00 seconds"));
}
