use super::*;

use std::time::Duration;

use agent_sdk::stub::{FirstLegalAgent, SleepyAgent};
use arena_core::AgentId;

fn roster() -> Roster {
    Roster::new("ChatGPT", "Gemini")
}

fn quick_config() -> GameConfig {
    GameConfig {
        max_attempts: 2,
        max_moves: 30,
    }
}

#[tokio::test]
async fn test_batch_completes_every_game() {
    let matchup = Matchup::new(
        Arc::new(FirstLegalAgent::new("ChatGPT")),
        Arc::new(FirstLegalAgent::new("Gemini")),
    );
    let runner = BatchRunner::new(matchup, roster(), quick_config());

    let stats = runner.run(5).await;

    assert_eq!(stats.games_completed, 5);
    let accounted = stats.tally(AgentId::A).wins
        + stats.tally(AgentId::B).wins
        + stats.ties
        + stats.inconclusive;
    assert_eq!(accounted, 5);

    let avg = stats.average_duration_secs().unwrap();
    assert!(avg >= 0.0);
    assert!(avg <= stats.total_elapsed_secs);
}

#[tokio::test]
async fn test_concurrent_batch_never_loses_or_double_counts() {
    // Random per-move sleeps scramble completion order
    let matchup = Matchup::new(
        Arc::new(SleepyAgent::new("ChatGPT", Duration::from_millis(5))),
        Arc::new(SleepyAgent::new("Gemini", Duration::from_millis(5))),
    );
    let config = GameConfig {
        max_attempts: 2,
        max_moves: 6,
    };
    let runner = BatchRunner::new(matchup, roster(), config);

    let stats = runner.run(50).await;

    assert_eq!(stats.games_completed, 50);
    assert_eq!(
        stats.tally(AgentId::A).wins
            + stats.tally(AgentId::B).wins
            + stats.ties
            + stats.inconclusive,
        50
    );
    // Color splits never exceed the win totals they belong to
    for id in [AgentId::A, AgentId::B] {
        let tally = stats.tally(id);
        assert_eq!(tally.wins, tally.wins_as_white + tally.wins_as_black);
    }
}

#[tokio::test]
async fn test_empty_batch_leaves_percentages_undefined() {
    let matchup = Matchup::new(
        Arc::new(FirstLegalAgent::new("ChatGPT")),
        Arc::new(FirstLegalAgent::new("Gemini")),
    );
    let runner = BatchRunner::new(matchup, roster(), quick_config());

    let stats = runner.run(0).await;

    assert_eq!(stats.games_completed, 0);
    assert_eq!(stats.win_percentage(AgentId::A), None);
    assert_eq!(stats.average_duration_secs(), None);
}
