//! Concurrent batch execution.
//!
//! Each game runs as its own tokio task; nothing is shared between
//! games. Outcomes travel through a single mpsc channel into the one
//! aggregation consumer, so statistics updates are serialized by
//! construction rather than by a lock.

use std::sync::Arc;

use arena_core::{BatchStats, Roster};
use tokio::sync::mpsc;

use crate::game::{GameConfig, GameOrchestrator, Matchup};
use crate::observer::{GameObserver, NullObserver};

pub struct BatchRunner {
    matchup: Arc<Matchup>,
    roster: Roster,
    config: GameConfig,
    observer: Arc<dyn GameObserver>,
}

impl BatchRunner {
    pub fn new(matchup: Matchup, roster: Roster, config: GameConfig) -> Self {
        Self {
            matchup: Arc::new(matchup),
            roster,
            config,
            observer: Arc::new(NullObserver),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn GameObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Runs `num_games` games concurrently and folds every outcome into
    /// the returned statistics.
    pub async fn run(&self, num_games: u32) -> BatchStats {
        let (tx, mut rx) = mpsc::channel(num_games.max(1) as usize);

        for game_no in 1..=num_games {
            let tx = tx.clone();
            let matchup = Arc::clone(&self.matchup);
            let observer = Arc::clone(&self.observer);
            let config = self.config;

            tokio::spawn(async move {
                tracing::info!(game_no, "starting game");
                let outcome = GameOrchestrator::new(config)
                    .with_observer(observer)
                    .play(&matchup)
                    .await;
                // Send fails only when the batch was abandoned
                let _ = tx.send(outcome).await;
            });
        }
        drop(tx);

        let mut stats = BatchStats::new();
        while let Some(outcome) = rx.recv().await {
            tracing::info!(game = %outcome.id, "{}", outcome.summary_line(&self.roster));
            stats.record(&outcome);
        }
        stats
    }
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod batch_tests;
