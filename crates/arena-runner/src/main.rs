//! Arena CLI
//!
//! Pits two text-completion-backed agents against each other over a
//! batch of concurrent chess games and prints aggregate statistics.

use std::env;
use std::sync::Arc;

use agent_sdk::stub::FirstLegalAgent;
use agent_sdk::{BackoffPolicy, GeminiProvider, OpenAiProvider, ProviderAgent, ProviderConfig};
use anyhow::Context;
use arena_core::Roster;
use arena_runner::{BatchRunner, GameConfig, Matchup, TracingObserver};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("LLM Chess Arena");
    println!();
    println!("Usage:");
    println!("  arena [--games N] [--attempts N] [--max-moves N] [--offline]");
    println!();
    println!("Options:");
    println!("  --games N      Number of concurrent games to run (default 10)");
    println!("  --attempts N   Move-acquisition attempts per turn (default 100)");
    println!("  --max-moves N  Ply cap per game before scoring as-is (default 200)");
    println!("  --offline      Use deterministic stub agents; no credentials needed");
    println!();
    println!("Environment:");
    println!("  OPENAI_API_KEY / OPENAI_MODEL / OPENAI_ENDPOINT");
    println!("  GEMINI_API_KEY / GEMINI_MODEL / GEMINI_ENDPOINT");
}

struct Options {
    games: u32,
    attempts: u32,
    max_moves: u32,
    offline: bool,
}

fn parse_options(args: &[String]) -> Option<Options> {
    let mut options = Options {
        games: 10,
        attempts: 100,
        max_moves: 200,
        offline: false,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    options.games = args[i + 1].parse().unwrap_or(10);
                    i += 1;
                }
            }
            "--attempts" | "-a" => {
                if i + 1 < args.len() {
                    options.attempts = args[i + 1].parse().unwrap_or(100);
                    i += 1;
                }
            }
            "--max-moves" | "-m" => {
                if i + 1 < args.len() {
                    options.max_moves = args[i + 1].parse().unwrap_or(200);
                    i += 1;
                }
            }
            "--offline" => options.offline = true,
            "--help" | "-h" => return None,
            other => {
                eprintln!("Unknown argument: {}", other);
                return None;
            }
        }
        i += 1;
    }

    Some(options)
}

fn build_matchup(offline: bool) -> anyhow::Result<Matchup> {
    if offline {
        return Ok(Matchup::new(
            Arc::new(FirstLegalAgent::new("ChatGPT")),
            Arc::new(FirstLegalAgent::new("Gemini")),
        ));
    }

    let openai = ProviderConfig::openai_from_env().context("OpenAI configuration")?;
    let gemini = ProviderConfig::gemini_from_env().context("Gemini configuration")?;

    Ok(Matchup::new(
        Arc::new(ProviderAgent::new(
            "ChatGPT",
            "Gemini",
            Box::new(OpenAiProvider::new(openai)),
            BackoffPolicy::openai(),
        )),
        Arc::new(ProviderAgent::new(
            "Gemini",
            "ChatGPT",
            Box::new(GeminiProvider::new(gemini)),
            BackoffPolicy::gemini(),
        )),
    ))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_options(&args) {
        Some(options) => options,
        None => {
            print_usage();
            return Ok(());
        }
    };

    let roster = Roster::new("ChatGPT", "Gemini");
    let matchup = build_matchup(options.offline)?;
    let config = GameConfig {
        max_attempts: options.attempts,
        max_moves: options.max_moves,
    };

    println!(
        "=== Arena: ChatGPT vs Gemini === ({} games, {} attempts/turn, {} ply cap)",
        options.games, options.attempts, options.max_moves
    );

    let runner = BatchRunner::new(matchup, roster.clone(), config)
        .with_observer(Arc::new(TracingObserver::new(roster.clone())));
    let stats = runner.run(options.games).await;

    println!();
    print!("{}", stats.generate_report(&roster));
    Ok(())
}
