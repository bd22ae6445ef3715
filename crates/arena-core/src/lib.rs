//! Core domain logic for the LLM chess arena.
//!
//! This crate is pure: no IO, no clocks, no network. It provides:
//! - Agent identities, color assignment, and the display roster
//! - Free-text move extraction (strict coordinate pass, loose SAN pass)
//! - Material-based scoring and winner declaration
//! - Per-game results, their textual summaries, and batch statistics
//!
//! The provider clients live in `agent-sdk`; the retry loop, game
//! orchestration, and concurrency live in `arena-runner`.

pub mod agent;
pub mod extract;
pub mod material;
pub mod result;
pub mod stats;

pub use agent::*;
pub use extract::extract_move;
pub use material::*;
pub use result::*;
pub use stats::*;
