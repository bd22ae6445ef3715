//! Arena runner: the orchestration engine of the LLM chess arena.
//!
//! This crate owns the control flow with real failure handling:
//! - [`acquisition`] — the bounded retry loop turning unreliable
//!   provider text into a validated move
//! - [`game`] — the single-game state machine alternating the two
//!   agents until a terminal state
//! - [`batch`] — N concurrent games feeding one results channel
//! - [`observer`] — optional per-ply presentation hook

pub mod acquisition;
pub mod batch;
pub mod game;
pub mod observer;

pub use acquisition::{acquire_move, AcquisitionExhausted, DEFAULT_MAX_ATTEMPTS};
pub use batch::BatchRunner;
pub use game::{GameConfig, GameOrchestrator, Matchup};
pub use observer::{GameObserver, NullObserver, TracingObserver};
