//! Agent SDK for the LLM chess arena.
//!
//! An *agent* is one of the two move-proposing parties in a game, backed
//! by a remote text-completion provider. This crate provides:
//! - The [`CompletionProvider`] trait (`text <- complete(prompt)`) and
//!   its OpenAI-style and Gemini-style implementations
//! - The [`AgentClient`] trait the acquisition loop talks to, plus
//!   [`ProviderAgent`], which owns prompt building and rate-limit
//!   backoff for a real provider
//! - Deterministic stub agents for tests and offline runs

pub mod client;
pub mod config;
pub mod error;
pub mod gemini;
pub mod openai;
pub mod prompt;
pub mod stub;

pub use client::{AgentClient, BackoffPolicy, CompletionProvider, ProviderAgent};
pub use config::ProviderConfig;
pub use error::{ConfigError, ProviderError};
pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;
pub use prompt::{build_turn_prompt, TurnPrompt};
