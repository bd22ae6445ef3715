//! Error taxonomy for provider calls.
//!
//! Transport failures, non-success statuses, and rate limiting are all
//! recovered locally by the acquisition loop's bounded retries; none of
//! them is fatal to a game on its own.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    /// Network-level failure; no text was received.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// Provider answered with a non-success, non-429 status.
    #[error("provider returned HTTP {0}")]
    Status(u16),

    /// HTTP 429; the client cools down before reporting this.
    #[error("provider rate limited")]
    RateLimited,

    /// A 2xx response whose payload carried no usable completion.
    #[error("malformed completion payload: {0}")]
    Malformed(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(String),
}
