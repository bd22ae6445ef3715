//! Provider configuration, injected from the environment.
//!
//! Endpoints and model identifiers have sensible defaults; credentials
//! are always required and never hard-coded.

use std::env;

use crate::error::ConfigError;

pub const OPENAI_DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const OPENAI_DEFAULT_MODEL: &str = "gpt-4o-mini";

pub const GEMINI_DEFAULT_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";
pub const GEMINI_DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Endpoint, credential, and model for one remote provider.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub endpoint: String,
    pub api_key: String,
    pub model: String,
}

impl ProviderConfig {
    /// Reads `OPENAI_ENDPOINT`, `OPENAI_API_KEY`, `OPENAI_MODEL`.
    pub fn openai_from_env() -> Result<Self, ConfigError> {
        Self::from_env("OPENAI", OPENAI_DEFAULT_ENDPOINT, OPENAI_DEFAULT_MODEL)
    }

    /// Reads `GEMINI_ENDPOINT`, `GEMINI_API_KEY`, `GEMINI_MODEL`.
    pub fn gemini_from_env() -> Result<Self, ConfigError> {
        Self::from_env("GEMINI", GEMINI_DEFAULT_ENDPOINT, GEMINI_DEFAULT_MODEL)
    }

    fn from_env(
        prefix: &str,
        default_endpoint: &str,
        default_model: &str,
    ) -> Result<Self, ConfigError> {
        let key_var = format!("{prefix}_API_KEY");
        let api_key = env::var(&key_var).map_err(|_| ConfigError::MissingVar(key_var))?;
        Ok(Self {
            endpoint: env::var(format!("{prefix}_ENDPOINT"))
                .unwrap_or_else(|_| default_endpoint.to_string()),
            api_key,
            model: env::var(format!("{prefix}_MODEL"))
                .unwrap_or_else(|_| default_model.to_string()),
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
