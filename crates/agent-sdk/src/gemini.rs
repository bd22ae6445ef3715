//! Gemini-style `generateContent` provider.
//!
//! The API takes a single text part (no system/user split) and carries
//! the credential as a query parameter rather than a header.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;

use crate::client::CompletionProvider;
use crate::config::ProviderConfig;
use crate::error::ProviderError;
use crate::prompt::TurnPrompt;

pub struct GeminiProvider {
    http: Client,
    config: ProviderConfig,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GeminiProvider {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl CompletionProvider for GeminiProvider {
    fn provider_name(&self) -> &str {
        "gemini"
    }

    async fn complete(&self, prompt: &TurnPrompt) -> Result<String, ProviderError> {
        let payload = json!({
            "contents": [{ "parts": [{ "text": prompt.flattened() }] }]
        });

        let response = self
            .http
            .post(&self.config.endpoint)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&payload)
            .send()
            .await?;

        match response.status() {
            StatusCode::TOO_MANY_REQUESTS => return Err(ProviderError::RateLimited),
            status if !status.is_success() => return Err(ProviderError::Status(status.as_u16())),
            _ => {}
        }

        let body: GenerateResponse = response.json().await?;
        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text.trim().to_string())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(ProviderError::Malformed("no candidate text".to_string()));
        }
        Ok(text)
    }
}
