//! LLM Client — the single point of entry for all text-generation API calls.
//!
//! ARCHITECTURAL RULE: No other module may call a provider API directly.
//! The suggestion chain only sees `SuggestionProvider` trait objects built here.
//!
//! Generation parameters are hardcoded so every provider receives the same bounds.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::config::Config;

pub mod completion;
pub mod openai;

pub use completion::CompletionProvider;
pub use openai::OpenAiChatProvider;

/// The chat model used by the primary provider.
pub const MODEL: &str = "gpt-3.5-turbo";
/// Output bound sent to every provider.
pub const MAX_TOKENS: u32 = 150;
pub const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("provider returned empty content")]
    EmptyContent,
}

/// One tier of the suggestion chain: takes a finished prompt, returns trimmed text.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Short name used in logs ("openai", "deepseek").
    fn name(&self) -> &str;

    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Builds the HTTP client shared by every provider.
pub fn build_http_client(timeout_secs: u64) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .context("Failed to build HTTP client")
}

/// Builds the ordered provider list from the configured credentials.
/// Primary first, secondary second; a provider without a key is omitted.
pub fn providers_from_config(
    config: &Config,
    client: Client,
) -> Vec<Arc<dyn SuggestionProvider>> {
    let mut providers: Vec<Arc<dyn SuggestionProvider>> = Vec::new();

    if let Some(key) = &config.credentials.primary_api_key {
        providers.push(Arc::new(OpenAiChatProvider::new(
            client.clone(),
            key.clone(),
            config.openai_base_url.clone(),
        )));
    }
    if let Some(key) = &config.credentials.secondary_api_key {
        providers.push(Arc::new(CompletionProvider::new(
            client,
            key.clone(),
            config.secondary_completions_url.clone(),
        )));
    }

    info!(
        "Suggestion providers: [{}]",
        providers
            .iter()
            .map(|p| p.name())
            .collect::<Vec<_>>()
            .join(", ")
    );
    providers
}

/// Reads a provider response body, mapping non-success statuses to `ProviderError::Api`.
/// Uses the `{"error": {"message": ...}}` envelope when the provider sends one.
pub(crate) async fn read_success_body(
    response: reqwest::Response,
) -> Result<String, ProviderError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
            .map(|e| e.error.message)
            .unwrap_or(body);
        return Err(ProviderError::Api {
            status: status.as_u16(),
            message,
        });
    }

    Ok(body)
}

/// Trims provider output, rejecting responses with nothing left.
pub(crate) fn non_empty(text: Option<&str>) -> Result<String, ProviderError> {
    match text.map(str::trim) {
        Some(t) if !t.is_empty() => Ok(t.to_string()),
        _ => Err(ProviderError::EmptyContent),
    }
}
