//! Secondary provider: plain completion-style endpoint.
//!
//! The endpoint URL comes from configuration; only the `{prompt, max_tokens}` request and
//! `choices[0].text` response shape is assumed.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{non_empty, read_success_body, ProviderError, SuggestionProvider, MAX_TOKENS};

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    prompt: &'a str,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    text: Option<String>,
}

pub struct CompletionProvider {
    client: Client,
    api_key: String,
    url: String,
}

impl CompletionProvider {
    pub fn new(client: Client, api_key: String, url: String) -> Self {
        Self {
            client,
            api_key,
            url,
        }
    }
}

#[async_trait]
impl SuggestionProvider for CompletionProvider {
    fn name(&self) -> &str {
        "deepseek"
    }

    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&CompletionRequest {
                prompt,
                max_tokens: MAX_TOKENS,
            })
            .send()
            .await?;

        let body = read_success_body(response).await?;
        let parsed: CompletionResponse = serde_json::from_str(&body)?;

        non_empty(parsed.choices.first().and_then(|c| c.text.as_deref()))
    }
}
