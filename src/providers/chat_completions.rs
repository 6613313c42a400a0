//! OpenAI-compatible chat-completions client (OpenRouter and friends).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use super::CompletionClient;
use crate::config::ApiConfig;
use crate::error::{DictError, Result};

/// Sent as `HTTP-Referer`; OpenRouter uses it for app attribution.
pub const APP_REFERER: &str = "http://localhost";

/// Sent as `X-Title`.
pub const APP_TITLE: &str = "AI Dictionary";

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Single-turn chat-completions client.
pub struct ChatCompletionsClient {
    url: String,
    api_key: String,
    model: String,
    client: Client,
}

impl std::fmt::Debug for ChatCompletionsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatCompletionsClient")
            .field("url", &self.url)
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .finish()
    }
}

impl ChatCompletionsClient {
    /// Build a client. `timeout` of `None` keeps reqwest's default (no
    /// overall request timeout).
    pub fn new(
        url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| DictError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            url: url.into(),
            api_key: api_key.into(),
            model: model.into(),
            client,
        })
    }

    pub fn from_config(api: &ApiConfig) -> Result<Self> {
        Self::new(
            &api.url,
            &api.key,
            &api.model,
            api.timeout_secs.map(Duration::from_secs),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Request body: the configured model and one user message.
    pub fn build_request_body(&self, prompt: &str) -> Value {
        json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }]
        })
    }

    /// Pull the first choice's message content out of a response body.
    ///
    /// The HTTP status is not consulted: provider error bodies do not match
    /// the envelope and surface here with the raw text attached.
    pub fn parse_response(body: &str) -> Result<String> {
        let parsed: ChatCompletion =
            serde_json::from_str(body).map_err(|_| DictError::ApiResponseParseFailed {
                body: body.to_string(),
            })?;
        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DictError::ApiResponseParseFailed {
                body: body.to_string(),
            })?;
        Ok(choice.message.content.unwrap_or_default())
    }
}

#[async_trait]
impl CompletionClient for ChatCompletionsClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let body = self.build_request_body(prompt);
        debug!(model = %self.model, prompt_chars = prompt.chars().count(), "Completion request");

        let response = self
            .client
            .post(&self.url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .header("HTTP-Referer", APP_REFERER)
            .header("X-Title", APP_TITLE)
            .json(&body)
            .send()
            .await
            .map_err(|e| DictError::ApiCallFailed(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| DictError::ApiCallFailed(e.to_string()))?;
        debug!(status = status.as_u16(), bytes = text.len(), "Completion response");

        Self::parse_response(&text)
    }
}
