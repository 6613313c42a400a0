//! Completion API clients.
//!
//! The lookup engine only needs "send this prompt, give me the model's
//! answer text", so the seam is a single-method trait. The production
//! implementation speaks the OpenAI-compatible chat-completions protocol.

pub mod chat_completions;

use async_trait::async_trait;

use crate::error::Result;

pub use chat_completions::{ChatCompletionsClient, APP_REFERER, APP_TITLE};

/// Sends one prompt to a completion API and returns the model's answer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// One blocking round trip, no retries.
    ///
    /// Fails with `ApiCallFailed` on transport errors and with
    /// `ApiResponseParseFailed` when the body is not a completion with at
    /// least one choice.
    async fn complete(&self, prompt: &str) -> Result<String>;
}
