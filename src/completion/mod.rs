//! Text completion for title and article generation.

mod openai;

pub use openai::OpenAICompletion;

use crate::error::Result;
use async_trait::async_trait;

/// A single-prompt completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Model identifier understood by the provider.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Fully rendered prompt.
    pub prompt: String,
}

/// Trait for text completion services.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Submit one prompt and return the raw response text.
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}
