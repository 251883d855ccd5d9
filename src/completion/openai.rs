//! OpenAI-compatible chat completion implementation.

use super::{CompletionRequest, CompletionService};
use crate::config::CompletionSettings;
use crate::error::{Result, VidblogError};
use crate::openai::create_client;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Completion service backed by an OpenAI-compatible chat endpoint.
pub struct OpenAICompletion {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
}

impl OpenAICompletion {
    /// Create a client for the given endpoint settings and credential.
    pub fn new(settings: &CompletionSettings, api_key: &str) -> Result<Self> {
        Ok(Self {
            client: create_client(settings, api_key)?,
        })
    }

    /// Create a client, reading the credential from the configured
    /// environment variable once.
    pub fn from_settings(settings: &CompletionSettings) -> Result<Self> {
        let api_key = settings.api_key()?;
        Self::new(settings, &api_key)
    }
}

#[async_trait]
impl CompletionService for OpenAICompletion {
    #[instrument(skip(self, request), fields(model = %request.model, prompt_len = request.prompt.len()))]
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestUserMessageArgs::default()
                .content(request.prompt.clone())
                .build()
                .map_err(|e| VidblogError::Completion(format!("Failed to build message: {}", e)))?
                .into(),
        ];

        let chat_request = CreateChatCompletionRequestArgs::default()
            .model(&request.model)
            .messages(messages)
            .temperature(request.temperature)
            .build()
            .map_err(|e| VidblogError::Completion(format!("Failed to build request: {}", e)))?;

        let response = self
            .client
            .chat()
            .create(chat_request)
            .await
            .map_err(|e| VidblogError::Completion(e.to_string()))?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| VidblogError::Completion("Empty response from model".to_string()))?;

        debug!("Received {} characters", content.len());
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation_with_explicit_key() {
        let settings = CompletionSettings::default();
        assert!(OpenAICompletion::new(&settings, "gsk_test").is_ok());
    }
}
