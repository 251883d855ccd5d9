//! OpenAI-compatible client configuration.

use crate::config::CompletionSettings;
use crate::error::{Result, VidblogError};
use async_openai::{config::OpenAIConfig, Client};
use std::time::Duration;

/// Create a client for the configured endpoint.
///
/// The API key is passed in explicitly; nothing here touches the process
/// environment.
pub fn create_client(settings: &CompletionSettings, api_key: &str) -> Result<Client<OpenAIConfig>> {
    create_client_with_timeout(settings, api_key, Duration::from_secs(settings.timeout_secs))
}

/// Create a client with a custom timeout.
pub fn create_client_with_timeout(
    settings: &CompletionSettings,
    api_key: &str,
    timeout: Duration,
) -> Result<Client<OpenAIConfig>> {
    let http_client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| VidblogError::Config(format!("Failed to create HTTP client: {}", e)))?;

    let config = OpenAIConfig::new()
        .with_api_base(settings.api_base.trim_end_matches('/'))
        .with_api_key(api_key);

    Ok(Client::with_config(config).with_http_client(http_client))
}
