//! Blog generation: title proposals, article composition and output formats.

mod article;
mod format;
mod titles;

pub use format::{format_result, OutputFormat};
pub use titles::parse_titles;

use crate::completion::{CompletionRequest, CompletionService};
use crate::config::{CompletionSettings, Prompts};
use crate::error::Result;
use std::collections::HashMap;
use std::sync::Arc;

/// Issues the title and article prompts against a completion service.
pub struct BlogWriter {
    completion: Arc<dyn CompletionService>,
    prompts: Prompts,
    model: String,
    temperature: f32,
}

impl BlogWriter {
    /// Create a writer with default prompts.
    pub fn new(completion: Arc<dyn CompletionService>, settings: &CompletionSettings) -> Self {
        Self {
            completion,
            prompts: Prompts::default(),
            model: settings.model.clone(),
            temperature: settings.temperature,
        }
    }

    /// Set custom prompts (with user-defined variables).
    pub fn with_prompts(mut self, prompts: Prompts) -> Self {
        self.prompts = prompts;
        self
    }

    /// Render a template and submit it as one completion request.
    async fn complete(&self, template: &str, vars: &HashMap<String, String>) -> Result<String> {
        let prompt = self.prompts.render_with_custom(template, vars);
        let request = CompletionRequest {
            model: self.model.clone(),
            temperature: self.temperature,
            prompt,
        };
        self.completion.complete(&request).await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::completion::{CompletionRequest, CompletionService};
    use crate::error::{Result, VidblogError};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Completion service that replays canned responses and records requests.
    pub struct ScriptedCompletion {
        responses: Mutex<Vec<Result<String>>>,
        pub requests: Mutex<Vec<CompletionRequest>>,
    }

    impl ScriptedCompletion {
        pub fn new(responses: Vec<Result<String>>) -> Self {
            let mut responses = responses;
            responses.reverse();
            Self {
                responses: Mutex::new(responses),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn replying(texts: &[&str]) -> Self {
            Self::new(texts.iter().map(|t| Ok(t.to_string())).collect())
        }
    }

    #[async_trait]
    impl CompletionService for ScriptedCompletion {
        async fn complete(&self, request: &CompletionRequest) -> Result<String> {
            self.requests.lock().unwrap().push(request.clone());
            self.responses
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| Err(VidblogError::Completion("no scripted response".to_string())))
        }
    }
}
