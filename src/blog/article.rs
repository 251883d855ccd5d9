//! Article composition.

use super::BlogWriter;
use crate::error::Result;
use std::collections::HashMap;
use tracing::{info, instrument};

impl BlogWriter {
    /// Expand a title into a long-form article grounded in the transcript.
    ///
    /// The response is returned untouched; length and structure are only
    /// requested in the prompt, never checked.
    #[instrument(skip(self, transcript), fields(title = %title, transcript_len = transcript.len()))]
    pub async fn generate_article(&self, title: &str, transcript: &str) -> Result<String> {
        let mut vars = HashMap::new();
        vars.insert("title".to_string(), title.to_string());
        vars.insert("transcript".to_string(), transcript.to_string());

        let article = self.complete(&self.prompts.article.user, &vars).await?;
        info!("Generated article ({} words)", article.split_whitespace().count());

        Ok(article)
    }
}
