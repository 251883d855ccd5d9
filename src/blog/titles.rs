//! Title proposals.

use super::BlogWriter;
use crate::error::{Result, VidblogError};
use std::collections::HashMap;
use tracing::{info, instrument, warn};

/// Number of titles the default prompt asks for.
const REQUESTED_TITLES: usize = 2;

impl BlogWriter {
    /// Ask the model for candidate titles based on a transcript.
    ///
    /// The transcript goes into the prompt verbatim. Whatever non-blank
    /// lines come back are the candidates, in order; an empty list is an
    /// error.
    #[instrument(skip(self, transcript), fields(transcript_len = transcript.len()))]
    pub async fn generate_titles(&self, transcript: &str) -> Result<Vec<String>> {
        let mut vars = HashMap::new();
        vars.insert("transcript".to_string(), transcript.to_string());

        let raw = self.complete(&self.prompts.titles.user, &vars).await?;
        let titles = parse_titles(&raw);

        if titles.is_empty() {
            return Err(VidblogError::EmptyTitles);
        }
        if titles.len() != REQUESTED_TITLES {
            warn!(
                "Model returned {} title lines (asked for {})",
                titles.len(),
                REQUESTED_TITLES
            );
        }

        info!("Generated {} title candidates", titles.len());
        Ok(titles)
    }
}

/// Split a raw model response into title candidates.
///
/// Lines are trimmed and blank lines dropped. Numbering, quotes and
/// duplicates are kept as the model wrote them.
pub fn parse_titles(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}


#[cfg(test)]
mod writer_tests {
    use crate::blog::testing::ScriptedCompletion;
    use crate::blog::BlogWriter;
    use crate::config::CompletionSettings;
    use crate::error::VidblogError;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_generate_titles_sends_transcript_verbatim() {
        let completion = Arc::new(ScriptedCompletion::replying(&["Title A\n\nTitle B"]));
        let writer = BlogWriter::new(completion.clone(), &CompletionSettings::default());

        let transcript = "so {{title}} today we talk about rust";
        let titles = writer.generate_titles(transcript).await.unwrap();
        assert_eq!(titles, vec!["Title A".to_string(), "Title B".to_string()]);

        let requests = completion.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].prompt.contains(transcript));
        assert!(requests[0].prompt.contains("2 SEO-optimized"));
        assert_eq!(requests[0].temperature, 0.5);
        assert_eq!(requests[0].model, "qwen-qwq-32b");
    }

    #[tokio::test]
    async fn test_generate_titles_empty_response() {
        let completion = Arc::new(ScriptedCompletion::replying(&["\n  \n"]));
        let writer = BlogWriter::new(completion.clone(), &CompletionSettings::default());

        let err = writer.generate_titles("").await.unwrap_err();
        assert!(matches!(err, VidblogError::EmptyTitles));
        // An empty transcript still goes to the model.
        assert_eq!(completion.requests.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_generate_titles_propagates_completion_error() {
        let completion = Arc::new(ScriptedCompletion::new(vec![Err(VidblogError::Completion(
            "401 invalid api key".to_string(),
        ))]));
        let writer = BlogWriter::new(completion, &CompletionSettings::default());

        let err = writer.generate_titles("text").await.unwrap_err();
        assert!(matches!(err, VidblogError::Completion(_)));
    }
}
