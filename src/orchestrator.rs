//! Pipeline orchestrator for Vidblog.
//!
//! Runs transcript → titles → selection → article strictly in sequence.
//! Nothing is retried, cached or run concurrently; the first failing stage
//! ends the run.

use crate::blog::BlogWriter;
use crate::completion::{CompletionRequest, CompletionService, OpenAICompletion};
use crate::config::{Prompts, Settings};
use crate::error::{Result, VidblogError};
use crate::transcript::{self, Transcript, TranscriptSource, YoutubeTranscriptSource};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument};

/// The main orchestrator for the Vidblog pipeline.
pub struct Pipeline {
    source: Arc<dyn TranscriptSource>,
    writer: BlogWriter,
}

impl Pipeline {
    /// Create a pipeline backed by yt-dlp captions and the configured
    /// completion endpoint.
    ///
    /// Reads the API key once; a missing key fails here rather than on the
    /// first request.
    pub fn new(settings: &Settings) -> Result<Self> {
        let prompts = Prompts::load(
            settings.prompts.custom_dir.as_deref(),
            Some(&settings.prompts.variables),
        )?;

        let completion: Arc<dyn CompletionService> =
            Arc::new(OpenAICompletion::from_settings(&settings.completion)?);
        let source: Arc<dyn TranscriptSource> =
            Arc::new(YoutubeTranscriptSource::new(&settings.youtube));

        info!(
            "Using model {} at {} (temperature {})",
            settings.completion.model, settings.completion.api_base, settings.completion.temperature
        );

        Ok(Self::with_components(settings, prompts, source, completion))
    }

    /// Create a pipeline with custom components.
    pub fn with_components(
        settings: &Settings,
        prompts: Prompts,
        source: Arc<dyn TranscriptSource>,
        completion: Arc<dyn CompletionService>,
    ) -> Self {
        let writer = BlogWriter::new(completion, &settings.completion).with_prompts(prompts);
        Self { source, writer }
    }

    /// Create a pipeline that only resolves transcripts.
    ///
    /// Needs no API key; any completion call fails with a configuration error.
    pub fn transcript_only(settings: &Settings) -> Self {
        Self::with_components(
            settings,
            Prompts::default(),
            Arc::new(YoutubeTranscriptSource::new(&settings.youtube)),
            Arc::new(Unconfigured),
        )
    }

    /// Stage 1: resolve a locator into a flattened transcript.
    pub async fn fetch_transcript(&self, locator: &str) -> Result<Transcript> {
        transcript::resolve(self.source.as_ref(), locator).await
    }

    /// Stage 2: propose titles for a transcript.
    pub async fn generate_titles(&self, transcript: &str) -> Result<Vec<String>> {
        self.writer.generate_titles(transcript).await
    }

    /// Stage 3: write the article for a chosen title.
    pub async fn generate_article(&self, title: &str, transcript: &str) -> Result<String> {
        self.writer.generate_article(title, transcript).await
    }

    /// Run the full pipeline for a locator, picking the title at `pick`.
    ///
    /// Out-of-range picks are clamped to the nearest valid index.
    #[instrument(skip(self))]
    pub async fn run(&self, locator: &str, pick: i64) -> Result<GenerationResult> {
        let transcript = self.fetch_transcript(locator).await?;
        let titles = self.generate_titles(&transcript.full_text).await?;

        let selected_index = clamp_index(pick, titles.len()).ok_or(VidblogError::EmptyTitles)?;
        if selected_index as i64 != pick {
            info!("Title pick {} clamped to {}", pick, selected_index);
        }
        let selected_title = titles[selected_index].clone();

        let article = self
            .generate_article(&selected_title, &transcript.full_text)
            .await?;

        Ok(GenerationResult {
            video_id: transcript.video_id,
            titles,
            selected_index,
            selected_title,
            article,
            generated_at: Utc::now(),
        })
    }
}

/// Clamp a caller-supplied index into `0..len`.
///
/// Negative indices map to 0 and indices past the end map to the last
/// element. Returns `None` only when `len` is 0.
pub fn clamp_index(index: i64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    if index < 0 {
        return Some(0);
    }
    let index = usize::try_from(index).unwrap_or(usize::MAX);
    Some(index.min(len - 1))
}

/// Result of a full pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    /// Video ID the transcript was fetched for.
    pub video_id: String,
    /// All title candidates, in model order.
    pub titles: Vec<String>,
    /// Index actually used after clamping.
    pub selected_index: usize,
    pub selected_title: String,
    /// Article body exactly as returned by the model.
    pub article: String,
    pub generated_at: DateTime<Utc>,
}

/// Stand-in completion service for transcript-only pipelines.
struct Unconfigured;

#[async_trait]
impl CompletionService for Unconfigured {
    async fn complete(&self, _request: &CompletionRequest) -> Result<String> {
        Err(VidblogError::Config("No completion service configured".to_string()))
    }
}
