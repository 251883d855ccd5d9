//! Transcript resolution.
//!
//! Turns a locator (bare video ID or YouTube URL) into one flat transcript
//! string by fetching timed caption segments and joining their text.

mod locator;
mod youtube;

pub use locator::{extract_video_id, is_url_like};
pub use youtube::{parse_json3, YoutubeTranscriptSource};

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// One timed unit of caption text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    /// Start time in seconds.
    pub start_seconds: f64,
    /// Duration in seconds.
    pub duration_seconds: f64,
}

impl Segment {
    pub fn new(text: impl Into<String>, start_seconds: f64, duration_seconds: f64) -> Self {
        Self {
            text: text.into(),
            start_seconds,
            duration_seconds,
        }
    }
}

/// A fetched transcript, flattened into plain text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    /// Video ID this transcript belongs to.
    pub video_id: String,
    /// Segments in service order.
    pub segments: Vec<Segment>,
    /// Segment texts joined by single spaces.
    pub full_text: String,
}

impl Transcript {
    /// Create a transcript from segments.
    pub fn from_segments(video_id: impl Into<String>, segments: Vec<Segment>) -> Self {
        let full_text = segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            video_id: video_id.into(),
            segments,
            full_text,
        }
    }
}

/// Trait for transcript services.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Fetch the caption segments for a video ID, in order.
    ///
    /// Fails with `TranscriptUnavailable` when the video has no usable
    /// transcript or the ID is unknown.
    async fn fetch_segments(&self, video_id: &str) -> Result<Vec<Segment>>;
}

/// Resolve a locator into a flattened transcript.
#[instrument(skip(source))]
pub async fn resolve(source: &dyn TranscriptSource, locator: &str) -> Result<Transcript> {
    let video_id = extract_video_id(locator)?;
    info!("Fetching transcript for {}", video_id);

    let segments = source.fetch_segments(&video_id).await?;
    info!("Fetched {} transcript segments", segments.len());

    Ok(Transcript::from_segments(video_id, segments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VidblogError;

    struct FixedSource(Vec<Segment>);

    #[async_trait]
    impl TranscriptSource for FixedSource {
        async fn fetch_segments(&self, video_id: &str) -> Result<Vec<Segment>> {
            if video_id == "dQw4w9WgXcQ" {
                Ok(self.0.clone())
            } else {
                Err(VidblogError::TranscriptUnavailable(video_id.to_string()))
            }
        }
    }

    #[test]
    fn test_flatten_joins_with_single_spaces() {
        let transcript = Transcript::from_segments(
            "abc",
            vec![
                Segment::new("Hello world", 0.0, 1.5),
                Segment::new("this is", 1.5, 1.0),
                Segment::new("a test", 2.5, 1.0),
            ],
        );
        assert_eq!(transcript.full_text, "Hello world this is a test");
    }

    #[test]
    fn test_flatten_empty_segments() {
        let transcript = Transcript::from_segments("abc", Vec::new());
        assert_eq!(transcript.full_text, "");
    }

    #[tokio::test]
    async fn test_resolve_url() {
        let source = FixedSource(vec![Segment::new("one", 0.0, 1.0), Segment::new("two", 1.0, 1.0)]);
        let transcript = resolve(&source, "https://www.youtube.com/watch?v=dQw4w9WgXcQ")
            .await
            .unwrap();

        assert_eq!(transcript.video_id, "dQw4w9WgXcQ");
        assert_eq!(transcript.full_text, "one two");
    }

    #[tokio::test]
    async fn test_resolve_propagates_unavailable() {
        let source = FixedSource(Vec::new());
        let err = resolve(&source, "aaaaaaaaaaa").await.unwrap_err();
        assert!(matches!(err, VidblogError::TranscriptUnavailable(_)));
    }

    #[tokio::test]
    async fn test_resolve_rejects_malformed_before_fetch() {
        let source = FixedSource(Vec::new());
        let err = resolve(&source, "https://youtube.com/playlist?list=PLx").await.unwrap_err();
        assert!(matches!(err, VidblogError::LocatorMalformed(_)));
    }
}
