use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use vidblog::transcript::{Segment, TranscriptSource};
use vidblog::{Result, VidblogError};

#[derive(Clone, Default)]
pub struct MockTranscriptSource {
    pub videos: HashMap<String, Vec<Segment>>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockTranscriptSource {
    pub fn with_video(mut self, video_id: &str, texts: &[&str]) -> Self {
        let segments = texts
            .iter()
            .enumerate()
            .map(|(i, t)| Segment::new(*t, i as f64 * 2.0, 2.0))
            .collect();
        self.videos.insert(video_id.to_string(), segments);
        self
    }
}

#[async_trait]
impl TranscriptSource for MockTranscriptSource {
    async fn fetch_segments(&self, video_id: &str) -> Result<Vec<Segment>> {
        self.calls.lock().unwrap().push(video_id.to_string());
        self.videos.get(video_id).cloned().ok_or_else(|| {
            VidblogError::TranscriptUnavailable(format!("Transcripts are disabled for {}", video_id))
        })
    }
}
