//! YouTube caption source backed by yt-dlp.
//!
//! yt-dlp resolves the caption track URLs for a video; the track itself is
//! downloaded in YouTube's `json3` timed-text format and parsed here.

use super::{Segment, TranscriptSource};
use crate::config::YoutubeSettings;
use crate::error::{Result, VidblogError};
use async_trait::async_trait;
use serde::Deserialize;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, info, instrument};

/// Caption tables in yt-dlp's info JSON, in order of preference.
const CAPTION_TABLES: [&str; 2] = ["subtitles", "automatic_captions"];

/// Transcript source that looks up captions through yt-dlp.
pub struct YoutubeTranscriptSource {
    http: reqwest::Client,
    ytdlp_path: String,
    languages: Vec<String>,
}

impl YoutubeTranscriptSource {
    pub fn new(settings: &YoutubeSettings) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .unwrap_or_default();

        Self {
            http,
            ytdlp_path: settings.ytdlp_path.clone(),
            languages: settings.languages.clone(),
        }
    }

    /// Dump video info as JSON using yt-dlp.
    async fn fetch_info(&self, video_id: &str) -> Result<serde_json::Value> {
        let url = format!("https://www.youtube.com/watch?v={}", video_id);

        let output = Command::new(&self.ytdlp_path)
            .args([
                "--dump-json",
                "--skip-download",
                "--no-playlist",
                "--no-warnings",
                &url,
            ])
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    VidblogError::ToolNotFound(self.ytdlp_path.clone())
                } else {
                    VidblogError::TranscriptUnavailable(format!("Failed to run yt-dlp: {}", e))
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(VidblogError::TranscriptUnavailable(format!(
                "Video {} not found or unavailable: {}",
                video_id,
                stderr.trim()
            )));
        }

        let json_str = String::from_utf8_lossy(&output.stdout);
        serde_json::from_str(&json_str).map_err(|e| {
            VidblogError::TranscriptUnavailable(format!("Failed to parse yt-dlp output: {}", e))
        })
    }
}

#[async_trait]
impl TranscriptSource for YoutubeTranscriptSource {
    #[instrument(skip(self))]
    async fn fetch_segments(&self, video_id: &str) -> Result<Vec<Segment>> {
        let info = self.fetch_info(video_id).await?;

        let track_url = select_caption_url(&info, &self.languages).ok_or_else(|| {
            VidblogError::TranscriptUnavailable(format!(
                "No transcript for {} in languages: {}",
                video_id,
                self.languages.join(", ")
            ))
        })?;
        debug!("Downloading caption track");

        let response = self.http.get(&track_url).send().await?;
        if !response.status().is_success() {
            return Err(VidblogError::TranscriptUnavailable(format!(
                "Caption download for {} failed with status {}",
                video_id,
                response.status()
            )));
        }

        let body = response.text().await?;
        let segments = parse_json3(&body)?;
        info!("Parsed {} caption segments", segments.len());

        Ok(segments)
    }
}

/// Pick the json3 caption URL for the first matching language.
///
/// For each language, manual subtitles win over automatic captions. A
/// language matches its exact key or a regional/variant key (`en` matches
/// `en-US` and `en-orig`).
fn select_caption_url(info: &serde_json::Value, languages: &[String]) -> Option<String> {
    for lang in languages {
        for table in CAPTION_TABLES {
            let Some(tracks) = info[table].as_object() else {
                continue;
            };

            let prefix = format!("{}-", lang);
            let candidates = std::iter::once(lang.as_str()).chain(
                tracks
                    .keys()
                    .map(String::as_str)
                    .filter(|k| k.starts_with(&prefix)),
            );

            let url = candidates.filter_map(|k| json3_url(tracks.get(k)?)).next();

            if url.is_some() {
                return url;
            }
        }
    }

    None
}

/// URL of the json3 format in one track's format list.
fn json3_url(formats: &serde_json::Value) -> Option<String> {
    formats
        .as_array()?
        .iter()
        .find(|f| f["ext"].as_str() == Some("json3"))
        .and_then(|f| f["url"].as_str())
        .map(str::to_string)
}

#[derive(Debug, Deserialize)]
struct Json3Document {
    #[serde(default)]
    events: Vec<Json3Event>,
}

#[derive(Debug, Deserialize)]
struct Json3Event {
    #[serde(rename = "tStartMs", default)]
    start_ms: f64,
    #[serde(rename = "dDurationMs", default)]
    duration_ms: f64,
    segs: Option<Vec<Json3Seg>>,
}

#[derive(Debug, Deserialize)]
struct Json3Seg {
    #[serde(default)]
    utf8: String,
}

/// Parse a json3 timed-text document into segments.
///
/// Events without text (window/style events and bare line breaks) are
/// dropped; everything else keeps its original order.
pub fn parse_json3(body: &str) -> Result<Vec<Segment>> {
    let document: Json3Document = serde_json::from_str(body).map_err(|e| {
        VidblogError::TranscriptUnavailable(format!("Malformed caption track: {}", e))
    })?;

    let segments = document
        .events
        .into_iter()
        .filter_map(|event| {
            let text: String = event.segs?.into_iter().map(|s| s.utf8).collect();
            let text = text.replace('\n', " ").trim().to_string();
            if text.is_empty() {
                return None;
            }
            Some(Segment::new(
                text,
                event.start_ms / 1000.0,
                event.duration_ms / 1000.0,
            ))
        })
        .collect();

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_json3() {
        let body = r#"{
            "wireMagic": "pb3",
            "events": [
                {"tStartMs": 0, "dDurationMs": 5000, "id": 1, "wWinId": 1},
                {"tStartMs": 120, "dDurationMs": 2400, "segs": [{"utf8": "never gonna"}, {"utf8": " give you up"}]},
                {"tStartMs": 2520, "dDurationMs": 30, "segs": [{"utf8": "\n"}]},
                {"tStartMs": 2550, "dDurationMs": 1800, "segs": [{"utf8": "never gonna\nlet you down"}]}
            ]
        }"#;

        let segments = parse_json3(body).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].text, "never gonna give you up");
        assert_eq!(segments[0].start_seconds, 0.12);
        assert_eq!(segments[0].duration_seconds, 2.4);
        assert_eq!(segments[1].text, "never gonna let you down");
    }

    #[test]
    fn test_parse_json3_without_events() {
        assert!(parse_json3("{}").unwrap().is_empty());
    }

    #[test]
    fn test_parse_json3_malformed() {
        let err = parse_json3("<transcript/>").unwrap_err();
        assert!(matches!(err, VidblogError::TranscriptUnavailable(_)));
    }

    #[test]
    fn test_select_prefers_manual_subtitles() {
        let info = json!({
            "subtitles": {
                "en": [{"ext": "vtt", "url": "manual-vtt"}, {"ext": "json3", "url": "manual-json3"}]
            },
            "automatic_captions": {
                "en": [{"ext": "json3", "url": "auto-json3"}]
            }
        });

        let url = select_caption_url(&info, &["en".to_string()]);
        assert_eq!(url.as_deref(), Some("manual-json3"));
    }

    #[test]
    fn test_select_falls_back_to_automatic_and_variants() {
        let info = json!({
            "subtitles": {},
            "automatic_captions": {
                "en-orig": [{"ext": "json3", "url": "auto-orig"}]
            }
        });

        let url = select_caption_url(&info, &["en".to_string()]);
        assert_eq!(url.as_deref(), Some("auto-orig"));
    }

    #[test]
    fn test_select_respects_language_order() {
        let info = json!({
            "subtitles": {
                "en": [{"ext": "json3", "url": "english"}],
                "de": [{"ext": "json3", "url": "german"}]
            }
        });

        let languages = vec!["de".to_string(), "en".to_string()];
        assert_eq!(select_caption_url(&info, &languages).as_deref(), Some("german"));
    }

    #[test]
    fn test_select_tries_variants_when_exact_key_lacks_json3() {
        let info = json!({
            "subtitles": {
                "en": [{"ext": "vtt", "url": "exact-vtt"}],
                "en-US": [{"ext": "json3", "url": "regional-json3"}]
            }
        });

        let url = select_caption_url(&info, &["en".to_string()]);
        assert_eq!(url.as_deref(), Some("regional-json3"));
    }

    fn source_with_tool(ytdlp_path: &str) -> YoutubeTranscriptSource {
        YoutubeTranscriptSource::new(&YoutubeSettings {
            ytdlp_path: ytdlp_path.to_string(),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_missing_ytdlp_is_tool_not_found() {
        let source = source_with_tool("vidblog-no-such-binary");
        let err = source.fetch_segments("dQw4w9WgXcQ").await.unwrap_err();
        assert!(matches!(err, VidblogError::ToolNotFound(ref tool) if tool == "vidblog-no-such-binary"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_ytdlp_is_transcript_unavailable() {
        let source = source_with_tool("false");
        let err = source.fetch_segments("dQw4w9WgXcQ").await.unwrap_err();
        assert!(matches!(err, VidblogError::TranscriptUnavailable(_)));
        assert!(err.to_string().contains("dQw4w9WgXcQ"));
    }

    #[test]
    fn test_select_none_without_json3() {
        let info = json!({
            "subtitles": {"en": [{"ext": "vtt", "url": "only-vtt"}]}
        });
        assert!(select_caption_url(&info, &["en".to_string()]).is_none());
        assert!(select_caption_url(&json!({}), &["en".to_string()]).is_none());
    }
}
