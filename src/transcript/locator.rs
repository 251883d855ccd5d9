//! Video ID extraction from user-supplied locators.

use crate::error::{Result, VidblogError};
use regex::Regex;
use std::sync::OnceLock;

/// Substrings that mark a locator as a URL rather than a bare ID.
const URL_MARKERS: [&str; 2] = ["youtube.com", "youtu.be"];

fn video_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Eleven ID characters after `v=` (watch URLs) or `.be/` (short links)
    RE.get_or_init(|| Regex::new(r"(?:v=|\.be/)([A-Za-z0-9_-]{11})").expect("Invalid regex"))
}

/// Whether the locator looks like a YouTube URL.
pub fn is_url_like(locator: &str) -> bool {
    URL_MARKERS.iter().any(|marker| locator.contains(marker))
}

/// Extract a video ID from a YouTube URL or bare ID.
///
/// URL-like input that does not carry an 11-character ID is rejected
/// instead of being passed through as an ID. Anything else is treated as
/// a bare ID after trimming.
pub fn extract_video_id(locator: &str) -> Result<String> {
    let locator = locator.trim();

    if is_url_like(locator) {
        return video_id_regex()
            .captures(locator)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| VidblogError::LocatorMalformed(locator.to_string()));
    }

    if locator.is_empty() {
        return Err(VidblogError::LocatorMalformed("empty locator".to_string()));
    }

    Ok(locator.to_string())
}
