//! Error types for Vidblog.

use serde::Serialize;
use thiserror::Error;

/// Library-level error type for Vidblog operations.
#[derive(Error, Debug)]
pub enum VidblogError {
    #[error("Could not extract a video ID from locator: {0}")]
    LocatorMalformed(String),

    #[error("Transcript unavailable: {0}")]
    TranscriptUnavailable(String),

    #[error("No titles generated.")]
    EmptyTitles,

    #[error("Completion service error: {0}")]
    Completion(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("External tool not found: {0}. Please install it and ensure it's in your PATH.")]
    ToolNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Coarse classification of a [`VidblogError`], stable across messages.
///
/// Lets non-interactive callers branch on the failure without matching
/// on rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    LocatorMalformed,
    TranscriptUnavailable,
    EmptyTitles,
    Completion,
    Config,
    ToolNotFound,
    InvalidInput,
    Internal,
}

impl VidblogError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            VidblogError::LocatorMalformed(_) => ErrorKind::LocatorMalformed,
            VidblogError::TranscriptUnavailable(_) => ErrorKind::TranscriptUnavailable,
            VidblogError::EmptyTitles => ErrorKind::EmptyTitles,
            VidblogError::Completion(_) => ErrorKind::Completion,
            VidblogError::Config(_) => ErrorKind::Config,
            VidblogError::ToolNotFound(_) => ErrorKind::ToolNotFound,
            VidblogError::InvalidInput(_) => ErrorKind::InvalidInput,
            VidblogError::Io(_)
            | VidblogError::Json(_)
            | VidblogError::TomlParse(_)
            | VidblogError::Http(_) => ErrorKind::Internal,
        }
    }
}

/// Result type alias for Vidblog operations.
pub type Result<T> = std::result::Result<T, VidblogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind() {
        assert_eq!(VidblogError::EmptyTitles.kind(), ErrorKind::EmptyTitles);
        assert_eq!(
            VidblogError::LocatorMalformed("x".to_string()).kind(),
            ErrorKind::LocatorMalformed
        );
        assert_eq!(
            VidblogError::Completion("quota".to_string()).kind(),
            ErrorKind::Completion
        );
    }

    #[test]
    fn test_error_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ErrorKind::TranscriptUnavailable).unwrap();
        assert_eq!(json, "\"transcript_unavailable\"");
    }

    #[test]
    fn test_empty_titles_message() {
        assert_eq!(VidblogError::EmptyTitles.to_string(), "No titles generated.");
    }
}
