//! Article output formatting (text, Markdown, JSON).

use crate::error::VidblogError;
use crate::orchestrator::GenerationResult;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Text,
    Markdown,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = VidblogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            _ => Err(VidblogError::InvalidInput(format!(
                "Unknown format: {}. Use text, markdown, or json.",
                s
            ))),
        }
    }
}

/// Format a pipeline result for output.
pub fn format_result(result: &GenerationResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("{}\n\n{}\n", result.selected_title, result.article.trim_end()),
        OutputFormat::Markdown => format_markdown(result),
        OutputFormat::Json => {
            serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

/// Format as Markdown with a small source footer.
fn format_markdown(result: &GenerationResult) -> String {
    let heading = result.selected_title.trim_start_matches('#').trim();
    format!(
        "# {}\n\n{}\n\n---\n\n*Source: https://www.youtube.com/watch?v={}*\n",
        heading,
        result.article.trim(),
        result.video_id
    )
}
