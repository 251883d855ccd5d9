//! Pre-flight checks before expensive operations.
//!
//! Validates that required tools and configuration are available
//! before starting operations that would otherwise fail midway.

use crate::config::Settings;
use crate::error::{Result, VidblogError};
use std::process::Command;

/// Requirements for different operations.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// Generating titles or articles requires yt-dlp and an API key.
    Generate,
    /// Fetching a transcript only requires yt-dlp.
    Transcript,
}

/// Run pre-flight checks for the given operation.
///
/// Returns Ok(()) if all checks pass, or an error describing what's missing.
pub fn check(operation: Operation, settings: &Settings) -> Result<()> {
    match operation {
        Operation::Generate => {
            settings.completion.api_key()?;
            check_tool(&settings.youtube.ytdlp_path)?;
        }
        Operation::Transcript => {
            check_tool(&settings.youtube.ytdlp_path)?;
        }
    }
    Ok(())
}

/// Check if an external tool is available.
fn check_tool(name: &str) -> Result<()> {
    match Command::new(name).arg("--version").output() {
        Ok(output) if output.status.success() => Ok(()),
        Ok(_) => Err(VidblogError::ToolNotFound(format!(
            "{} is installed but not working correctly",
            name
        ))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(VidblogError::ToolNotFound(name.to_string()))
        }
        Err(e) => Err(VidblogError::ToolNotFound(format!("{}: {}", name, e))),
    }
}
