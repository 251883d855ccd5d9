//! Transcript command implementation.

use super::write_or_print;
use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::orchestrator::Pipeline;
use anyhow::Result;

/// Run the transcript command.
pub async fn run_transcript(locator: &str, output: Option<String>, settings: Settings) -> Result<()> {
    if let Err(e) = preflight::check(Operation::Transcript, &settings) {
        Output::error(&format!("{}", e));
        return Err(e.into());
    }

    let pipeline = Pipeline::transcript_only(&settings);

    let spinner = Output::spinner("Fetching transcript...");
    let transcript = pipeline.fetch_transcript(locator).await;
    spinner.finish_and_clear();

    let transcript = match transcript {
        Ok(t) => t,
        Err(e) => {
            Output::error(&format!("Error: {}", e));
            return Err(e.into());
        }
    };

    if transcript.full_text.is_empty() {
        Output::warning(&format!("Transcript for {} is empty", transcript.video_id));
    }

    write_or_print(output.as_deref(), &transcript.full_text)?;
    Ok(())
}
