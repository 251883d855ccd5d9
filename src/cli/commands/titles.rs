//! Titles command implementation.

use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::orchestrator::Pipeline;
use anyhow::Result;

/// Run the titles command.
pub async fn run_titles(locator: &str, settings: Settings) -> Result<()> {
    if let Err(e) = preflight::check(Operation::Generate, &settings) {
        Output::error(&format!("{}", e));
        Output::info("Run 'vidblog doctor' for detailed diagnostics.");
        return Err(e.into());
    }

    let pipeline = Pipeline::new(&settings)?;

    let spinner = Output::spinner("Fetching transcript...");
    let transcript = pipeline.fetch_transcript(locator).await;
    let transcript = match transcript {
        Ok(t) => t,
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("Error: {}", e));
            return Err(e.into());
        }
    };

    spinner.set_message("Generating titles...");
    let titles = pipeline.generate_titles(&transcript.full_text).await;
    spinner.finish_and_clear();

    match titles {
        Ok(titles) => {
            Output::header(&format!("Titles for {}", transcript.video_id));
            for (i, title) in titles.iter().enumerate() {
                Output::title_candidate(i, title, false);
            }
            println!();
            Output::info(&format!(
                "Expand one with: vidblog generate {} --pick <N>",
                transcript.video_id
            ));
        }
        Err(e) => {
            Output::error(&format!("Error: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}
