//! Generate command implementation.

use super::write_or_print;
use crate::blog::{format_result, OutputFormat};
use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::orchestrator::Pipeline;
use anyhow::Result;

/// Run the generate command.
pub async fn run_generate(
    locator: &str,
    pick: i64,
    output: Option<String>,
    format: &str,
    settings: Settings,
) -> Result<()> {
    let output_format: OutputFormat = format.parse()?;

    // Pre-flight checks
    if let Err(e) = preflight::check(Operation::Generate, &settings) {
        Output::error(&format!("{}", e));
        Output::info("Run 'vidblog doctor' for detailed diagnostics.");
        return Err(e.into());
    }

    let pipeline = Pipeline::new(&settings)?;

    let spinner = Output::spinner("Running pipeline...");
    let result = pipeline.run(locator, pick).await;
    spinner.finish_and_clear();

    let result = match result {
        Ok(result) => result,
        Err(e) => {
            Output::error(&format!("Error: {}", e));
            return Err(e.into());
        }
    };

    if output_format == OutputFormat::Text && output.is_none() {
        Output::header("Titles");
        for (i, title) in result.titles.iter().enumerate() {
            Output::title_candidate(i, title, i == result.selected_index);
        }
        println!();
    }

    let rendered = format_result(&result, output_format);
    write_or_print(output.as_deref(), &rendered)?;

    Ok(())
}
