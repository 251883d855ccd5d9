//! Vidblog CLI entry point.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vidblog::cli::{commands, Cli, Commands};
use vidblog::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config_path = cli
        .config
        .as_deref()
        .map(Settings::expand_path)
        .unwrap_or_else(Settings::default_config_path);
    let mut settings = Settings::load_from(Some(&config_path))?;

    // Initialize logging
    let log_level = match cli.verbose {
        0 => settings.general.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("vidblog={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    // Execute command
    match cli.command {
        Commands::Generate {
            locator,
            pick,
            output,
            format,
            model,
            temperature,
        } => {
            if let Some(model) = model {
                settings.completion.model = model;
            }
            if let Some(temperature) = temperature {
                settings.completion.temperature = temperature;
            }
            commands::run_generate(&locator, pick, output, &format, settings).await?;
        }

        Commands::Titles { locator, model } => {
            if let Some(model) = model {
                settings.completion.model = model;
            }
            commands::run_titles(&locator, settings).await?;
        }

        Commands::Transcript { locator, output } => {
            commands::run_transcript(&locator, output, settings).await?;
        }

        Commands::Serve { host, port } => {
            commands::run_serve(host, port, settings).await?;
        }

        Commands::Doctor => {
            commands::run_doctor(&settings, &config_path)?;
        }

        Commands::Config { action } => {
            commands::run_config(&action, settings, &config_path)?;
        }
    }

    Ok(())
}
