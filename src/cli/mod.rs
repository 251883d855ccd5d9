//! CLI module for Vidblog.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Vidblog - YouTube transcript to blog post
///
/// Fetches a video's transcript, asks a language model for title ideas and
/// expands the chosen title into a full article.
#[derive(Parser, Debug)]
#[command(name = "vidblog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate titles and a full blog post from a video
    Generate {
        /// YouTube URL or video ID (pass IDs starting with "-" after `--`)
        locator: String,

        /// Title to expand (0-based; out-of-range values are clamped)
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        pick: i64,

        /// Write the result to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Output format (text, markdown, json)
        #[arg(long, default_value = "text")]
        format: String,

        /// Model to use (overrides config)
        #[arg(short, long)]
        model: Option<String>,

        /// Sampling temperature (overrides config)
        #[arg(short, long)]
        temperature: Option<f32>,
    },

    /// Only propose titles for a video
    Titles {
        /// YouTube URL or video ID (pass IDs starting with "-" after `--`)
        locator: String,

        /// Model to use (overrides config)
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Print the flattened transcript of a video
    Transcript {
        /// YouTube URL or video ID (pass IDs starting with "-" after `--`)
        locator: String,

        /// Write the transcript to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Start the web form and JSON API
    Serve {
        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check system requirements and configuration
    Doctor,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Open configuration file in editor
    Edit,

    /// Show configuration file path
    Path,
}
