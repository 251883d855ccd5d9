//! Vidblog - YouTube transcript to blog post
//!
//! A CLI tool and library that turns a video's transcript into a titled,
//! long-form blog article using an OpenAI-compatible language model.
//!
//! # Overview
//!
//! The pipeline runs three stages in strict sequence:
//! 1. Resolve a YouTube URL or ID into a flattened transcript
//! 2. Ask the model for candidate titles
//! 3. Expand the chosen title into an article
//!
//! # Architecture
//!
//! - `config` - Settings and prompt templates
//! - `transcript` - Locator parsing and caption fetching
//! - `completion` - Completion service abstraction
//! - `blog` - Title proposals, article composition and output formats
//! - `orchestrator` - Pipeline coordination
//! - `cli` - Command-line and web surfaces
//!
//! # Example
//!
//! ```rust,no_run
//! use vidblog::config::Settings;
//! use vidblog::orchestrator::Pipeline;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let pipeline = Pipeline::new(&settings)?;
//!
//!     let result = pipeline.run("dQw4w9WgXcQ", 0).await?;
//!     println!("{}\n\n{}", result.selected_title, result.article);
//!
//!     Ok(())
//! }
//! ```

pub mod blog;
pub mod cli;
pub mod completion;
pub mod config;
pub mod error;
pub mod openai;
pub mod orchestrator;
pub mod transcript;

pub use error::{ErrorKind, Result, VidblogError};
