//! Configuration module for Vidblog.
//!
//! Handles loading and managing application settings and prompt templates.

mod prompts;
mod settings;

pub use prompts::{ArticlePrompts, Prompts, TitlePrompts};
pub use settings::{
    CompletionSettings, GeneralSettings, PromptSettings, ServerSettings, Settings,
    YoutubeSettings,
};
