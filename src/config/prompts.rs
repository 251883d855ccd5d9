//! Prompt templates for Vidblog.
//!
//! Prompts can be customized by placing TOML files in the custom prompts directory.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Collection of all prompt templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Prompts {
    pub titles: TitlePrompts,
    pub article: ArticlePrompts,
    /// Custom variables from config, available in all prompts.
    #[serde(skip)]
    pub variables: HashMap<String, String>,
}

/// Prompt for proposing blog titles from a transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TitlePrompts {
    pub user: String,
}

impl Default for TitlePrompts {
    fn default() -> Self {
        Self {
            user: "You are a blog title generator. Create 2 SEO-optimized, click worthy titles for the blog \
based on the following YouTube transcript:\n\n{{transcript}}\n\nTitles:"
                .to_string(),
        }
    }
}

/// Prompt for expanding a title into a full article.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticlePrompts {
    pub user: String,
}

impl Default for ArticlePrompts {
    fn default() -> Self {
        Self {
            user: "You are an expert blog writer. Given the title and the transcript, \
write a detailed 800–1000 word blog post with introduction, body, and conclusion. \
Use insights from the transcript.\n\n\
Title: {{title}}\n\nTranscript:\n{{transcript}}\n\nBlog Post:"
                .to_string(),
        }
    }
}

impl Prompts {
    /// Load prompts from the default location, with optional custom directory and variables.
    pub fn load(
        custom_dir: Option<&str>,
        custom_variables: Option<&HashMap<String, String>>,
    ) -> crate::error::Result<Self> {
        let mut prompts = Prompts::default();

        if let Some(vars) = custom_variables {
            prompts.variables = vars.clone();
        }

        if let Some(dir) = custom_dir {
            let custom_path = PathBuf::from(shellexpand::tilde(dir).to_string());

            let titles_path = custom_path.join("titles.toml");
            if titles_path.exists() {
                let content = std::fs::read_to_string(&titles_path)?;
                prompts.titles = toml::from_str(&content)?;
            }

            let article_path = custom_path.join("article.toml");
            if article_path.exists() {
                let content = std::fs::read_to_string(&article_path)?;
                prompts.article = toml::from_str(&content)?;
            }
        }

        Ok(prompts)
    }

    /// Render a prompt template with the given variables.
    ///
    /// Substitution is single-pass, so values containing `{{...}}` are left
    /// as-is and never re-expanded.
    pub fn render(template: &str, vars: &HashMap<String, String>) -> String {
        let mut result = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find("{{") {
            result.push_str(&rest[..open]);
            let after = &rest[open + 2..];
            match after.find("}}") {
                // An unclosed `{{` before a real placeholder stays literal.
                Some(close) if after[..close].contains("{{") => {
                    result.push_str("{{");
                    rest = after;
                }
                Some(close) => {
                    let key = &after[..close];
                    match vars.get(key) {
                        Some(value) => result.push_str(value),
                        None => {
                            result.push_str("{{");
                            result.push_str(key);
                            result.push_str("}}");
                        }
                    }
                    rest = &after[close + 2..];
                }
                None => {
                    result.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }
        result.push_str(rest);

        result
    }

    /// Render a prompt template with both provided variables and custom config variables.
    /// Provided variables take precedence over custom config variables.
    pub fn render_with_custom(&self, template: &str, vars: &HashMap<String, String>) -> String {
        let mut merged = self.variables.clone();
        for (key, value) in vars {
            merged.insert(key.clone(), value.clone());
        }
        Self::render(template, &merged)
    }
}
