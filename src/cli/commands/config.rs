//! Config command implementation.

use crate::cli::{ConfigAction, Output};
use crate::config::Settings;
use anyhow::Result;
use std::path::Path;

/// Run the config command against the resolved config file.
pub fn run_config(action: &ConfigAction, settings: Settings, config_path: &Path) -> Result<()> {
    match action {
        ConfigAction::Show => {
            println!("{}", render_settings(&settings)?);
        }

        ConfigAction::Edit => {
            if ensure_config_file(&settings, config_path)? {
                Output::info(&format!("Created default config at {:?}", config_path));
            }

            let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vim".to_string());

            Output::info(&format!("Opening config in {}...", editor));

            let status = std::process::Command::new(&editor)
                .arg(config_path)
                .status();

            match status {
                Ok(s) if s.success() => {
                    Output::success("Config saved.");
                }
                Ok(_) => {
                    Output::warning("Editor exited with non-zero status.");
                }
                Err(e) => {
                    Output::error(&format!("Failed to open editor: {}", e));
                    Output::info(&format!("Config file is at: {:?}", config_path));
                }
            }
        }

        ConfigAction::Path => {
            println!("{}", config_path.display());
        }
    }

    Ok(())
}

fn render_settings(settings: &Settings) -> Result<String> {
    toml::to_string_pretty(settings).map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))
}

/// Write the current settings to `path` unless a file is already there.
/// Returns whether a file was created.
fn ensure_config_file(settings: &Settings, path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    settings.save_to(&path.to_path_buf())?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_config_file_writes_to_given_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom").join("x.toml");

        let mut settings = Settings::default();
        settings.completion.model = "llama-3.3-70b-versatile".to_string();

        assert!(ensure_config_file(&settings, &path).unwrap());
        let loaded = Settings::load_from(Some(&path)).unwrap();
        assert_eq!(loaded.completion.model, "llama-3.3-70b-versatile");
    }

    #[test]
    fn test_ensure_config_file_keeps_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x.toml");
        std::fs::write(&path, "[server]\nport = 9000\n").unwrap();

        assert!(!ensure_config_file(&Settings::default(), &path).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[server]\nport = 9000\n");
    }

    #[test]
    fn test_render_settings_is_loadable() {
        let rendered = render_settings(&Settings::default()).unwrap();
        let parsed: Settings = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.server.port, 8501);
    }
}
