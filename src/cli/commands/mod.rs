//! CLI command implementations.

mod config;
mod doctor;
mod generate;
mod serve;
mod titles;
mod transcript;

pub use config::run_config;
pub use doctor::run_doctor;
pub use generate::run_generate;
pub use serve::run_serve;
pub use titles::run_titles;
pub use transcript::run_transcript;

use crate::cli::Output;

/// Write to a file, or print to stdout when no path (or `-`) is given.
fn write_or_print(path: Option<&str>, content: &str) -> std::io::Result<()> {
    match path {
        Some(path) if path != "-" => {
            std::fs::write(path, content)?;
            Output::success(&format!("Wrote {}", path));
        }
        _ => println!("{}", content),
    }
    Ok(())
}
