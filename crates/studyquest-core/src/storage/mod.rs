mod config;
pub mod database;
mod profile;

pub use config::{Config, PlayerConfig, StudyConfig};
pub use database::{CheckinRecord, Database};
pub use profile::{Difficulty, PlayerProfile};

use std::path::PathBuf;

use crate::Result;

/// Returns `~/.config/studyquest[-dev]/` based on STUDYQUEST_ENV.
///
/// Any value other than "production" (the default when unset) selects the
/// development data directory.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("STUDYQUEST_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "production" {
        base_dir.join("studyquest")
    } else {
        base_dir.join("studyquest-dev")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
