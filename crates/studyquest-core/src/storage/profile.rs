//! Player profile assembly and import.
//!
//! The profile is not a table of its own. Identity and preferences live in
//! the TOML config, the XP total lives in the database ledger, and this
//! module stitches the two into one view the CLI can print or export.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, RewardError};
use crate::reward::{LevelProgress, RewardCalculator};
use crate::storage::{Config, Database};
use crate::Result;

/// Reward difficulty setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Casual,
    Hardcore,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Casual => "casual",
            Difficulty::Hardcore => "hardcore",
        }
    }

    /// Whether hardcore reward multipliers apply.
    pub fn is_hardcore(&self) -> bool {
        matches!(self, Difficulty::Hardcore)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "casual" => Ok(Difficulty::Casual),
            "hardcore" => Ok(Difficulty::Hardcore),
            other => Err(ConfigError::ParseFailed(format!(
                "unknown difficulty '{other}' (expected casual or hardcore)"
            ))),
        }
    }
}

/// A snapshot of the player's progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Display name. Empty when setup has not run.
    #[serde(default)]
    pub name: String,

    /// Subjects the player marked as interests.
    #[serde(default)]
    pub interests: Vec<String>,

    /// Reward difficulty.
    #[serde(default)]
    pub difficulty: Difficulty,

    /// Lifetime XP earned. Exports from older builds call this `xp` or
    /// `current_xp`; all three names are accepted on import.
    #[serde(default, alias = "xp", alias = "current_xp")]
    pub total_xp: i64,
}

impl PlayerProfile {
    /// Assemble the profile from the config and the XP ledger.
    ///
    /// # Errors
    /// Returns an error if the ledger cannot be read.
    pub fn gather(config: &Config, db: &Database) -> Result<Self> {
        Ok(Self {
            name: config.player.name.clone(),
            interests: config.player.interests.clone(),
            difficulty: config.player.difficulty,
            total_xp: db.total_xp()?,
        })
    }

    /// Level progress derived from the XP total.
    ///
    /// # Errors
    /// Returns an error if the XP total is negative.
    pub fn level(&self) -> Result<LevelProgress> {
        Ok(RewardCalculator::level_from_xp(self.total_xp)?)
    }

    /// Parse a profile export.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or carries a negative
    /// XP total.
    pub fn from_json(raw: &str) -> Result<Self> {
        let profile: PlayerProfile = serde_json::from_str(raw)?;
        if profile.total_xp < 0 {
            return Err(RewardError::InvalidXp(profile.total_xp).into());
        }
        Ok(profile)
    }
}
