//! TOML configuration stored in the data directory.
//!
//! Settings are grouped into `[player]` and `[study]` tables and every key
//! is reachable through a dot path such as `player.difficulty`, so the CLI
//! can read and write individual values without knowing the struct layout.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ConfigError;
use crate::storage::data_dir;
use crate::storage::profile::Difficulty;
use crate::Result;

fn default_difficulty() -> Difficulty {
    Difficulty::Casual
}

fn default_daily_goal_hours() -> u8 {
    2
}

/// Identity and preference settings for the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Display name. Empty until setup completes.
    #[serde(default)]
    pub name: String,

    /// Reward difficulty. Hardcore raises mission payouts.
    #[serde(default = "default_difficulty")]
    pub difficulty: Difficulty,

    /// Subjects the player marked as interests.
    #[serde(default)]
    pub interests: Vec<String>,

    /// School grade, 1 through 12. Zero until setup completes.
    #[serde(default)]
    pub grade: u8,

    /// Academic stream for grades 11-12 ("Science", "Commerce" or "Arts").
    /// Empty for lower grades.
    #[serde(default)]
    pub stream: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            difficulty: default_difficulty(),
            interests: Vec::new(),
            grade: 0,
            stream: String::new(),
        }
    }
}

/// Study cadence settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyConfig {
    /// Target hours of study per day.
    #[serde(default = "default_daily_goal_hours")]
    pub daily_goal_hours: u8,

    /// Preferred slot of the day ("Morning", "Afternoon" or "Evening").
    /// Empty when the player has not picked one.
    #[serde(default)]
    pub preferred_slot: String,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            daily_goal_hours: default_daily_goal_hours(),
            preferred_slot: String::new(),
        }
    }
}

/// Root configuration document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub player: PlayerConfig,

    #[serde(default)]
    pub study: StudyConfig,
}

impl Config {
    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, falling back to defaults when no file exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path).map_err(|e| ConfigError::LoadFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let config = toml::from_str(&raw).map_err(|e| ConfigError::LoadFailed {
            path,
            message: e.to_string(),
        })?;
        Ok(config)
    }

    /// Load from disk, returning defaults on any error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Persist to disk as pretty TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        let raw = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        fs::write(&path, raw).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Get a value as string by dot-separated key, e.g. `player.difficulty`.
    ///
    /// Strings are returned verbatim; other values are rendered as JSON.
    pub fn get(&self, key: &str) -> Option<String> {
        let root = serde_json::to_value(self).ok()?;
        let leaf = lookup(&root, key)?;
        Some(render(leaf))
    }

    /// All keys and their current values, sorted by key.
    pub fn entries(&self) -> Vec<(String, String)> {
        let root = match serde_json::to_value(self) {
            Ok(value) => value,
            Err(_) => return Vec::new(),
        };
        let mut out = Vec::new();
        collect_entries(&root, String::new(), &mut out);
        out
    }

    /// Update a single value by dot path without touching the disk.
    ///
    /// The raw string is coerced to the type of the existing value: numbers
    /// parse as integers, booleans as `true`/`false`, and lists split on
    /// commas. An unknown key or an unparsable value is rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value cannot be parsed.
    pub fn apply(&mut self, key: &str, raw: &str) -> Result<()> {
        let mut root = serde_json::to_value(&*self)?;
        let leaf =
            lookup_mut(&mut root, key).ok_or_else(|| ConfigError::MissingKey(key.to_string()))?;
        *leaf = coerce(key, leaf, raw)?;
        *self = serde_json::from_value(root).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Update a single value by dot path and persist the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the update is invalid or the save fails.
    pub fn set(&mut self, key: &str, raw: &str) -> Result<()> {
        self.apply(key, raw)?;
        self.save()
    }
}

fn lookup<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    if key.is_empty() {
        return None;
    }
    let mut cursor = root;
    for part in key.split('.') {
        cursor = cursor.get(part)?;
    }
    Some(cursor)
}

fn lookup_mut<'a>(root: &'a mut Value, key: &str) -> Option<&'a mut Value> {
    if key.is_empty() {
        return None;
    }
    let mut cursor = root;
    for part in key.split('.') {
        cursor = cursor.get_mut(part)?;
    }
    Some(cursor)
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn collect_entries(value: &Value, prefix: String, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (name, child) in map {
                let path = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{prefix}.{name}")
                };
                collect_entries(child, path, out);
            }
        }
        leaf => out.push((prefix, render(leaf))),
    }
}

fn coerce(key: &str, existing: &Value, raw: &str) -> Result<Value> {
    let invalid = |message: &str| ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.to_string(),
    };
    let coerced = match existing {
        Value::Bool(_) => {
            let flag = raw
                .parse::<bool>()
                .map_err(|_| invalid("expected true or false"))?;
            Value::Bool(flag)
        }
        Value::Number(_) => {
            let n = raw
                .parse::<i64>()
                .map_err(|_| invalid("expected an integer"))?;
            Value::Number(n.into())
        }
        Value::Array(_) => {
            let items = raw
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(|item| Value::String(item.to_string()))
                .collect();
            Value::Array(items)
        }
        Value::String(_) => Value::String(raw.to_string()),
        _ => return Err(invalid("unsupported value type").into()),
    };
    Ok(coerced)
}
