//! # Configuration
//!
//! User preferences, stored as `config.json` in the curio home directory.
//! They are read at startup and written whenever a value changes. Nothing in
//! the query core depends on them.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `theme` | `system` | Color theme: `light`, `dark` or `system` |
//! | `show-api-health` | `false` | Show the API health indicator |
//! | `items-file` | unset | Items file used when `--items` is not given |
//! | `rooms-file` | unset | Room-type catalog file |

use log::info;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{CurioError, Result};

const CONFIG_FILENAME: &str = "config.json";

pub const CONFIG_KEYS: &[&str] = &["theme", "show-api-health", "items-file", "rooms-file"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(format!(
                "invalid theme '{}' (expected light, dark or system)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurioConfig {
    #[serde(default)]
    pub theme: Theme,

    #[serde(default)]
    pub show_api_health: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items_file: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rooms_file: Option<PathBuf>,
}

impl CurioConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: CurioConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory, creating it if needed.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, content)?;
        info!("saved preferences to {}", config_path.display());
        Ok(())
    }

    /// Get a setting by key, formatted for display. Unset paths read as "".
    pub fn get(&self, key: &str) -> Option<String> {
        let path = |p: &Option<PathBuf>| {
            p.as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        };
        match key {
            "theme" => Some(self.theme.to_string()),
            "show-api-health" => Some(self.show_api_health.to_string()),
            "items-file" => Some(path(&self.items_file)),
            "rooms-file" => Some(path(&self.rooms_file)),
            _ => None,
        }
    }

    /// Set a setting by key. An empty value clears a path setting.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = |v: &str| {
            let v = v.trim();
            (!v.is_empty()).then(|| PathBuf::from(v))
        };
        match key {
            "theme" => self.theme = value.parse::<Theme>().map_err(CurioError::Config)?,
            "show-api-health" => self.show_api_health = parse_bool(value)?,
            "items-file" => self.items_file = path(value),
            "rooms-file" => self.rooms_file = path(value),
            _ => {
                return Err(CurioError::Config(format!(
                    "unknown key '{}' (expected one of: {})",
                    key,
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(CurioError::Config(format!(
            "invalid boolean '{}' (expected true or false)",
            other
        ))),
    }
}
