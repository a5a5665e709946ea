//! Command-line defaults stored in `~/.codebreaker/config.toml`.
//!
//! Every field is optional in the file; missing values fall back to the
//! defaults below. Flags given on the command line always win.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default upper bound for the IoC key-length table.
pub const DEFAULT_MAX_KEY_LENGTH: usize = 9;

/// Default Bifid period.
pub const DEFAULT_BIFID_PERIOD: usize = 5;

/// Errors that can occur when loading settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config directory not found. Unable to determine home directory.")]
    NoConfigDir,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),
}

/// Substitution defaults.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionSettings {
    /// Placeholder for not-yet-solved key slots.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dummy: Option<char>,
}

/// Bifid defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct BifidSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_square: Option<String>,
    pub period: usize,
}

impl Default for BifidSettings {
    fn default() -> Self {
        Self {
            key_square: None,
            period: DEFAULT_BIFID_PERIOD,
        }
    }
}

/// Baconian defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct BaconianSettings {
    /// Character separating binary rows in the input file.
    pub delimiter: char,
    /// Text placed between decoded letter groups.
    pub separator: String,
}

impl Default for BaconianSettings {
    fn default() -> Self {
        Self {
            delimiter: '2',
            separator: " ".to_string(),
        }
    }
}

/// All command-line defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub max_key_length: usize,
    pub substitution: SubstitutionSettings,
    pub bifid: BifidSettings,
    pub baconian: BaconianSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_key_length: DEFAULT_MAX_KEY_LENGTH,
            substitution: SubstitutionSettings::default(),
            bifid: BifidSettings::default(),
            baconian: BaconianSettings::default(),
        }
    }
}

impl Settings {
    /// Loads settings from `path`, or from the default location when `path`
    /// is `None`.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path()?,
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let settings: Settings = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Writes settings to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Path to the default settings file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(get_config_dir()?.join("config.toml"))
    }
}

/// Returns `~/.codebreaker`.
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(".codebreaker"))
        .ok_or(ConfigError::NoConfigDir)
}
