/// Application configuration
/// 
/// Read once at startup from a JSON file. Every field has a default, so a
/// missing file or a partial file is fine.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::state::data::REQUIRED_PHOTOS;

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV: &str = "PROFILE_PHOTOS_CONFIG";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Photos needed before the profile can be finalized (1..=3)
    pub required_photos: usize,

    /// Show the library permission prompt before the first pick
    pub ask_permission: bool,

    /// Folder the file picker opens in (None = platform pictures folder)
    pub start_dir: Option<PathBuf>,

    /// File extensions offered by the picker
    pub extensions: Vec<String>,

    /// Thumbnail size in pixels (2x the on-screen slot)
    pub thumbnail_width: u32,
    pub thumbnail_height: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            required_photos: 3,
            ask_permission: true,
            start_dir: None,
            extensions: ["jpg", "jpeg", "png", "gif", "webp", "bmp"]
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            thumbnail_width: 200,
            thumbnail_height: 300,
        }
    }
}

impl Config {
    /// Load from `$PROFILE_PHOTOS_CONFIG` or the user config directory
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_json(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        tracing::info!("⚙️ loaded config from {}", path.display());
        Ok(config)
    }

    /// Path of the config file:
    /// - `$PROFILE_PHOTOS_CONFIG` if set
    /// - Linux: ~/.config/profile-photos/config.json
    /// - macOS: ~/Library/Application Support/profile-photos/config.json
    /// - Windows: %APPDATA%\profile-photos\config.json
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }

        let mut path = dirs::config_dir()?;
        path.push("profile-photos");
        path.push("config.json");
        Some(path)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[cfg(test)]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.required_photos == 0 || self.required_photos > REQUIRED_PHOTOS {
            return Err(ConfigError::Invalid(format!(
                "required_photos must be between 1 and {}, got {}",
                REQUIRED_PHOTOS, self.required_photos
            )));
        }
        if self.extensions.is_empty() {
            return Err(ConfigError::Invalid("extensions must not be empty".into()));
        }
        if self.thumbnail_width == 0 || self.thumbnail_height == 0 {
            return Err(ConfigError::Invalid("thumbnail size must be non-zero".into()));
        }
        Ok(())
    }

    /// Folder the picker should open in
    pub fn picker_start_dir(&self) -> Option<PathBuf> {
        self.start_dir.clone().or_else(dirs::picture_dir)
    }
}
