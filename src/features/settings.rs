//! Application settings persistence
//!
//! Handles saving and loading user preferences, including the play button
//! style that is read once at startup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ui::primitives::PlayButtonStyle;

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Play button style options
    pub play_button: PlayButtonStyle,
    /// Pixels per density-independent unit
    pub density: f32,
    /// Dark theme for the demo window
    pub dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            play_button: PlayButtonStyle::default(),
            density: 1.0,
            dark_mode: false,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        config_file("settings.json")
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from_file(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to load settings from {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        read_json(path)
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        write_json(path, self)
    }

    /// Density guarded against zero or negative values from hand-edited files
    pub fn effective_density(&self) -> f32 {
        if self.density.is_finite() && self.density > 0.0 {
            self.density
        } else {
            1.0
        }
    }
}

/// Path of a file in the application config directory
pub(crate) fn config_file(name: &str) -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "progressplaybutton", "ProgressPlayButton")
        .map(|dirs| dirs.config_dir().join(name))
}

pub(crate) fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, SettingsError> {
    let content = std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
    serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
}

pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), SettingsError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
    }

    let content =
        serde_json::to_string_pretty(value).map_err(|e| SettingsError::Parse(e.to_string()))?;
    std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
    Ok(())
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}
