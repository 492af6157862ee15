//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::CONFIG_DIR_NAME;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// Registry construction settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RegistryConfig {
    /// Allow more than one label per key
    #[serde(default)]
    pub allow_multi: bool,
    /// Key list file; the built-in list is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keys_file: Option<PathBuf>,
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// A label checked out at startup (a default control).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Label to check out
    pub label: String,
    /// Key name, resolved against the key catalog
    pub key: String,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/KeyLibrary/config.toml`
/// - macOS: `~/Library/Application Support/KeyLibrary/config.toml`
/// - Windows: `%APPDATA%\KeyLibrary\config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Registry settings
    #[serde(default)]
    pub registry: RegistryConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Default controls applied at startup
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assignments: Vec<Assignment>,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the platform config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    ///
    /// A missing file yields the default configuration.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to `path` using temp file + rename.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = path.with_extension("toml.tmp");
        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp config file: {}", temp_path.display())
        })?;

        // Atomic rename
        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename temp config file to: {}", path.display()))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - every assignment has a non-empty label and key
    /// - `keys_file`, if set, is not an empty path
    pub fn validate(&self) -> Result<()> {
        if let Some(keys_file) = &self.registry.keys_file {
            if keys_file.as_os_str().is_empty() {
                anyhow::bail!("registry.keys_file must not be empty");
            }
        }

        for (idx, assignment) in self.assignments.iter().enumerate() {
            if assignment.label.trim().is_empty() {
                anyhow::bail!("Assignment #{} has an empty label", idx + 1);
            }
            if assignment.key.trim().is_empty() {
                anyhow::bail!(
                    "Assignment #{} ('{}') has an empty key",
                    idx + 1,
                    assignment.label
                );
            }
        }

        Ok(())
    }
}
