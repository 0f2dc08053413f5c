//! Settings configuration
//!
//! Manages user-configurable settings for the keyboard.
//! Default values are defined in `config/default.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use directories::ProjectDirs;
use ekushey_engine::Layout;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::engine::EngineConfig;

/// Default configuration TOML embedded from config/default.toml
const DEFAULT_CONFIG_TOML: &str = include_str!("../../config/default.toml");

/// Configuration settings for the keyboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Layout selection settings
    pub input: InputSettings,
    /// Typing-aid settings
    pub typing: TypingSettings,
}

/// Layout selection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputSettings {
    /// Layout active when the keyboard attaches
    pub default_layout: Layout,
    /// Layouts the cyclic switcher walks through
    pub enabled_layouts: Vec<Layout>,
    /// Render digits in the active script's numerals
    pub localized_digits: bool,
}

/// Typing-aid settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypingSettings {
    /// Upper-case the first letter of a sentence (English layout)
    pub auto_capitalization: bool,
    /// Use word-initial vowel forms at the start of a word
    pub auto_vowel_forming: bool,
    /// A quick double space becomes the sentence terminator
    pub double_space_period: bool,
    /// Window for the double-space gesture, in milliseconds
    pub double_space_window_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("embedded default.toml must be valid")
    }
}

/// Recursively merge `overlay` TOML values on top of `base`.
fn merge_toml(base: &mut toml::Value, overlay: &toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base_table), toml::Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                if let Some(base_value) = base_table.get_mut(key) {
                    merge_toml(base_value, value);
                } else {
                    base_table.insert(key.clone(), value.clone());
                }
            }
        }
        (base, _) => {
            *base = overlay.clone();
        }
    }
}

/// Parse user TOML content merged on top of default.toml.
fn parse_with_defaults(user_content: &str) -> Result<Settings> {
    let mut base: toml::Value = toml::from_str(DEFAULT_CONFIG_TOML)?;
    let user: toml::Value = toml::from_str(user_content)?;
    merge_toml(&mut base, &user);
    let settings: Settings = base.try_into()?;
    Ok(settings)
}

/// Get the project directories for ekushey-im.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "ekushey", "ekushey-im")
}

impl Settings {
    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the configuration file path
    pub fn config_file() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Load settings from the default configuration file.
    /// Falls back to embedded default.toml if the config file does not exist.
    pub fn load() -> Result<Self> {
        let Some(config_file) = Self::config_file() else {
            warn!("Could not determine config directory, using defaults");
            return Ok(Self::default());
        };

        if !config_file.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        debug!("Loading config from {:?}", config_file);
        let content = fs::read_to_string(&config_file)?;
        parse_with_defaults(&content)
    }

    /// Load settings from a specific file, merged on top of defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        parse_with_defaults(&content)
    }

    /// Save settings to the default configuration file
    pub fn save(&self) -> Result<()> {
        let Some(config_file) = Self::config_file() else {
            anyhow::bail!("Could not determine config directory");
        };

        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }

        debug!("Saving config to {:?}", config_file);
        let content = toml::to_string_pretty(self)?;
        fs::write(&config_file, content)?;
        Ok(())
    }

    /// Save settings to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Project these settings onto an engine configuration.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            enabled_layouts: self.input.enabled_layouts.clone(),
            auto_capitalization: self.typing.auto_capitalization,
            auto_vowel_forming: self.typing.auto_vowel_forming,
            double_space_period: self.typing.double_space_period,
            double_space_window_ms: self.typing.double_space_window_ms,
            localized_digits: self.input.localized_digits,
        }
    }
}
