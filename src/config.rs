//! Configuration management module.
//!
//! Handles loading and saving application configuration from a JSON file
//! next to the executable. Only cosmetic window settings live here;
//! measurements and results are never persisted.

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
}

fn default_window_width() -> f32 {
    440.0
}

fn default_window_height() -> f32 {
    400.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

/// Configuration manager for loading/saving config.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        let config_path = Self::get_exe_directory().join("bmi_calculator_config.json");
        Self { config_path }
    }

    /// Get the directory containing the executable.
    fn get_exe_directory() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Get the config file path.
    pub fn get_config_file_path(&self) -> &Path {
        &self.config_path
    }

    /// Load configuration from file, falling back to defaults if the file
    /// is missing or unreadable.
    pub fn load(&self) -> Config {
        self.try_load().unwrap_or_default()
    }

    fn try_load(&self) -> Option<Config> {
        if !self.config_path.exists() {
            return None;
        }

        let content = fs::read_to_string(&self.config_path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Save configuration to file.
    pub fn save(&self, config: &Config) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        fs::write(&self.config_path, json)
            .with_context(|| format!("failed to write {}", self.config_path.display()))
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
