//! Configuration management for ForgeworkLights.
//!
//! This crate provides configuration loading, saving, and path resolution
//! with support for TOML format and XDG directory conventions, plus the
//! flat selection files the LED daemon watches.

mod selection;
mod settings;
mod xdg;

pub use selection::{
    read_brightness, read_led_selection, write_brightness, write_led_selection, LedSelection,
    BRIGHTNESS_FILE, LED_THEME_FILE,
};
pub use settings::{Config, LoggingSettings, ThemeSettings};
pub use xdg::{expand_home, get_cache_dir, get_config_dir};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Default values as constants
pub mod defaults {
    pub const GRADIENT_LENGTH: usize = 14;
    pub const PREVIEW_LENGTH: usize = 22;
    pub const LIVE_THEME: &str = "aether";
    pub const THEME_SOURCES: &[&str] = &[
        "~/.config/omarchy/themes",
        "~/.local/share/omarchy/themes",
    ];
    pub const PREMADE_THEMES: &str = "/usr/local/share/forgeworklights/led_themes.json";
    pub const DATABASE_FILE: &str = "led_themes.json";
    pub const TUI_DATABASE_FILE: &str = "tui_themes.json";
    pub const LOG_FILE: &str = "forgeworklights.log";
    pub const MIN_LOG_LEVEL: &str = "info";
    pub const MAX_LOG_ENTRIES: usize = 500;
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// On first run, creates config file with default values.
    /// Auto-completes missing keys with default values.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from `path`, creating or normalizing it as needed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run - create config file with default values
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let original_content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&original_content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        // Serialize back to get normalized content
        let normalized_content = toml::to_string_pretty(&config)?;

        // If content changed, save the updated config
        if original_content != normalized_content {
            config.save_to(path)?;
        }

        Ok(config)
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Get path to config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(get_config_dir()?.join("config.toml"))
    }

    /// Validate config content.
    pub fn validate_content(content: &str) -> Result<Config> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("{}", e))
    }

    /// LED themes database path.
    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.themes.database {
            Some(path) => Ok(expand_home(path)),
            None => Ok(get_config_dir()?.join(defaults::DATABASE_FILE)),
        }
    }

    /// TUI palettes database path.
    pub fn tui_database_path(&self) -> Result<PathBuf> {
        match &self.themes.tui_database {
            Some(path) => Ok(expand_home(path)),
            None => Ok(get_config_dir()?.join(defaults::TUI_DATABASE_FILE)),
        }
    }

    /// Premade themes file path.
    pub fn premade_path(&self) -> PathBuf {
        expand_home(&self.themes.premade)
    }

    /// Theme source directories, `~` expanded.
    pub fn source_dirs(&self) -> Vec<PathBuf> {
        self.themes.sources.iter().map(|s| expand_home(s)).collect()
    }

    /// Live-tracking theme key, if enabled.
    pub fn live_theme(&self) -> Option<&str> {
        let key = self.themes.live_theme.trim();
        (!key.is_empty()).then_some(key)
    }

    /// Log file path.
    pub fn log_file_path(&self) -> Result<PathBuf> {
        match &self.logging.file_path {
            Some(path) => Ok(expand_home(path)),
            None => Ok(get_cache_dir()?.join(defaults::LOG_FILE)),
        }
    }
}
