//! Configuration structures for ForgeworkLights settings.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Application configuration with nested sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Theme database and sync settings
    #[serde(default)]
    pub themes: ThemeSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Theme database and sync settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeSettings {
    /// Number of colors stored per LED theme
    #[serde(default = "default_gradient_length")]
    pub gradient_length: usize,

    /// Number of colors in preview swatches
    #[serde(default = "default_preview_length")]
    pub preview_length: usize,

    /// Theme key whose database entry follows its source on every sync.
    /// Empty disables live tracking.
    #[serde(default = "default_live_theme")]
    pub live_theme: String,

    /// Directories scanned for theme sources, one theme per subdirectory
    #[serde(default = "default_sources")]
    pub sources: Vec<String>,

    /// Bundled premade themes used to restore deleted defaults
    #[serde(default = "default_premade")]
    pub premade: String,

    /// LED themes database override
    #[serde(default)]
    pub database: Option<String>,

    /// TUI palettes database override
    #[serde(default)]
    pub tui_database: Option<String>,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file path (optional)
    #[serde(default)]
    pub file_path: Option<String>,

    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_min_level")]
    pub min_level: String,
}

// Default value functions for serde
fn default_gradient_length() -> usize {
    defaults::GRADIENT_LENGTH
}

fn default_preview_length() -> usize {
    defaults::PREVIEW_LENGTH
}

fn default_live_theme() -> String {
    defaults::LIVE_THEME.to_string()
}

fn default_sources() -> Vec<String> {
    defaults::THEME_SOURCES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_premade() -> String {
    defaults::PREMADE_THEMES.to_string()
}

fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            gradient_length: default_gradient_length(),
            preview_length: default_preview_length(),
            live_theme: default_live_theme(),
            sources: default_sources(),
            premade: default_premade(),
            database: None,
            tui_database: None,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file_path: None,
            min_level: default_min_level(),
        }
    }
}
