use std::path::PathBuf;

use anyhow::Result;
use forgeworklights_color::LED_GRADIENT_LENGTH;
use forgeworklights_config::Config;

/// Inputs of one sync run.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncOptions {
    /// LED themes database, created if missing
    pub database_path: PathBuf,
    /// Control panel palettes database, not written when `None`
    pub tui_database_path: Option<PathBuf>,
    /// Read-only premade defaults
    pub premade_path: PathBuf,
    /// Directories whose subdirectories are candidate themes, highest
    /// priority first
    pub source_dirs: Vec<PathBuf>,
    /// Colors per generated theme
    pub gradient_length: usize,
    /// Theme allowed to be overwritten on every run
    pub live_key: Option<String>,
    /// Print progress to stdout
    pub verbose: bool,
}

impl SyncOptions {
    /// Options with default length and no live key or TUI database.
    pub fn new(database_path: impl Into<PathBuf>, premade_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
            tui_database_path: None,
            premade_path: premade_path.into(),
            source_dirs: Vec::new(),
            gradient_length: LED_GRADIENT_LENGTH,
            live_key: None,
            verbose: false,
        }
    }

    /// Resolve every path from the user's configuration.
    pub fn from_config(config: &Config, verbose: bool) -> Result<Self> {
        Ok(Self {
            database_path: config.database_path()?,
            tui_database_path: Some(config.tui_database_path()?),
            premade_path: config.premade_path(),
            source_dirs: config.source_dirs(),
            gradient_length: config.themes.gradient_length,
            live_key: config.live_theme().map(str::to_string),
            verbose,
        })
    }

    pub fn with_source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_dirs.push(dir.into());
        self
    }

    pub fn with_tui_database(mut self, path: impl Into<PathBuf>) -> Self {
        self.tui_database_path = Some(path.into());
        self
    }

    pub fn with_live_key(mut self, key: impl Into<String>) -> Self {
        self.live_key = Some(key.into());
        self
    }

    pub fn with_gradient_length(mut self, length: usize) -> Self {
        self.gradient_length = length;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub(crate) fn is_live(&self, key: &str) -> bool {
        self.live_key.as_deref() == Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.themes.database = Some("/tmp/fwl/led.json".to_string());
        config.themes.gradient_length = 22;

        let options = SyncOptions::from_config(&config, true).unwrap();
        assert_eq!(options.database_path, PathBuf::from("/tmp/fwl/led.json"));
        assert_eq!(options.gradient_length, 22);
        assert_eq!(options.live_key.as_deref(), Some("aether"));
        assert_eq!(options.source_dirs.len(), 2);
        assert!(options.tui_database_path.is_some());
        assert!(options.verbose);
    }

    #[test]
    fn test_builder() {
        let options = SyncOptions::new("db.json", "premade.json")
            .with_source_dir("themes")
            .with_live_key("aether");
        assert_eq!(options.gradient_length, 14);
        assert!(options.is_live("aether"));
        assert!(!options.is_live("nord"));
        assert_eq!(options.source_dirs, vec![PathBuf::from("themes")]);
    }
}
