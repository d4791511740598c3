//! Flat selection files read by the LED daemon.
//!
//! `led-theme` holds either `match` or a theme key, `brightness` holds a
//! fraction between 0 and 1. Both are newline terminated.

use anyhow::{Context, Result};
use std::fmt;
use std::path::Path;

/// File holding the selected LED theme.
pub const LED_THEME_FILE: &str = "led-theme";

/// File holding the brightness fraction.
pub const BRIGHTNESS_FILE: &str = "brightness";

const MATCH_KEYWORD: &str = "match";

/// Which theme the daemon should render.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LedSelection {
    /// Follow the desktop's current theme
    #[default]
    Match,
    /// A specific theme key from the database
    Theme(String),
}

impl LedSelection {
    /// Parse file content. Blank content means `Match`.
    pub fn parse(content: &str) -> Self {
        match content.trim() {
            "" | MATCH_KEYWORD => LedSelection::Match,
            key => LedSelection::Theme(key.to_string()),
        }
    }
}

impl fmt::Display for LedSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedSelection::Match => f.write_str(MATCH_KEYWORD),
            LedSelection::Theme(key) => f.write_str(key),
        }
    }
}

/// Read the current LED selection from `config_dir`.
///
/// A missing file means the daemon follows the desktop theme.
pub fn read_led_selection(config_dir: &Path) -> Result<LedSelection> {
    let path = config_dir.join(LED_THEME_FILE);
    match std::fs::read_to_string(&path) {
        Ok(content) => Ok(LedSelection::parse(&content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(LedSelection::Match),
        Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
    }
}

/// Write the LED selection to `config_dir`.
pub fn write_led_selection(config_dir: &Path, selection: &LedSelection) -> Result<()> {
    std::fs::create_dir_all(config_dir)
        .with_context(|| format!("Failed to create {}", config_dir.display()))?;
    let path = config_dir.join(LED_THEME_FILE);
    std::fs::write(&path, format!("{selection}\n"))
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Read brightness as a percentage (0-100).
///
/// Missing or unparsable files read as 100.
pub fn read_brightness(config_dir: &Path) -> u8 {
    std::fs::read_to_string(config_dir.join(BRIGHTNESS_FILE))
        .ok()
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .map(|v| (v.clamp(0.0, 1.0) * 100.0).round() as u8)
        .unwrap_or(100)
}

/// Write brightness given as a percentage, clamped to 0-100.
///
/// Returns the stored percentage.
pub fn write_brightness(config_dir: &Path, percent: u8) -> Result<u8> {
    let percent = percent.min(100);
    std::fs::create_dir_all(config_dir)
        .with_context(|| format!("Failed to create {}", config_dir.display()))?;
    let path = config_dir.join(BRIGHTNESS_FILE);
    let fraction = f64::from(percent) / 100.0;
    std::fs::write(&path, format!("{fraction:.2}\n"))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_selection_is_match() {
        let dir = TempDir::new().unwrap();
        assert_eq!(read_led_selection(dir.path()).unwrap(), LedSelection::Match);
    }

    #[test]
    fn test_selection_roundtrip() {
        let dir = TempDir::new().unwrap();
        let selection = LedSelection::Theme("tokyo-night".to_string());
        write_led_selection(dir.path(), &selection).unwrap();

        let raw = std::fs::read_to_string(dir.path().join(LED_THEME_FILE)).unwrap();
        assert_eq!(raw, "tokyo-night\n");
        assert_eq!(read_led_selection(dir.path()).unwrap(), selection);

        write_led_selection(dir.path(), &LedSelection::Match).unwrap();
        let raw = std::fs::read_to_string(dir.path().join(LED_THEME_FILE)).unwrap();
        assert_eq!(raw, "match\n");
    }

    #[test]
    fn test_parse_trims() {
        assert_eq!(LedSelection::parse("  match \n"), LedSelection::Match);
        assert_eq!(LedSelection::parse("\n"), LedSelection::Match);
        assert_eq!(
            LedSelection::parse("nord\n"),
            LedSelection::Theme("nord".to_string())
        );
    }

    #[test]
    fn test_brightness_defaults_to_full() {
        let dir = TempDir::new().unwrap();
        assert_eq!(read_brightness(dir.path()), 100);

        std::fs::write(dir.path().join(BRIGHTNESS_FILE), "bright\n").unwrap();
        assert_eq!(read_brightness(dir.path()), 100);
    }

    #[test]
    fn test_brightness_write_format() {
        let dir = TempDir::new().unwrap();
        assert_eq!(write_brightness(dir.path(), 75).unwrap(), 75);
        let raw = std::fs::read_to_string(dir.path().join(BRIGHTNESS_FILE)).unwrap();
        assert_eq!(raw, "0.75\n");
        assert_eq!(read_brightness(dir.path()), 75);
    }

    #[test]
    fn test_brightness_clamped() {
        let dir = TempDir::new().unwrap();
        assert_eq!(write_brightness(dir.path(), 250).unwrap(), 100);
        assert_eq!(read_brightness(dir.path()), 100);

        std::fs::write(dir.path().join(BRIGHTNESS_FILE), "1.700\n").unwrap();
        assert_eq!(read_brightness(dir.path()), 100);
        std::fs::write(dir.path().join(BRIGHTNESS_FILE), "-0.5\n").unwrap();
        assert_eq!(read_brightness(dir.path()), 0);
    }

    #[test]
    fn test_daemon_precision_is_accepted() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(BRIGHTNESS_FILE), "0.200\n").unwrap();
        assert_eq!(read_brightness(dir.path()), 20);
    }
}
