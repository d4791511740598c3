//! XDG Base Directory support for ForgeworkLights.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "forgeworklights";

/// Get the configuration directory following XDG conventions.
///
/// Returns `$XDG_CONFIG_HOME/forgeworklights` or `~/.config/forgeworklights`.
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|p| p.join(APP_NAME))
        .context("Failed to determine config directory")
}

/// Get the cache directory following XDG conventions.
///
/// Returns `$XDG_CACHE_HOME/forgeworklights` or `~/.cache/forgeworklights`.
pub fn get_cache_dir() -> Result<PathBuf> {
    dirs::cache_dir()
        .map(|p| p.join(APP_NAME))
        .context("Failed to determine cache directory")
}

/// Expand a leading `~` to the home directory.
///
/// Paths without a leading `~`, or with `~user` forms, are returned unchanged.
pub fn expand_home(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => return PathBuf::from(path),
    };

    match dirs::home_dir() {
        Some(home) => home.join(rest.trim_start_matches('/')),
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_dir() {
        let dir = get_config_dir().unwrap();
        assert!(dir.ends_with("forgeworklights"));
    }

    #[test]
    fn test_directories_are_different() {
        let config = get_config_dir().unwrap();
        let cache = get_cache_dir().unwrap();
        assert_ne!(config, cache);
    }

    #[test]
    fn test_expand_home() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(expand_home("~"), home);
        assert_eq!(
            expand_home("~/.config/omarchy/themes"),
            home.join(".config/omarchy/themes")
        );
    }

    #[test]
    fn test_expand_home_leaves_other_paths() {
        assert_eq!(expand_home("/usr/local/share"), PathBuf::from("/usr/local/share"));
        assert_eq!(expand_home("~other/themes"), PathBuf::from("~other/themes"));
        assert_eq!(expand_home("relative/~"), PathBuf::from("relative/~"));
    }
}
