//! Enumeration of candidate theme directories.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use forgeworklights_logger as logger;
use forgeworklights_theme::{extract_palette, ExtractedPalette};

/// A theme directory with a recognized palette.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveredTheme {
    /// Directory name, used as the database key
    pub key: String,
    pub dir: PathBuf,
    pub palette: ExtractedPalette,
}

/// Scan every source directory for themes.
///
/// Missing or unreadable source directories are skipped. Subdirectories
/// are visited in name order. When several sources hold the same theme
/// name, the first source wins. Directories without a recognized palette
/// are ignored.
pub fn discover_themes(source_dirs: &[PathBuf]) -> Vec<DiscoveredTheme> {
    let mut seen = HashSet::new();
    let mut themes = Vec::new();

    for source in source_dirs {
        for dir in theme_dirs(source) {
            let Some(key) = dir.file_name().and_then(|n| n.to_str()).map(str::to_string) else {
                logger::debug(format!("Skipping non UTF-8 theme dir {}", dir.display()));
                continue;
            };
            if seen.contains(&key) {
                logger::debug(format!("{} shadowed by an earlier source", dir.display()));
                continue;
            }

            match extract_palette(&dir) {
                Some(palette) => {
                    seen.insert(key.clone());
                    themes.push(DiscoveredTheme { key, dir, palette });
                }
                None => logger::debug(format!("No palette in {}", dir.display())),
            }
        }
    }
    themes
}

fn theme_dirs(source: &Path) -> Vec<PathBuf> {
    if !source.is_dir() {
        logger::debug(format!("Theme source {} not found", source.display()));
        return Vec::new();
    }

    let entries = match std::fs::read_dir(source) {
        Ok(entries) => entries,
        Err(e) => {
            logger::warn(format!("Cannot list {}: {}", source.display(), e));
            return Vec::new();
        }
    };

    let mut dirs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();
    dirs
}
