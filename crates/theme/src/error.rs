use std::path::PathBuf;

use forgeworklights_color::ColorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("theme name must not be empty")]
    EmptyName,

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{}: expected an object with a \"themes\" map", .path.display())]
    Format { path: PathBuf },

    #[error("{}: malformed theme '{key}': {source}", .path.display())]
    MalformedEntry {
        path: PathBuf,
        key: String,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ThemeError>;
