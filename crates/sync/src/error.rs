use forgeworklights_color::ColorError;
use forgeworklights_theme::ThemeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    /// Staging or renaming a database file failed.
    #[error("failed to persist themes: {0}")]
    Persistence(#[source] ThemeError),

    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    Config(#[from] anyhow::Error),
}
