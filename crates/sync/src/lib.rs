//! Theme synchronization for ForgeworkLights.
//!
//! Merges three inputs into the persisted LED themes database:
//!
//! - premade defaults, used only to restore themes the user deleted
//! - theme directories discovered on disk, expanded into gradients
//! - the database itself, whose entries are never overwritten except for
//!   the live-tracking theme
//!
//! ```text
//!  theme dirs ──► extract anchors ──► gradient ──┐
//!  premade ──────────────────────► restore ──────┼──► led_themes.json
//!  led_themes.json ──► load ─────────────────────┘    tui_themes.json
//! ```

mod discover;
mod error;
mod options;
mod report;
mod sync;

pub use discover::{discover_themes, DiscoveredTheme};
pub use error::SyncError;
pub use options::SyncOptions;
pub use report::SyncReport;
pub use sync::sync;

use forgeworklights_config::Config;

/// Sync using the user's configuration.
///
/// Returns the number of restored, added and updated themes.
pub fn sync_themes(verbose: bool) -> Result<usize, SyncError> {
    let config = Config::load()?;
    Ok(sync_with_config(&config, verbose)?.changes())
}

/// Sync with every path and setting taken from `config`.
pub fn sync_with_config(config: &Config, verbose: bool) -> Result<SyncReport, SyncError> {
    let options = SyncOptions::from_config(config, verbose)?;
    sync(&options)
}
