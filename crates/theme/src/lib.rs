//! Theme system for ForgeworkLights.
//!
//! Provides the theme entry model, the JSON theme databases (LED themes,
//! premade defaults, control panel palettes) and extraction of anchor
//! colors from external theme directories.

mod entry;
mod error;
mod extract;
mod palette;
mod store;

pub use entry::{humanize, theme_key, title_case, ThemeEntry};
pub use error::{Result, ThemeError};
pub use extract::{
    btop_tui_palette, extract_palette, parse_btop, ExtractedPalette, Extractor, PaletteFormat,
    EXTRACTORS,
};
pub use palette::{TuiPalette, DEFAULT_ROLES};
pub use store::{StagedWrite, ThemeDatabase, ThemeStore, TuiDatabase};
