//! Theme entries and key/name derivation.

use forgeworklights_color::{ColorError, Rgb};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::TuiPalette;

/// One theme in the LED database.
///
/// Colors are kept as stored so that entries written by other tools survive
/// a load/save cycle untouched. Unknown fields are preserved in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeEntry {
    /// Display name
    #[serde(default)]
    pub name: String,

    /// Gradient driven onto the LEDs, `#rrggbb` each
    #[serde(default)]
    pub colors: Vec<String>,

    /// Palette for styling the control panel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tui: Option<TuiPalette>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ThemeEntry {
    pub fn new(name: impl Into<String>, colors: Vec<String>) -> Self {
        Self {
            name: name.into(),
            colors,
            tui: None,
            extra: Map::new(),
        }
    }

    pub fn with_tui(mut self, tui: TuiPalette) -> Self {
        self.tui = Some(tui);
        self
    }

    /// Parsed gradient colors.
    pub fn rgb_colors(&self) -> Result<Vec<Rgb>, ColorError> {
        self.colors.iter().map(|c| Rgb::from_hex(c)).collect()
    }
}

/// Display name for a theme directory: `solar-flare` -> `Solar Flare`.
pub fn humanize(dir_name: &str) -> String {
    title_case(&dir_name.replace('-', " "))
}

/// Database key for a user-supplied theme name: `Solar Flare` -> `solar-flare`.
pub fn theme_key(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "-")
}

/// Upper-case every letter that follows a non-letter, lower-case the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}
