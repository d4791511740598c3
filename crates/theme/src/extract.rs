//! Anchor color extraction from external theme directories.
//!
//! A theme directory may hold one of several palette files. Formats are
//! tried in a fixed priority order and the first one yielding all three
//! accent colors wins.

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use forgeworklights_color::Rgb;
use forgeworklights_logger as logger;
use regex::Regex;
use serde_json::Value;

use crate::TuiPalette;

/// Recognized palette sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteFormat {
    /// `btop.theme`, CPU meter gradient
    BtopCpu,
    /// `btop.theme`, temperature gradient
    BtopTemp,
    /// `palette.json` with `accent`, `accent2`, `accent3`
    PaletteJson,
    /// `theme.json` with `accent`, `accent2`, `accent3`
    ThemeJson,
}

impl PaletteFormat {
    pub fn file_name(self) -> &'static str {
        match self {
            PaletteFormat::BtopCpu | PaletteFormat::BtopTemp => "btop.theme",
            PaletteFormat::PaletteJson => "palette.json",
            PaletteFormat::ThemeJson => "theme.json",
        }
    }

    pub fn is_btop(self) -> bool {
        matches!(self, PaletteFormat::BtopCpu | PaletteFormat::BtopTemp)
    }
}

/// Parses file content into three anchors.
pub type Extractor = fn(&str) -> Option<[Rgb; 3]>;

/// Extractors in priority order.
pub const EXTRACTORS: &[(PaletteFormat, Extractor)] = &[
    (PaletteFormat::BtopCpu, btop_cpu_gradient),
    (PaletteFormat::BtopTemp, btop_temp_gradient),
    (PaletteFormat::PaletteJson, json_accents),
    (PaletteFormat::ThemeJson, json_accents),
];

/// Result of scanning one theme directory.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedPalette {
    pub format: PaletteFormat,
    pub anchors: [Rgb; 3],
    /// Control panel palette, only available from btop files
    pub tui: Option<TuiPalette>,
}

impl ExtractedPalette {
    pub fn anchor_hex(&self) -> [String; 3] {
        self.anchors.map(Rgb::to_hex)
    }
}

/// Scan a theme directory, returning the first palette any extractor finds.
pub fn extract_palette(theme_dir: &Path) -> Option<ExtractedPalette> {
    let mut contents: HashMap<&'static str, Option<String>> = HashMap::new();

    for &(format, extractor) in EXTRACTORS {
        let file_name = format.file_name();
        let content = contents
            .entry(file_name)
            .or_insert_with(|| read_source(&theme_dir.join(file_name)));
        let Some(content) = content.as_deref() else {
            continue;
        };

        if let Some(anchors) = extractor(content) {
            let tui = format.is_btop().then(|| btop_tui_palette(content));
            return Some(ExtractedPalette {
                format,
                anchors,
                tui,
            });
        }
    }
    None
}

fn read_source(path: &Path) -> Option<String> {
    if !path.is_file() {
        return None;
    }
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            logger::debug(format!("Cannot read {}: {}", path.display(), e));
            None
        }
    }
}

static BTOP_ASSIGNMENT: OnceLock<Regex> = OnceLock::new();

fn btop_assignment() -> &'static Regex {
    BTOP_ASSIGNMENT.get_or_init(|| {
        Regex::new(r#"theme\[([A-Za-z0-9_]+)\]\s*=\s*"(#[0-9a-fA-F]{6})""#)
            .expect("btop assignment regex")
    })
}

/// `theme[key] = "#rrggbb"` assignments, first occurrence of each key wins.
pub fn parse_btop(content: &str) -> HashMap<String, Rgb> {
    let mut values = HashMap::new();
    for caps in btop_assignment().captures_iter(content) {
        if let Ok(color) = Rgb::from_hex(&caps[2]) {
            values.entry(caps[1].to_string()).or_insert(color);
        }
    }
    values
}

fn btop_triplet(content: &str, keys: [&str; 3]) -> Option<[Rgb; 3]> {
    let values = parse_btop(content);
    let [a, b, c] = keys.map(|k| values.get(k).copied());
    Some([a?, b?, c?])
}

fn btop_cpu_gradient(content: &str) -> Option<[Rgb; 3]> {
    btop_triplet(content, ["cpu_start", "cpu_mid", "cpu_end"])
}

fn btop_temp_gradient(content: &str) -> Option<[Rgb; 3]> {
    btop_triplet(content, ["temp_start", "temp_mid", "temp_end"])
}

fn json_accents(content: &str) -> Option<[Rgb; 3]> {
    let value: Value = serde_json::from_str(content).ok()?;
    let accent = |key: &str| {
        value
            .get(key)
            .and_then(Value::as_str)
            .and_then(|s| Rgb::from_hex(s).ok())
    };
    Some([accent("accent")?, accent("accent2")?, accent("accent3")?])
}

/// Control panel palette from a btop theme. Missing roles use defaults.
pub fn btop_tui_palette(content: &str) -> TuiPalette {
    let values = parse_btop(content);
    let pick = |key: &str, role: &str| -> String {
        values
            .get(key)
            .map(|c| c.to_hex())
            .or_else(|| TuiPalette::default_for(role).map(str::to_string))
            .unwrap_or_default()
    };

    let hi_fg = pick("hi_fg", "hi_fg");
    let selected_bg = pick("selected_bg", "selected_bg");
    let box_outline = values
        .get("proc_box")
        .map(|c| c.to_hex())
        .unwrap_or_else(|| hi_fg.clone());

    let mut palette = TuiPalette::default();
    for role in ["main_bg", "main_fg", "title", "inactive_fg", "div_line"] {
        palette.set(role, pick(role, role));
    }
    palette.set("secondary_bg", pick("meter_bg", "secondary_bg"));
    palette.set("button_fg", box_outline.clone());
    palette.set("box_outline", box_outline);
    palette.set("hover_bg", selected_bg.clone());
    palette.set("selected_bg", selected_bg);
    palette.set("hi_fg", hi_fg);
    palette
}
