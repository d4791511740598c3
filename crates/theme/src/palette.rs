//! Per-theme palette used to style the control panel itself.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Roles understood by the control panel, with their fallback colors.
pub const DEFAULT_ROLES: &[(&str, &str)] = &[
    ("main_bg", "#091819"),
    ("main_fg", "#ffffff"),
    ("title", "#93c7d2"),
    ("hi_fg", "#c3dddf"),
    ("selected_bg", "#345254"),
    ("selected_fg", "#ffffff"),
    ("inactive_fg", "#345254"),
    ("div_line", "#345254"),
    ("box_outline", "#79beae"),
    ("button_fg", "#79beae"),
    ("secondary_bg", "#0d2324"),
    ("hover_bg", "#1a3536"),
];

/// Role -> `#rrggbb` mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TuiPalette(BTreeMap<String, String>);

impl TuiPalette {
    /// Palette holding every role at its fallback color.
    pub fn defaults() -> Self {
        Self(
            DEFAULT_ROLES
                .iter()
                .map(|(role, color)| (role.to_string(), color.to_string()))
                .collect(),
        )
    }

    /// Fallback color for a role, if the role is known.
    pub fn default_for(role: &str) -> Option<&'static str> {
        DEFAULT_ROLES
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, color)| *color)
    }

    pub fn get(&self, role: &str) -> Option<&str> {
        self.0.get(role).map(String::as_str)
    }

    /// Color for a role, falling back to the default for known roles.
    pub fn resolve(&self, role: &str) -> Option<&str> {
        self.get(role).or_else(|| Self::default_for(role))
    }

    pub fn set(&mut self, role: impl Into<String>, color: impl Into<String>) {
        self.0.insert(role.into(), color.into());
    }

    pub fn roles(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for TuiPalette {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_all_roles() {
        let palette = TuiPalette::defaults();
        assert_eq!(palette.len(), DEFAULT_ROLES.len());
        assert_eq!(palette.get("main_bg"), Some("#091819"));
        assert_eq!(palette.get("hover_bg"), Some("#1a3536"));
    }

    #[test]
    fn test_resolve_falls_back() {
        let mut palette = TuiPalette::default();
        palette.set("title", "#ff0000");
        assert_eq!(palette.resolve("title"), Some("#ff0000"));
        assert_eq!(palette.resolve("div_line"), Some("#345254"));
        assert_eq!(palette.resolve("unknown"), None);
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let mut palette = TuiPalette::default();
        palette.set("main_fg", "#ffffff");
        let json = serde_json::to_string(&palette).unwrap();
        assert_eq!(json, r##"{"main_fg":"#ffffff"}"##);
    }
}
