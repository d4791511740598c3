//! JSON theme databases: `{ "themes": { key: value } }`.
//!
//! The same document shape is used for the LED database, the premade
//! defaults and the TUI palette database.
//!
//! Entries are written back exactly as they were loaded unless they are
//! replaced. JSON that does not fit the entry type is kept as an opaque
//! value, and so are document keys other than `themes`, so loading and
//! saving a database never loses data.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use forgeworklights_color::{gradient, interpolate, ColorError, Rgb, Rounding};
use forgeworklights_logger as logger;
use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::entry::{theme_key, title_case};
use crate::error::{Result, ThemeError};
use crate::{ThemeEntry, TuiPalette};

/// Keyed collection of themes persisted as one JSON document.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeStore<T> {
    themes: BTreeMap<String, Slot<T>>,
    /// Top-level document keys besides `themes`
    extra: Map<String, Value>,
}

/// LED themes database.
pub type ThemeDatabase = ThemeStore<ThemeEntry>;

/// Per-theme control panel palettes.
pub type TuiDatabase = ThemeStore<TuiPalette>;

#[derive(Debug, Clone)]
enum Slot<T> {
    /// Parsed from disk; `raw` is what gets written back
    Loaded { entry: T, raw: Value },
    /// Inserted or modified since loading
    Fresh(T),
    /// Stored JSON that does not parse as `T`
    Opaque(Value),
}

impl<T> Slot<T> {
    fn entry(&self) -> Option<&T> {
        match self {
            Slot::Loaded { entry, .. } | Slot::Fresh(entry) => Some(entry),
            Slot::Opaque(_) => None,
        }
    }

    fn raw(&self) -> Option<&Value> {
        match self {
            Slot::Loaded { raw, .. } | Slot::Opaque(raw) => Some(raw),
            Slot::Fresh(_) => None,
        }
    }

    fn into_entry(self) -> Option<T> {
        match self {
            Slot::Loaded { entry, .. } | Slot::Fresh(entry) => Some(entry),
            Slot::Opaque(_) => None,
        }
    }
}

impl<T: PartialEq> PartialEq for Slot<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.entry(), other.entry()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self.raw() == other.raw(),
            _ => false,
        }
    }
}

impl<T: Serialize> Serialize for Slot<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Slot::Loaded { raw, .. } | Slot::Opaque(raw) => raw.serialize(serializer),
            Slot::Fresh(entry) => entry.serialize(serializer),
        }
    }
}

#[derive(Serialize)]
struct DocumentRef<'a, T> {
    themes: &'a BTreeMap<String, Slot<T>>,
    #[serde(flatten)]
    extra: &'a Map<String, Value>,
}

impl<T> Default for ThemeStore<T> {
    fn default() -> Self {
        Self {
            themes: BTreeMap::new(),
            extra: Map::new(),
        }
    }
}

impl<T> ThemeStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parsed entry for `key`. `None` for opaque entries too.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.themes.get(key).and_then(Slot::entry)
    }

    /// Whether `key` is present, parsed or not.
    pub fn contains(&self, key: &str) -> bool {
        self.themes.contains_key(key)
    }

    /// Whether `key` holds JSON that did not parse.
    pub fn is_opaque(&self, key: &str) -> bool {
        matches!(self.themes.get(key), Some(Slot::Opaque(_)))
    }

    /// Insert or replace, returning the previous parsed value.
    pub fn insert(&mut self, key: impl Into<String>, value: T) -> Option<T> {
        self.themes
            .insert(key.into(), Slot::Fresh(value))
            .and_then(Slot::into_entry)
    }

    /// Remove a theme (user-initiated deletion). Returns whether it existed.
    pub fn remove(&mut self, key: &str) -> bool {
        self.themes.remove(key).is_some()
    }

    /// All keys in sorted order, opaque ones included.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    /// Parsed entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.themes
            .iter()
            .filter_map(|(k, slot)| slot.entry().map(|e| (k.as_str(), e)))
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

impl<T: Clone> ThemeStore<T> {
    /// Copy every entry of `source` whose key is missing here, as stored
    /// in `source`. Returns the copied keys.
    pub fn restore_missing(&mut self, source: &Self) -> Vec<String> {
        let mut restored = Vec::new();
        for (key, slot) in &source.themes {
            if !self.themes.contains_key(key) {
                self.themes.insert(key.clone(), slot.clone());
                restored.push(key.clone());
            }
        }
        restored
    }
}

impl<T: DeserializeOwned> ThemeStore<T> {
    /// Load a database, substituting an empty one for anything unreadable.
    ///
    /// A missing file is silent. An unreadable or malformed file is logged
    /// as a warning.
    pub fn load(path: &Path) -> Self {
        match Self::load_strict(path) {
            Ok(store) => store,
            Err(e) => {
                logger::warn(format!("{}. Starting empty", e));
                Self::default()
            }
        }
    }

    /// Load a database, reporting a file that cannot be read or parsed.
    ///
    /// A missing file yields an empty database. Entries that do not parse
    /// are kept opaque and logged.
    pub fn load_strict(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                logger::debug(format!("{} not found, starting empty", path.display()));
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ThemeError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        parse_document(&content, path)
    }

    /// Parse a document held in memory.
    pub fn from_json(content: &str) -> Result<Self> {
        parse_document(content, Path::new("<memory>"))
    }
}

impl<T: Serialize> ThemeStore<T> {
    /// Pretty-printed JSON document.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&DocumentRef {
            themes: &self.themes,
            extra: &self.extra,
        })
        .map_err(|source| ThemeError::Parse {
            path: PathBuf::from("<memory>"),
            source,
        })
    }

    /// Write the document to a temp file next to `path`, creating parent
    /// directories. Nothing at `path` changes until the write is committed.
    pub fn stage(&self, path: &Path) -> Result<StagedWrite> {
        let write_err = |source| ThemeError::Write {
            path: path.to_path_buf(),
            source,
        };

        let mut payload = self.to_json()?;
        payload.push('\n');

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }

        let staged = StagedWrite {
            tmp_path: path.with_extension("json.tmp"),
            path: path.to_path_buf(),
            committed: false,
        };
        std::fs::write(&staged.tmp_path, payload).map_err(write_err)?;
        Ok(staged)
    }

    /// Write the database atomically: temp file next to `path`, then rename.
    ///
    /// On failure the previous file is left in place.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.stage(path)?.commit()
    }
}

/// A document written to a temp file and waiting to be renamed into place.
///
/// Dropping it uncommitted removes the temp file.
#[must_use = "a staged write does nothing until committed"]
#[derive(Debug)]
pub struct StagedWrite {
    tmp_path: PathBuf,
    path: PathBuf,
    committed: bool,
}

impl StagedWrite {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Atomically replace the destination.
    pub fn commit(mut self) -> Result<()> {
        std::fs::rename(&self.tmp_path, &self.path).map_err(|source| ThemeError::Write {
            path: self.path.clone(),
            source,
        })?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for StagedWrite {
    fn drop(&mut self) {
        if !self.committed {
            let _ = std::fs::remove_file(&self.tmp_path);
        }
    }
}

impl ThemeStore<ThemeEntry> {
    /// Add or replace a user-authored theme.
    ///
    /// The key is the lower-cased name with spaces turned into dashes; the
    /// display name is the title-cased input. Returns the key.
    pub fn create_custom<S: AsRef<str>>(
        &mut self,
        name: &str,
        anchors: &[S],
        length: usize,
    ) -> Result<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ThemeError::EmptyName);
        }

        let colors = interpolate(anchors, length)?;
        let key = theme_key(name);
        self.insert(key.clone(), ThemeEntry::new(title_case(name), colors));
        Ok(key)
    }

    /// Re-expand every theme to `length` colors, using its current colors
    /// as anchors.
    ///
    /// Entries with no colors, invalid colors or an opaque shape are left
    /// alone. Returns the number of entries whose colors changed.
    pub fn regenerate(&mut self, length: usize, rounding: Rounding) -> Result<usize> {
        if length == 0 {
            return Err(ColorError::InvalidLength(length).into());
        }

        let mut changed = 0;
        for (key, slot) in self.themes.iter_mut() {
            let Some(entry) = slot.entry() else {
                continue;
            };
            let anchors = match entry.rgb_colors() {
                Ok(anchors) if !anchors.is_empty() => anchors,
                Ok(_) => continue,
                Err(e) => {
                    logger::warn(format!("Skipping {}: {}", key, e));
                    continue;
                }
            };

            let colors: Vec<String> = gradient(&anchors, length, rounding)
                .into_iter()
                .map(Rgb::to_hex)
                .collect();
            if colors != entry.colors {
                let mut updated = entry.clone();
                updated.colors = colors;
                *slot = Slot::Fresh(updated);
                changed += 1;
            }
        }
        Ok(changed)
    }
}

/// Parse `{ "themes": { ... }, ... }`.
///
/// Fails only when the file is not JSON or the document has the wrong
/// shape. Entries that do not parse as `T` are kept opaque.
fn parse_document<T: DeserializeOwned>(content: &str, path: &Path) -> Result<ThemeStore<T>> {
    let root: Value = serde_json::from_str(content).map_err(|source| ThemeError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let format_err = || ThemeError::Format {
        path: path.to_path_buf(),
    };
    let mut root = match root {
        Value::Object(map) => map,
        _ => return Err(format_err()),
    };
    let themes = match root.remove("themes") {
        None => Map::new(),
        Some(Value::Object(themes)) => themes,
        Some(_) => return Err(format_err()),
    };

    let mut store = ThemeStore {
        themes: BTreeMap::new(),
        extra: root,
    };
    for (key, raw) in themes {
        let slot = match serde_json::from_value::<T>(raw.clone()) {
            Ok(entry) => Slot::Loaded { entry, raw },
            Err(source) => {
                let err = ThemeError::MalformedEntry {
                    path: path.to_path_buf(),
                    key: key.clone(),
                    source,
                };
                logger::warn(format!("Keeping unrecognized entry as is: {}", err));
                Slot::Opaque(raw)
            }
        };
        store.themes.insert(key, slot);
    }
    Ok(store)
}
