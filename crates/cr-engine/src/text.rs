//! Text lookup: built-in defaults, game texts, and an optional override file.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::EngineResult;

/// Template for the new-achievement line; `{}` is replaced by the achievement text.
pub const NEW_ACHIEVEMENT: &str = "new_achievement";
/// Shown when no way is available from a non-terminal move.
pub const NO_WAYS_AVAILABLE: &str = "no_ways_available";
/// Prompt for the way number.
pub const YOUR_WAY_PROMPT: &str = "your_way_prompt";
/// Shown after input that names no listed way.
pub const ENTER_VALID_WAY: &str = "enter_valid_way";
/// Shown when the run finishes.
pub const GAME_OVER: &str = "game_over";
/// Optional closing text; nothing is shown when it resolves empty.
pub const CREDITS: &str = "credits";

/// Resolves text keys to display strings.
///
/// [`TextTable`] is the default; a driver may hand a [`Game`](crate::Game)
/// its own resolver, e.g. one backed by a translation catalogue.
pub trait TextResolver: fmt::Debug {
    /// Resolve `key`, returning `fallback` (or the key itself) when unknown.
    fn resolve(&self, key: &str, fallback: Option<&str>) -> String;
}

/// A flat key to text map built up in layers; later layers win.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextTable {
    texts: HashMap<String, String>,
}

impl TextTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The engine's default texts.
    pub fn builtin() -> Self {
        Self::new().with_texts([
            (NEW_ACHIEVEMENT, "New achievement: {}"),
            (NO_WAYS_AVAILABLE, "There is nowhere left to go."),
            (YOUR_WAY_PROMPT, "Your way: "),
            (ENTER_VALID_WAY, "Enter the number of one of the ways above."),
            (GAME_OVER, "Game over."),
        ])
    }

    /// Set one text.
    pub fn with_text(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.texts.insert(key.into(), text.into());
        self
    }

    /// Merge texts over the current ones.
    pub fn with_texts<K, V>(mut self, texts: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.texts
            .extend(texts.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Merge a TOML override file over the current texts.
    ///
    /// A missing or malformed file leaves the table unchanged.
    pub fn with_override_file(self, path: &Path) -> Self {
        match read_overrides(path) {
            Ok(overrides) => {
                debug!(path = %path.display(), count = overrides.len(), "loaded text overrides");
                self.with_texts(overrides)
            }
            Err(e) => {
                warn!(path = %path.display(), "ignoring text overrides: {e}");
                self
            }
        }
    }

    /// Look up a text without fallback.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.texts.get(key).map(String::as_str)
    }

    /// Number of known keys.
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

impl TextResolver for TextTable {
    fn resolve(&self, key: &str, fallback: Option<&str>) -> String {
        self.get(key).or(fallback).unwrap_or(key).to_string()
    }
}

/// Read a flat TOML table. Non-string values are skipped.
fn read_overrides(path: &Path) -> EngineResult<Vec<(String, String)>> {
    let content = fs::read_to_string(path)?;
    let table: toml::Table = toml::from_str(&content)?;

    let mut overrides = Vec::with_capacity(table.len());
    for (key, value) in table {
        match value {
            toml::Value::String(text) => overrides.push((key, text)),
            other => debug!(key = %key, kind = other.type_str(), "skipping non-string text"),
        }
    }
    Ok(overrides)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn resolves_known_keys() {
        let table = TextTable::builtin();
        assert_eq!(table.resolve(GAME_OVER, None), "Game over.");
    }

    #[test]
    fn unknown_key_falls_back() {
        let table = TextTable::new();
        assert_eq!(table.resolve("missing", Some("fallback")), "fallback");
        assert_eq!(table.resolve("missing", None), "missing");
        assert_eq!(table.resolve(CREDITS, Some("")), "");
    }

    #[test]
    fn later_layers_win() {
        let table = TextTable::builtin()
            .with_texts([(GAME_OVER, "Fin.")])
            .with_text("move_1", "A dark hall.");
        assert_eq!(table.resolve(GAME_OVER, None), "Fin.");
        assert_eq!(table.resolve("move_1", None), "A dark hall.");
    }

    #[test]
    fn override_file_is_merged() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "game_over = \"The curtain falls.\"").unwrap();
        writeln!(file, "credits = \"Written by nobody\"").unwrap();
        writeln!(file, "volume = 11").unwrap();

        let table = TextTable::builtin().with_override_file(file.path());
        assert_eq!(table.resolve(GAME_OVER, None), "The curtain falls.");
        assert_eq!(table.resolve(CREDITS, Some("")), "Written by nobody");
        assert_eq!(table.get("volume"), None);
    }

    #[test]
    fn missing_override_file_is_ignored() {
        let table = TextTable::builtin().with_override_file(Path::new("/no/such/texts.toml"));
        assert_eq!(table, TextTable::builtin());
    }

    #[test]
    fn malformed_override_file_is_ignored() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "game_over = \"unterminated").unwrap();

        let table = TextTable::builtin().with_override_file(file.path());
        assert_eq!(table, TextTable::builtin());
    }
}
