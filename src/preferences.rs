//! User preferences
//!
//! A tiny string key-value store behind the `PreferenceStore` port, and the
//! `ThemeContext` that reads the colour scheme from it once and writes it
//! back on every toggle.

use anyhow::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::constants::{THEME_DARK, THEME_LIGHT, THEME_PREFERENCE_KEY};
use crate::paths::preferences_path;

/// Persistent string key-value storage
pub trait PreferenceStore: Send {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Preferences kept as a JSON object on disk
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferenceStore {
    /// Open the store at the default location
    pub fn open_default() -> Self {
        Self::open(preferences_path())
    }

    /// Open the store at `path`; a missing or unreadable file starts empty
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match Self::load(&path) {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!("Failed to read preferences from {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    fn load(path: &Path) -> Result<BTreeMap<String, String>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }
}

/// In-memory store, for tests and throwaway sessions
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferenceStore {
    pub values: BTreeMap<String, String>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Colour scheme state, handed down from the composition root
pub struct ThemeContext {
    is_dark: bool,
    store: Box<dyn PreferenceStore>,
}

impl std::fmt::Debug for ThemeContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeContext")
            .field("is_dark", &self.is_dark)
            .finish_non_exhaustive()
    }
}

impl ThemeContext {
    /// Read the saved scheme once. Missing or empty means dark.
    pub fn load(store: Box<dyn PreferenceStore>) -> Self {
        let is_dark = match store.read(THEME_PREFERENCE_KEY) {
            Some(saved) if !saved.is_empty() => saved == THEME_DARK,
            _ => true,
        };
        Self { is_dark, store }
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    /// Flip the scheme and persist it. A failed write keeps the new scheme for this session.
    pub fn toggle(&mut self) {
        self.is_dark = !self.is_dark;
        let value = if self.is_dark { THEME_DARK } else { THEME_LIGHT };

        if let Err(e) = self.store.write(THEME_PREFERENCE_KEY, value) {
            tracing::warn!("Failed to save theme preference: {}", e);
        } else {
            tracing::debug!("Theme switched to {}", value);
        }
    }

    /// Pick between a dark and a light variant of something
    pub fn pick<T>(&self, dark: T, light: T) -> T {
        if self.is_dark {
            dark
        } else {
            light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(value: Option<&str>) -> MemoryPreferenceStore {
        let mut store = MemoryPreferenceStore::default();
        if let Some(v) = value {
            store.values.insert(THEME_PREFERENCE_KEY.to_string(), v.to_string());
        }
        store
    }

    /// Store that refuses every write
    struct ReadOnlyStore;

    impl PreferenceStore for ReadOnlyStore {
        fn read(&self, _key: &str) -> Option<String> {
            Some(THEME_LIGHT.to_string())
        }

        fn write(&mut self, _key: &str, _value: &str) -> Result<()> {
            anyhow::bail!("read-only")
        }
    }

    #[test]
    fn test_missing_key_defaults_to_dark() {
        let theme = ThemeContext::load(Box::new(store_with(None)));
        assert!(theme.is_dark());
    }

    #[test]
    fn test_empty_value_defaults_to_dark() {
        let theme = ThemeContext::load(Box::new(store_with(Some(""))));
        assert!(theme.is_dark());
    }

    #[test]
    fn test_saved_values() {
        assert!(ThemeContext::load(Box::new(store_with(Some("dark")))).is_dark());
        assert!(!ThemeContext::load(Box::new(store_with(Some("light")))).is_dark());
        assert!(!ThemeContext::load(Box::new(store_with(Some("sepia")))).is_dark());
    }

    #[test]
    fn test_loading_does_not_write() {
        let theme = ThemeContext::load(Box::new(store_with(None)));
        assert!(theme.store.read(THEME_PREFERENCE_KEY).is_none());
    }

    #[test]
    fn test_toggle_writes_each_time() {
        let mut theme = ThemeContext::load(Box::new(store_with(None)));

        theme.toggle();
        assert!(!theme.is_dark());
        assert_eq!(theme.store.read(THEME_PREFERENCE_KEY).as_deref(), Some("light"));

        theme.toggle();
        assert!(theme.is_dark());
        assert_eq!(theme.store.read(THEME_PREFERENCE_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_failed_write_keeps_toggle() {
        let mut theme = ThemeContext::load(Box::new(ReadOnlyStore));
        assert!(!theme.is_dark());
        theme.toggle();
        assert!(theme.is_dark());
    }

    #[test]
    fn test_pick() {
        let theme = ThemeContext::load(Box::new(store_with(Some("light"))));
        assert_eq!(theme.pick("moon", "sun"), "sun");
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs").join("preferences.json");

        let mut store = FilePreferenceStore::open(&path);
        assert!(store.read(THEME_PREFERENCE_KEY).is_none());
        store.write(THEME_PREFERENCE_KEY, THEME_LIGHT).unwrap();

        let reopened = FilePreferenceStore::open(&path);
        assert_eq!(reopened.read(THEME_PREFERENCE_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_theme_persists_across_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");

        let mut first = ThemeContext::load(Box::new(FilePreferenceStore::open(&path)));
        assert!(first.is_dark());
        first.toggle();

        let second = ThemeContext::load(Box::new(FilePreferenceStore::open(&path)));
        assert!(!second.is_dark());
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = FilePreferenceStore::open(&path);
        assert!(store.read(THEME_PREFERENCE_KEY).is_none());
    }
}
