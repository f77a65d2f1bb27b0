//! Durable key-value storage behind the preference store.

use anyhow::{Context, Result};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::{Language, Theme};
use crate::config::Config;

/// Storage key holding `"light"` or `"dark"`.
pub const THEME_KEY: &str = "theme";

/// Storage key holding the cached language code.
pub const LANGUAGE_KEY: &str = "language";

/// Key-value persistence surviving process restarts.
///
/// Values are stored as raw strings; interpreting them is the caller's job, so
/// a corrupt value is reported as the string that was found rather than as an
/// error.
pub trait PreferenceStorage {
    /// Reads the value stored under `key`, if any.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Storage backed by the `[ui]` table of `config.toml`.
///
/// The file is re-read on every access so edits made by `folio config set`
/// in another terminal are picked up.
#[derive(Debug, Clone)]
pub struct ConfigStorage {
    path: PathBuf,
}

impl ConfigStorage {
    /// Storage at the default config file location.
    pub fn open() -> Result<Self> {
        Ok(Self::at(Config::config_file_path()?))
    }

    /// Storage at an explicit config file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // Unvalidated read: a bad theme must not hide a good language and vice versa.
    fn read_config(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::new());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read config file: {}", self.path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", self.path.display()))
    }
}

impl PreferenceStorage for ConfigStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let config = self.read_config()?;
        match key {
            THEME_KEY => Ok(config.ui.theme),
            LANGUAGE_KEY => Ok(config.ui.language),
            other => anyhow::bail!("Unknown preference key '{other}'"),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let mut config = self.read_config()?;
        match key {
            THEME_KEY => config.ui.theme = Some(value.to_string()),
            LANGUAGE_KEY => config.ui.language = Some(value.to_string()),
            other => anyhow::bail!("Unknown preference key '{other}'"),
        }
        // An invalid value on the other axis would fail validation on save
        if config.ui.theme.as_deref().is_some_and(|t| t.parse::<Theme>().is_err()) {
            config.ui.theme = None;
        }
        if config
            .ui
            .language
            .as_deref()
            .is_some_and(|l| l.parse::<Language>().is_err())
        {
            config.ui.language = None;
        }
        config.save_to(&self.path)
    }
}

/// In-memory storage for sessions that must not touch the config file.
///
/// Clones share the same entries, so a test can hand one clone to a store and
/// inspect what was written through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
    broken: bool,
}

impl MemoryStorage {
    /// Empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with `entries`.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: Rc::new(RefCell::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            )),
            broken: false,
        }
    }

    /// Storage whose every read and write fails, like a full or read-only disk.
    pub fn broken() -> Self {
        Self {
            entries: Rc::default(),
            broken: true,
        }
    }

    /// Raw value under `key`, bypassing the failure switch.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        if self.broken {
            anyhow::bail!("storage unavailable");
        }
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        if self.broken {
            anyhow::bail!("storage unavailable");
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_storage_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let mut storage = ConfigStorage::at(&path);

        assert_eq!(storage.read(THEME_KEY).unwrap(), None);

        storage.write(THEME_KEY, "dark").unwrap();
        storage.write(LANGUAGE_KEY, "es").unwrap();

        assert_eq!(storage.read(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(storage.read(LANGUAGE_KEY).unwrap().as_deref(), Some("es"));

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.ui.theme.as_deref(), Some("dark"));
    }

    #[test]
    fn test_config_storage_reads_invalid_value_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[ui]\ntheme = \"neon\"\nlanguage = \"es\"\n").unwrap();

        let storage = ConfigStorage::at(&path);
        assert_eq!(storage.read(THEME_KEY).unwrap().as_deref(), Some("neon"));
        assert_eq!(storage.read(LANGUAGE_KEY).unwrap().as_deref(), Some("es"));
    }

    #[test]
    fn test_config_storage_rejects_unknown_key() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = ConfigStorage::at(temp_dir.path().join("config.toml"));
        assert!(storage.read("font").is_err());
        assert!(storage.write("font", "mono").is_err());
    }

    #[test]
    fn test_memory_storage() {
        let mut storage = MemoryStorage::with_entries([(THEME_KEY, "light")]);
        let observer = storage.clone();
        assert_eq!(storage.read(THEME_KEY).unwrap().as_deref(), Some("light"));
        storage.write(THEME_KEY, "dark").unwrap();
        assert_eq!(observer.peek(THEME_KEY).as_deref(), Some("dark"));

        let mut broken = MemoryStorage::broken();
        assert!(broken.read(THEME_KEY).is_err());
        assert!(broken.write(THEME_KEY, "dark").is_err());
    }
}
