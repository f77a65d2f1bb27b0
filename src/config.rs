//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution. The `[ui]` table
//! doubles as the durable storage behind the preference store.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::branding::{APP_DATA_DIR, CONFIG_DIR_ENV};
use crate::prefs::{Language, Theme};

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Display the key binding overlay on startup
    #[serde(default = "default_show_help")]
    pub show_help_on_startup: bool,
    /// Stored theme (`"light"` or `"dark"`); absent means "follow the system"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    /// Cached language code; absent means "detect from locale"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

const fn default_show_help() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_help_on_startup: default_show_help(),
            theme: None,
            language: None,
        }
    }
}

/// Geometry and thresholds used by the scroll tracker and navigation.
///
/// Values are logical pixels; one terminal row is `row_height_px` pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Height of the fixed header, subtracted from fragment scroll targets
    pub header_height: f64,
    /// Offset above which the nav bar becomes elevated
    pub nav_threshold: f64,
    /// Minimum offset change since the last mode flip before flipping again
    pub nav_hysteresis: f64,
    /// Extra slack below the header when deciding the active section
    pub activation_margin: f64,
    /// Pixels per terminal row
    pub row_height_px: f64,
    /// Rows moved per arrow key or wheel notch
    pub scroll_step_rows: u16,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_height: 80.0,
            nav_threshold: 10.0,
            nav_hysteresis: 5.0,
            activation_margin: 100.0,
            row_height_px: 16.0,
            scroll_step_rows: 3,
        }
    }
}

impl ScrollConfig {
    /// Viewport-relative line a section top must reach to become active.
    pub fn activation_line(&self) -> f64 {
        self.header_height + self.activation_margin
    }

    /// Scroll distance of one step, in pixels.
    pub fn step_px(&self) -> f64 {
        f64::from(self.scroll_step_rows) * self.row_height_px
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Folio/config.toml`
/// - macOS: `~/Library/Application Support/Folio/config.toml`
/// - Windows: `%APPDATA%\Folio\config.toml`
///
/// `FOLIO_CONFIG_DIR` replaces the directory on every platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Scroll tracking geometry
    #[serde(default)]
    pub scroll: ScrollConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// - Linux: `~/.config/Folio/`
    /// - macOS: `~/Library/Application Support/Folio/`
    /// - Windows: `%APPDATA%\Folio\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).with_context(|| {
                format!("Failed to create config directory: {}", dir.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp config file: {}", temp_path.display())
        })?;

        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename temp config file to: {}", path.display()))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `ui.theme` is "light" or "dark" when set
    /// - `ui.language` is a supported language when set
    /// - scroll geometry is finite and non-negative, with a positive row height
    pub fn validate(&self) -> Result<()> {
        if let Some(theme) = &self.ui.theme {
            theme
                .parse::<Theme>()
                .with_context(|| format!("Invalid ui.theme '{theme}'"))?;
        }

        if let Some(language) = &self.ui.language {
            language
                .parse::<Language>()
                .with_context(|| format!("Invalid ui.language '{language}'"))?;
        }

        let s = &self.scroll;
        for (name, value) in [
            ("header_height", s.header_height),
            ("nav_threshold", s.nav_threshold),
            ("nav_hysteresis", s.nav_hysteresis),
            ("activation_margin", s.activation_margin),
        ] {
            if !value.is_finite() || value < 0.0 {
                anyhow::bail!("scroll.{name} must be a non-negative number, got {value}");
            }
        }
        if !s.row_height_px.is_finite() || s.row_height_px <= 0.0 {
            anyhow::bail!(
                "scroll.row_height_px must be positive, got {}",
                s.row_height_px
            );
        }
        if s.scroll_step_rows == 0 {
            anyhow::bail!("scroll.scroll_step_rows must be at least 1");
        }

        Ok(())
    }
}
