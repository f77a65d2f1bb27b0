//! Presentation preferences: theme and language.
//!
//! The [`PreferenceStore`] is the single owner of the current [`Preference`].
//! Views never talk to each other; they read the store and attach a
//! [`PreferenceObserver`] to be told when the published [`DocumentMarker`]
//! changes.

pub mod hints;
pub mod observer;
pub mod storage;
pub mod store;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use hints::SystemHints;
pub use observer::PreferenceObserver;
pub use storage::{ConfigStorage, MemoryStorage, PreferenceStorage, LANGUAGE_KEY, THEME_KEY};
pub use store::{Origin, PreferenceStore};

/// Color scheme of the whole viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark text on a light background
    #[default]
    Light,
    /// Light text on a dark background
    Dark,
}

impl Theme {
    /// All themes, in toggle order.
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    /// Value written to durable storage and to the document marker.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether this is the dark theme.
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Theme implied by an OS dark-mode flag.
    pub const fn from_dark_flag(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => anyhow::bail!("Unknown theme '{other}' (expected 'light' or 'dark')"),
        }
    }
}

/// Display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// English, also the fallback for missing translations
    #[default]
    #[serde(rename = "en")]
    English,
    /// Spanish
    #[serde(rename = "es")]
    Spanish,
}

impl Language {
    /// All supported languages, in switcher order.
    pub const ALL: [Self; 2] = [Self::English, Self::Spanish];

    /// Two-letter language code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
        }
    }

    /// Next language in switcher order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|l| *l == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Resolves a locale string such as `es_CR.UTF-8` or `en-US`.
    ///
    /// Only the primary subtag is considered. Unsupported languages yield `None`.
    pub fn from_locale(locale: &str) -> Option<Self> {
        let primary = locale
            .trim()
            .split(['-', '_', '.', '@'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        Self::ALL.into_iter().find(|l| l.code() == primary)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_locale(s)
            .ok_or_else(|| anyhow::anyhow!("Unsupported language '{}' (expected 'en' or 'es')", s.trim()))
    }
}

/// The pair of values governing presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preference {
    /// Active color scheme
    pub theme: Theme,
    /// Active display language
    pub language: Language,
}

impl Preference {
    /// The marker published for this preference.
    pub fn marker(&self) -> DocumentMarker {
        DocumentMarker {
            theme: self.theme.as_str(),
            lang: self.language.code(),
        }
    }
}

/// Document-level attributes that styling keys off.
///
/// This is the only thing observers are notified with; it carries the full
/// terminal value of both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentMarker {
    /// `"light"` or `"dark"`
    pub theme: &'static str,
    /// Language code, `"en"` or `"es"`
    pub lang: &'static str,
}

impl DocumentMarker {
    /// Reconstructs the preference the marker was published for.
    ///
    /// Markers are only built from valid preferences, so unknown values
    /// cannot occur; they would map to the defaults.
    pub fn preference(&self) -> Preference {
        Preference {
            theme: self.theme.parse().unwrap_or_default(),
            language: Language::from_locale(self.lang).unwrap_or_default(),
        }
    }

    /// Shortcut for the most common derived value.
    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parse() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(" Light ".parse::<Theme>().unwrap(), Theme::Light);
        assert!("solarized".parse::<Theme>().is_err());
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_language_from_locale() {
        assert_eq!(Language::from_locale("es_CR.UTF-8"), Some(Language::Spanish));
        assert_eq!(Language::from_locale("en-US"), Some(Language::English));
        assert_eq!(Language::from_locale("ES"), Some(Language::Spanish));
        assert_eq!(Language::from_locale("fr_FR"), None);
        assert_eq!(Language::from_locale(""), None);
    }

    #[test]
    fn test_language_cycles() {
        assert_eq!(Language::English.next(), Language::Spanish);
        assert_eq!(Language::Spanish.next(), Language::English);
    }

    #[test]
    fn test_marker_round_trip() {
        let pref = Preference {
            theme: Theme::Dark,
            language: Language::Spanish,
        };
        let marker = pref.marker();
        assert_eq!(marker.theme, "dark");
        assert_eq!(marker.lang, "es");
        assert!(marker.is_dark());
        assert_eq!(marker.preference(), pref);
    }
}
