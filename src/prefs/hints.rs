//! Read-only, best-effort system hints: OS dark mode and locale.

use super::{Language, Theme};

/// Environment variables consulted for the locale, in priority order.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// What the operating system suggests when nothing is stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemHints {
    /// OS dark-mode preference, `None` when it cannot be determined
    pub prefers_dark: Option<bool>,
    /// Locale tag such as `es-CR`, `None` when unset or `C`/`POSIX`
    pub locale: Option<String>,
}

impl SystemHints {
    /// No hints at all.
    pub const fn none() -> Self {
        Self {
            prefers_dark: None,
            locale: None,
        }
    }

    /// Queries the OS. Never fails; anything undeterminable is `None`.
    pub fn detect() -> Self {
        Self {
            prefers_dark: detect_dark_mode(),
            locale: detect_locale_from_env(),
        }
    }

    /// Theme suggested by the OS, if any.
    pub fn theme(&self) -> Option<Theme> {
        self.prefers_dark.map(Theme::from_dark_flag)
    }

    /// Supported language suggested by the locale, if any.
    pub fn language(&self) -> Option<Language> {
        self.locale.as_deref().and_then(Language::from_locale)
    }
}

/// Polls the OS color scheme.
pub fn detect_dark_mode() -> Option<bool> {
    match dark_light::detect() {
        Ok(dark_light::Mode::Dark) => Some(true),
        Ok(dark_light::Mode::Light) => Some(false),
        Ok(dark_light::Mode::Unspecified) => None,
        Err(err) => {
            tracing::debug!("OS color scheme detection failed: {err}");
            None
        }
    }
}

fn detect_locale_from_env() -> Option<String> {
    LOCALE_VARS
        .iter()
        .find_map(|key| std::env::var(key).ok().and_then(|v| parse_env_locale(&v)))
}

/// Normalizes a POSIX locale value into a tag: `en_US.UTF-8` becomes `en-US`.
pub fn parse_env_locale(raw: &str) -> Option<String> {
    let s = raw.trim();
    let s = s.split_once('.').map_or(s, |(part, _)| part);
    let s = s.split_once('@').map_or(s, |(part, _)| part);
    let s = s.trim();
    if s.is_empty() || s == "C" || s == "POSIX" {
        return None;
    }
    Some(s.replace('_', "-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_locale() {
        assert_eq!(parse_env_locale("es_CR.UTF-8").as_deref(), Some("es-CR"));
        assert_eq!(parse_env_locale("de_DE@euro").as_deref(), Some("de-DE"));
        assert_eq!(parse_env_locale("en-US").as_deref(), Some("en-US"));
        assert_eq!(parse_env_locale("C"), None);
        assert_eq!(parse_env_locale("POSIX"), None);
        assert_eq!(parse_env_locale("  "), None);
    }

    #[test]
    fn test_hint_accessors() {
        let hints = SystemHints {
            prefers_dark: Some(true),
            locale: Some("es-CR".to_string()),
        };
        assert_eq!(hints.theme(), Some(Theme::Dark));
        assert_eq!(hints.language(), Some(Language::Spanish));

        let unsupported = SystemHints {
            prefers_dark: None,
            locale: Some("fr-FR".to_string()),
        };
        assert_eq!(unsupported.theme(), None);
        assert_eq!(unsupported.language(), None);
    }
}
