//! Branding and identity of the portfolio owner.
//!
//! Names, paths and contact links live here so the viewer can be pointed at a
//! different portfolio by editing one file.

/// The human-readable display name of the application.
pub const APP_DISPLAY_NAME: &str = "Folio";

/// The binary/executable name (lowercase, no spaces).
pub const APP_BINARY_NAME: &str = "folio";

/// The directory name for application data (config, logs).
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "Folio";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "FOLIO_CONFIG_DIR";

/// Environment variable holding the tracing filter directive.
pub const LOG_FILTER_ENV: &str = "FOLIO_LOG";

/// The portfolio owner, shown in the hero banner and footer.
pub const OWNER_NAME: &str = "Gabriel Lobo";

/// Public handle of the portfolio owner.
pub const OWNER_HANDLE: &str = "glovooker";

/// Resume link opened from the about section.
pub const RESUME_URL: &str =
    "https://drive.google.com/file/d/1RCFSEzpYfF0TRMQGtc1n6efWuFbFoNdw/view?usp=sharing";

/// Recorded interview featured in the about section.
pub const INTERVIEW_URL: &str =
    "https://www.youtube.com/watch?v=er7WuC09n78&ab_channel=UniversidadCENFOTEC";

/// Contact links shown in the footer, in display order.
pub const CONTACT_LINKS: &[(&str, &str)] = &[
    ("WhatsApp", "https://wa.me/50683833903"),
    ("GitHub", "https://github.com/glovooker"),
    ("LinkedIn", "https://www.linkedin.com/in/glovooker/"),
];

/// Copyright line for the footer; `rights` is the translated notice.
pub fn copyright_line(year: i32, rights: &str) -> String {
    format!("\u{a9} {year} {OWNER_NAME}. {rights}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branding_consistency() {
        // Ensure binary name is lowercase
        assert_eq!(APP_BINARY_NAME, APP_BINARY_NAME.to_lowercase());

        // Ensure no spaces in binary name or data dir
        assert!(!APP_BINARY_NAME.contains(' '));
        assert!(!APP_DATA_DIR.contains(' '));

        assert!(INTERVIEW_URL.starts_with("https://"));
        for (_, url) in CONTACT_LINKS {
            assert!(url.starts_with("https://"));
        }
    }

    #[test]
    fn test_copyright_line() {
        let line = copyright_line(2026, "All rights reserved.");
        assert_eq!(line, "\u{a9} 2026 Gabriel Lobo. All rights reserved.");
    }
}
