//! Color palettes for the light and dark themes.
//!
//! Views never pick colors themselves; they derive a [`Palette`] from the
//! current preference through a preference observer and draw with it.

use ratatui::style::Color;

use crate::prefs::Theme;

/// Semantic colors for the whole interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // Primary UI colors
    /// Borders, titles and emphasis
    pub primary: Color,
    /// Highlights, selections and the active nav link
    pub accent: Color,
    /// Confirmations
    pub success: Color,
    /// Errors and the not-found page
    pub error: Color,

    // Text hierarchy
    /// Body text
    pub text: Color,
    /// Secondary text such as dates and positions
    pub text_secondary: Color,
    /// Hints and dim content
    pub text_muted: Color,

    // Backgrounds
    /// Page background
    pub background: Color,
    /// Selected card background
    pub highlight_bg: Color,
    /// Elevated header and modal surfaces
    pub surface: Color,
}

impl Palette {
    /// Palette for dark backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Black,
            highlight_bg: Color::DarkGray,
            surface: Color::Rgb(30, 30, 30),
        }
    }

    /// Palette for light backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Rgb(17, 18, 63), // #11123F
            accent: Color::Rgb(163, 119, 86), // #A37756
            success: Color::Rgb(0, 128, 0),
            error: Color::Red,

            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,

            background: Color::White,
            highlight_bg: Color::Rgb(230, 230, 230),
            surface: Color::Rgb(245, 245, 245),
        }
    }

    /// Palette for `theme`.
    #[must_use]
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::for_theme(Theme::default())
    }
}

/// Decorative hero background, chosen by the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    /// Vertical light beams on black
    Beams,
    /// Soft three-color gradient
    Iridescence,
}

impl Backdrop {
    /// Backdrop for a dark or light document.
    #[must_use]
    pub const fn for_dark(is_dark: bool) -> Self {
        if is_dark {
            Self::Beams
        } else {
            Self::Iridescence
        }
    }

    /// Background color of row `row` out of `rows`.
    #[must_use]
    pub fn row_color(self, row: usize, rows: usize) -> Color {
        match self {
            Self::Beams => Color::Black,
            Self::Iridescence => {
                const STOPS: [(f64, f64, f64); 3] =
                    [(17.0, 18.0, 63.0), (75.0, 120.0, 119.0), (163.0, 119.0, 86.0)];
                let t = if rows <= 1 {
                    0.0
                } else {
                    row as f64 / (rows - 1) as f64
                };
                let (a, b, local) = if t < 0.5 {
                    (STOPS[0], STOPS[1], t * 2.0)
                } else {
                    (STOPS[1], STOPS[2], (t - 0.5) * 2.0)
                };
                let mix = |x: f64, y: f64| (x + (y - x) * local).round() as u8;
                Color::Rgb(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
            }
        }
    }

    /// Foreground glyph drawn at column `col`, if any.
    #[must_use]
    pub const fn glyph(self, col: usize) -> Option<char> {
        match self {
            Self::Beams if col % 7 == 3 => Some('│'),
            Self::Beams | Self::Iridescence => None,
        }
    }
}

/// Border color of the interview card, chosen by the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardGlow {
    /// Frame and badge color
    pub border: Color,
}

impl CardGlow {
    /// Glow for a dark or light document.
    #[must_use]
    pub const fn for_dark(is_dark: bool) -> Self {
        let border = if is_dark {
            Color::Rgb(0, 255, 255) // #00FFFF
        } else {
            Color::Rgb(59, 130, 246) // #3B82F6
        };
        Self { border }
    }
}
