//! Section geometry and active-section resolution.

use serde::Serialize;

/// A tracked section's edges relative to the top of the viewport.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionBounds {
    /// Fragment identifier of the section (`"about-me"`)
    pub id: String,
    /// Top edge; negative once scrolled past
    pub top: f64,
    /// Section height
    pub height: f64,
}

impl SectionBounds {
    /// Bounds from parts.
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Picks the active section.
///
/// `bounds` must be in document order. Scanning from the last section
/// backwards, the first whose top edge is at or above `activation_line` wins.
/// When several sections qualify the one furthest down the page is chosen.
/// Returns `None` when no section has reached the line.
pub fn active_section(bounds: &[SectionBounds], activation_line: f64) -> Option<&str> {
    bounds
        .iter()
        .rev()
        .find(|section| section.top <= activation_line)
        .map(|section| section.id.as_str())
}

/// Fraction of `section` inside a viewport of `viewport_height`, in `0..=1`.
pub fn visible_fraction(section: &SectionBounds, viewport_height: f64) -> f64 {
    if section.height <= 0.0 {
        return 0.0;
    }
    let visible_top = section.top.max(0.0);
    let visible_bottom = section.bottom().min(viewport_height);
    ((visible_bottom - visible_top).max(0.0) / section.height).clamp(0.0, 1.0)
}

/// A section's position in document coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionSpan {
    /// Fragment identifier
    pub id: String,
    /// Distance from the top of the document
    pub top: f64,
    /// Section height
    pub height: f64,
}

/// Document-space layout of every tracked section, in document order.
///
/// This is what the page measures after laying itself out; the tracker turns
/// it into viewport-relative [`SectionBounds`] for a given scroll offset.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SectionLayout {
    spans: Vec<SectionSpan>,
}

impl SectionLayout {
    /// Empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a layout by stacking sections of the given heights from `start`.
    pub fn stacked<'a>(start: f64, sections: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        let mut layout = Self::new();
        let mut top = start;
        for (id, height) in sections {
            layout.push(id, top, height);
            top += height;
        }
        layout
    }

    /// Appends a section. Sections must be pushed in document order.
    pub fn push(&mut self, id: impl Into<String>, top: f64, height: f64) {
        self.spans.push(SectionSpan {
            id: id.into(),
            top,
            height,
        });
    }

    /// Sections in document order.
    pub fn spans(&self) -> &[SectionSpan] {
        &self.spans
    }

    /// Whether no section is tracked.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// First section in document order.
    pub fn first_id(&self) -> Option<&str> {
        self.spans.first().map(|s| s.id.as_str())
    }

    /// Document top of the section with `id`.
    pub fn document_top(&self, id: &str) -> Option<f64> {
        self.spans.iter().find(|s| s.id == id).map(|s| s.top)
    }

    /// Bottom edge of the last section.
    pub fn content_height(&self) -> f64 {
        self.spans
            .iter()
            .map(|s| s.top + s.height)
            .fold(0.0, f64::max)
    }

    /// Viewport-relative bounds at scroll offset `scroll_y`.
    pub fn viewport_bounds(&self, scroll_y: f64) -> Vec<SectionBounds> {
        self.spans
            .iter()
            .map(|s| SectionBounds::new(s.id.clone(), s.top - scroll_y, s.height))
            .collect()
    }
}
