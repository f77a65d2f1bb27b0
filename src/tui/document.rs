//! A page laid out as rows of styled text.
//!
//! Pages build a [`Document`] section by section; the document knows which
//! rows belong to which section, so it can report a [`SectionLayout`] in
//! logical pixels for the scroll tracker.

use ratatui::text::Line;

use crate::scroll::SectionLayout;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Section {
    id: &'static str,
    tracked: bool,
    start: usize,
    end: usize,
}

/// Rows of a page plus the section each row belongs to.
#[derive(Debug, Clone, Default)]
pub struct Document {
    lines: Vec<Line<'static>>,
    sections: Vec<Section>,
    anchors: Vec<usize>,
}

impl Document {
    /// Empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a section. Following rows belong to it until the next call.
    ///
    /// Only `tracked` sections appear in [`layout`](Self::layout).
    pub fn section(&mut self, id: &'static str, tracked: bool) {
        let start = self.lines.len();
        self.sections.push(Section {
            id,
            tracked,
            start,
            end: start,
        });
    }

    /// Appends a row.
    pub fn push(&mut self, line: impl Into<Line<'static>>) {
        self.lines.push(line.into());
        if let Some(section) = self.sections.last_mut() {
            section.end = self.lines.len();
        }
    }

    /// Appends an empty row.
    pub fn blank(&mut self) {
        self.push(Line::default());
    }

    /// Remembers the current row, e.g. where a project card starts.
    pub fn anchor(&mut self) {
        self.anchors.push(self.lines.len());
    }

    /// Rows recorded with [`anchor`](Self::anchor), in order.
    #[must_use]
    pub fn anchors(&self) -> &[usize] {
        &self.anchors
    }

    /// All rows.
    #[must_use]
    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.lines.len()
    }

    /// First row of section `id`.
    #[must_use]
    pub fn section_start(&self, id: &str) -> Option<usize> {
        self.sections.iter().find(|s| s.id == id).map(|s| s.start)
    }

    /// Ids of every section, tracked or not, in order.
    pub fn section_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sections.iter().map(|s| s.id)
    }

    /// Total height in logical pixels.
    #[must_use]
    pub fn height_px(&self, row_height_px: f64) -> f64 {
        self.rows() as f64 * row_height_px
    }

    /// Tracked sections in logical pixels.
    #[must_use]
    pub fn layout(&self, row_height_px: f64) -> SectionLayout {
        let mut layout = SectionLayout::new();
        for section in self.sections.iter().filter(|s| s.tracked) {
            layout.push(
                section.id,
                section.start as f64 * row_height_px,
                (section.end - section.start) as f64 * row_height_px,
            );
        }
        layout
    }
}

/// Greedy word wrap to `width` columns. Words longer than a row are split.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if current_len > 0 {
                rows.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            rows.push(word.into_iter().collect());
            word = rest;
        }
        let needed = if current_len == 0 {
            word.len()
        } else {
            current_len + 1 + word.len()
        };
        if needed > width && current_len > 0 {
            rows.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current_len += word.len();
        current.extend(word);
    }
    if current_len > 0 || rows.is_empty() {
        rows.push(current);
    }
    rows
}

/// Pads or truncates `text` to exactly `width` columns, centered.
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.chars().take(width).collect();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_counts_tracked_sections_only() {
        let mut doc = Document::new();
        doc.section("hero", true);
        doc.blank();
        doc.blank();
        doc.section("work", false);
        doc.blank();
        doc.section("portfolio", true);
        doc.blank();

        let layout = doc.layout(16.0);
        let ids: Vec<_> = layout.spans().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["hero", "portfolio"]);
        assert_eq!(layout.document_top("portfolio"), Some(48.0));
        assert!((doc.height_px(16.0) - 64.0).abs() < f64::EPSILON);
        assert_eq!(doc.section_start("work"), Some(2));
    }

    #[test]
    fn test_anchor_records_rows() {
        let mut doc = Document::new();
        doc.section("portfolio", true);
        doc.blank();
        doc.anchor();
        doc.push("card");
        assert_eq!(doc.anchors(), &[1]);
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap("", 10), vec![String::new()]);
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_center() {
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("abcdef", 3), "abc");
    }
}
