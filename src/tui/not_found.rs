//! Page shown for addresses that do not resolve.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::component::RenderContext;
use super::document::{center, Document};
use crate::router::NotFound;

/// The single section of the not-found page.
pub const NOT_FOUND: &str = "not-found";

/// Lays out the not-found page with its recovery action.
#[must_use]
pub fn compose(
    ctx: &RenderContext<'_>,
    page: &NotFound,
    width: usize,
    viewport_rows: usize,
    header_rows: usize,
) -> Document {
    let palette = ctx.palette;
    let mut doc = Document::new();
    doc.section(NOT_FOUND, true);

    let top = header_rows + viewport_rows.saturating_sub(header_rows + 7) / 2;
    for _ in 0..top {
        doc.blank();
    }

    doc.push(Line::from(Span::styled(
        center("404", width),
        Style::default()
            .fg(palette.error)
            .add_modifier(Modifier::BOLD),
    )));
    doc.push(Line::from(Span::styled(
        center(&ctx.labels.t("not_found", "title"), width),
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD),
    )));
    doc.push(Line::from(Span::styled(
        center(&ctx.labels.t("not_found", "message"), width),
        Style::default().fg(palette.text_secondary),
    )));
    doc.push(Line::from(Span::styled(
        center(&page.requested, width),
        Style::default().fg(palette.text_muted),
    )));
    doc.blank();
    for action in page.actions() {
        doc.push(Line::from(Span::styled(
            center(
                &format!("[ Enter ] {}", ctx.labels.t("not_found", action.label_key())),
                width,
            ),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )));
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Translator;
    use crate::prefs::Language;
    use crate::tui::Palette;

    #[test]
    fn test_single_recovery_action_rendered() {
        let translator = Translator::bundled();
        let ctx = RenderContext {
            labels: translator.labels(Language::Spanish),
            palette: Palette::dark(),
        };
        let page = NotFound {
            requested: "/project/99".to_string(),
        };
        let doc = compose(&ctx, &page, 60, 20, 5);
        let action_rows = doc
            .lines()
            .iter()
            .filter(|line| line.spans.iter().any(|s| s.content.contains("[ Enter ]")))
            .count();
        assert_eq!(action_rows, 1);
    }
}
