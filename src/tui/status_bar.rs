//! Status bar widget for messages and key hints.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::component::RenderContext;
use crate::router::Route;

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar: the pending message or the default hints on
    /// the left, the current address on the right.
    pub fn render(
        f: &mut Frame,
        area: Rect,
        ctx: &RenderContext<'_>,
        message: Option<&str>,
        route: &Route,
    ) {
        let palette = ctx.palette;
        let left = match message {
            Some(message) => Line::from(Span::styled(
                format!(" {message}"),
                Style::default().fg(palette.success),
            )),
            None => Line::from(vec![
                Span::styled(" ?", Style::default().fg(palette.accent)),
                Span::styled(" help  ", Style::default().fg(palette.text_muted)),
                Span::styled(
                    format!("t {}", ctx.labels.t("ui", "status_theme")),
                    Style::default().fg(palette.text_muted),
                ),
                Span::styled(
                    format!("  l {}", ctx.labels.t("ui", "status_language")),
                    Style::default().fg(palette.text_muted),
                ),
                Span::styled("  q quit", Style::default().fg(palette.text_muted)),
            ]),
        };
        let right = Line::from(Span::styled(
            format!("{route} "),
            Style::default().fg(palette.primary),
        ))
        .alignment(Alignment::Right);

        let style = Style::default().bg(palette.surface);
        f.render_widget(Paragraph::new(left).style(style), area);
        f.render_widget(Paragraph::new(right), area);
    }
}
