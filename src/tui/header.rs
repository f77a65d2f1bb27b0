//! Fixed navigation bar drawn over the top of the page.
//!
//! The bar reads the page's [`ViewportState`] for its appearance and the
//! highlighted link, and the preference for its theme and language controls.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::component::RenderContext;
use super::home::NAV_LINKS;
use crate::branding::OWNER_HANDLE;
use crate::prefs::Preference;
use crate::scroll::{NavMode, ViewportState};

/// Navigation bar widget.
pub struct Header;

impl Header {
    /// Draws the bar into `area`.
    ///
    /// `highlight_links` is false on pages without tracked sections, where no
    /// link can be active.
    pub fn render(
        f: &mut Frame,
        area: Rect,
        ctx: &RenderContext<'_>,
        state: &ViewportState,
        preference: Preference,
        highlight_links: bool,
    ) {
        let palette = ctx.palette;
        f.render_widget(Clear, area);

        let block = match state.nav_mode {
            NavMode::Transparent => Block::default().style(Style::default().bg(palette.background)),
            NavMode::Elevated => Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(palette.text_muted))
                .style(Style::default().bg(palette.surface)),
        };
        let inner = block.inner(area);
        f.render_widget(block, area);
        if inner.height == 0 {
            return;
        }

        let mut links = vec![Span::styled(
            format!(" ◐ {OWNER_HANDLE}   "),
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        )];
        for (position, (href, key)) in NAV_LINKS.iter().enumerate() {
            let active = highlight_links && href.trim_start_matches('#') == state.active_section;
            let style = if active {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(palette.text)
            };
            links.push(Span::styled(
                format!("{} {}", position + 1, ctx.labels.t("header", key)),
                style,
            ));
            links.push(Span::raw("   "));
        }

        let theme_key = if preference.theme.is_dark() {
            "theme_dark"
        } else {
            "theme_light"
        };
        let icon = if preference.theme.is_dark() { "☾" } else { "☀" };
        let controls = Line::from(vec![
            Span::styled(
                format!("{icon} {}", ctx.labels.t("ui", theme_key)),
                Style::default().fg(palette.text),
            ),
            Span::styled("  |  ", Style::default().fg(palette.text_muted)),
            Span::styled(
                ctx.labels.t("header", preference.language.code()),
                Style::default().fg(palette.text),
            ),
            Span::raw(" "),
        ])
        .alignment(Alignment::Right);

        let row = Rect {
            y: inner.y + inner.height.saturating_sub(1) / 2,
            height: 1,
            ..inner
        };
        f.render_widget(Paragraph::new(Line::from(links)), row);
        f.render_widget(Paragraph::new(controls), row);
    }
}
