//! Help overlay listing every key binding, opened with `?`.

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use super::component::{centered_rect, Component, RenderContext};
use crate::shortcuts::{Action, ShortcutContext, ShortcutRegistry};

/// Events emitted by the help overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpEvent {
    /// Close the overlay
    Close,
    /// Quit the application
    Quit,
}

/// Scrollable list of key bindings.
#[derive(Debug, Clone)]
pub struct HelpOverlay {
    /// Current scroll offset (line number)
    pub scroll_offset: usize,
    sections: Vec<(&'static str, Vec<(Action, Vec<String>)>)>,
}

impl HelpOverlay {
    /// Builds the overlay from the registered shortcuts.
    #[must_use]
    pub fn new(registry: &ShortcutRegistry) -> Self {
        Self {
            scroll_offset: 0,
            sections: vec![
                ("Page", registry.entries(ShortcutContext::Page)),
                ("Project preview", registry.entries(ShortcutContext::Preview)),
            ],
        }
    }

    fn total_lines(&self) -> usize {
        self.sections
            .iter()
            .map(|(_, entries)| entries.len() + 2)
            .sum()
    }

    /// Scroll up by one line.
    pub const fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line.
    pub fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.total_lines() {
            self.scroll_offset += 1;
        }
    }

    fn content(&self, ctx: &RenderContext<'_>) -> Vec<Line<'static>> {
        let palette = ctx.palette;
        let mut lines = Vec::with_capacity(self.total_lines());
        for (title, entries) in &self.sections {
            lines.push(Line::from(Span::styled(
                *title,
                Style::default()
                    .fg(palette.primary)
                    .add_modifier(Modifier::BOLD),
            )));
            for (action, keys) in entries {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {:<18}", keys.join(" / ")),
                        Style::default().fg(palette.accent),
                    ),
                    Span::styled(action.description(), Style::default().fg(palette.text)),
                ]));
            }
            lines.push(Line::from(""));
        }
        lines
    }
}

impl Component for HelpOverlay {
    type Event = HelpEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match ShortcutRegistry::new().lookup(ShortcutContext::Help, key)? {
            Action::ScrollUp => {
                self.scroll_up();
                None
            }
            Action::ScrollDown => {
                self.scroll_down();
                None
            }
            Action::Quit => Some(HelpEvent::Quit),
            _ => Some(HelpEvent::Close),
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext<'_>) {
        let modal_area = centered_rect(60, 80, area);
        f.render_widget(Clear, modal_area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(modal_area);
        let content_area = chunks[0];
        let scrollbar_area = chunks[1];

        let visible_height = content_area.height.saturating_sub(2) as usize;
        let paragraph = Paragraph::new(self.content(ctx))
            .block(
                Block::default()
                    .title(format!(" {} ", ctx.labels.t("ui", "help_title")))
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(ctx.palette.primary)),
            )
            .style(
                Style::default()
                    .fg(ctx.palette.text)
                    .bg(ctx.palette.surface),
            )
            .scroll((self.scroll_offset as u16, 0));
        f.render_widget(paragraph, content_area);

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .style(Style::default().fg(ctx.palette.primary));
        let mut scrollbar_state =
            ScrollbarState::new(self.total_lines().saturating_sub(visible_height))
                .position(self.scroll_offset);
        f.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_scroll_bounds() {
        let mut help = HelpOverlay::new(&ShortcutRegistry::new());
        help.scroll_up();
        assert_eq!(help.scroll_offset, 0);
        for _ in 0..500 {
            help.scroll_down();
        }
        assert_eq!(help.scroll_offset, help.total_lines() - 1);
    }

    #[test]
    fn test_escape_closes() {
        let mut help = HelpOverlay::new(&ShortcutRegistry::new());
        let event = help.handle_input(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(event, Some(HelpEvent::Close));
        let event = help.handle_input(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE));
        assert_eq!(event, None);
        assert_eq!(help.scroll_offset, 1);
    }
}
