//! Project preview modal, opened over the listing page.
//!
//! While the modal is open the page underneath must not scroll; the owner
//! locks the viewport on open and unlocks it on close.

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::component::{centered_rect, Component, RenderContext};
use crate::content::PROJECTS;
use crate::shortcuts::{Action, ShortcutContext, ShortcutRegistry};

/// Events emitted by the preview modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewEvent {
    /// Open the detail page of the previewed project
    Open(usize),
    /// Copy the previewed project's link
    CopyLink(usize),
    /// Toggle the theme without closing
    ToggleTheme,
    /// Switch language without closing
    CycleLanguage,
    /// Close the modal
    Close,
    /// Quit the application
    Quit,
}

/// Modal showing one project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewModal {
    index: usize,
}

impl PreviewModal {
    /// Preview of the project at `index`.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self { index }
    }

    /// Index of the previewed project.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }
}

impl Component for PreviewModal {
    type Event = PreviewEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        let action = ShortcutRegistry::new().lookup(ShortcutContext::Preview, key)?;
        Some(match action {
            Action::OpenProject => PreviewEvent::Open(self.index),
            Action::CopyLink => PreviewEvent::CopyLink(self.index),
            Action::ToggleTheme => PreviewEvent::ToggleTheme,
            Action::CycleLanguage => PreviewEvent::CycleLanguage,
            Action::Quit => PreviewEvent::Quit,
            _ => PreviewEvent::Close,
        })
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext<'_>) {
        let Some(project) = PROJECTS.get(self.index) else {
            return;
        };
        let palette = ctx.palette;
        let labels = ctx.labels;
        let modal = centered_rect(70, 60, area);
        f.render_widget(Clear, modal);

        let mut lines = vec![
            Line::from(Span::styled(
                format!(" {} ", project.category.label()),
                Style::default().fg(palette.background).bg(palette.accent),
            )),
            Line::from(""),
            Line::from(Span::styled(
                labels.t("projects", &project.title_key()),
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                labels.t("projects", &project.description_key()),
                Style::default().fg(palette.text_secondary),
            )),
            Line::from(""),
        ];
        lines.push(Line::from(
            project
                .tags
                .iter()
                .map(|tag| {
                    let (r, g, b) = tag.color;
                    Span::styled(
                        format!("● {} ", tag.name),
                        Style::default().fg(Color::Rgb(r, g, b)),
                    )
                })
                .collect::<Vec<_>>(),
        ));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            labels.t("ui", "preview_hint"),
            Style::default().fg(palette.text_muted),
        )));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(format!(" {} ", labels.t("projects", "check_it_out")))
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.primary)),
            )
            .style(Style::default().bg(palette.surface))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, modal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_preview_events() {
        let mut modal = PreviewModal::new(4);
        assert_eq!(
            modal.handle_input(key(KeyCode::Enter)),
            Some(PreviewEvent::Open(4))
        );
        assert_eq!(
            modal.handle_input(key(KeyCode::Esc)),
            Some(PreviewEvent::Close)
        );
        assert_eq!(modal.handle_input(key(KeyCode::Down)), None);
    }
}
