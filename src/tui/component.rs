//! Component trait pattern for overlays.
//!
//! Overlays own their state, interpret their own keys and tell the parent
//! what happened through an event value.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use super::Palette;
use crate::i18n::Labels;

/// What every view needs to draw itself.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Labels in the current language
    pub labels: Labels<'a>,
    /// Colors of the current theme
    pub palette: Palette,
}

/// A self-contained overlay that can be rendered and handle input.
pub trait Component {
    /// Event type this component can emit
    type Event;

    /// Handle keyboard input.
    ///
    /// Returns `Some(Event)` if the parent has to act; `None` if the key was
    /// handled internally or ignored.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Render the component inside `area`.
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext<'_>);
}

/// Rectangle of `percent_x` by `percent_y` centered in `r`.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    use ratatui::layout::{Constraint, Direction, Layout};

    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
