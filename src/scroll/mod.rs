//! Scroll-derived view state.
//!
//! The [`Viewport`] publishes offset changes, the [`ScrollTracker`] samples
//! them once per frame through the [`FrameClock`], and the pure functions in
//! [`sections`] and [`nav_mode`] turn a sample into a [`ViewportState`].

pub mod frame;
pub mod nav_mode;
pub mod sections;
pub mod tracker;
pub mod viewport;

use serde::Serialize;

pub use frame::{FrameClock, FrameHandle};
pub use nav_mode::{NavMode, NavModeFilter};
pub use sections::{active_section, visible_fraction, SectionBounds, SectionLayout};
pub use tracker::{ScrollTracker, TrackerSettings};
pub use viewport::{ScrollAnimation, Viewport};

/// What the page knows about its scroll position after the last frame.
///
/// Owned by the page view and handed to the header when drawing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewportState {
    /// Offset the state was computed for
    pub scroll_y: f64,
    /// Fragment id of the highlighted section
    pub active_section: String,
    /// Navigation bar appearance
    pub nav_mode: NavMode,
    /// Whether the scroll-to-top control is shown
    pub show_scroll_top: bool,
}
