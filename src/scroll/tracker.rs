//! Frame-coalesced scroll tracking.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::debug;

use super::frame::{FrameClock, FrameHandle};
use super::nav_mode::NavModeFilter;
use super::sections::{active_section, visible_fraction, SectionLayout};
use super::viewport::Viewport;
use super::ViewportState;
use crate::config::ScrollConfig;
use crate::observe::Subscription;

/// Share of the reveal section that must be on screen to show the
/// scroll-to-top control.
pub const REVEAL_FRACTION: f64 = 0.1;

/// Thresholds the tracker works with.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerSettings {
    /// Viewport line a section top must reach to become active
    pub activation_line: f64,
    /// Nav bar elevation threshold
    pub nav_threshold: f64,
    /// Nav bar hysteresis band
    pub nav_hysteresis: f64,
    /// Section whose visibility drives the scroll-to-top control
    pub reveal_section: Option<String>,
}

impl TrackerSettings {
    /// Settings from the `[scroll]` config table.
    pub fn from_config(config: &ScrollConfig) -> Self {
        Self {
            activation_line: config.activation_line(),
            nav_threshold: config.nav_threshold,
            nav_hysteresis: config.nav_hysteresis,
            reveal_section: None,
        }
    }

    /// Sets the section that reveals the scroll-to-top control.
    #[must_use]
    pub fn with_reveal_section(mut self, id: impl Into<String>) -> Self {
        self.reveal_section = Some(id.into());
        self
    }
}

struct TrackerShared {
    settings: TrackerSettings,
    viewport: Viewport,
    layout: RefCell<SectionLayout>,
    nav: RefCell<NavModeFilter>,
    state: RefCell<ViewportState>,
    pending_sample: Cell<Option<f64>>,
    pending_frame: Cell<Option<FrameHandle>>,
    recomputations: Cell<usize>,
    dirty: Cell<bool>,
}

impl TrackerShared {
    fn recompute(&self, scroll_y: f64) {
        let layout = self.layout.borrow();
        let bounds = layout.viewport_bounds(scroll_y);
        let nav_mode = self.nav.borrow_mut().update(scroll_y);

        let mut state = self.state.borrow_mut();
        let previous = state.clone();

        if let Some(id) = active_section(&bounds, self.settings.activation_line) {
            if id != state.active_section {
                debug!(section = id, "Active section changed");
                state.active_section = id.to_string();
            }
        }
        state.scroll_y = scroll_y;
        state.nav_mode = nav_mode;
        state.show_scroll_top = self.settings.reveal_section.as_deref().is_some_and(|reveal| {
            bounds
                .iter()
                .find(|b| b.id == reveal)
                .is_some_and(|b| visible_fraction(b, self.viewport.height()) >= REVEAL_FRACTION)
        });

        self.recomputations.set(self.recomputations.get() + 1);
        if *state != previous {
            self.dirty.set(true);
        }
    }
}

/// Derives [`ViewportState`] from a [`Viewport`].
///
/// Scroll samples are coalesced: a burst of offset changes between two frames
/// schedules one frame callback, which recomputes once with the latest
/// offset. Dropping the tracker (or [`detach`](Self::detach)) removes the
/// scroll listener and cancels the pending frame callback.
pub struct ScrollTracker {
    shared: Rc<TrackerShared>,
    clock: FrameClock,
    subscription: Option<Subscription>,
}

impl ScrollTracker {
    /// Starts tracking `viewport`, computing the initial state immediately.
    pub fn new(
        viewport: &Viewport,
        clock: &FrameClock,
        settings: TrackerSettings,
        layout: SectionLayout,
    ) -> Self {
        let initial = ViewportState {
            active_section: layout.first_id().unwrap_or_default().to_string(),
            ..ViewportState::default()
        };
        let nav = NavModeFilter::new(settings.nav_threshold, settings.nav_hysteresis);

        let shared = Rc::new(TrackerShared {
            settings,
            viewport: viewport.clone(),
            layout: RefCell::new(layout),
            nav: RefCell::new(nav),
            state: RefCell::new(initial),
            pending_sample: Cell::new(None),
            pending_frame: Cell::new(None),
            recomputations: Cell::new(0),
            dirty: Cell::new(false),
        });
        shared.recompute(viewport.offset());

        let weak = Rc::downgrade(&shared);
        let frame_clock = clock.clone();
        let subscription = viewport.subscribe(move |offset| {
            if let Some(shared) = weak.upgrade() {
                schedule(&shared, &weak, &frame_clock, *offset);
            }
        });

        Self {
            shared,
            clock: clock.clone(),
            subscription: Some(subscription),
        }
    }

    /// Latest derived state.
    pub fn state(&self) -> ViewportState {
        self.shared.state.borrow().clone()
    }

    /// Replaces the section layout and recomputes right away.
    ///
    /// Called after the page lays itself out again, e.g. on resize.
    pub fn set_layout(&self, layout: SectionLayout) {
        *self.shared.layout.borrow_mut() = layout;
        self.shared.recompute(self.shared.viewport.offset());
    }

    /// Current section layout.
    pub fn layout(&self) -> SectionLayout {
        self.shared.layout.borrow().clone()
    }

    /// Returns and clears the "state changed" flag.
    pub fn take_render_request(&self) -> bool {
        self.shared.dirty.replace(false)
    }

    /// How many times the state has been recomputed.
    pub fn recompute_count(&self) -> usize {
        self.shared.recomputations.get()
    }

    /// Whether a frame callback is waiting.
    pub fn has_pending_frame(&self) -> bool {
        self.shared.pending_frame.get().is_some()
    }

    /// Whether the tracker is still listening to the viewport.
    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Stops tracking: removes the listener and cancels the pending frame.
    pub fn detach(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
        if let Some(handle) = self.shared.pending_frame.take() {
            self.clock.cancel(handle);
        }
        self.shared.pending_sample.set(None);
    }
}

fn schedule(shared: &TrackerShared, weak: &Weak<TrackerShared>, clock: &FrameClock, offset: f64) {
    shared.pending_sample.set(Some(offset));
    if shared.pending_frame.get().is_some() {
        return;
    }
    let weak = Weak::clone(weak);
    let handle = clock.request(move || {
        if let Some(shared) = weak.upgrade() {
            shared.pending_frame.set(None);
            if let Some(sample) = shared.pending_sample.take() {
                shared.recompute(sample);
            }
        }
    });
    shared.pending_frame.set(Some(handle));
}

impl Drop for ScrollTracker {
    fn drop(&mut self) {
        self.detach();
    }
}

impl fmt::Debug for ScrollTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollTracker")
            .field("state", &*self.shared.state.borrow())
            .field("pending_frame", &self.shared.pending_frame.get())
            .field("attached", &self.is_attached())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::NavMode;

    fn setup() -> (Viewport, FrameClock, ScrollTracker) {
        let viewport = Viewport::new(600.0);
        let layout = SectionLayout::stacked(
            0.0,
            [("hero", 600.0), ("about-me", 500.0), ("portfolio", 1200.0)],
        );
        viewport.resize(600.0, layout.content_height());
        let clock = FrameClock::new();
        let settings = TrackerSettings::from_config(&ScrollConfig::default())
            .with_reveal_section("portfolio");
        let tracker = ScrollTracker::new(&viewport, &clock, settings, layout);
        (viewport, clock, tracker)
    }

    #[test]
    fn test_initial_state() {
        let (_viewport, _clock, tracker) = setup();
        let state = tracker.state();
        assert_eq!(state.active_section, "hero");
        assert_eq!(state.nav_mode, NavMode::Transparent);
        assert!(!state.show_scroll_top);
        assert_eq!(tracker.recompute_count(), 1);
    }

    #[test]
    fn test_burst_coalesces_to_one_recompute() {
        let (viewport, clock, tracker) = setup();
        for step in 1..=5 {
            viewport.set_offset(f64::from(step) * 100.0);
        }
        assert_eq!(clock.pending_count(), 1);
        assert_eq!(tracker.recompute_count(), 1);

        clock.tick();
        assert_eq!(tracker.recompute_count(), 2);
        let state = tracker.state();
        assert!((state.scroll_y - 500.0).abs() < f64::EPSILON);
        assert_eq!(state.active_section, "about-me");
        assert_eq!(state.nav_mode, NavMode::Elevated);
        assert!(tracker.take_render_request());
    }

    #[test]
    fn test_scroll_top_control_follows_portfolio_visibility() {
        let (viewport, clock, tracker) = setup();
        // Portfolio starts at 1100; at offset 620 its top is 480 into a
        // 600 tall viewport, so 120 of 1200 is visible.
        viewport.set_offset(620.0);
        clock.tick();
        assert!(tracker.state().show_scroll_top);

        viewport.set_offset(560.0);
        clock.tick();
        assert!(!tracker.state().show_scroll_top);
    }

    #[test]
    fn test_keeps_previous_section_when_none_reached() {
        let viewport = Viewport::new(600.0);
        let mut layout = SectionLayout::new();
        layout.push("intro", 400.0, 200.0);
        viewport.resize(600.0, 2000.0);
        let clock = FrameClock::new();
        let tracker = ScrollTracker::new(
            &viewport,
            &clock,
            TrackerSettings::from_config(&ScrollConfig::default()),
            layout,
        );
        assert_eq!(tracker.state().active_section, "intro");
    }

    #[test]
    fn test_detach_cancels_pending_frame() {
        let (viewport, clock, mut tracker) = setup();
        viewport.set_offset(300.0);
        assert!(tracker.has_pending_frame());

        tracker.detach();
        assert_eq!(clock.pending_count(), 0);
        assert_eq!(viewport.listener_count(), 0);

        viewport.set_offset(900.0);
        clock.tick();
        assert_eq!(tracker.recompute_count(), 1);
    }

    #[test]
    fn test_drop_releases_everything() {
        let (viewport, clock, tracker) = setup();
        viewport.set_offset(300.0);
        drop(tracker);
        assert_eq!(clock.pending_count(), 0);
        assert_eq!(viewport.listener_count(), 0);
    }
}
