//! The scrollable viewport and smooth scroll animation.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::observe::{Subject, Subscription};

/// Number of frames a smooth scroll takes.
pub const SMOOTH_SCROLL_FRAMES: u32 = 12;

/// An eased scroll from one offset to another over a fixed number of frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    from: f64,
    to: f64,
    frame: u32,
    frames: u32,
}

impl ScrollAnimation {
    /// Animation from `from` to `to` over `frames` frames (at least one).
    pub fn new(from: f64, to: f64, frames: u32) -> Self {
        Self {
            from,
            to,
            frame: 0,
            frames: frames.max(1),
        }
    }

    /// Destination offset.
    pub const fn target(&self) -> f64 {
        self.to
    }

    /// Whether the last frame has been produced.
    pub const fn is_finished(&self) -> bool {
        self.frame >= self.frames
    }

    /// Offset for the next frame, or `None` once finished.
    pub fn next_offset(&mut self) -> Option<f64> {
        if self.is_finished() {
            return None;
        }
        self.frame += 1;
        let t = f64::from(self.frame) / f64::from(self.frames);
        Some(self.from + (self.to - self.from) * ease_in_out(t))
    }
}

/// Cubic ease-in-out on `0..=1`.
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Metrics {
    height: f64,
    content_height: f64,
}

/// Vertical scroll position of the page, in logical pixels.
///
/// Every accepted offset change is published to subscribers, which is how the
/// scroll tracker samples it. Clones share position, metrics and listeners.
#[derive(Clone)]
pub struct Viewport {
    offset: Subject<f64>,
    metrics: Rc<Cell<Metrics>>,
    locked: Rc<Cell<bool>>,
    animation: Rc<RefCell<Option<ScrollAnimation>>>,
}

impl Viewport {
    /// Viewport of `height` over content of the same height, at the top.
    pub fn new(height: f64) -> Self {
        Self {
            offset: Subject::new(0.0),
            metrics: Rc::new(Cell::new(Metrics {
                height,
                content_height: height,
            })),
            locked: Rc::new(Cell::new(false)),
            animation: Rc::new(RefCell::new(None)),
        }
    }

    /// Current offset.
    pub fn offset(&self) -> f64 {
        self.offset.get()
    }

    /// Visible height.
    pub fn height(&self) -> f64 {
        self.metrics.get().height
    }

    /// Largest reachable offset.
    pub fn max_offset(&self) -> f64 {
        let m = self.metrics.get();
        (m.content_height - m.height).max(0.0)
    }

    /// Updates the visible and content heights, re-clamping the offset.
    pub fn resize(&self, height: f64, content_height: f64) {
        self.metrics.set(Metrics {
            height: height.max(0.0),
            content_height: content_height.max(0.0),
        });
        let clamped = self.offset().clamp(0.0, self.max_offset());
        self.offset.set(clamped);
    }

    /// Prevents user scrolling, e.g. while a modal is open.
    pub fn set_locked(&self, locked: bool) {
        self.locked.set(locked);
        if locked {
            self.animation.borrow_mut().take();
        }
    }

    /// Whether user scrolling is currently prevented.
    pub fn is_locked(&self) -> bool {
        self.locked.get()
    }

    /// Jumps to `offset` (clamped). Cancels any running animation.
    ///
    /// Returns `false` when locked or when the offset did not change.
    pub fn set_offset(&self, offset: f64) -> bool {
        if self.is_locked() {
            return false;
        }
        self.animation.borrow_mut().take();
        self.offset.set(offset.clamp(0.0, self.max_offset()))
    }

    /// Moves by `delta` (clamped).
    pub fn scroll_by(&self, delta: f64) -> bool {
        self.set_offset(self.offset() + delta)
    }

    /// Starts an eased scroll to `offset` (clamped).
    pub fn scroll_smoothly_to(&self, offset: f64) {
        if self.is_locked() {
            return;
        }
        let target = offset.clamp(0.0, self.max_offset());
        *self.animation.borrow_mut() = Some(ScrollAnimation::new(
            self.offset(),
            target,
            SMOOTH_SCROLL_FRAMES,
        ));
    }

    /// Whether a smooth scroll is in progress.
    pub fn is_animating(&self) -> bool {
        self.animation.borrow().is_some()
    }

    /// Target of the running smooth scroll.
    pub fn animation_target(&self) -> Option<f64> {
        self.animation.borrow().map(|a| a.target())
    }

    /// Advances the running animation by one frame.
    ///
    /// Returns `true` while the animation is still running afterwards.
    pub fn advance_animation(&self) -> bool {
        let step = {
            let mut slot = self.animation.borrow_mut();
            let next = slot.as_mut().and_then(ScrollAnimation::next_offset);
            if slot.is_some_and(|a| a.is_finished()) {
                *slot = None;
            }
            next
        };
        if let Some(offset) = step {
            self.offset.set(offset.clamp(0.0, self.max_offset()));
        }
        self.is_animating()
    }

    /// Subscribes to offset changes.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&f64) + 'static,
    {
        self.offset.subscribe(listener)
    }

    /// Number of offset listeners.
    pub fn listener_count(&self) -> usize {
        self.offset.listener_count()
    }
}

impl fmt::Debug for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Viewport")
            .field("offset", &self.offset())
            .field("height", &self.height())
            .field("max_offset", &self.max_offset())
            .field("locked", &self.is_locked())
            .field("animating", &self.is_animating())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        let viewport = Viewport::new(400.0);
        viewport.resize(400.0, 2000.0);
        viewport
    }

    #[test]
    fn test_offset_is_clamped() {
        let viewport = viewport();
        viewport.set_offset(-20.0);
        assert!(viewport.offset().abs() < f64::EPSILON);
        viewport.set_offset(5000.0);
        assert!((viewport.offset() - 1600.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resize_reclamps() {
        let viewport = viewport();
        viewport.set_offset(1600.0);
        viewport.resize(400.0, 1000.0);
        assert!((viewport.offset() - 600.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_lock_blocks_scrolling() {
        let viewport = viewport();
        viewport.set_locked(true);
        assert!(!viewport.scroll_by(48.0));
        viewport.scroll_smoothly_to(800.0);
        assert!(!viewport.is_animating());
        viewport.set_locked(false);
        assert!(viewport.scroll_by(48.0));
    }

    #[test]
    fn test_smooth_scroll_reaches_target() {
        let viewport = viewport();
        viewport.scroll_smoothly_to(800.0);
        let mut frames = 0;
        while viewport.advance_animation() {
            frames += 1;
            assert!(frames < 100);
        }
        assert_eq!(frames + 1, SMOOTH_SCROLL_FRAMES);
        assert!((viewport.offset() - 800.0).abs() < 1e-9);
    }

    #[test]
    fn test_manual_scroll_cancels_animation() {
        let viewport = viewport();
        viewport.scroll_smoothly_to(800.0);
        viewport.advance_animation();
        viewport.scroll_by(16.0);
        assert!(!viewport.is_animating());
    }

    #[test]
    fn test_ease_in_out_endpoints() {
        assert!(ease_in_out(0.0).abs() < f64::EPSILON);
        assert!((ease_in_out(1.0) - 1.0).abs() < f64::EPSILON);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-9);
    }
}
