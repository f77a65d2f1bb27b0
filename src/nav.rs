//! Link dispatch: in-page fragments scroll, everything else navigates.

use serde::Serialize;

use crate::router::{Navigator, Route};
use crate::scroll::{SectionLayout, Viewport};

/// Where a link points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum NavTarget {
    /// `#section-id` on the current page
    Fragment(String),
    /// Another page
    Page(String),
}

impl NavTarget {
    /// Classifies an href.
    pub fn parse(href: &str) -> Self {
        let href = href.trim();
        match href.strip_prefix('#') {
            Some(id) => Self::Fragment(id.to_string()),
            None => Self::Page(href.to_string()),
        }
    }
}

/// Result of dispatching a link.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum NavOutcome {
    /// A smooth scroll to `offset` was started
    Scrolled {
        /// Target section
        id: String,
        /// Destination scroll offset
        offset: f64,
    },
    /// The page changed
    Navigated(Route),
    /// The fragment names no tracked section; nothing happened
    Missing(String),
}

/// Turns link activations into scrolls or navigations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationDispatcher {
    header_height: f64,
}

impl NavigationDispatcher {
    /// Dispatcher that keeps targets clear of a header `header_height` tall.
    pub const fn new(header_height: f64) -> Self {
        Self { header_height }
    }

    /// Scroll offset that puts `document_top` just under the header.
    pub fn scroll_offset(&self, document_top: f64) -> f64 {
        (document_top - self.header_height).max(0.0)
    }

    /// Follows `target`. Never retries; a missing fragment is logged and
    /// otherwise ignored.
    pub fn dispatch<N: Navigator + ?Sized>(
        &self,
        target: &NavTarget,
        layout: &SectionLayout,
        viewport: &Viewport,
        navigator: &mut N,
    ) -> NavOutcome {
        match target {
            NavTarget::Fragment(id) => {
                let Some(top) = layout.document_top(id) else {
                    tracing::debug!(fragment = %id, "Scroll target not found");
                    return NavOutcome::Missing(id.clone());
                };
                let offset = self.scroll_offset(top);
                viewport.scroll_smoothly_to(offset);
                NavOutcome::Scrolled {
                    id: id.clone(),
                    offset,
                }
            }
            NavTarget::Page(path) => {
                let route = Route::parse(path);
                navigator.navigate(route.clone());
                NavOutcome::Navigated(route)
            }
        }
    }
}
