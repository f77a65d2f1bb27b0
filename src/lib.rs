//! Folio library
//!
//! A terminal portfolio viewer. The interesting part is the ambient UI state
//! layer: a theme/language preference store observed by independently
//! mounted views, and scroll-derived view state (navigation bar appearance,
//! active section, scroll-to-top visibility) sampled once per frame.

// Module declarations
pub mod branding;
pub mod cli;
pub mod config;
pub mod content;
pub mod i18n;
pub mod logging;
pub mod nav;
pub mod observe;
pub mod prefs;
pub mod router;
pub mod scroll;
pub mod shortcuts;
pub mod tui;
