//! The preference store: single owner of the current theme and language.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use tracing::{debug, info, warn};

use super::hints::SystemHints;
use super::storage::{PreferenceStorage, LANGUAGE_KEY, THEME_KEY};
use super::{DocumentMarker, Language, Preference, Theme};
use crate::observe::{Subject, Subscription};

/// Where the current value of an axis came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Read from durable storage or set explicitly by the user
    Stored,
    /// Taken from a system hint
    System,
    /// Fixed fallback
    Default,
    /// Chosen for the running session only, never persisted
    Session,
}

struct StoreInner {
    marker: Subject<DocumentMarker>,
    storage: RefCell<Box<dyn PreferenceStorage>>,
    theme_origin: Cell<Origin>,
    language_origin: Cell<Origin>,
}

/// Handle to the process-wide preference.
///
/// Created once by the composition root and cloned into every view that
/// needs it. All clones share the same value, storage and listeners.
#[derive(Clone)]
pub struct PreferenceStore {
    inner: Rc<StoreInner>,
}

impl PreferenceStore {
    /// Resolves the initial preference and builds the store.
    ///
    /// Each axis is resolved independently: stored value, then system hint,
    /// then the fixed default (`Light`, `English`). Unreadable or invalid
    /// stored values are logged and skipped; this never fails.
    pub fn initialize<S>(storage: S, hints: &SystemHints) -> Self
    where
        S: PreferenceStorage + 'static,
    {
        let (theme, theme_origin) = resolve(
            stored::<Theme>(&storage, THEME_KEY),
            hints.theme(),
            Theme::default(),
        );
        let (language, language_origin) = resolve(
            stored::<Language>(&storage, LANGUAGE_KEY),
            hints.language(),
            Language::default(),
        );

        info!(
            theme = %theme,
            theme_origin = ?theme_origin,
            language = %language,
            language_origin = ?language_origin,
            "Preferences initialized"
        );

        let preference = Preference { theme, language };
        Self {
            inner: Rc::new(StoreInner {
                marker: Subject::new(preference.marker()),
                storage: RefCell::new(Box::new(storage)),
                theme_origin: Cell::new(theme_origin),
                language_origin: Cell::new(language_origin),
            }),
        }
    }

    /// Current preference.
    pub fn get(&self) -> Preference {
        self.inner.marker.get().preference()
    }

    /// Current document marker.
    pub fn document_marker(&self) -> DocumentMarker {
        self.inner.marker.get()
    }

    /// Where the current theme came from.
    pub fn theme_origin(&self) -> Origin {
        self.inner.theme_origin.get()
    }

    /// Where the current language came from.
    pub fn language_origin(&self) -> Origin {
        self.inner.language_origin.get()
    }

    /// Sets and persists the theme, then notifies every observer.
    ///
    /// A failed write is logged; the in-memory change and the notification
    /// still happen. Observers have all run when this returns.
    pub fn set_theme(&self, theme: Theme) {
        self.persist(THEME_KEY, theme.as_str());
        self.inner.theme_origin.set(Origin::Stored);
        let next = Preference {
            theme,
            ..self.get()
        };
        self.publish(next);
    }

    /// Sets the language, caches it, then notifies every observer.
    pub fn set_language(&self, language: Language) {
        self.persist(LANGUAGE_KEY, language.code());
        self.inner.language_origin.set(Origin::Stored);
        let next = Preference {
            language,
            ..self.get()
        };
        self.publish(next);
    }

    /// Switches the language for this session only and notifies observers.
    ///
    /// Nothing is written to storage, so the next launch starts from the
    /// stored language again.
    pub fn override_language(&self, language: Language) {
        self.inner.language_origin.set(Origin::Session);
        let next = Preference {
            language,
            ..self.get()
        };
        self.publish(next);
    }

    /// Flips between light and dark. Returns the new theme.
    pub fn toggle_theme(&self) -> Theme {
        let theme = self.get().theme.toggled();
        self.set_theme(theme);
        theme
    }

    /// Advances to the next supported language. Returns the new language.
    pub fn cycle_language(&self) -> Language {
        let language = self.get().language.next();
        self.set_language(language);
        language
    }

    /// Follows a changed OS color scheme while no theme is stored.
    ///
    /// Once the user has picked a theme the hint is ignored. Nothing is
    /// persisted. Returns `true` if the theme changed.
    pub fn apply_system_hint(&self, hints: &SystemHints) -> bool {
        if self.theme_origin() == Origin::Stored {
            return false;
        }
        let Some(theme) = hints.theme() else {
            return false;
        };
        self.inner.theme_origin.set(Origin::System);
        let next = Preference {
            theme,
            ..self.get()
        };
        let changed = self.publish(next);
        if changed {
            info!(theme = %theme, "Following system color scheme");
        }
        changed
    }

    /// Registers a listener for document marker changes.
    ///
    /// The listener runs synchronously inside the mutating call, after the
    /// new value is committed.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&DocumentMarker) + 'static,
    {
        self.inner.marker.subscribe(listener)
    }

    /// Number of attached observers.
    pub fn observer_count(&self) -> usize {
        self.inner.marker.listener_count()
    }

    fn persist(&self, key: &str, value: &str) {
        if let Err(err) = self.inner.storage.borrow_mut().write(key, value) {
            warn!("Failed to persist {key}={value}: {err:#}");
        }
    }

    fn publish(&self, preference: Preference) -> bool {
        let marker = preference.marker();
        let changed = self.inner.marker.set(marker);
        if changed {
            debug!(theme = marker.theme, lang = marker.lang, "Document marker updated");
        }
        changed
    }
}

impl fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("preference", &self.get())
            .field("theme_origin", &self.theme_origin())
            .field("observers", &self.observer_count())
            .finish_non_exhaustive()
    }
}

fn stored<T>(storage: &dyn PreferenceStorage, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    match storage.read(key) {
        Ok(Some(raw)) => match raw.parse() {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("Ignoring stored {key}: {err}");
                None
            }
        },
        Ok(None) => None,
        Err(err) => {
            warn!("Failed to read stored {key}: {err:#}");
            None
        }
    }
}

fn resolve<T>(stored: Option<T>, hinted: Option<T>, fallback: T) -> (T, Origin) {
    stored
        .map(|v| (v, Origin::Stored))
        .or_else(|| hinted.map(|v| (v, Origin::System)))
        .unwrap_or((fallback, Origin::Default))
}
