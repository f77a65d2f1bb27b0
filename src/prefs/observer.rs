//! Per-view subscription to the preference store.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use super::{Preference, PreferenceStore};
use crate::observe::Subscription;

struct ObserverState<D> {
    value: RefCell<D>,
    needs_render: Cell<bool>,
    notifications: Cell<usize>,
}

/// A view's local value derived from the preference.
///
/// The derived value is computed once on creation and again every time the
/// store publishes a new document marker. Each recomputation raises a render
/// request that the owning view consumes with
/// [`take_render_request`](Self::take_render_request).
///
/// Dropping the observer (or calling [`detach`](Self::detach)) removes its
/// listener; later mutations never reach it.
pub struct PreferenceObserver<D> {
    state: Rc<ObserverState<D>>,
    subscription: Option<Subscription>,
}

impl<D: 'static> PreferenceObserver<D> {
    /// Attaches to `store`, deriving the local value with `derive`.
    pub fn new<F>(store: &PreferenceStore, derive: F) -> Self
    where
        F: Fn(&Preference) -> D + 'static,
    {
        let state = Rc::new(ObserverState {
            value: RefCell::new(derive(&store.get())),
            needs_render: Cell::new(false),
            notifications: Cell::new(0),
        });

        let listener_state = Rc::clone(&state);
        let subscription = store.subscribe(move |marker| {
            let derived = derive(&marker.preference());
            *listener_state.value.borrow_mut() = derived;
            listener_state.needs_render.set(true);
            listener_state
                .notifications
                .set(listener_state.notifications.get() + 1);
        });

        Self {
            state,
            subscription: Some(subscription),
        }
    }

    /// Runs `f` with a reference to the derived value.
    pub fn with_value<R>(&self, f: impl FnOnce(&D) -> R) -> R {
        f(&self.state.value.borrow())
    }

    /// Returns and clears the pending render request.
    pub fn take_render_request(&self) -> bool {
        self.state.needs_render.replace(false)
    }

    /// Number of notifications received since creation.
    pub fn notification_count(&self) -> usize {
        self.state.notifications.get()
    }

    /// Whether the observer is still listening.
    pub fn is_attached(&self) -> bool {
        self.subscription.as_ref().is_some_and(Subscription::is_active)
    }

    /// Stops listening. The last derived value stays readable.
    pub fn detach(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}

impl<D: Clone + 'static> PreferenceObserver<D> {
    /// Copy of the derived value.
    pub fn value(&self) -> D {
        self.state.value.borrow().clone()
    }
}

impl<D: fmt::Debug> fmt::Debug for PreferenceObserver<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreferenceObserver")
            .field("value", &self.state.value.borrow())
            .field("needs_render", &self.state.needs_render.get())
            .field("attached", &self.subscription.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::{Language, MemoryStorage, SystemHints, Theme};

    fn store() -> PreferenceStore {
        PreferenceStore::initialize(MemoryStorage::new(), &SystemHints::none())
    }

    #[test]
    fn test_initial_value_is_derived_immediately() {
        let store = store();
        store.set_theme(Theme::Dark);
        let observer = PreferenceObserver::new(&store, |p| p.theme.is_dark());
        assert!(observer.value());
        assert!(!observer.take_render_request());
    }

    #[test]
    fn test_mutation_updates_value_and_requests_render() {
        let store = store();
        let observer = PreferenceObserver::new(&store, |p| p.language);

        store.set_language(Language::Spanish);

        assert_eq!(observer.value(), Language::Spanish);
        assert!(observer.take_render_request());
        assert!(!observer.take_render_request());
        assert_eq!(observer.notification_count(), 1);
    }

    #[test]
    fn test_unchanged_value_does_not_notify() {
        let store = store();
        let observer = PreferenceObserver::new(&store, |p| p.theme);
        store.set_theme(Theme::Light);
        assert_eq!(observer.notification_count(), 0);
    }

    #[test]
    fn test_detach_stops_notifications() {
        let store = store();
        let mut observer = PreferenceObserver::new(&store, |p| p.theme.is_dark());
        assert!(observer.is_attached());

        observer.detach();
        store.set_theme(Theme::Dark);

        assert!(!observer.is_attached());
        assert!(!observer.value());
        assert_eq!(observer.notification_count(), 0);
        assert_eq!(store.observer_count(), 0);
    }

    #[test]
    fn test_drop_releases_listener() {
        let store = store();
        let observer = PreferenceObserver::new(&store, |p| p.theme);
        assert_eq!(store.observer_count(), 1);
        drop(observer);
        assert_eq!(store.observer_count(), 0);
    }
}
