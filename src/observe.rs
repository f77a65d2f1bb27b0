//! Single-threaded publish/subscribe primitive.
//!
//! A [`Subject`] owns a value and a registry of listeners. Writers replace the
//! value with [`Subject::set`], which commits the new value and then calls every
//! listener synchronously, in registration order, before returning. Readers that
//! want to be told about changes call [`Subject::subscribe`] and keep the
//! returned [`Subscription`] alive for as long as they are mounted; dropping it
//! removes the listener.
//!
//! Everything here is `!Send`: the viewer runs on a single cooperative event
//! loop, so shared state is `Rc`/`RefCell` rather than locks.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::trace;

/// Identifier for a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

type Listener<T> = Rc<dyn Fn(&T)>;

struct Registry<T> {
    value: T,
    listeners: BTreeMap<ListenerId, Listener<T>>,
    next_id: u64,
}

/// Type-erased removal hook so a [`Subscription`] does not carry `T`.
trait Unsubscribe {
    fn remove(&mut self, id: ListenerId) -> bool;
}

impl<T> Unsubscribe for Registry<T> {
    fn remove(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(&id).is_some()
    }
}

/// A value plus the listeners watching it.
///
/// Cloning a `Subject` yields another handle to the same value and registry.
pub struct Subject<T> {
    inner: Rc<RefCell<Registry<T>>>,
}

impl<T> Clone for Subject<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Subject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Subject")
            .field("value", &inner.value)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> Subject<T> {
    /// Creates a subject holding `value` with no listeners.
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Registry {
                value,
                listeners: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }

    /// Returns a copy of the current value.
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Replaces the value and notifies listeners if it changed.
    ///
    /// Returns `true` when listeners were notified. The new value is committed
    /// before the first listener runs, so a listener that reads the subject sees
    /// the same value it was handed.
    pub fn set(&self, value: T) -> bool {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return false;
            }
            inner.value = value.clone();
        }
        self.notify(&value);
        true
    }

    /// Registers `listener` and returns the guard that keeps it registered.
    ///
    /// The listener is not called for the current value; callers that need an
    /// initial reading take it with [`Subject::get`].
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&T) + 'static,
    {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = ListenerId(inner.next_id);
            inner.next_id += 1;
            inner.listeners.insert(id, Rc::new(listener));
            id
        };
        trace!(listener_id = id.0, "listener registered");

        let registry: Rc<RefCell<dyn Unsubscribe>> = self.inner.clone();
        Subscription {
            id,
            registry: Some(Rc::downgrade(&registry)),
        }
    }

    /// Number of currently registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    fn notify(&self, value: &T) {
        let ids: Vec<ListenerId> = self.inner.borrow().listeners.keys().copied().collect();
        for id in ids {
            // Re-check membership: a listener may have been removed by an
            // earlier listener in this same pass.
            let listener = self.inner.borrow().listeners.get(&id).cloned();
            if let Some(listener) = listener {
                listener(value);
            }
        }
    }
}

/// Guard returned by [`Subject::subscribe`].
///
/// The listener stays registered until the guard is dropped or
/// [`Subscription::unsubscribe`] is called.
#[must_use = "dropping a Subscription immediately unsubscribes the listener"]
pub struct Subscription {
    id: ListenerId,
    registry: Option<Weak<RefCell<dyn Unsubscribe>>>,
}

impl Subscription {
    /// The id of the listener this guard owns.
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Whether the listener is still registered with a live subject.
    pub fn is_active(&self) -> bool {
        self.registry
            .as_ref()
            .is_some_and(|weak| weak.strong_count() > 0)
    }

    /// Removes the listener now. Calling it twice is a no-op.
    pub fn unsubscribe(&mut self) {
        if let Some(registry) = self.registry.take().and_then(|weak| weak.upgrade()) {
            if registry.borrow_mut().remove(self.id) {
                trace!(listener_id = self.id.0, "listener removed");
            }
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
