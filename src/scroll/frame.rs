//! Frame-aligned callback scheduling.
//!
//! The event loop calls [`FrameClock::tick`] once per drawn frame. Callbacks
//! requested since the previous tick run then, in request order. A callback
//! requested while a tick is running is deferred to the next tick.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// Identifies one pending frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameHandle(u64);

type FrameCallback = Box<dyn FnOnce()>;

#[derive(Default)]
struct FrameQueue {
    pending: BTreeMap<FrameHandle, FrameCallback>,
    next_id: u64,
    frames: u64,
}

/// Shared frame scheduler. Clones refer to the same queue.
#[derive(Clone, Default)]
pub struct FrameClock {
    queue: Rc<RefCell<FrameQueue>>,
}

impl FrameClock {
    /// Clock with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `callback` for the next tick.
    pub fn request<F>(&self, callback: F) -> FrameHandle
    where
        F: FnOnce() + 'static,
    {
        let mut queue = self.queue.borrow_mut();
        queue.next_id += 1;
        let handle = FrameHandle(queue.next_id);
        queue.pending.insert(handle, Box::new(callback));
        handle
    }

    /// Drops a pending callback. Returns `false` if it already ran or was
    /// cancelled.
    ///
    /// A callback cancelled by an earlier callback of the same tick does not
    /// run.
    pub fn cancel(&self, handle: FrameHandle) -> bool {
        self.queue.borrow_mut().pending.remove(&handle).is_some()
    }

    /// Runs every callback requested before this call. Returns how many ran.
    pub fn tick(&self) -> usize {
        let cutoff = {
            let mut queue = self.queue.borrow_mut();
            queue.frames += 1;
            FrameHandle(queue.next_id)
        };
        let mut count = 0;
        // Pop one at a time so callbacks may cancel or request while running
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let due = queue
                    .pending
                    .first_key_value()
                    .is_some_and(|(handle, _)| *handle <= cutoff);
                if due {
                    queue.pending.pop_first()
                } else {
                    None
                }
            };
            let Some((_, callback)) = next else {
                break;
            };
            callback();
            count += 1;
        }
        count
    }

    /// Number of callbacks waiting for the next tick.
    pub fn pending_count(&self) -> usize {
        self.queue.borrow().pending.len()
    }

    /// Number of ticks so far.
    pub fn frame_count(&self) -> u64 {
        self.queue.borrow().frames
    }
}

impl fmt::Debug for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let queue = self.queue.borrow();
        f.debug_struct("FrameClock")
            .field("pending", &queue.pending.len())
            .field("frames", &queue.frames)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_tick_runs_pending_in_order() {
        let clock = FrameClock::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for n in 0..3 {
            let log = Rc::clone(&log);
            clock.request(move || log.borrow_mut().push(n));
        }
        assert_eq!(clock.pending_count(), 3);
        assert_eq!(clock.tick(), 3);
        assert_eq!(*log.borrow(), vec![0, 1, 2]);
        assert_eq!(clock.pending_count(), 0);
    }

    #[test]
    fn test_cancel() {
        let clock = FrameClock::new();
        let ran = Rc::new(Cell::new(false));
        let ran_ref = Rc::clone(&ran);
        let handle = clock.request(move || ran_ref.set(true));

        assert!(clock.cancel(handle));
        assert!(!clock.cancel(handle));
        clock.tick();
        assert!(!ran.get());
    }

    #[test]
    fn test_cancel_from_earlier_callback_in_same_tick() {
        let clock = FrameClock::new();
        let ran = Rc::new(Cell::new(false));
        let victim: Rc<Cell<Option<FrameHandle>>> = Rc::new(Cell::new(None));

        let canceller = clock.clone();
        let victim_ref = Rc::clone(&victim);
        let cancelled = Rc::new(Cell::new(false));
        let cancelled_ref = Rc::clone(&cancelled);
        clock.request(move || {
            if let Some(handle) = victim_ref.get() {
                cancelled_ref.set(canceller.cancel(handle));
            }
        });
        let ran_ref = Rc::clone(&ran);
        victim.set(Some(clock.request(move || ran_ref.set(true))));

        assert_eq!(clock.tick(), 1);
        assert!(cancelled.get());
        assert!(!ran.get());
        assert_eq!(clock.pending_count(), 0);
    }

    #[test]
    fn test_request_during_tick_waits_for_next_frame() {
        let clock = FrameClock::new();
        let inner_ran = Rc::new(Cell::new(false));
        let inner_ref = Rc::clone(&inner_ran);
        let reentrant = clock.clone();
        clock.request(move || {
            reentrant.request(move || inner_ref.set(true));
        });

        assert_eq!(clock.tick(), 1);
        assert!(!inner_ran.get());
        assert_eq!(clock.tick(), 1);
        assert!(inner_ran.get());
        assert_eq!(clock.frame_count(), 2);
    }
}
