//! Scoped ownership of running animation triggers

use tracing::debug;

/// A running trigger that can be stopped
pub trait Cancel {
    fn cancel(self);
}

/// Every trigger handle acquired while a view is mounted.
///
/// `cancel_all` (or dropping the set) cancels each handle exactly once. After
/// that the set is closed: handles registered late, e.g. by an async callback
/// that finished after unmount, are cancelled on the spot.
pub struct TriggerSet<H: Cancel> {
    handles: Vec<H>,
    closed: bool,
}

impl<H: Cancel> Default for TriggerSet<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Cancel> TriggerSet<H> {
    pub fn new() -> Self {
        Self {
            handles: Vec::new(),
            closed: false,
        }
    }

    pub fn register(&mut self, handle: H) {
        if self.closed {
            handle.cancel();
            return;
        }
        self.handles.push(handle);
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Cancel everything registered so far and close the set. Returns how many were cancelled.
    pub fn cancel_all(&mut self) -> usize {
        self.closed = true;
        let count = self.handles.len();
        for handle in self.handles.drain(..) {
            handle.cancel();
        }
        if count > 0 {
            debug!("Cancelled {count} animation trigger(s)");
        }
        count
    }
}

impl<H: Cancel> Drop for TriggerSet<H> {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Tracker(Rc<Cell<u32>>);

    impl Cancel for Tracker {
        fn cancel(self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn trackers(n: usize) -> (Vec<Rc<Cell<u32>>>, Vec<Tracker>) {
        let counters: Vec<_> = (0..n).map(|_| Rc::new(Cell::new(0))).collect();
        let handles = counters.iter().map(|c| Tracker(c.clone())).collect();
        (counters, handles)
    }

    #[test]
    fn test_cancel_all_cancels_each_once() {
        let (counters, handles) = trackers(3);
        let mut set = TriggerSet::new();
        for h in handles {
            set.register(h);
        }
        assert_eq!(set.len(), 3);
        assert_eq!(set.cancel_all(), 3);
        assert_eq!(set.cancel_all(), 0);
        drop(set);
        assert!(counters.iter().all(|c| c.get() == 1));
    }

    #[test]
    fn test_drop_cancels_remaining() {
        let (counters, handles) = trackers(2);
        {
            let mut set = TriggerSet::new();
            for h in handles {
                set.register(h);
            }
        }
        assert!(counters.iter().all(|c| c.get() == 1));
    }

    #[test]
    fn test_register_after_close_cancels_immediately() {
        let (counters, mut handles) = trackers(1);
        let mut set = TriggerSet::new();
        set.cancel_all();
        assert!(set.is_closed());
        set.register(handles.remove(0));
        assert_eq!(counters[0].get(), 1);
        assert!(set.is_empty());
    }

    #[test]
    fn test_empty_set() {
        let mut set: TriggerSet<Tracker> = TriggerSet::default();
        assert!(set.is_empty());
        assert!(!set.is_closed());
        assert_eq!(set.cancel_all(), 0);
    }
}
