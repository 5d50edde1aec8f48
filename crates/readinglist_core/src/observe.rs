//! Publish-on-change notification for single-threaded hosts.
//!
//! Listeners are registered with [`ChangeNotifier::subscribe`] and stay
//! registered until the returned [`Subscription`] is dropped.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};
use std::rc::{Rc, Weak};

type Listener<E> = Rc<dyn Fn(&E)>;

struct ListenerSet<E> {
    next_id: usize,
    listeners: BTreeMap<usize, Listener<E>>,
}

/// Handle to a registered listener. Dropping it unsubscribes.
#[must_use]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// Keeps the listener registered for as long as the notifier lives.
    pub fn detach(mut self) {
        self.unsubscribe.take();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Debug for Subscription {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

/// Fan-out of change events to subscribed listeners.
pub struct ChangeNotifier<E> {
    set: Rc<RefCell<ListenerSet<E>>>,
}

impl<E: 'static> ChangeNotifier<E> {
    pub fn new() -> Self {
        Self {
            set: Rc::new(RefCell::new(ListenerSet {
                next_id: 0,
                listeners: BTreeMap::new(),
            })),
        }
    }

    /// Registers `listener` for every future [`publish`](Self::publish).
    pub fn subscribe(&self, listener: impl Fn(&E) + 'static) -> Subscription {
        let id = {
            let mut set = self.set.borrow_mut();
            let id = set.next_id;
            set.next_id += 1;
            set.listeners.insert(id, Rc::new(listener));
            id
        };

        let set: Weak<RefCell<ListenerSet<E>>> = Rc::downgrade(&self.set);
        Subscription::new(move || {
            if let Some(set) = set.upgrade() {
                set.borrow_mut().listeners.remove(&id);
            }
        })
    }

    /// Delivers `event` to listeners in subscription order.
    ///
    /// Listeners may subscribe or unsubscribe while being notified; such
    /// changes apply from the next publish.
    pub fn publish(&self, event: &E) {
        let snapshot: Vec<Listener<E>> = self.set.borrow().listeners.values().cloned().collect();
        for listener in snapshot {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.set.borrow().listeners.len()
    }
}

impl<E: 'static> Default for ChangeNotifier<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Debug for ChangeNotifier<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.set.borrow().listeners.len())
            .finish()
    }
}
