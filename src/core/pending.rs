//! # Pending State
//!
//! The one shared cell of the link-status layer: the path of the most recently
//! activated navigation that the host has not yet confirmed.
//!
//! ```text
//! PendingState
//! ├── pending_path: RefCell<Option<String>>   // None = nothing in flight
//! ├── observers: RefCell<Vec<(id, Observer)>> // notified synchronously on change
//! └── next_id: Cell<u64>                      // subscription id counter
//! ```
//!
//! The cell is owned by a [`LinkStatusProvider`](super::provider::LinkStatusProvider)
//! and reached through [`LinkStatusContext`](super::provider::LinkStatusContext)
//! handles. Everything here is single-threaded (`Rc`/`RefCell`): writes happen
//! inside event callbacks, reads happen during render.

use log::debug;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Observer = Rc<dyn Fn(Option<&str>)>;

pub struct PendingState {
    pending_path: RefCell<Option<String>>,
    observers: RefCell<Vec<(u64, Observer)>>,
    next_id: Cell<u64>,
}

impl PendingState {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self {
            pending_path: RefCell::new(None),
            observers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        })
    }

    /// Current pending path, if a navigation is in flight.
    pub fn get(&self) -> Option<String> {
        self.pending_path.borrow().clone()
    }

    /// Replace the pending path.
    ///
    /// Returns `true` if the value changed. Observers are only notified on a
    /// change, so writing the same value twice yields a single notification.
    pub fn set(&self, path: Option<String>) -> bool {
        {
            let mut current = self.pending_path.borrow_mut();
            if *current == path {
                debug!("Pending path unchanged ({:?})", path);
                return false;
            }
            debug!("Pending path: {:?} -> {:?}", *current, path);
            *current = path;
        }
        self.notify();
        true
    }

    /// Register an observer. It stays registered until the returned
    /// [`Subscription`] is dropped.
    pub fn subscribe(self: &Rc<Self>, observer: impl Fn(Option<&str>) + 'static) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.observers.borrow_mut().push((id, Rc::new(observer)));
        debug!("Pending state observer {} registered", id);
        Subscription {
            id,
            state: Rc::downgrade(self),
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }

    fn unsubscribe(&self, id: u64) {
        self.observers.borrow_mut().retain(|(observer_id, _)| *observer_id != id);
        debug!("Pending state observer {} released", id);
    }

    // Observers may read, write, subscribe or unsubscribe while being notified,
    // so no borrow is held across a callback. Each observer sees the value as
    // of its own call.
    fn notify(&self) {
        let snapshot: Vec<Observer> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();

        for observer in snapshot {
            let value = self.get();
            observer(value.as_deref());
        }
    }
}

impl fmt::Debug for PendingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingState")
            .field("pending_path", &*self.pending_path.borrow())
            .field("observers", &self.observer_count())
            .finish()
    }
}

/// RAII guard for an observer registration.
#[must_use = "dropping a Subscription unregisters the observer immediately"]
pub struct Subscription {
    id: u64,
    state: Weak<PendingState>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            state.unsubscribe(self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder(state: &Rc<PendingState>) -> (Subscription, Rc<RefCell<Vec<Option<String>>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let sub = state.subscribe(move |value| sink.borrow_mut().push(value.map(str::to_string)));
        (sub, seen)
    }

    #[test]
    fn test_starts_empty() {
        let state = PendingState::new();
        assert_eq!(state.get(), None);
        assert_eq!(state.observer_count(), 0);
    }

    #[test]
    fn test_set_overwrites_previous_value() {
        let state = PendingState::new();
        state.set(Some("/a".to_string()));
        state.set(Some("/b".to_string()));
        assert_eq!(state.get().as_deref(), Some("/b"));
    }

    #[test]
    fn test_observers_see_new_value_synchronously() {
        let state = PendingState::new();
        let (_sub, seen) = recorder(&state);

        assert!(state.set(Some("/dashboard".to_string())));
        assert!(state.set(None));

        assert_eq!(
            *seen.borrow(),
            vec![Some("/dashboard".to_string()), None]
        );
    }

    #[test]
    fn test_equal_value_notifies_once() {
        let state = PendingState::new();
        let (_sub, seen) = recorder(&state);

        assert!(state.set(Some("/x".to_string())));
        assert!(!state.set(Some("/x".to_string())));
        // Clearing an already-empty cell is a no-op in effect
        assert!(state.set(None));
        assert!(!state.set(None));

        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_dropping_subscription_unregisters() {
        let state = PendingState::new();
        let (sub, seen) = recorder(&state);
        assert_eq!(state.observer_count(), 1);

        drop(sub);
        assert_eq!(state.observer_count(), 0);

        state.set(Some("/ignored".to_string()));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_subscription_outliving_state_is_harmless() {
        let state = PendingState::new();
        let (sub, _seen) = recorder(&state);
        drop(state);
        drop(sub);
    }

    #[test]
    fn test_observer_may_write_during_notification() {
        let state = PendingState::new();
        let weak = Rc::downgrade(&state);
        let _redirect = state.subscribe(move |value| {
            if value == Some("/old") {
                if let Some(state) = weak.upgrade() {
                    state.set(Some("/new".to_string()));
                }
            }
        });
        let (_sub, seen) = recorder(&state);

        state.set(Some("/old".to_string()));

        assert_eq!(state.get().as_deref(), Some("/new"));
        // Later observers never see a stale value
        assert!(seen.borrow().iter().all(|v| v.as_deref() == Some("/new")));
    }

    #[test]
    fn test_observers_notified_in_registration_order() {
        let state = PendingState::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        let first = {
            let order = Rc::clone(&order);
            state.subscribe(move |_| order.borrow_mut().push(1))
        };
        let second = {
            let order = Rc::clone(&order);
            state.subscribe(move |_| order.borrow_mut().push(2))
        };

        state.set(Some("/".to_string()));
        assert_eq!(*order.borrow(), vec![1, 2]);
        drop((first, second));
    }
}
