//! A minimal synchronous observer list.

use std::fmt;

/// Identifies a listener registered with [`Signal::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Listener<T> = Box<dyn FnMut(&T)>;

/// A list of listeners that are called, in subscription order, every time a
/// value is emitted.
pub struct Signal<T> {
    next_id: u64,
    listeners: Vec<(Subscription, Listener<T>)>,
}

impl<T> Signal<T> {
    /// Create a signal with no listeners.
    pub fn new() -> Self {
        Self {
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    /// Register a listener. The returned [`Subscription`] can be used to
    /// remove it again.
    pub fn subscribe(&mut self, listener: impl FnMut(&T) + 'static) -> Subscription {
        let id = Subscription(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != subscription);
        self.listeners.len() != before
    }

    /// Call every listener with `value`.
    pub fn emit(&mut self, value: &T) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(value);
        }
    }

    /// The number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Returns true if nobody is listening.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn listeners_run_in_subscription_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut signal = Signal::new();

        let first = Rc::clone(&seen);
        signal.subscribe(move |v: &u32| first.borrow_mut().push(("first", *v)));
        let second = Rc::clone(&seen);
        signal.subscribe(move |v: &u32| second.borrow_mut().push(("second", *v)));

        signal.emit(&7);

        assert_eq!(*seen.borrow(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn unsubscribed_listeners_are_not_called() {
        let count = Rc::new(RefCell::new(0));
        let mut signal = Signal::new();

        let counter = Rc::clone(&count);
        let id = signal.subscribe(move |_: &()| *counter.borrow_mut() += 1);
        signal.emit(&());

        assert!(signal.unsubscribe(id));
        assert!(!signal.unsubscribe(id));
        assert!(signal.is_empty());

        signal.emit(&());
        assert_eq!(*count.borrow(), 1);
    }
}
