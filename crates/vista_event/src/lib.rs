//! # vista_event - Synchronous Signals
//!
//! Observer lists for single-threaded notification:
//! - Handlers run synchronously, inside the call to [`Signal::emit`]
//! - Priority-ordered delivery (higher priority first, then subscription order)
//! - Subscribing or unsubscribing from inside a handler is allowed and takes
//!   effect from the next emission

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Handler priority
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Low = 0,
    Normal = 1,
    High = 2,
    Critical = 3,
}

impl Default for Priority {
    fn default() -> Self {
        Self::Normal
    }
}

/// Subscriber ID, unique within one signal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(pub u64);

/// Handler function type
pub type Handler<T> = Rc<dyn Fn(&T)>;

struct Subscription<T> {
    id: SubscriberId,
    priority: Priority,
    handler: Handler<T>,
}

/// A single notification channel carrying values of type `T`
pub struct Signal<T> {
    subscriptions: RefCell<Vec<Subscription<T>>>,
    next_subscriber_id: Cell<u64>,
}

impl<T> Signal<T> {
    /// Create a signal with no subscribers
    pub fn new() -> Self {
        Self {
            subscriptions: RefCell::new(Vec::new()),
            next_subscriber_id: Cell::new(1),
        }
    }

    /// Subscribe a handler
    pub fn subscribe<F>(&self, handler: F) -> SubscriberId
    where
        F: Fn(&T) + 'static,
    {
        self.subscribe_with_priority(handler, Priority::Normal)
    }

    /// Subscribe with priority
    pub fn subscribe_with_priority<F>(&self, handler: F, priority: Priority) -> SubscriberId
    where
        F: Fn(&T) + 'static,
    {
        let id = SubscriberId(self.next_subscriber_id.get());
        self.next_subscriber_id.set(id.0 + 1);

        let mut subscriptions = self.subscriptions.borrow_mut();
        subscriptions.push(Subscription {
            id,
            priority,
            handler: Rc::new(handler),
        });
        // Stable sort keeps subscription order within a priority
        subscriptions.sort_by(|a, b| b.priority.cmp(&a.priority));

        id
    }

    /// Unsubscribe, returning whether the subscriber existed
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        let mut subscriptions = self.subscriptions.borrow_mut();
        let before = subscriptions.len();
        subscriptions.retain(|s| s.id != id);
        subscriptions.len() != before
    }

    /// Deliver a value to every subscriber, in priority order
    pub fn emit(&self, value: &T) {
        // Snapshot so handlers may touch this signal while it is being emitted
        let handlers: Vec<Handler<T>> = self
            .subscriptions
            .borrow()
            .iter()
            .map(|s| Rc::clone(&s.handler))
            .collect();

        for handler in handlers {
            handler(value);
        }
    }

    /// Number of subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscriptions.borrow().len()
    }

    /// Check if nobody is listening
    pub fn is_empty(&self) -> bool {
        self.subscriptions.borrow().is_empty()
    }

    /// Remove every subscriber
    pub fn clear(&self) {
        self.subscriptions.borrow_mut().clear();
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
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Prelude
pub mod prelude {
    pub use crate::{Handler, Priority, Signal, SubscriberId};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_reaches_subscribers() {
        let signal: Signal<i32> = Signal::new();
        let total = Rc::new(Cell::new(0));
        let total_clone = total.clone();

        signal.subscribe(move |v| total_clone.set(total_clone.get() + *v));
        signal.emit(&2);
        signal.emit(&40);

        assert_eq!(total.get(), 42);
    }

    #[test]
    fn test_unsubscribe() {
        let signal: Signal<()> = Signal::new();
        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();

        let id = signal.subscribe(move |_| count_clone.set(count_clone.get() + 1));
        signal.emit(&());
        assert!(signal.unsubscribe(id));
        assert!(!signal.unsubscribe(id));
        signal.emit(&());

        assert_eq!(count.get(), 1);
        assert!(signal.is_empty());
    }

    #[test]
    fn test_priority() {
        let signal: Signal<()> = Signal::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        let low = order.clone();
        let high = order.clone();
        let normal = order.clone();

        signal.subscribe_with_priority(move |_| low.borrow_mut().push("low"), Priority::Low);
        signal.subscribe_with_priority(move |_| high.borrow_mut().push("high"), Priority::High);
        signal.subscribe(move |_| normal.borrow_mut().push("normal"));
        signal.emit(&());

        assert_eq!(*order.borrow(), vec!["high", "normal", "low"]);
    }

    #[test]
    fn test_subscribe_during_emit() {
        let signal: Rc<Signal<()>> = Rc::new(Signal::new());
        let inner = signal.clone();
        let added = Rc::new(Cell::new(false));
        let added_clone = added.clone();

        signal.subscribe(move |_| {
            if !added_clone.get() {
                added_clone.set(true);
                inner.subscribe(|_| {});
            }
        });
        signal.emit(&());

        assert_eq!(signal.subscriber_count(), 2);
    }
}
