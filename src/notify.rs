//! Synchronous change notification.
//!
//! Components that report changes own a `Notifier<E>`. Presentation code
//! registers closures with [`Notifier::subscribe`]; every event is delivered
//! to all listeners in registration order, after the mutation that caused it
//! has completed.
//!
//! # Examples
//!
//! ```ignore
//! use imagemap::notify::Notifier;
//!
//! let mut notifier: Notifier<u32> = Notifier::new();
//! let id = notifier.subscribe(|value| println!("changed to {value}"));
//! notifier.emit(&42);
//! notifier.unsubscribe(id);
//! ```

use std::fmt;

/// Handle returned by [`Notifier::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct Listener<E> {
    id: ListenerId,
    f: Box<dyn FnMut(&E)>,
}

/// A list of listeners for events of type `E`.
pub struct Notifier<E> {
    listeners: Vec<Listener<E>>,
    next_id: u64,
}

impl<E> Notifier<E> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a listener.
    pub fn subscribe<F>(&mut self, f: F) -> ListenerId
    where
        F: FnMut(&E) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push(Listener {
            id,
            f: Box::new(f),
        });
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        self.listeners.len() != before
    }

    /// Deliver an event to every listener.
    pub fn emit(&mut self, event: &E) {
        for listener in &mut self.listeners {
            (listener.f)(event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<E> Default for Notifier<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Notifier<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
