//! # Signal Module
//!
//! Explicit subscription in place of ambient DOM-style callbacks: a
//! component registers a handler against a named signal source, and
//! delivery is synchronous, in registration order, on the emitting
//! thread.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Store ──emit(CartChanged)──► Signal ──► renderer handler           │
//! │                                      └─► bridge-updater handler     │
//! │                                                                     │
//! │  One cooperative event loop, no queue, no background delivery.      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Signals clone cheaply (shared subscriber list), so the site that
//! registers handlers and the site that fires them can hold the same
//! source without owning each other.

use std::sync::{Arc, Mutex};

/// Boxed subscriber callback.
type Handler<T> = Box<dyn FnMut(&T) + Send>;

/// A named signal source with synchronous in-order delivery.
pub struct Signal<T> {
    subscribers: Arc<Mutex<Vec<Handler<T>>>>,
}

impl<T> Signal<T> {
    /// Creates a signal with no subscribers.
    pub fn new() -> Self {
        Signal {
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Registers a handler. Handlers fire in registration order.
    pub fn subscribe(&self, handler: impl FnMut(&T) + Send + 'static) {
        self.subscribers
            .lock()
            .expect("signal subscriber list poisoned")
            .push(Box::new(handler));
    }

    /// Delivers an event to every subscriber, synchronously, in
    /// registration order, on the calling thread.
    ///
    /// Handlers must not subscribe to the signal they are being
    /// delivered on; the subscriber list is locked for the duration of
    /// the emit.
    pub fn emit(&self, event: &T) {
        let mut subscribers = self
            .subscribers
            .lock()
            .expect("signal subscriber list poisoned");
        for handler in subscribers.iter_mut() {
            handler(event);
        }
    }

    /// Number of registered handlers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .lock()
            .expect("signal subscriber list poisoned")
            .len()
    }
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Signal {
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Signal::new()
    }
}

impl<T> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_delivery_in_registration_order() {
        let signal: Signal<u32> = Signal::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let seen = Arc::clone(&seen);
            signal.subscribe(move |value: &u32| {
                seen.lock().unwrap().push((tag, *value));
            });
        }

        signal.emit(&7);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![("first", 7), ("second", 7), ("third", 7)]
        );
    }

    #[test]
    fn test_clones_share_subscribers() {
        let signal: Signal<()> = Signal::new();
        let other = signal.clone();
        let hits = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&hits);
        signal.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(other.subscriber_count(), 1);
        other.emit(&());
        other.emit(&());
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_emit_with_no_subscribers_is_noop() {
        let signal: Signal<String> = Signal::new();
        signal.emit(&"nobody listens".to_string());
        assert_eq!(signal.subscriber_count(), 0);
    }
}
