//! Listener handles for time picker events.
//!
//! Handles compare by identity (`Arc::ptr_eq`), so the same listener can be
//! registered again without being treated as a change. Each handle wraps a
//! closure that defaults to a no-op; a picker never holds an absent
//! listener.

use std::sync::Arc;

use crate::model::CanonicalTime;

/// Stable, comparable handle for a `Fn(T)` listener.
pub struct Listener<T> {
    handler: Arc<dyn Fn(T) + Send + Sync>,
}

impl<T> Listener<T> {
    /// Create a listener from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Create a listener that ignores every event.
    pub fn noop() -> Self {
        Self::new(|_| {})
    }

    /// Invoke the listener.
    pub fn call(&self, value: T) {
        (self.handler)(value);
    }
}

impl<T, F> From<F> for Listener<T>
where
    F: Fn(T) + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl<T> Default for Listener<T> {
    fn default() -> Self {
        Self::noop()
    }
}

impl<T> Clone for Listener<T> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<T> PartialEq for Listener<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl<T> Eq for Listener<T> {}

impl<T> std::fmt::Debug for Listener<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener").finish_non_exhaustive()
    }
}

/// Called with the new canonical time after every committed change.
pub type TimeChangedCallback = Listener<CanonicalTime>;

/// Called with `true` when the text overlay opens and `false` when it closes.
pub type EditSessionCallback = Listener<bool>;

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn default_listener_is_a_harmless_noop() {
        let listener = TimeChangedCallback::default();
        listener.call(CanonicalTime::MIDNIGHT);
    }

    #[test]
    fn listeners_compare_by_identity() {
        let a = EditSessionCallback::new(|_| {});
        let b = EditSessionCallback::new(|_| {});
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn call_forwards_the_value() {
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&seen);
        let listener = Listener::new(move |value: usize| {
            counter.fetch_add(value, Ordering::SeqCst);
        });
        listener.call(3);
        listener.call(4);
        assert_eq!(seen.load(Ordering::SeqCst), 7);
    }
}
