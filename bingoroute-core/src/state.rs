//! Observable application state.
//!
//! Favorites and other session state are held in an injected
//! [`StateStore`] rather than a global. Components receive the store they
//! should use, so tests can substitute their own.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Handle returned by [`StateStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Callback invoked with the new value after every change.
pub type Listener<T> = Box<dyn Fn(&T) + Send + Sync>;

/// A value that can be read, replaced, mutated in place and observed.
///
/// Listeners run synchronously on the calling thread once the change is
/// visible to [`StateStore::get`].
pub trait StateStore<T>: Send + Sync {
    /// Return a snapshot of the current value.
    fn get(&self) -> T;

    /// Replace the current value.
    fn set(&self, value: T);

    /// Mutate the value in place and return whatever `apply` returns.
    ///
    /// Listeners are notified after `apply` completes.
    fn update<R, F>(&self, apply: F) -> R
    where
        F: FnOnce(&mut T) -> R,
        Self: Sized;

    /// Register `listener`; it receives every subsequent value.
    fn subscribe(&self, listener: Listener<T>) -> SubscriptionId;

    /// Remove a listener. Returns `false` if `id` was not registered.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}

/// Thread-safe in-memory [`StateStore`].
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use bingoroute_core::{MemoryStateStore, StateStore};
///
/// let store = MemoryStateStore::new(0_u32);
/// let seen = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&seen);
/// let id = store.subscribe(Box::new(move |_| {
///     counter.fetch_add(1, Ordering::SeqCst);
/// }));
/// store.set(3);
/// store.update(|value| *value += 1);
/// assert_eq!(store.get(), 4);
/// assert_eq!(seen.load(Ordering::SeqCst), 2);
/// assert!(store.unsubscribe(id));
/// ```
pub struct MemoryStateStore<T> {
    value: RwLock<T>,
    listeners: Mutex<Vec<(SubscriptionId, Arc<Listener<T>>)>>,
    next_id: AtomicU64,
}

impl<T> MemoryStateStore<T> {
    /// Create a store holding `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            value: RwLock::new(initial),
            listeners: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl<T: Clone> MemoryStateStore<T> {
    // Listeners are called outside both locks so they may read the store or
    // change their own subscription.
    fn notify(&self) {
        let snapshot = self
            .value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        let listeners: Vec<Arc<Listener<T>>> = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}

impl<T: Default> Default for MemoryStateStore<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for MemoryStateStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.value.read().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("MemoryStateStore")
            .field("value", &*value)
            .field("listeners", &self.listener_count())
            .finish_non_exhaustive()
    }
}

impl<T> StateStore<T> for MemoryStateStore<T>
where
    T: Clone + Send + Sync,
{
    fn get(&self) -> T {
        self.value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, value: T) {
        *self.value.write().unwrap_or_else(PoisonError::into_inner) = value;
        self.notify();
    }

    fn update<R, F>(&self, apply: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        let result = {
            let mut guard = self.value.write().unwrap_or_else(PoisonError::into_inner);
            apply(&mut guard)
        };
        self.notify();
        result
    }

    fn subscribe(&self, listener: Listener<T>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(registered, _)| *registered != id);
        listeners.len() != before
    }
}
