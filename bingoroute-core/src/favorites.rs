//! Destinations the visitor has saved.

use crate::{Destination, MemoryStateStore, StateStore};

/// Saved destinations, kept in insertion order and unique by id.
///
/// The list lives in an injected [`StateStore`] so observers can react to
/// changes.
///
/// # Examples
/// ```
/// use bingoroute_core::{Coordinates, Destination, Favorites};
///
/// let favorites = Favorites::in_memory();
/// let palace = Destination::new("palace", "경복궁", "종로구", Coordinates::default());
/// assert!(favorites.add(palace.clone()));
/// assert!(!favorites.add(palace));
/// assert!(favorites.is_favorite("palace"));
/// ```
#[derive(Debug)]
pub struct Favorites<S> {
    store: S,
}

impl Favorites<MemoryStateStore<Vec<Destination>>> {
    /// Favorites backed by a fresh [`MemoryStateStore`].
    pub fn in_memory() -> Self {
        Self::new(MemoryStateStore::default())
    }
}

impl<S: StateStore<Vec<Destination>>> Favorites<S> {
    /// Wrap an existing store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the underlying store, for example to subscribe.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Save `destination`. Returns `false` if its id is already saved.
    pub fn add(&self, destination: Destination) -> bool {
        if self.is_favorite(&destination.id) {
            return false;
        }
        self.store.update(|saved| {
            if saved.iter().any(|d| d.id == destination.id) {
                false
            } else {
                saved.push(destination);
                true
            }
        })
    }

    /// Forget the destination with `id`. Returns `false` if it was not saved.
    pub fn remove(&self, id: &str) -> bool {
        if !self.is_favorite(id) {
            return false;
        }
        self.store.update(|saved| {
            let before = saved.len();
            saved.retain(|d| d.id != id);
            saved.len() != before
        })
    }

    /// Save or forget `destination`; returns whether it is saved afterwards.
    pub fn toggle(&self, destination: Destination) -> bool {
        if self.remove(&destination.id) {
            false
        } else {
            self.add(destination)
        }
    }

    /// Report whether `id` is saved.
    pub fn is_favorite(&self, id: &str) -> bool {
        self.store.get().iter().any(|d| d.id == id)
    }

    /// Saved destinations in the order they were added.
    pub fn list(&self) -> Vec<Destination> {
        self.store.get()
    }

    /// Number of saved destinations.
    pub fn len(&self) -> usize {
        self.store.get().len()
    }

    /// Report whether nothing is saved.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget everything.
    pub fn clear(&self) {
        self.store.set(Vec::new());
    }
}
