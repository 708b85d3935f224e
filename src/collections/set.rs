/*!
 * Synchronized Set
 * Unordered unique elements behind a reader/writer lock
 */

use crate::core::limits::DEFAULT_CAPACITY;
use crate::core::traits::Collection;
use ahash::RandomState;
use parking_lot::RwLock;
use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use tracing::trace;

/// Thread-safe hash set
///
/// Uniqueness follows the element's `Eq` + `Hash`.
pub struct SynchronizedSet<T> {
    data: RwLock<HashSet<T, RandomState>>,
    capacity: usize,
}

impl<T: Eq + Hash> SynchronizedSet<T> {
    /// Create a set with room for `capacity` elements before rehashing
    pub fn new(capacity: usize) -> Self {
        Self {
            data: RwLock::new(HashSet::with_capacity_and_hasher(
                capacity,
                RandomState::new(),
            )),
            capacity,
        }
    }

    /// Number of elements
    #[inline]
    pub fn size(&self) -> usize {
        self.data.read_recursive().len()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Replace the storage with an empty set sized to the construction-time capacity
    pub fn clear(&self) {
        let fresh = HashSet::with_capacity_and_hasher(self.capacity, RandomState::new());
        let old = std::mem::replace(&mut *self.data.write(), fresh);
        trace!(dropped = old.len(), "set cleared");
    }

    /// Insert `element`; returns false (and changes nothing) if already present
    #[inline]
    pub fn add(&self, element: T) -> bool {
        self.data.write().insert(element)
    }

    /// Check membership
    #[inline]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.data.read_recursive().contains(element)
    }

    /// Remove `element`; returns false if it was not present
    #[inline]
    pub fn remove<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.data.write().remove(element)
    }

    /// Visit elements in unspecified order until `f` returns false
    ///
    /// The shared lock is held for the whole traversal: `f` must not call
    /// `add`, `remove`, or `clear` on this set (that deadlocks). Readers
    /// (`size`, `contains`) are fine.
    pub fn range<F>(&self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        let data = self.data.read_recursive();
        for element in data.iter() {
            if !f(element) {
                return;
            }
        }
    }
}

impl<T: Eq + Hash> Default for SynchronizedSet<T> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<T> fmt::Debug for SynchronizedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SynchronizedSet")
            .field("len", &self.data.read_recursive().len())
            .finish()
    }
}

impl<T: Eq + Hash + Send + Sync> Collection for SynchronizedSet<T> {
    #[inline]
    fn size(&self) -> usize {
        SynchronizedSet::size(self)
    }

    fn clear(&self) {
        SynchronizedSet::clear(self)
    }
}
