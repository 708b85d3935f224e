/*!
 * Synchronized Map
 * Unordered key-value pairs behind a reader/writer lock
 *
 * Check-then-act operations (`put_if_absent`, `compute_if_absent`) run under
 * a single exclusive acquisition, so racing callers see exactly one insert
 * per key.
 */

use crate::core::limits::DEFAULT_CAPACITY;
use crate::core::traits::Collection;
use ahash::RandomState;
use parking_lot::RwLock;
use std::borrow::Borrow;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use tracing::trace;

/// Thread-safe hash map
///
/// # Example
///
/// ```
/// use concurrent_collections::SynchronizedMap;
///
/// let map = SynchronizedMap::new(8);
/// assert_eq!(map.put("k", 1), None);
/// assert_eq!(map.put("k", 2), Some(1));
/// assert!(!map.put_if_absent("k", 3));
///
/// let (value, created) = map.compute_if_absent("j", || Some(10));
/// assert_eq!((value, created), (Some(10), true));
/// ```
pub struct SynchronizedMap<K, V> {
    data: RwLock<HashMap<K, V, RandomState>>,
    capacity: usize,
}

impl<K: Eq + Hash, V> SynchronizedMap<K, V> {
    /// Create a map with room for `capacity` entries before rehashing
    pub fn new(capacity: usize) -> Self {
        Self {
            data: RwLock::new(HashMap::with_capacity_and_hasher(
                capacity,
                RandomState::new(),
            )),
            capacity,
        }
    }

    /// Number of entries
    #[inline]
    pub fn size(&self) -> usize {
        self.data.read_recursive().len()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Replace the storage with an empty map sized to the construction-time capacity
    pub fn clear(&self) {
        let fresh = HashMap::with_capacity_and_hasher(self.capacity, RandomState::new());
        let old = std::mem::replace(&mut *self.data.write(), fresh);
        trace!(dropped = old.len(), "map cleared");
    }

    /// Insert or overwrite; returns the value previously mapped to `key`
    #[inline]
    pub fn put(&self, key: K, value: V) -> Option<V> {
        self.data.write().insert(key, value)
    }

    /// Insert only if `key` is unmapped; returns whether the insert happened
    pub fn put_if_absent(&self, key: K, value: V) -> bool {
        match self.data.write().entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }

    /// Return the value for `key`, producing and inserting it if unmapped
    ///
    /// - Mapped: `(Some(existing), false)`, `producer` is not called
    /// - Unmapped, producer yields `Some(v)`: `v` is inserted, `(Some(v), true)`
    /// - Unmapped, producer yields `None`: nothing is inserted, `(None, false)`
    ///
    /// The exclusive lock is held while `producer` runs, so it executes at
    /// most once per key even under racing callers. It must not touch this map.
    pub fn compute_if_absent<F>(&self, key: K, producer: F) -> (Option<V>, bool)
    where
        F: FnOnce() -> Option<V>,
        V: Clone,
    {
        match self.data.write().entry(key) {
            Entry::Occupied(existing) => (Some(existing.get().clone()), false),
            Entry::Vacant(slot) => match producer() {
                Some(value) => (Some(slot.insert(value).clone()), true),
                None => (None, false),
            },
        }
    }

    /// Check if `key` is mapped
    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.data.read_recursive().contains_key(key)
    }

    /// Copy of the value for `key`, `None` if unmapped
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.with(key, V::clone)
    }

    /// Apply `f` to the value for `key` under the shared lock
    pub fn with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        F: FnOnce(&V) -> R,
    {
        self.data.read_recursive().get(key).map(f)
    }

    /// Unmap `key`, returning the removed value if there was one
    #[inline]
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.data.write().remove(key)
    }

    /// Snapshot of the keys mapped at call time, hashed like the map itself
    pub fn keys(&self) -> HashSet<K, RandomState>
    where
        K: Clone,
    {
        self.data.read_recursive().keys().cloned().collect()
    }

    /// Visit entries in unspecified order until `f` returns false
    ///
    /// The shared lock is held for the whole traversal: `f` must not call any
    /// mutating operation on this map (that deadlocks). Readers (`size`,
    /// `get`, `contains`, `keys`) are fine.
    pub fn range<F>(&self, mut f: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        let data = self.data.read_recursive();
        for (key, value) in data.iter() {
            if !f(key, value) {
                return;
            }
        }
    }
}

impl<K: Eq + Hash, V> Default for SynchronizedMap<K, V> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<K, V> fmt::Debug for SynchronizedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SynchronizedMap")
            .field("len", &self.data.read_recursive().len())
            .finish()
    }
}

impl<K, V> Collection for SynchronizedMap<K, V>
where
    K: Eq + Hash + Send + Sync,
    V: Send + Sync,
{
    #[inline]
    fn size(&self) -> usize {
        SynchronizedMap::size(self)
    }

    fn clear(&self) {
        SynchronizedMap::clear(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_put_returns_previous() {
        let map = SynchronizedMap::new(4);
        assert_eq!(map.put(1, "one"), None);
        assert_eq!(map.put(1, "uno"), Some("one"));
        assert_eq!(map.get(&1), Some("uno"));
        assert_eq!(map.size(), 1);
    }

    #[test]
    fn test_put_if_absent() {
        let map = SynchronizedMap::new(4);
        assert!(map.put_if_absent("k", 1));
        assert!(!map.put_if_absent("k", 2));
        assert_eq!(map.get(&"k"), Some(1));
    }

    #[test]
    fn test_compute_if_absent_skips_producer_when_mapped() {
        let map = SynchronizedMap::new(4);
        map.put("k", 5);
        let calls = Cell::new(0);
        let result = map.compute_if_absent("k", || {
            calls.set(calls.get() + 1);
            Some(99)
        });
        assert_eq!(result, (Some(5), false));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_compute_if_absent_none_does_not_insert() {
        let map = SynchronizedMap::<&str, i32>::new(4);
        assert_eq!(map.compute_if_absent("k", || None), (None, false));
        assert!(!map.contains(&"k"));
        assert_eq!(map.compute_if_absent("k", || Some(1)), (Some(1), true));
        assert!(map.contains(&"k"));
    }

    #[test]
    fn test_stored_none_is_not_absence() {
        let map = SynchronizedMap::new(4);
        map.put("k", None::<i32>);
        assert_eq!(map.get(&"k"), Some(None));
        assert_eq!(map.get(&"missing"), None);
    }

    #[test]
    fn test_borrowed_lookup() {
        let map = SynchronizedMap::new(4);
        map.put(String::from("alpha"), 1);
        assert!(map.contains("alpha"));
        assert_eq!(map.with("alpha", |v| v * 10), Some(10));
        assert_eq!(map.remove("alpha"), Some(1));
        assert_eq!(map.remove("alpha"), None);
    }

    #[test]
    fn test_keys_snapshot() {
        let map = SynchronizedMap::new(4);
        for i in 0..5 {
            map.put(i, i * i);
        }
        let keys = map.keys();
        map.clear();
        assert_eq!(keys, (0..5).collect::<HashSet<_, RandomState>>());
        assert!(map.is_empty());
    }

    #[test]
    fn test_range_over_pairs() {
        let map = SynchronizedMap::new(4);
        for i in 1..=4 {
            map.put(i, i * 100);
        }
        let mut total = 0;
        map.range(|k, v| {
            assert_eq!(*v, *k * 100);
            total += v;
            true
        });
        assert_eq!(total, 1000);
    }
}
