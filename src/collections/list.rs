/*!
 * Synchronized List
 * Ordered, duplicate-permitting sequence behind a reader/writer lock
 */

use crate::core::errors::{CollectionError, CollectionResult};
use crate::core::limits::DEFAULT_CAPACITY;
use crate::core::traits::Collection;
use parking_lot::RwLock;
use std::fmt;
use tracing::{trace, warn};

/// Thread-safe growable list
///
/// Index `i` means "the element at position `i` right now": indices shift
/// left when an earlier element is removed.
///
/// # Example
///
/// ```
/// use concurrent_collections::SynchronizedList;
///
/// let list = SynchronizedList::new(4);
/// list.add("a");
/// list.add("b");
/// assert_eq!(list.get(1), "b");
/// assert!(list.remove(&"a", |x, y| x == y));
/// assert_eq!(list.get(0), "b");
/// ```
pub struct SynchronizedList<T> {
    data: RwLock<Vec<T>>,
    capacity: usize,
}

impl<T> SynchronizedList<T> {
    /// Create a list with `capacity` slots reserved up front
    pub fn new(capacity: usize) -> Self {
        Self {
            data: RwLock::new(Vec::with_capacity(capacity)),
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

    /// Replace the storage with an empty vector sized to the construction-time capacity
    pub fn clear(&self) {
        let old = std::mem::replace(&mut *self.data.write(), Vec::with_capacity(self.capacity));
        trace!(dropped = old.len(), "list cleared");
    }

    /// Append to the end
    #[inline]
    pub fn add(&self, element: T) {
        self.data.write().push(element);
    }

    /// Copy of the element at `index`
    ///
    /// # Panics
    ///
    /// If `index >= size()`. An out-of-range index is a caller bug; use
    /// [`try_get`](Self::try_get) when the index is not known to be valid.
    pub fn get(&self, index: usize) -> T
    where
        T: Clone,
    {
        match self.try_get(index) {
            Ok(element) => element,
            Err(err) => {
                warn!(index, "list index out of bounds");
                panic!("{}", err);
            }
        }
    }

    /// Copy of the element at `index`, or `IndexOutOfBounds`
    pub fn try_get(&self, index: usize) -> CollectionResult<T>
    where
        T: Clone,
    {
        self.with(index, T::clone)
    }

    /// Apply `f` to the element at `index` under the shared lock
    pub fn with<F, R>(&self, index: usize, f: F) -> CollectionResult<R>
    where
        F: FnOnce(&T) -> R,
    {
        let data = self.data.read_recursive();
        data.get(index)
            .map(f)
            .ok_or(CollectionError::IndexOutOfBounds {
                index,
                len: data.len(),
            })
    }

    /// Remove the first element `c` for which `eq(element, c)` holds
    ///
    /// Remaining elements keep their relative order. Returns whether an
    /// element was removed.
    pub fn remove<F>(&self, element: &T, eq: F) -> bool
    where
        F: Fn(&T, &T) -> bool,
    {
        let mut data = self.data.write();
        match data.iter().position(|candidate| eq(element, candidate)) {
            Some(pos) => {
                data.remove(pos);
                true
            }
            None => false,
        }
    }

    /// [`remove`](Self::remove) using the element's own equality
    pub fn remove_item(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.remove(element, T::eq)
    }

    /// Visit elements in index order until `f` returns false
    ///
    /// The shared lock is held for the whole traversal: `f` must not call
    /// `add`, `remove`, or `clear` on this list (that deadlocks). Readers
    /// (`size`, `get`, `with`) are fine.
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

    /// Copy of the current contents
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.read_recursive().clone()
    }
}

impl<T> Default for SynchronizedList<T> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<T> fmt::Debug for SynchronizedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SynchronizedList")
            .field("len", &self.size())
            .finish()
    }
}

impl<T: Send + Sync> Collection for SynchronizedList<T> {
    #[inline]
    fn size(&self) -> usize {
        SynchronizedList::size(self)
    }

    fn clear(&self) {
        SynchronizedList::clear(self)
    }
}
