/*!
 * Core Traits
 * Capability surface shared by every container
 */

/// Common contract for all synchronized containers
///
/// Every implementation guards its whole state with one reader/writer lock,
/// so `size` is always consistent with the elements a concurrent reader
/// would observe.
pub trait Collection: Send + Sync {
    /// Number of elements currently present (shared lock)
    fn size(&self) -> usize;

    /// Atomically reset to empty (exclusive lock)
    fn clear(&self);

    /// Check if empty
    #[inline]
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// FIFO queue contract
///
/// `poll` and `peek` never block: an empty queue yields `None`. Callers that
/// want to wait build the loop themselves, see [`crate::core::sync::poll_until`].
pub trait Queue<T>: Collection {
    /// Insert at the tail
    fn offer(&self, element: T);

    /// Remove and return the head, `None` if empty
    fn poll(&self) -> Option<T>;

    /// Return a copy of the head without removing it, `None` if empty
    fn peek(&self) -> Option<T>
    where
        T: Clone;
}
