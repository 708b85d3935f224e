/*!
 * Synchronized Ring Queue
 *
 * FIFO queue over a power-of-two circular buffer that grows in place.
 *
 * # Design: Mask Arithmetic Over Modulo
 *
 * Capacity is always a power of two, so advancing a cursor is
 * `(i + 1) & (capacity - 1)`. Growth doubles the buffer, which keeps the
 * property forever. Live elements occupy `buf[head], buf[(head + 1) & mask], ...`
 * for `count` slots; every other slot is `None`.
 *
 * # Locking
 *
 * One `parking_lot::RwLock` guards buffer, cursors, and counters together.
 * `offer`, `poll`, `clear` (and growth, which only happens inside `offer`)
 * take it exclusively; `size`, `capacity`, `peek`, `range`, `stats` share it.
 */

use crate::core::errors::{CollectionError, CollectionResult};
use crate::core::limits::{DEFAULT_CAPACITY, MIN_RING_CAPACITY};
use crate::core::traits::{Collection, Queue};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace, warn};

/// Point-in-time counters for a ring queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RingQueueStats {
    pub len: usize,
    pub capacity: usize,
    pub growths: u64,
    pub total_offered: u64,
    pub total_polled: u64,
}

struct RingState<T> {
    buf: Box<[Option<T>]>,
    head: usize,
    tail: usize,
    count: usize,
    growths: u64,
    total_offered: u64,
    total_polled: u64,
}

impl<T> RingState<T> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: empty_slots(capacity),
            head: 0,
            tail: 0,
            count: 0,
            growths: 0,
            total_offered: 0,
            total_polled: 0,
        }
    }

    #[inline(always)]
    fn mask(&self) -> usize {
        self.buf.len() - 1
    }

    /// Double the buffer, moving live elements to the front in FIFO order
    fn grow(&mut self) {
        let old_capacity = self.buf.len();
        let new_capacity = old_capacity << 1;
        let mut next: Vec<Option<T>> = Vec::with_capacity(new_capacity);

        if self.tail > self.head {
            next.extend(self.buf[self.head..self.tail].iter_mut().map(Option::take));
        } else {
            // Wrapped (or full, where tail == head): older half first
            next.extend(self.buf[self.head..].iter_mut().map(Option::take));
            next.extend(self.buf[..self.tail].iter_mut().map(Option::take));
        }
        next.resize_with(new_capacity, || None);

        self.buf = next.into_boxed_slice();
        self.head = 0;
        self.tail = self.count;
        self.growths += 1;

        debug!(
            old_capacity,
            new_capacity,
            live = self.count,
            "ring queue grown"
        );
    }
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || None);
    slots.into_boxed_slice()
}

/// Thread-safe, growable FIFO ring buffer
///
/// # Performance
///
/// - **offer / poll**: O(1), amortized O(1) across growth
/// - **Growth**: one allocation and O(len) moves, never shrinks
///
/// # Example
///
/// ```
/// use concurrent_collections::SynchronizedRingQueue;
///
/// let queue = SynchronizedRingQueue::new(2);
/// queue.offer(0);
/// queue.offer(1);
/// queue.offer(2); // full at 2, grows to 4 first
///
/// assert_eq!(queue.capacity(), 4);
/// assert_eq!(queue.poll(), Some(0));
/// assert_eq!(queue.poll(), Some(1));
/// assert_eq!(queue.poll(), Some(2));
/// assert_eq!(queue.poll(), None);
/// ```
pub struct SynchronizedRingQueue<T> {
    state: RwLock<RingState<T>>,
}

impl<T> SynchronizedRingQueue<T> {
    /// Create a queue with the given initial capacity
    ///
    /// # Panics
    ///
    /// If `initial_capacity` is below 2 or not a power of two. Use
    /// [`try_new`](Self::try_new) to get the error instead.
    pub fn new(initial_capacity: usize) -> Self {
        match Self::try_new(initial_capacity) {
            Ok(queue) => queue,
            Err(err) => {
                warn!(initial_capacity, "rejecting ring queue capacity");
                panic!("{}", err);
            }
        }
    }

    /// Create a queue, reporting an invalid capacity as an error
    pub fn try_new(initial_capacity: usize) -> CollectionResult<Self> {
        if initial_capacity < MIN_RING_CAPACITY || !initial_capacity.is_power_of_two() {
            return Err(CollectionError::InvalidCapacity {
                requested: initial_capacity,
                minimum: MIN_RING_CAPACITY,
            });
        }

        Ok(Self {
            state: RwLock::new(RingState::with_capacity(initial_capacity)),
        })
    }

    /// Number of queued elements
    #[inline]
    pub fn size(&self) -> usize {
        self.state.read_recursive().count
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Current buffer length (always a power of two)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.state.read_recursive().buf.len()
    }

    /// Drop every queued element and reset the cursors
    ///
    /// The buffer keeps its current (possibly grown) capacity.
    pub fn clear(&self) {
        let mut state = self.state.write();
        let mask = state.mask();
        let (head, count) = (state.head, state.count);
        for i in 0..count {
            state.buf[(head + i) & mask] = None;
        }
        state.head = 0;
        state.tail = 0;
        state.count = 0;
        trace!(dropped = count, "ring queue cleared");
    }

    /// Append `element` at the tail, growing first if the buffer is full
    pub fn offer(&self, element: T) {
        let mut state = self.state.write();

        if state.count == state.buf.len() {
            state.grow();
        }

        let tail = state.tail;
        state.buf[tail] = Some(element);
        state.tail = (tail + 1) & state.mask();
        state.count += 1;
        state.total_offered += 1;
    }

    /// Remove and return the oldest element, `None` if empty
    ///
    /// The vacated slot no longer owns the element.
    pub fn poll(&self) -> Option<T> {
        let mut state = self.state.write();

        if state.count == 0 {
            return None;
        }

        let head = state.head;
        let element = state.buf[head].take();
        state.head = (head + 1) & state.mask();
        state.count -= 1;
        state.total_polled += 1;
        element
    }

    /// Return a copy of the oldest element without removing it
    pub fn peek(&self) -> Option<T>
    where
        T: Clone,
    {
        self.peek_with(T::clone)
    }

    /// Apply `f` to the oldest element without removing it
    pub fn peek_with<F, R>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&T) -> R,
    {
        let state = self.state.read_recursive();
        if state.count == 0 {
            return None;
        }
        state.buf[state.head].as_ref().map(f)
    }

    /// Visit live elements in FIFO order until `f` returns false
    ///
    /// The shared lock is held for the whole traversal: `f` must not call
    /// `offer`, `poll`, or `clear` on this queue (that deadlocks), and a slow
    /// `f` stalls every writer. Readers (`size`, `peek`, `capacity`) are fine.
    pub fn range<F>(&self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        let state = self.state.read_recursive();
        let mask = state.mask();
        for i in 0..state.count {
            if let Some(element) = &state.buf[(state.head + i) & mask] {
                if !f(element) {
                    return;
                }
            }
        }
    }

    /// Snapshot of the queue counters
    pub fn stats(&self) -> RingQueueStats {
        let state = self.state.read_recursive();
        RingQueueStats {
            len: state.count,
            capacity: state.buf.len(),
            growths: state.growths,
            total_offered: state.total_offered,
            total_polled: state.total_polled,
        }
    }
}

impl<T> Default for SynchronizedRingQueue<T> {
    fn default() -> Self {
        Self {
            state: RwLock::new(RingState::with_capacity(DEFAULT_CAPACITY)),
        }
    }
}

impl<T> fmt::Debug for SynchronizedRingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read_recursive();
        f.debug_struct("SynchronizedRingQueue")
            .field("len", &state.count)
            .field("capacity", &state.buf.len())
            .finish()
    }
}

impl<T: Send + Sync> Collection for SynchronizedRingQueue<T> {
    #[inline]
    fn size(&self) -> usize {
        SynchronizedRingQueue::size(self)
    }

    fn clear(&self) {
        SynchronizedRingQueue::clear(self)
    }
}

impl<T: Send + Sync> Queue<T> for SynchronizedRingQueue<T> {
    #[inline]
    fn offer(&self, element: T) {
        SynchronizedRingQueue::offer(self, element)
    }

    #[inline]
    fn poll(&self) -> Option<T> {
        SynchronizedRingQueue::poll(self)
    }

    #[inline]
    fn peek(&self) -> Option<T>
    where
        T: Clone,
    {
        SynchronizedRingQueue::peek(self)
    }
}
