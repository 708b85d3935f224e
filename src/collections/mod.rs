/*!
 * Synchronized Collections
 *
 * Generic containers that each own exactly one `parking_lot::RwLock`:
 * - List: ordered sequence with caller-supplied equality for removal
 * - Set: unique elements
 * - Map: unique keys with atomic check-then-act inserts
 * - Ring queue: growable power-of-two FIFO buffer
 *
 * # Contract
 *
 * Readers (`size`, `get`, `contains`, `peek`, `capacity`) share the lock;
 * writers (`add`, `put`, `remove`, `offer`, `poll`, `clear`) take it
 * exclusively. No operation waits for data: missing values come back as
 * `None`. `range` holds the shared lock across every callback, so callbacks
 * must not re-enter the same container's writers.
 *
 * Shared acquisitions use `read_recursive`: the lock is task-fair, and a
 * plain nested `read` on a thread already holding it would queue behind a
 * waiting writer. Readers are therefore safe to call from inside `range`.
 */

mod list;
mod map;
mod ring_queue;
mod set;

pub use list::SynchronizedList;
pub use map::SynchronizedMap;
pub use ring_queue::{RingQueueStats, SynchronizedRingQueue};
pub use set::SynchronizedSet;
