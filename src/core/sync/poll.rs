/*!
 * Spin-Then-Idle Polling
 *
 * The caller-side consumer loop. Queues return `None` immediately when
 * empty; this helper turns that into a bounded wait:
 *
 * 1. **Spin phase** (first `spin_limit` empty polls): `spin_loop()` hint only
 * 2. **Idle phase** (afterwards): the configured [`IdleStrategy`] between polls
 *
 * Nothing here holds a container lock while idling.
 */

use super::traits::IdleStrategy;
use crate::core::traits::Queue;
use std::hint;
use std::time::{Duration, Instant};
use tracing::trace;

/// Poll `queue` until an element arrives or `timeout` elapses
///
/// Returns `None` only on timeout. With `timeout = None` the loop runs until
/// an element is available.
pub fn poll_until<T, Q, S>(
    queue: &Q,
    idle: &S,
    spin_limit: u32,
    timeout: Option<Duration>,
) -> Option<T>
where
    Q: Queue<T> + ?Sized,
    S: IdleStrategy + ?Sized,
{
    let start = Instant::now();
    let mut spins = 0u32;

    loop {
        if let Some(element) = queue.poll() {
            return Some(element);
        }

        if let Some(timeout) = timeout {
            if start.elapsed() >= timeout {
                trace!(
                    strategy = idle.name(),
                    spins,
                    timeout_us = timeout.as_micros() as u64,
                    "poll_until timed out"
                );
                return None;
            }
        }

        if spins < spin_limit {
            hint::spin_loop();
            spins += 1;
        } else {
            idle.idle();
        }
    }
}
